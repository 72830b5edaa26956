/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause), or use a single literal for a unit clause.
- Add the clause to the context.

# Examples

A clause built using basic methods.

```rust
# use otter_twosat::context::Context;
# use otter_twosat::config::Config;
# use otter_twosat::reports::Report;
# use otter_twosat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a: CClause = [CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b: CClause = [CLiteral::new(p, false), CLiteral::new(q, true)];

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
the_context.solve();
assert_eq!(the_context.report(), Report::Satisfiable)
```

A simplified build, using fresh literals.

```rust
# use otter_twosat::context::Context;
# use otter_twosat::config::Config;
# use otter_twosat::reports::Report;
# use otter_twosat::structures::literal::Literal;
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();

assert!(the_context.add_clause([p, -q]).is_ok());
assert!(the_context.add_clause([-p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());
the_context.solve();
assert_eq!(the_context.report(), Report::Satisfiable);
assert_eq!(the_context.value_of(q.atom()), Some(false));
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{AtomDBError, BuildError, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl Context {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](Context::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = self.formula.fresh_atom()?;

        self.note_input();
        self.valuation.push(None);

        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, an alternative to unwrapping the result of [fresh_atom](Context::fresh_atom), by defaulting to the maximum limit of an atom.
    /// As exhausting the atom limit is unlikely in many applications, this may be preferred.
    /// Though, note the maximum atom is only part of the context if it was returned by some earlier call.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// A literal of a fresh atom, with positive polarity.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, AtomDBError> {
        Ok(CLiteral::new(self.fresh_atom()?, true))
    }

    /// A literal of a fresh atom with positive polarity, or the maximum atom if no fresh atom is available.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Literals of `count` fresh atoms, with positive polarity.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count).map(|_| self.fresh_or_max_literal()).collect()
    }

    /// Ensure `atom` is present in the context --- specifically, by introducing as many atoms as required to ensure atoms form a  contiguous block: [0..`atom`].
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), AtomDBError> {
        while self.formula.atom_count() <= atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Adds a clause to the context, if every atom of the clause is part of the context.
    ///
    /// A tautology --- a clause of some literal and its negation --- is satisfied on every valuation and is not added.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        let clause: CClause = clause.into();

        if let Some(atom) = clause
            .atoms()
            .find(|atom| *atom as usize >= self.formula.atom_count())
        {
            log::error!(target: targets::CONTEXT, "Clause {} with unknown atom {atom}", clause.as_string());
            return Err(ErrorKind::from(BuildError::InvalidLiteral {
                atom,
                atom_count: self.formula.atom_count(),
            }));
        }

        if clause.is_tautology() {
            log::trace!(target: targets::CONTEXT, "Skipped tautology {}", clause.as_string());
            return Ok(ClauseOk::Tautology);
        }

        self.note_input();
        log::trace!(target: targets::CONTEXT, "Added clause {}", clause.as_string());
        self.formula.push(clause);

        Ok(ClauseOk::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::ContextState};

    #[test]
    fn fresh_atoms_are_contiguous() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.state, ContextState::Configuration);

        assert_eq!(ctx.fresh_atom(), Ok(0));
        assert_eq!(ctx.fresh_atom(), Ok(1));
        assert_eq!(ctx.fresh_literal(), Ok(CLiteral::new(2, true)));
        assert_eq!(ctx.state, ContextState::Input);

        assert!(ctx.ensure_atom(4).is_ok());
        assert!(ctx.ensure_atom(1).is_ok());
        assert_eq!(ctx.atom_count(), 5);
        assert_eq!(ctx.valuation().len(), 5);
    }

    #[test]
    fn unknown_atom() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert_eq!(
            ctx.add_clause([p, CLiteral::new(1, false)]),
            Err(ErrorKind::Build(BuildError::InvalidLiteral {
                atom: 1,
                atom_count: 1
            }))
        );
        assert_eq!(ctx.formula().clause_count(), 0);
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert_eq!(ctx.add_clause([p, -p]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.add_clause([p, p]), Ok(ClauseOk::Added));
        assert_eq!(ctx.formula().clause_count(), 1);
    }
}
