//! Formulas, aka. a collection of clauses interpreted as the conjunction of those clauses.
//!
//! A formula 𝐅 is stored as a count of the atoms in the language of the formula together with an ordered list of clauses.
//! The atoms of the formula are [0..`atom_count`), whether or not each atom appears in some clause.
//!
//! ```rust
//! # use otter_twosat::structures::formula::Formula;
//! # use otter_twosat::structures::literal::{CLiteral, Literal};
//! let mut formula = Formula::new(2);
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! formula.push([p, q]);
//! formula.push(-p);
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.clauses()[1], [-p, -p]);
//! ```
//!
//! No check is made on the atoms of a clause when pushed to a formula.
//! Instead, [validate](Formula::validate) is called when an [implication graph](crate::procedures::implication) is built.

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        valuation::Valuation,
    },
    types::err::{AtomDBError, BuildError},
};

/// A 2-CNF formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The number of atoms in the language of the formula.
    atom_count: usize,

    /// The clauses of the formula, in the order added.
    clauses: Vec<CClause>,
}

impl Formula {
    /// A formula without clauses over `atom_count` atoms.
    ///
    /// The atoms of a formula are bounded by [ATOM_MAX], and a formula over more atoms fails to [validate](Formula::validate).
    pub fn new(atom_count: usize) -> Self {
        Formula {
            atom_count,
            clauses: Vec::default(),
        }
    }

    /// A formula over `atom_count` atoms from some collection of clauses.
    pub fn from_clauses(
        atom_count: usize,
        clauses: impl IntoIterator<Item = impl Into<CClause>>,
    ) -> Self {
        Formula {
            atom_count,
            clauses: clauses.into_iter().map(|clause| clause.into()).collect(),
        }
    }

    /// Extends the language of the formula with a fresh atom, which is returned, if the language has not reached [ATOM_MAX].
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        match Atom::try_from(self.atom_count) {
            Ok(atom) if atom <= ATOM_MAX => {
                self.atom_count += 1;
                Ok(atom)
            }
            _ => Err(AtomDBError::AtomsExhausted),
        }
    }

    /// Adds a clause to the formula, without any check on the atoms of the clause.
    pub fn push(&mut self, clause: impl Into<CClause>) {
        self.clauses.push(clause.into());
    }

    /// The number of atoms in the language of the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// The number of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the formula, in the order added.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// Ok if every atom of every clause is part of the language of the formula, and otherwise an error noting the first atom found which is not.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.atom_count > ATOM_MAX as usize + 1 {
            return Err(BuildError::TooManyAtoms {
                atom_count: self.atom_count,
            });
        }

        for clause in &self.clauses {
            if let Some(atom) = clause
                .atoms()
                .find(|atom| *atom as usize >= self.atom_count)
            {
                return Err(BuildError::InvalidLiteral {
                    atom,
                    atom_count: self.atom_count,
                });
            }
        }
        Ok(())
    }

    /// Whether every clause of the formula is satisfied on the given valuation.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.as_string())
            .collect::<Vec<_>>();
        match clauses.is_empty() {
            true => write!(f, "⊤"),
            false => write!(f, "{}", clauses.join(" ∧ ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn validate() {
        let mut formula = Formula::new(2);
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, false);
        formula.push([p, q]);
        assert_eq!(formula.validate(), Ok(()));

        formula.push([-p, CLiteral::new(2, true)]);
        assert_eq!(
            formula.validate(),
            Err(BuildError::InvalidLiteral {
                atom: 2,
                atom_count: 2
            })
        );
    }

    #[test]
    fn fresh_atoms_extend_the_language() {
        let mut formula = Formula::default();
        assert_eq!(formula.fresh_atom(), Ok(0));
        assert_eq!(formula.fresh_atom(), Ok(1));
        assert_eq!(formula.atom_count(), 2);
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn atom_limit() {
        let mut formula = Formula::new(ATOM_MAX as usize);
        assert_eq!(formula.fresh_atom(), Ok(ATOM_MAX));
        assert_eq!(formula.fresh_atom(), Err(AtomDBError::AtomsExhausted));
        assert_eq!(formula.validate(), Ok(()));

        let beyond = ATOM_MAX as usize + 2;
        assert_eq!(
            Formula::new(beyond).validate(),
            Err(BuildError::TooManyAtoms { atom_count: beyond })
        );
    }

    #[test]
    fn display() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let formula = Formula::from_clauses(2, [[p, q], [-p, -q]]);
        assert_eq!(formula.to_string(), "(0 ∨ 1) ∧ (-0 ∨ -1)");
        assert_eq!(Formula::new(3).to_string(), "⊤");
    }
}
