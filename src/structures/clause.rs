//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! As the library is limited to 2-CNF formulas, the canonical representation of a clause is as a pair of literals.
//!
//! ```rust
//! # use otter_twosat::structures::literal::{CLiteral, Literal};
//! # use otter_twosat::structures::clause::{CClause, Clause};
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, false);
//!
//! let clause: CClause = [p, q];
//!
//! let mut some_valuation = vec![Some(false), Some(true)];
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[1] = Some(false);
//! assert!(clause.satisfied_on(&some_valuation));
//!
//! assert_eq!(clause.as_string(), "(0 ∨ -1)");
//! ```
//!
//! - Single literals are identified with the clause containing that literal twice (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! ```rust
//! # use otter_twosat::structures::literal::{CLiteral, Literal};
//! # use otter_twosat::structures::clause::CClause;
//! let p = CLiteral::new(0, true);
//! assert_eq!(CClause::from(p), [p, p]);
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, in the order given.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over all atoms in the clause, in the order given.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = [CLiteral; 2];

impl Clause for CClause {
    fn as_string(&self) -> String {
        format!("({} ∨ {})", self[0], self[1])
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.literal_value(*literal) == Some(true))
    }

    fn is_tautology(&self) -> bool {
        self[0] == self[1].negate()
    }
}

impl From<CLiteral> for CClause {
    fn from(literal: CLiteral) -> Self {
        [literal, literal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::CValuation;

    #[test]
    fn tautology() {
        let p = CLiteral::new(2, true);
        let q = CLiteral::new(5, true);

        assert!([p, -p].is_tautology());
        assert!([-p, p].is_tautology());
        assert!(![p, p].is_tautology());
        assert!(![p, -q].is_tautology());
    }

    #[test]
    fn unit_clause() {
        let p = CLiteral::new(3, false);
        let unit = CClause::from(p);

        assert_eq!(unit.literals().copied().collect::<Vec<_>>(), vec![p, p]);
        assert_eq!(unit.atoms().collect::<Vec<_>>(), vec![3, 3]);
        assert!(!unit.is_tautology());
    }

    #[test]
    fn partial_valuation() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let clause: CClause = [p, -q];

        let unvalued: CValuation = vec![None, None];
        assert!(!clause.satisfied_on(&unvalued));
        assert!(!clause.satisfied_on(&vec![Some(false), None]));
        assert!(clause.satisfied_on(&vec![None, Some(false)]));
    }
}
