/*!
Reports and solutions.

- A [Report] is a high-level summary of the state of a [context](crate::context).
- A [Solution] is the result of a [solve](crate::procedures::solve::solve), together with a model if the formula is satisfiable.
*/

use crate::{
    context::ContextState,
    structures::{atom::Atom, formula::Formula},
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable(_) => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The result of a solve.
///
/// Unsatisfiability is a normal outcome, and so is a solution rather than an error.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Solution {
    /// The formula is satisfiable, with the value of each atom on some satisfying valuation, indexed by atom.
    Satisfiable(Vec<bool>),

    /// The formula is unsatisfiable.
    ///
    /// `atom` is some atom whose literals are each implied by the other, and so no value of the atom is consistent with the formula.
    Unsatisfiable { atom: Atom },
}

impl Solution {
    /// The satisfying valuation, if the formula is satisfiable.
    pub fn model(&self) -> Option<&[bool]> {
        match self {
            Self::Satisfiable(model) => Some(model),
            Self::Unsatisfiable { .. } => None,
        }
    }

    /// Whether the solution is a valuation on which every clause of `formula` is true.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        match self {
            Self::Satisfiable(model) => {
                model.len() == formula.atom_count()
                    && formula.satisfied_on(&model.iter().map(|v| Some(*v)).collect::<Vec<_>>())
            }
            Self::Unsatisfiable { .. } => false,
        }
    }

    /// The high-level report of the solution.
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable { .. } => Report::Unsatisfiable,
        }
    }
}
