//! Error types used in the library.
//!
//! - Most of these are returned when some input to the library breaks an invariant of a structure --- e.g. a clause containing an atom which is not part of the formula.
//! - None of these are used to report unsatisfiability.
//!   An unsatisfiable formula is a normal outcome of a solve, and is returned as a [Solution](crate::reports::Solution) or [Report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, graph::Node};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Build(BuildError),
    Config(ConfigError),
    Graph(GraphError),

    /// Some request was made which the state of the context does not support.
    /// E.g. a request for a model before a satisfiable solve.
    InvalidState,
}

/// Errors when obtaining atoms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when building an implication graph from a formula, or adding a clause to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contains an atom outside of [0..`atom_count`).
    InvalidLiteral { atom: Atom, atom_count: usize },

    /// A formula over more atoms than [ATOM_MAX](crate::structures::atom::ATOM_MAX) allows.
    TooManyAtoms { atom_count: usize },
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An attempt to set the option with the given name to a value outside of its bounds.
    OutOfBounds { name: &'static str },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors in the structure of a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// An edge from `from` to `to`, where `to` is outside of [0..`node_count`).
    InvalidGraph {
        from: Node,
        to: Node,
        node_count: usize,
    },
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(AtomDBError::AtomsExhausted) => write!(f, "Atoms exhausted"),
            Self::Build(BuildError::InvalidLiteral { atom, atom_count }) => {
                write!(f, "Invalid literal: atom {atom} is not in [0..{atom_count})")
            }
            Self::Build(BuildError::TooManyAtoms { atom_count }) => {
                write!(f, "Too many atoms: {atom_count}")
            }
            Self::Config(ConfigError::OutOfBounds { name }) => {
                write!(f, "Value for {name} out of bounds")
            }
            Self::Graph(GraphError::InvalidGraph {
                from,
                to,
                node_count,
            }) => write!(
                f,
                "Invalid graph: edge {from} -> {to} leaves [0..{node_count})"
            ),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
