use std::str::FromStr;

/// Variant traversals to use when finding the strongly connected components of a graph.
///
/// Both traversals visit nodes in the same order and return the same components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SCCTraversal {
    /// A depth-first traversal with an explicit stack of frames, in place of recursion.
    Iterative = 0,

    /// A depth-first traversal by recursion.
    ///
    /// The depth of recursion is bounded only by the longest path of the graph, and so a long chain of implications may overflow the stack.
    Recursive,
}

impl std::fmt::Display for SCCTraversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iterative => write!(f, "Iterative"),
            Self::Recursive => write!(f, "Recursive"),
        }
    }
}

impl SCCTraversal {
    /// The minimum SCCTraversal type.
    pub const MIN: SCCTraversal = SCCTraversal::Iterative;

    /// The maximum SCCTraversal type.
    pub const MAX: SCCTraversal = SCCTraversal::Recursive;
}

impl FromStr for SCCTraversal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Iterative" => Ok(Self::Iterative),

            "Recursive" => Ok(Self::Recursive),

            _unkown_string => Err(()),
        }
    }
}
