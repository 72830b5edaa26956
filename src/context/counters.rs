use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every solve made with the context.
    pub total_solves: usize,

    /// The number of nodes in the implication graph of the last solve.
    pub nodes: usize,

    /// The number of edges in the implication graph of the last solve.
    pub edges: usize,

    /// The number of strongly connected components found during the last solve.
    pub components: usize,

    /// The time taken during the last solve.
    pub time: Duration,
}
