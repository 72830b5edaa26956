/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [building implication graphs](crate::procedures::implication)
    pub const IMPLICATION: &str = "implication";

    /// Logs related to [strongly connected components](crate::procedures::scc)
    pub const SCC: &str = "scc";

    /// Logs related to [solving](crate::procedures::solve) and the resulting valuation
    pub const SOLVE: &str = "solve";

    /// Logs related to the [context](crate::context)
    pub const CONTEXT: &str = "context";
}
