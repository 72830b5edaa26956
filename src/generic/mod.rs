//! Generic structures, not tied to satisfiability.

pub mod random;
