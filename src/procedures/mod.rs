//! Procedures for determining the satisfiability of a formula.
//!
//! A solve is factored into three procedures, each of which may be used independently:
//! - [implication], to build the implication graph of a formula.
//! - [scc], to find the strongly connected components of a graph.
//! - [solve], to determine satisfiability from the components of an implication graph.
//!
//! For the most part these are called via a [context](crate::context), and are placed here for documentation.

pub mod implication;
pub mod scc;
pub mod solve;
