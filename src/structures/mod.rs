//! Key structures, such as literals, clauses, and graphs.
//!
//! Some structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or it's canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//!  A [formula] 𝐅 is sequence of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!  Each clause is made of exactly two literals, and so every formula is in 2-CNF.
//!
//! ## Languages
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Every formula is expressed in some language, and the language of a formula is the atoms [0..*m*) for some *m* fixed when the formula is made.
//!
//! ## Graphs
//!
//! A [graph] is a collection of nodes and directed edges between nodes.
//! Of interest are [implication graphs](crate::procedures::implication) which encode a formula.
//!
//! ## (Boolean) values
//!
//! A (boolean) values is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false]. \
//! Other choices include: 1 and 0, ⟙ (top) and ⟘ (bot), 'is to be' and 'is not to be', etc, but these are more difficult to implement.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod graph;
pub mod literal;
pub mod valuation;
