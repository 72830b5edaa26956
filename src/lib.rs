//! A library for determining the satisfiability of boolean formulas in two-conjunctive normal form.
//!
//! otter_twosat determines the satisfiability of formulas where each clause is a disjunction of at most two literals (2-SAT), and when a formula is satisfiable, finds a satisfying valuation.
//! The problem is solved in time linear in the size of the formula, by reducing satisfiability to a question about the strongly connected components of a directed graph.[^aspvall]
//!
//! Some guiding principles of otter_twosat are (see [below](#guiding-principles) for further details):
//! - [Modularity](#modularity).
//! - Documentation, of both implementation and theory.
//! - [Verification](#verification).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), atoms and clauses are added with the methods of the [builder], and a [solve](crate::context::Context::solve) then determines satisfiability.
//!
//! Internally, a solve is factored into three [procedures]:
//! - The formula is encoded as an [implication graph](crate::procedures::implication), with a node for each literal and an edge for each implication made by a clause.
//! - The [strongly connected components](crate::procedures::scc) of the graph are found with Tarjan's algorithm.
//! - The components are [read](crate::procedures::solve) for a contradiction, or else for a satisfying valuation.
//!
//! Each procedure may be used independently of a context, and the [scc](crate::procedures::scc) procedure applies to any [graph](crate::structures::graph).
//!
//! # Examples
//!
//! + Solve a formula built through a context.
//!
//! ```rust
//! # use otter_twosat::config::Config;
//! # use otter_twosat::context::Context;
//! # use otter_twosat::reports::Report;
//! use otter_twosat::structures::literal::Literal;
//!
//! let mut the_context = Context::from_config(Config::default());
//! let [p, q, r] = *the_context.fresh_or_max_literals(3).as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! // p → q, q → r, r → ¬p
//! assert!(the_context.add_clause([-p, q]).is_ok());
//! assert!(the_context.add_clause([-q, r]).is_ok());
//! assert!(the_context.add_clause([-r, -p]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(p.atom()), Some(false));
//!
//! // Requiring p is then a contradiction.
//! assert!(the_context.add_clause(p).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Find the strongly connected components of a graph.
//!
//! ```rust
//! # use otter_twosat::config::Config;
//! # use otter_twosat::procedures::scc::find_sccs;
//! # use otter_twosat::structures::graph::Graph;
//! let graph = Graph::from_adjacency(vec![vec![1], vec![2], vec![0, 3], vec![]]).unwrap();
//! let components = find_sccs(&graph, &Config::default());
//!
//! assert_eq!(components.len(), 2);
//! assert!(components.same_component(0, 2));
//! assert!(!components.same_component(2, 3));
//! ```
//!
//! # Guiding principles
//!
//! ## Modularity
//!
//!   + Interaction between parts happens through documented access points. For example:
//!     - Things such as [literals](structures::literal) and [clauses](structures::clause) are defined first as traits, with canonical instantiations used throughout the library.
//!     - The algorithm for determining satisfiability is factored into a collection of [procedures].
//!     - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).
//!
//! ## Verification
//!
//! + The traversal of a graph is written both iteratively and recursively, with each making the same changes to the same state in the same order.
//!   The iterative traversal is used by default, as the depth of recursion is bounded only by the length of the longest path in the graph.
//! + Integration tests check components against a separate implementation of Tarjan's algorithm, and solutions against a brute-force search for a satisfying valuation.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the traversal of a graph can be filtered with `RUST_LOG=scc …` or,
//! - The result of each solve without details of the valuation can be found with `RUST_LOG=context=info …`
//!
//! [^aspvall]: Aspvall, Plass, and Tarjan, *A linear-time algorithm for testing the truth of certain quantified boolean formulas* (1979).

#![allow(mixed_script_confusables)]
#![allow(unused_must_use)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
