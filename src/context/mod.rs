/*!
The context --- to which formulas are added and within which solves take place, etc.

A context owns a [formula](crate::structures::formula), and records the result of the last solve of the formula.
Atoms and clauses are added through the methods of the [builder](crate::builder), and a solve is made with [solve](Context::solve).

# Example
```rust
# use otter_twosat::context::Context;
# use otter_twosat::config::Config;
# use otter_twosat::reports::Report;
# use otter_twosat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = [CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```

A context may be extended and solved any number of times.
Adding an atom or clause after a solve returns the context to [Input](ContextState::Input) and clears the result of the solve.
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        implication::ImplicationGraph,
        scc::{find_sccs, Components},
        solve::solution_from,
    },
    reports::{Report, Solution},
    structures::{atom::Atom, formula::Formula, valuation::CValuation},
    types::err::ErrorKind,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The formula is known to be satisfiable, with a full valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable, with the noted atom having both literals in some component.
    Unsatisfiable(Atom),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The formula of the context.
    pub(crate) formula: Formula,

    /// The valuation found by the last solve, if satisfiable, and otherwise a valuation without any values.
    pub(crate) valuation: CValuation,

    /// The components of the implication graph of the formula, from the last solve.
    pub(crate) components: Option<Components>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,

            formula: Formula::default(),
            valuation: CValuation::default(),
            components: None,
        }
    }

    /// Determines the satisfiability of the formula of the context.
    ///
    /// If the formula has already been solved, the existing report is returned.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable(_) => return Ok(self.report()),
            ContextState::Configuration | ContextState::Input => {}
        }

        let start = std::time::Instant::now();

        let implication = ImplicationGraph::from_formula(&self.formula)?;
        let components = find_sccs(implication.graph(), &self.config);

        match solution_from(&implication, &components) {
            Solution::Satisfiable(model) => {
                self.valuation = model.into_iter().map(Some).collect();
                self.state = ContextState::Satisfiable;
            }
            Solution::Unsatisfiable { atom } => {
                self.valuation = vec![None; self.formula.atom_count()];
                self.state = ContextState::Unsatisfiable(atom);
            }
        }

        self.counters.total_solves += 1;
        self.counters.nodes = implication.graph().node_count();
        self.counters.edges = implication.graph().edge_count();
        self.counters.components = components.len();
        self.counters.time = start.elapsed();

        self.components = Some(components);

        log::info!(target: targets::CONTEXT,
            "Solve {}: {} in {:?}",
            self.counters.total_solves,
            self.state,
            self.counters.time
        );

        Ok(self.report())
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The value of `atom` on the valuation of the last solve, if the formula is satisfiable and the atom is part of the formula.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The valuation of the context.
    ///
    /// Full if the last solve found the formula to be satisfiable, and without any values otherwise.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The satisfying valuation found by the last solve.
    pub fn model(&self) -> Result<Vec<bool>, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok(self
                .valuation
                .iter()
                .map(|value| value.unwrap_or_default())
                .collect()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The atom with which unsatisfiability of the context was determined.
    pub fn unsatisfiable_atom(&self) -> Result<Atom, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable(atom) => Ok(atom),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The components of the implication graph found by the last solve, if the formula has not changed since.
    pub fn components(&self) -> Option<&Components> {
        self.components.as_ref()
    }

    /// The formula of the context.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The number of atoms in the language of the context.
    pub fn atom_count(&self) -> usize {
        self.formula.atom_count()
    }

    /// Clears the result of any solve, and readies the context for input.
    pub(crate) fn note_input(&mut self) {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            ContextState::Satisfiable | ContextState::Unsatisfiable(_) => {
                log::trace!(target: targets::CONTEXT, "Result of solve cleared for input");
                self.valuation.iter_mut().for_each(|value| *value = None);
                self.components = None;
            }
        }
        self.state = ContextState::Input;
    }
}
