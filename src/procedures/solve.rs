//! Determines the satisfiability of a 2-CNF formula.
//!
//! # Overview
//!
//! [solve] builds the [implication graph](crate::procedures::implication) of a formula, finds the [strongly connected components](crate::procedures::scc) of the graph, and from the components either reads a satisfying valuation or notes some atom whose value is contradictory.
//!
//! ```none
//!   formula ---> implication graph ---> components ---+---> unsatisfiable, if some literal and its negation share a component
//!                                                     |
//!                                                     +---> satisfiable, with a valuation read from the components
//! ```
//!
//! ## Satisfiability
//!
//! Each node of a component is reachable from every other node in the component.
//! So, if a literal and its negation share a component, each implies the other and no value of the atom is consistent with the formula.
//! And, conversely, if no literal shares a component with its negation then the formula is satisfiable.[^aspvall]
//!
//! Each node is checked against its negation, though as the graph is symmetric checking one literal for each atom would be sufficient.
//!
//! ## The valuation
//!
//! Each atom is given the value of the literal of whichever of its two nodes belongs to the component completed *first*.
//! As components are completed in reverse topological order, this is the literal furthest along any chain of implications through the atom, and so making the literal true never forces some later literal to be false.
//!
//! So, components are scanned in the order completed, and each atom is valued on seeing the first of its nodes.
//! Equivalently, with components in [topological order](crate::procedures::scc::Components::topological), the literal of the node seen *last* is made true.
//!
//! ```rust
//! # use otter_twosat::config::Config;
//! # use otter_twosat::procedures::solve::solve;
//! # use otter_twosat::reports::Solution;
//! # use otter_twosat::structures::formula::Formula;
//! # use otter_twosat::structures::literal::{CLiteral, Literal};
//! let a = CLiteral::new(0, true);
//! let b = CLiteral::new(1, true);
//!
//! let formula = Formula::from_clauses(2, [[a, b], [-a, -a]]);
//! let solution = solve(&formula, &Config::default()).unwrap();
//!
//! assert_eq!(solution, Solution::Satisfiable(vec![false, true]));
//! assert!(solution.satisfies(&formula));
//!
//! let formula = Formula::from_clauses(1, [a, -a]);
//! assert_eq!(solve(&formula, &Config::default()), Ok(Solution::Unsatisfiable { atom: 0 }));
//! ```
//!
//! [^aspvall]: Aspvall, Plass, and Tarjan, *A linear-time algorithm for testing the truth of certain quantified boolean formulas* (1979).

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        implication::ImplicationGraph,
        scc::{find_sccs, Components},
    },
    reports::Solution,
    structures::{atom::Atom, formula::Formula, valuation::CValuation},
    types::err::ErrorKind,
};

/// Determines the satisfiability of `formula`, with a satisfying valuation if the formula is satisfiable.
///
/// An error is returned only if some clause contains an atom outside of the language of the formula.
pub fn solve(formula: &Formula, config: &Config) -> Result<Solution, ErrorKind> {
    let implication = ImplicationGraph::from_formula(formula)?;
    let components = find_sccs(implication.graph(), config);

    Ok(solution_from(&implication, &components))
}

/// The solution given by the components of an implication graph.
pub fn solution_from(implication: &ImplicationGraph, components: &Components) -> Solution {
    if let Some(atom) = contradiction(implication, components) {
        log::info!(target: targets::SOLVE, "Unsatisfiable, as both literals of {atom} share a component");
        return Solution::Unsatisfiable { atom };
    }

    let valuation = valuation_from(implication, components);

    // Every node belongs to some component, and so every atom has some value.
    debug_assert!(valuation.iter().all(|value| value.is_some()));
    let model = valuation
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect::<Vec<_>>();

    log::info!(target: targets::SOLVE, "Satisfiable");
    Solution::Satisfiable(model)
}

/// Some atom whose literals share a component, if one exists.
pub fn contradiction(implication: &ImplicationGraph, components: &Components) -> Option<Atom> {
    implication
        .graph()
        .nodes()
        .find(|&node| components.same_component(node, implication.negation(node)))
        .map(|node| implication.atom_of(node))
}

/// The valuation read from the components of an implication graph, scanned in the order completed.
///
/// The valuation is only guaranteed to satisfy the encoded formula if there is no [contradiction].
pub fn valuation_from(implication: &ImplicationGraph, components: &Components) -> CValuation {
    let mut valuation: CValuation = vec![None; implication.atom_count()];

    for component in components.components() {
        for &node in component {
            let atom = implication.atom_of(node) as usize;
            if valuation[atom].is_none() {
                let value = implication.is_positive(node);
                log::trace!(target: targets::SOLVE, "Value {atom} {value} from node {node}");
                valuation[atom] = Some(value);
            }
        }
    }

    valuation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn single_clause() {
        let [a, b] = [0, 1].map(|atom| CLiteral::new(atom, true));
        let formula = Formula::from_clauses(2, [[a, b]]);

        let solution = solve(&formula, &Config::default()).unwrap();
        assert!(solution.satisfies(&formula));
    }

    #[test]
    fn forced_contradiction() {
        let a = CLiteral::new(0, true);
        let formula = Formula::from_clauses(1, [[a, a], [-a, -a]]);

        let implication = ImplicationGraph::from_formula(&formula).unwrap();
        let components = find_sccs(implication.graph(), &Config::default());
        assert!(components.same_component(0, 1));

        assert_eq!(solution_from(&implication, &components), Solution::Unsatisfiable { atom: 0 });
    }

    #[test]
    fn empty_formula() {
        let formula = Formula::new(3);
        let implication = ImplicationGraph::from_formula(&formula).unwrap();
        let components = find_sccs(implication.graph(), &Config::default());

        assert_eq!(components.len(), 6);
        assert_eq!(
            solution_from(&implication, &components),
            Solution::Satisfiable(vec![true, true, true])
        );
    }

    #[test]
    fn no_atoms() {
        assert_eq!(
            solve(&Formula::default(), &Config::default()),
            Ok(Solution::Satisfiable(Vec::default()))
        );
    }

    #[test]
    fn implication_chain() {
        // a, a → b, b → c
        let [a, b, c] = [0, 1, 2].map(|atom| CLiteral::new(atom, true));
        let formula = Formula::from_clauses(3, [[a, a], [-a, b], [-b, c]]);

        assert_eq!(
            solve(&formula, &Config::default()),
            Ok(Solution::Satisfiable(vec![true, true, true]))
        );
    }

    #[test]
    fn contradiction_through_a_cycle() {
        // a → b → ¬a → ¬b → a
        let [a, b] = [0, 1].map(|atom| CLiteral::new(atom, true));
        let formula = Formula::from_clauses(2, [[-a, b], [-b, -a], [a, -b], [b, a]]);

        assert!(matches!(
            solve(&formula, &Config::default()),
            Ok(Solution::Unsatisfiable { .. })
        ));
    }

    #[test]
    fn invalid_literal() {
        let formula = Formula::from_clauses(1, [CLiteral::new(3, true)]);

        assert_eq!(
            solve(&formula, &Config::default()),
            Err(ErrorKind::Build(crate::types::err::BuildError::InvalidLiteral {
                atom: 3,
                atom_count: 1
            }))
        );
    }
}
