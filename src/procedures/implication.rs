/*!
The implication graph of a 2-CNF formula.

# Overview

A clause (*a* ∨ *b*) is equivalent to each of the implications ¬*a* → *b* and ¬*b* → *a*.
So, a formula is encoded as a graph whose nodes are the literals of the language of the formula, with an edge for each implication of each clause.

For a formula over *v* atoms:
- Node *a* is the literal of atom *a* with positive polarity.
- Node *a* + *v* is the literal of atom *a* with negative polarity.

And so, the negation of node *n* is *n* + *v* if *n* < *v* and *n* - *v* otherwise.

```rust
# use otter_twosat::procedures::implication::ImplicationGraph;
# use otter_twosat::structures::formula::Formula;
# use otter_twosat::structures::literal::{CLiteral, Literal};
let a = CLiteral::new(0, true);
let b = CLiteral::new(1, true);
let formula = Formula::from_clauses(2, [[a, b]]);

let implication = ImplicationGraph::from_formula(&formula).unwrap();

// ¬a → b and ¬b → a
assert_eq!(implication.graph().node_count(), 4);
assert_eq!(implication.graph().neighbours(2), &[1]);
assert_eq!(implication.graph().neighbours(3), &[0]);

assert_eq!(implication.node_of(-a), 2);
assert_eq!(implication.literal_of(3), -b);
assert_eq!(implication.negation(3), 1);
```

If some clause contains an atom outside of the language of the formula the graph is not built, and an [InvalidLiteral](BuildError::InvalidLiteral) error is returned in place of the graph.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        formula::Formula,
        graph::{Graph, Node},
        literal::{CLiteral, Literal},
    },
    types::err::BuildError,
};

/// A graph together with the count of atoms used to translate between nodes and literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplicationGraph {
    atom_count: usize,
    graph: Graph,
}

impl ImplicationGraph {
    /// The implication graph of a formula, with edges added in the order of the clauses of the formula.
    pub fn from_formula(formula: &Formula) -> Result<Self, BuildError> {
        formula.validate()?;

        let atom_count = formula.atom_count();
        let mut implication = ImplicationGraph {
            atom_count,
            graph: Graph::with_nodes(2 * atom_count),
        };

        for [a, b] in formula.clauses() {
            let not_a = implication.node_of(a.negate());
            let not_b = implication.node_of(b.negate());
            let node_a = implication.node_of(*a);
            let node_b = implication.node_of(*b);

            implication.graph.add_edge(not_a, node_b);
            implication.graph.add_edge(not_b, node_a);
        }

        log::debug!(target: targets::IMPLICATION,
            "Implication graph with {} nodes and {} edges from {} clauses",
            implication.graph.node_count(),
            implication.graph.edge_count(),
            formula.clause_count()
        );

        Ok(implication)
    }

    /// The graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The number of atoms in the language of the encoded formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// The node of a literal.
    ///
    /// No check is made on whether the atom of the literal is part of the language of the formula.
    pub fn node_of(&self, literal: impl Literal) -> Node {
        match literal.polarity() {
            true => literal.atom() as Node,
            false => literal.atom() as Node + self.atom_count,
        }
    }

    /// The literal of a node.
    pub fn literal_of(&self, node: Node) -> CLiteral {
        CLiteral::new(self.atom_of(node), self.is_positive(node))
    }

    /// The atom of a node.
    ///
    /// As the formula of the graph was validated, every atom is at most [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    pub fn atom_of(&self, node: Node) -> Atom {
        match self.is_positive(node) {
            true => node as Atom,
            false => (node - self.atom_count) as Atom,
        }
    }

    /// Whether the node is a literal with positive polarity.
    pub fn is_positive(&self, node: Node) -> bool {
        node < self.atom_count
    }

    /// The node of the negation of the literal of `node`.
    pub fn negation(&self, node: Node) -> Node {
        negation(node, self.atom_count)
    }
}

/// The node of the negation of the literal of `node`, in an implication graph over `atom_count` atoms.
///
/// The negation is an involution without fixed points on [0..2 * `atom_count`).
pub fn negation(node: Node, atom_count: usize) -> Node {
    match node < atom_count {
        true => node + atom_count,
        false => node - atom_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_symmetry() {
        for atom_count in 1..12 {
            for node in 0..(2 * atom_count) {
                assert_ne!(node, negation(node, atom_count));
                assert_eq!(node, negation(negation(node, atom_count), atom_count));
            }
        }
    }

    #[test]
    fn node_literal_roundtrip() {
        let formula = Formula::new(5);
        let implication = ImplicationGraph::from_formula(&formula).unwrap();

        for node in implication.graph().nodes() {
            let literal = implication.literal_of(node);
            assert_eq!(implication.node_of(literal), node);
            assert_eq!(implication.node_of(-literal), implication.negation(node));
        }
    }

    #[test]
    fn unit_clause_edges() {
        let a = CLiteral::new(0, true);
        let formula = Formula::from_clauses(1, [a]);
        let implication = ImplicationGraph::from_formula(&formula).unwrap();

        // (a ∨ a) gives ¬a → a twice.
        assert_eq!(implication.graph().neighbours(1), &[0, 0]);
        assert!(implication.graph().neighbours(0).is_empty());
    }

    #[test]
    fn single_clause_edges() {
        let [a, b] = [0, 1].map(|atom| CLiteral::new(atom, true));
        let formula = Formula::from_clauses(2, [[a, b]]);
        let implication = ImplicationGraph::from_formula(&formula).unwrap();

        assert_eq!(implication.graph().node_count(), 4);
        assert_eq!(implication.graph().edges().collect::<Vec<_>>(), vec![(2, 1), (3, 0)]);
    }

    #[test]
    fn edge_order_follows_clause_order() {
        let [a, b, c] = [0, 1, 2].map(|atom| CLiteral::new(atom, true));
        let formula = Formula::from_clauses(3, [[a, b], [a, -c]]);
        let implication = ImplicationGraph::from_formula(&formula).unwrap();

        let edges = implication.graph().edges().collect::<Vec<_>>();
        assert_eq!(edges, vec![(2, 0), (3, 1), (3, 5), (4, 0)]);
    }

    #[test]
    fn invalid_literal() {
        let formula = Formula::from_clauses(1, [[CLiteral::new(0, true), CLiteral::new(1, false)]]);
        assert_eq!(
            ImplicationGraph::from_formula(&formula),
            Err(BuildError::InvalidLiteral {
                atom: 1,
                atom_count: 1
            })
        );
    }

    #[test]
    fn too_many_atoms() {
        let atom_count = crate::structures::atom::ATOM_MAX as usize + 2;
        let formula = Formula::new(atom_count);

        assert_eq!(
            ImplicationGraph::from_formula(&formula),
            Err(BuildError::TooManyAtoms { atom_count })
        );
    }
}
