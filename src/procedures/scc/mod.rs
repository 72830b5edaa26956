/*!
The strongly connected components of a graph, found with Tarjan's algorithm.

# Overview

A strongly connected component of a graph is a maximal collection of nodes such that each node in the collection is reachable from every other node in the collection.
Every node belongs to exactly one component, and so the components of a graph partition the nodes of the graph.

Components are found through a depth-first traversal of the graph, in which each node is assigned the order in which it was visited together with a 'low link', the smallest order of a node on the stack which is reachable from the node.
On leaving a node whose low link is equal to its own order, the node is the root of a component and the component is made of the node and all nodes placed on the stack after it.

Roughly, for each node *s* not already visited:

```none
visit(s):
  assign s the next order, and push s to the stack
  for each edge s → t:
    if t has not been visited:
      visit(t)
      low(s) = min(low(s), low(t))
    else if t is on the stack:
      low(s) = min(low(s), order(t))
  if low(s) == order(s):
    pop the stack up to and including s, as a component
```

The traversal is detailed in [traversal].

# Order

Components are returned in the order they are completed.
As a component is only completed after every component reachable from it, this order is the *reverse* of a topological order on the components.
That is, if there is an edge from component *X* to component *Y* then *Y* is completed before *X*.

```rust
# use otter_twosat::config::Config;
# use otter_twosat::procedures::scc::find_sccs;
# use otter_twosat::structures::graph::Graph;
let graph = Graph::from_adjacency(vec![vec![1], vec![2, 3], vec![1, 4], vec![2], vec![]]).unwrap();
let components = find_sccs(&graph, &Config::default());

assert_eq!(components.components(), &[vec![4], vec![3, 2, 1], vec![0]]);
assert_eq!(components.component_of(2), 1);

let topological = components.topological().collect::<Vec<_>>();
assert_eq!(topological, vec![&[0][..], &[3, 2, 1][..], &[4][..]]);
```

The order of traversal --- fixed by the [root order](crate::config::RootOrder) and the order of neighbours in the graph --- may change the order in which components are found, but not the components themselves.
And, for a fixed order of traversal the result is deterministic.

# Stack use

By default the traversal is [iterative](crate::config::SCCTraversal::Iterative), and so a graph with a long path does not risk overflowing the stack.
*/

pub mod traversal;

use std::collections::BTreeSet;

use crate::{
    config::{Config, RootOrder, SCCTraversal},
    generic::random::seeded_shuffle,
    misc::log::targets::{self},
    structures::graph::{Graph, Node},
};

use traversal::TraversalState;

/// The strongly connected components of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    /// Components, in the order completed.
    components: Vec<Vec<Node>>,

    /// The index of the component of each node.
    component_of: Vec<usize>,
}

/// The strongly connected components of `graph`.
///
/// The search is total --- as each edge of a graph targets a node of the graph, there is no failure.
pub fn find_sccs(graph: &Graph, config: &Config) -> Components {
    let mut state = TraversalState::new(graph.node_count());

    let mut roots = graph.nodes().collect::<Vec<_>>();
    if config.root_order.value == RootOrder::Shuffled {
        seeded_shuffle(&mut roots, config.rng_seed.value);
    }

    for root in roots {
        if state.visited(root) {
            continue;
        }
        match config.scc_traversal.value {
            SCCTraversal::Iterative => state.iterative(graph, root),
            SCCTraversal::Recursive => state.recursive(graph, root),
        }
    }

    let components = state.into_components();

    log::debug!(target: targets::SCC,
        "{} components over {} nodes and {} edges",
        components.len(),
        graph.node_count(),
        graph.edge_count()
    );

    components
}

impl Components {
    /// The number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether there are no components, which is the case exactly when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The components, in the order completed.
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// The component at `index`, if one exists.
    pub fn component(&self, index: usize) -> Option<&[Node]> {
        self.components.get(index).map(|component| component.as_slice())
    }

    /// The index of the component of `node`.
    ///
    /// # Panics
    /// If `node` is not a node of the graph.
    pub fn component_of(&self, node: Node) -> usize {
        self.component_of[node]
    }

    /// The index of the component of each node, indexed by node.
    pub fn component_index(&self) -> &[usize] {
        &self.component_of
    }

    /// Whether `a` and `b` belong to the same component.
    pub fn same_component(&self, a: Node, b: Node) -> bool {
        self.component_of[a] == self.component_of[b]
    }

    /// An iterator over the components in topological order, i.e. the reverse of the order in which components were completed.
    pub fn topological(&self) -> impl Iterator<Item = &[Node]> {
        self.components
            .iter()
            .rev()
            .map(|component| component.as_slice())
    }

    /// The edges of the condensation of `graph`, as pairs of component indicies, without duplicates or loops.
    ///
    /// Every edge (*x*, *y*) has *y* < *x*, as components are completed in reverse topological order.
    pub fn condensation_edges(&self, graph: &Graph) -> BTreeSet<(usize, usize)> {
        graph
            .edges()
            .map(|(from, to)| (self.component_of[from], self.component_of[to]))
            .filter(|(x, y)| x != y)
            .collect()
    }

    /// The components as sets of nodes, sorted.
    ///
    /// Useful to compare the partitions of different searches, regardless of order.
    pub fn partition(&self) -> BTreeSet<BTreeSet<Node>> {
        self.components
            .iter()
            .map(|component| component.iter().copied().collect())
            .collect()
    }
}
