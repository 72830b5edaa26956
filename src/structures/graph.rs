/*!
Directed graphs over the nodes [0..*n*).

A graph is stored as an adjacency list, where the *i*th list contains the targets of edges from node *i*, in the order the edges were added.
The order of each list is preserved, as it fixes the order in which a [search](crate::procedures::scc) visits the nodes of the graph.

```rust
# use otter_twosat::structures::graph::Graph;
let graph = Graph::from_adjacency(vec![vec![1], vec![2, 0], vec![]]).unwrap();

assert_eq!(graph.node_count(), 3);
assert_eq!(graph.edge_count(), 3);
assert_eq!(graph.neighbours(1), &[2, 0]);
```

A graph is built once and is not revised after.
Every edge targets a node of the graph, and this is checked when building a graph from an adjacency list.

```rust
# use otter_twosat::structures::graph::Graph;
# use otter_twosat::types::err::GraphError;
let invalid = Graph::from_adjacency(vec![vec![1], vec![2]]);

assert_eq!(invalid, Err(GraphError::InvalidGraph { from: 1, to: 2, node_count: 2 }));
```
*/

use crate::types::err::GraphError;

/// A node of a graph.
pub type Node = usize;

/// A directed graph, stored as an adjacency list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Node>>,
}

impl Graph {
    /// A graph with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::default(); node_count],
        }
    }

    /// A graph from an adjacency list, if every edge targets some node of the graph.
    pub fn from_adjacency(adjacency: Vec<Vec<Node>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        for (from, targets) in adjacency.iter().enumerate() {
            if let Some(&to) = targets.iter().find(|&&to| to >= node_count) {
                return Err(GraphError::InvalidGraph {
                    from,
                    to,
                    node_count,
                });
            }
        }
        Ok(Graph { adjacency })
    }

    /// Adds an edge from `from` to `to`.
    ///
    /// Visibility is limited to the crate, as the method does not check either node is part of the graph.
    pub(crate) fn add_edge(&mut self, from: Node, to: Node) {
        self.adjacency[from].push(to);
    }

    /// The number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of edges in the graph, counting any duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|targets| targets.len()).sum()
    }

    /// The targets of edges from `node`, in the order the edges were added.
    ///
    /// # Panics
    /// If `node` is not a node of the graph.
    pub fn neighbours(&self, node: Node) -> &[Node] {
        &self.adjacency[node]
    }

    /// An iterator over all nodes of the graph.
    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        0..self.adjacency.len()
    }

    /// An iterator over all edges of the graph, as (from, to) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }
}
