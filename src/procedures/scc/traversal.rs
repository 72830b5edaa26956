//! The state of a depth-first traversal, and the traversals themselves.
//!
//! A traversal is made from some root, and extends the state with each node reachable from the root which has not already been visited.
//! Any number of traversals may be made with the same state, and after all nodes have been visited the state is consumed to return the [Components] of the graph.
//!
//! The state is revised through a handful of methods, each corresponding to a step of Tarjan's algorithm:
//! - [assign](TraversalState::assign), on first visiting a node.
//! - [update_low_link_from_child](TraversalState::update_low_link_from_child), on returning from a node visited through an edge.
//! - [update_low_link_if_on_stack](TraversalState::update_low_link_if_on_stack), on seeing an edge to a node visited earlier.
//! - [collect_component](TraversalState::collect_component), on leaving a node whose low link is its own order.
//!
//! The [recursive](TraversalState::recursive) and [iterative](TraversalState::iterative) traversals call these methods in the same order, and so result in the same state.

use crate::{
    misc::log::targets::{self},
    structures::graph::{Graph, Node},
};

use super::Components;

/// Marks a node without an assigned order.
const UNASSIGNED: usize = usize::MAX;

/// The state of a traversal, owned by a single search for components.
pub(super) struct TraversalState {
    /// The order to be assigned to the next node visited.
    next_id: usize,

    /// The order in which each node was visited, or [UNASSIGNED].
    assigned_order: Vec<usize>,

    /// Whether each node has been visited.
    visited: Vec<bool>,

    /// Nodes of components which have not been completed, in the order visited.
    stack: Vec<Node>,

    /// Whether each node is on the stack.
    on_stack: Vec<bool>,

    /// The smallest order of a node on the stack reachable from each node through the nodes visited from the node.
    low_link: Vec<usize>,

    /// Completed components, in the order completed.
    components: Vec<Vec<Node>>,
}

/// A frame of the iterative traversal, standing in for a call of the recursive traversal.
struct Frame {
    /// The node of the frame.
    node: Node,

    /// The index of the next neighbour of the node to examine.
    next: usize,
}

impl TraversalState {
    pub(super) fn new(node_count: usize) -> Self {
        TraversalState {
            next_id: 0,
            assigned_order: vec![UNASSIGNED; node_count],
            visited: vec![false; node_count],
            stack: Vec::default(),
            on_stack: vec![false; node_count],
            low_link: vec![UNASSIGNED; node_count],
            components: Vec::default(),
        }
    }

    pub(super) fn visited(&self, node: Node) -> bool {
        self.visited[node]
    }

    /// Marks `node` as visited, assigns the next order to the node, and places the node on the stack.
    fn assign(&mut self, node: Node) {
        log::trace!(target: targets::SCC, "Assign {node} order {}", self.next_id);

        self.visited[node] = true;
        self.assigned_order[node] = self.next_id;
        self.low_link[node] = self.next_id;
        self.next_id += 1;

        self.stack.push(node);
        self.on_stack[node] = true;
    }

    /// Lowers the low link of `node` to that of `child`, if lower.
    fn update_low_link_from_child(&mut self, node: Node, child: Node) {
        self.low_link[node] = std::cmp::min(self.low_link[node], self.low_link[child]);
    }

    /// Lowers the low link of `node` to the order of `target`, if `target` is on the stack and the order is lower.
    ///
    /// If `target` is not on the stack the component of `target` has been completed, and is not part of the component of `node`.
    fn update_low_link_if_on_stack(&mut self, node: Node, target: Node) {
        if self.on_stack[target] {
            self.low_link[node] = std::cmp::min(self.low_link[node], self.assigned_order[target]);
        }
    }

    /// Whether `node` is the root of a component.
    fn is_root(&self, node: Node) -> bool {
        self.low_link[node] == self.assigned_order[node]
    }

    /// Pops nodes from the stack, up to and including `root`, as a component.
    fn collect_component(&mut self, root: Node) {
        let mut component = Vec::default();

        while let Some(node) = self.stack.pop() {
            self.on_stack[node] = false;
            component.push(node);
            if node == root {
                break;
            }
        }

        log::trace!(target: targets::SCC, "Component {}: {component:?}", self.components.len());
        self.components.push(component);
    }

    /// A depth-first traversal from `root`, by recursion.
    ///
    /// Each node visited adds a call to the stack, and so this is only suitable for graphs without long paths.
    pub(super) fn recursive(&mut self, graph: &Graph, root: Node) {
        self.assign(root);

        for &target in graph.neighbours(root) {
            if !self.visited[target] {
                self.recursive(graph, target);
                self.update_low_link_from_child(root, target);
            } else {
                self.update_low_link_if_on_stack(root, target);
            }
        }

        if self.is_root(root) {
            self.collect_component(root);
        }
    }

    /// A depth-first traversal from `root`, with an explicit stack of frames.
    ///
    /// The top frame is the node currently visited, and the frame below is the node from which it was visited.
    /// So, when a frame is popped the low link of the node of the frame below is updated, as on returning from a recursive call.
    pub(super) fn iterative(&mut self, graph: &Graph, root: Node) {
        self.assign(root);
        let mut frames = vec![Frame {
            node: root,
            next: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let node = frame.node;

            match graph.neighbours(node).get(frame.next) {
                Some(&target) => {
                    frame.next += 1;

                    if !self.visited[target] {
                        self.assign(target);
                        frames.push(Frame {
                            node: target,
                            next: 0,
                        });
                    } else {
                        self.update_low_link_if_on_stack(node, target);
                    }
                }

                None => {
                    frames.pop();

                    if self.is_root(node) {
                        self.collect_component(node);
                    }

                    if let Some(parent) = frames.last() {
                        self.update_low_link_from_child(parent.node, node);
                    }
                }
            }
        }
    }

    /// The components found, with the low links of the traversal reused to index the component of each node.
    pub(super) fn into_components(self) -> Components {
        let mut component_of = self.low_link;

        for (index, component) in self.components.iter().enumerate() {
            for &node in component {
                component_of[node] = index;
            }
        }

        Components {
            components: self.components,
            component_of,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(adjacency: Vec<Vec<Node>>) -> Graph {
        Graph::from_adjacency(adjacency).unwrap()
    }

    #[test]
    fn low_links_of_a_cycle() {
        let graph = graph(vec![vec![1], vec![2], vec![0]]);
        let mut state = TraversalState::new(3);
        state.recursive(&graph, 0);

        assert_eq!(state.assigned_order, vec![0, 1, 2]);
        assert_eq!(state.low_link, vec![0, 0, 0]);
        assert!(state.stack.is_empty());
        assert!(state.on_stack.iter().all(|on| !on));
        assert_eq!(state.components, vec![vec![2, 1, 0]]);
    }

    #[test]
    fn closed_components_do_not_lower_low_links() {
        // 0 → 1, 0 → 2, 2 → 1, where 1 is completed before 2 is visited.
        let graph = graph(vec![vec![1, 2], vec![], vec![1]]);
        let mut state = TraversalState::new(3);
        state.iterative(&graph, 0);

        assert_eq!(state.low_link, vec![0, 1, 2]);
        assert_eq!(state.components, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn traversals_agree_step_by_step() {
        let graph = graph(vec![
            vec![1],
            vec![2, 3],
            vec![1, 4],
            vec![2],
            vec![5],
            vec![4, 0],
        ]);

        let mut recursive = TraversalState::new(6);
        let mut iterative = TraversalState::new(6);
        recursive.recursive(&graph, 0);
        iterative.iterative(&graph, 0);

        assert_eq!(recursive.assigned_order, iterative.assigned_order);
        assert_eq!(recursive.low_link, iterative.low_link);
        assert_eq!(recursive.components, iterative.components);
    }

    #[test]
    fn component_index_reuses_low_links() {
        let graph = graph(vec![vec![1], vec![0], vec![0]]);
        let mut state = TraversalState::new(3);
        for root in graph.nodes() {
            if !state.visited(root) {
                state.iterative(&graph, root);
            }
        }

        let components = state.into_components();
        assert_eq!(components.component_of, vec![0, 0, 1]);
    }
}
