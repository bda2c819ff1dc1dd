use crate::algo::traversal::PreOrderDfs;
use crate::interface::{NavigableGraph, StaticGraph};
use std::collections::{HashSet, VecDeque};

/// Returns the number of connected components of the given graph.
///
/// The empty graph has zero components, a non-empty connected graph has one. Roots are taken
/// from the graph's vertex enumeration order and each component is marked with an inlined
/// breadth first search, so no intermediate traversal sequence is allocated.
pub fn count_connected_components<Graph: StaticGraph>(graph: &Graph) -> usize {
    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();
    let mut component_count = 0;

    for root in graph.vertices() {
        if visited.contains(&root) {
            continue;
        }
        component_count += 1;

        frontier.push_back(root);
        while let Some(vertex) = frontier.pop_front() {
            if visited.contains(&vertex) {
                continue;
            }
            visited.insert(vertex.clone());

            for neighbor in graph.neighbors(&vertex) {
                frontier.push_back(neighbor);
            }
        }
    }

    debug!("Found {} connected components", component_count);
    component_count
}

/// Returns the number of connected components of the given graph by running a full depth first
/// traversal from each component root just for its visited marking side effect.
///
/// This allocates a fresh traversal with its own frontier and visited set per component, so
/// `count_connected_components` should be preferred. It is kept as an independent baseline that
/// the optimised count is tested against.
pub fn count_connected_components_naive<Graph: StaticGraph>(graph: &Graph) -> usize {
    let mut visited = HashSet::new();
    let mut component_count = 0;

    for root in graph.vertices() {
        if visited.contains(&root) {
            continue;
        }
        component_count += 1;
        visited.extend(PreOrderDfs::new(graph, root));
    }

    component_count
}

/// Returns true if the given graph consists of exactly one connected component.
///
/// The empty graph has zero components and therefore counts as not connected, while a single
/// vertex without edges counts as connected.
pub fn is_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    count_connected_components(graph) == 1
}

/// A lazy iterator over the connected components of a graph.
///
/// Components are discovered by iterating the graph's vertices in enumeration order and flooding
/// from each vertex that no earlier component contains. Each component is yielded as the vector
/// of its vertices in breadth first discovery order, and every vertex of the graph appears in
/// exactly one component. Work is done per call to `next`, so consuming only a prefix of the
/// components only pays for the components actually produced.
pub struct ConnectedComponents<'a, Graph: NavigableGraph<'a>> {
    graph: &'a Graph,
    roots: Graph::VertexIterator,
    visited: HashSet<Graph::Vertex>,
    frontier: VecDeque<Graph::Vertex>,
}

impl<'a, Graph: NavigableGraph<'a>> ConnectedComponents<'a, Graph> {
    /// Creates a new iterator over the connected components of the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            roots: graph.vertices(),
            visited: HashSet::new(),
            frontier: VecDeque::new(),
        }
    }
}

impl<'a, Graph: NavigableGraph<'a>> Iterator for ConnectedComponents<'a, Graph> {
    type Item = Vec<Graph::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(root) = self.roots.next() {
            if self.visited.contains(&root) {
                continue;
            }

            let mut component = Vec::new();
            self.frontier.push_back(root);
            while let Some(vertex) = self.frontier.pop_front() {
                if self.visited.contains(&vertex) {
                    continue;
                }
                self.visited.insert(vertex.clone());

                for neighbor in self.graph.neighbors(&vertex) {
                    self.frontier.push_back(neighbor);
                }
                component.push(vertex);
            }

            return Some(component);
        }

        None
    }
}
