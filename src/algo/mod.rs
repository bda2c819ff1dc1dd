use crate::algo::components::ConnectedComponents;
use crate::algo::traversal::{PreOrderBfs, PreOrderDfs};
use crate::error::{ErrorKind, Result};
use crate::interface::StaticGraph;

/// Algorithms related to graph connectivity, i.e. counting, testing and enumerating the connected components of a graph.
pub mod components;
/// Algorithms to create certain parameterisable graph classes, like paths, circles and binary trees.
pub mod predefined_graphs;
/// A trait for bidirected queues to abstract over the different implementations in the standard library.
pub mod queue;
/// Algorithms for graph traversals, i.e. preorder breadth or depth first search.
pub mod traversal;

/// A trait providing the traversal and connectivity algorithms of this crate as methods on the
/// graph. It is implemented for every navigable graph via a blanket implementation, and its
/// methods only require read access to the graph.
pub trait GraphAlgorithms: StaticGraph {
    /// Returns a lazy depth first preorder traversal of the graph from the given start vertex.
    ///
    /// Each vertex reachable from the start is yielded exactly once. Pending vertices are kept
    /// on a stack, so the neighbors of a vertex are expanded in reverse of the order the graph
    /// reports them. Fails if the start vertex is not a vertex of the graph.
    fn dfs<'a>(&'a self, start: Self::Vertex) -> Result<PreOrderDfs<'a, Self>> {
        ensure!(
            self.vertices().any(|vertex| vertex == start),
            ErrorKind::StartVertexNotFound(format!("{:?}", start))
        );
        Ok(PreOrderDfs::new(self, start))
    }

    /// Returns a lazy breadth first preorder traversal of the graph from the given start vertex.
    ///
    /// Each vertex reachable from the start is yielded exactly once, in order of increasing
    /// edge distance from the start. Fails if the start vertex is not a vertex of the graph.
    fn bfs<'a>(&'a self, start: Self::Vertex) -> Result<PreOrderBfs<'a, Self>> {
        ensure!(
            self.vertices().any(|vertex| vertex == start),
            ErrorKind::StartVertexNotFound(format!("{:?}", start))
        );
        Ok(PreOrderBfs::new(self, start))
    }

    /// Returns the number of connected components of the graph.
    /// The empty graph has zero components.
    fn count_connected_components(&self) -> usize {
        components::count_connected_components(self)
    }

    /// Returns true if the graph consists of exactly one connected component.
    /// The empty graph is not connected, while a single vertex without edges is.
    fn is_connected(&self) -> bool {
        components::is_connected(self)
    }

    /// Returns a lazy iterator over the connected components of the graph.
    /// Every vertex of the graph appears in exactly one component.
    fn connected_components<'a>(&'a self) -> ConnectedComponents<'a, Self> {
        ConnectedComponents::new(self)
    }
}
impl<Graph: StaticGraph> GraphAlgorithms for Graph {}

#[cfg(test)]
mod tests {
    use crate::algo::GraphAlgorithms;
    use crate::error::ErrorKind;
    use crate::implementation::adjacency_list::AdjacencyListGraph;
    use crate::implementation::petgraph_impl;
    use crate::interface::MutableGraph;

    #[test]
    fn test_traversal_methods_yield_the_preorder_sequences() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edges(vec![('a', 'b'), ('a', 'c'), ('b', 'c'), ('b', 'd')]);

        assert_eq!(
            graph.dfs('a').unwrap().collect::<Vec<_>>(),
            vec!['a', 'c', 'b', 'd']
        );
        assert_eq!(
            graph.bfs('a').unwrap().collect::<Vec<_>>(),
            vec!['a', 'b', 'c', 'd']
        );
    }

    #[test]
    fn test_traversal_methods_validate_the_start_vertex() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edge('a', 'b');

        let error = graph.dfs('z').err().unwrap();
        match error.kind() {
            ErrorKind::StartVertexNotFound(vertex) => assert_eq!(vertex, "'z'"),
            other => panic!("unexpected error kind: {:?}", other),
        }

        assert!(graph.bfs('z').is_err());
        assert!(graph.dfs('a').is_ok());
    }

    #[test]
    fn test_connectivity_methods() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edges(vec![('a', 'b'), ('a', 'c'), ('b', 'c'), ('b', 'd')]);
        assert_eq!(graph.count_connected_components(), 1);
        assert!(graph.is_connected());

        graph.add_vertex('e');
        assert_eq!(graph.count_connected_components(), 2);
        assert!(!graph.is_connected());

        let components: Vec<_> = graph.connected_components().collect();
        assert_eq!(components, vec![vec!['a', 'b', 'c', 'd'], vec!['e']]);
    }

    #[test]
    fn test_methods_are_available_on_the_petgraph_storage() {
        let mut graph = petgraph_impl::new();
        graph.add_edges(vec![(1u32, 2), (2, 3), (10, 11)]);

        assert_eq!(
            graph.bfs(1).unwrap().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(graph.count_connected_components(), 2);
        assert!(!graph.is_connected());
        assert_eq!(graph.connected_components().count(), 2);
    }
}
