use crate::algo::queue::BidirectedQueue;
use crate::interface::{GraphBase, StaticGraph};
use std::collections::{HashSet, VecDeque};
use std::marker::PhantomData;

/// A depth first preorder traversal backed by a `VecDeque`.
///
/// Vertices enter the frontier in the order the graph reports them and leave it last in first
/// out, so the traversal descends into the last reported neighbor of a vertex first.
pub type PreOrderDfs<'a, Graph> =
    PreOrderTraversal<'a, Graph, DfsQueueStrategy, VecDeque<<Graph as GraphBase>::Vertex>>;

/// A breadth first preorder traversal backed by a `VecDeque`.
///
/// Vertices are visited in order of increasing edge distance from the start vertex.
pub type PreOrderBfs<'a, Graph> =
    PreOrderTraversal<'a, Graph, BfsQueueStrategy, VecDeque<<Graph as GraphBase>::Vertex>>;

/// A generic preorder graph traversal.
/// The traversal is generic over the graph implementation,
/// as well as the order of processing (`QueueStrategy`) and the queue implementation itself (`Queue`).
///
/// Vertices are marked visited when they leave the frontier, not when they enter it, so the
/// frontier may hold the same vertex multiple times. Each vertex is yielded at most once.
/// The traversal is lazy and borrows the graph, which therefore cannot be mutated before the
/// traversal is dropped.
pub struct PreOrderTraversal<
    'a,
    Graph: GraphBase,
    QueueStrategy,
    Queue: BidirectedQueue<Graph::Vertex>,
> {
    graph: &'a Graph,
    queue: Queue,
    visited: HashSet<Graph::Vertex>,
    queue_strategy: PhantomData<QueueStrategy>,
}

impl<
        'a,
        Graph: StaticGraph,
        QueueStrategy: TraversalQueueStrategy<Graph, Queue>,
        Queue: BidirectedQueue<Graph::Vertex>,
    > PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    ///
    /// The start vertex should be a vertex of the graph. If it is not, the traversal yields the
    /// start vertex and nothing else, since unknown vertices have no neighbors. The checked
    /// entry points in `GraphAlgorithms` reject such starts with an error instead.
    pub fn new(graph: &'a Graph, start: Graph::Vertex) -> Self {
        let mut queue = Queue::default();
        QueueStrategy::push(&mut queue, start);
        Self {
            graph,
            queue,
            visited: HashSet::new(),
            queue_strategy: PhantomData,
        }
    }

    /// Resets the traversal to start from the given vertex, reusing the allocations of the
    /// frontier and the visited set.
    pub fn reset(&mut self, start: Graph::Vertex) {
        self.queue.clear();
        QueueStrategy::push(&mut self.queue, start);
        self.visited.clear();
    }
}

impl<
        'a,
        Graph: StaticGraph,
        QueueStrategy: TraversalQueueStrategy<Graph, Queue>,
        Queue: BidirectedQueue<Graph::Vertex>,
    > Iterator for PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    type Item = Graph::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = QueueStrategy::pop(&mut self.queue) {
            if self.visited.contains(&vertex) {
                continue;
            }
            self.visited.insert(vertex.clone());

            // Visited neighbors are pushed as well and skipped when they leave the frontier.
            for neighbor in self.graph.neighbors(&vertex) {
                QueueStrategy::push(&mut self.queue, neighbor);
            }

            return Some(vertex);
        }

        None
    }
}

/// A type that defines the order of vertex processing in a traversal, i.e. queue-based or stack-based.
pub trait TraversalQueueStrategy<Graph: GraphBase, Queue: BidirectedQueue<Graph::Vertex>> {
    /// Insert a vertex into the queue.
    fn push(queue: &mut Queue, vertex: Graph::Vertex);
    /// Remove and return a vertex from the queue.
    fn pop(queue: &mut Queue) -> Option<Graph::Vertex>;
}

/// A queue strategy that works by the first-in first-out principle.
pub struct BfsQueueStrategy;

impl<Graph: GraphBase, Queue: BidirectedQueue<Graph::Vertex>>
    TraversalQueueStrategy<Graph, Queue> for BfsQueueStrategy
{
    fn push(queue: &mut Queue, vertex: Graph::Vertex) {
        queue.push_back(vertex)
    }

    fn pop(queue: &mut Queue) -> Option<Graph::Vertex> {
        queue.pop_front()
    }
}

/// A queue strategy that works by the last-in first-out principle.
pub struct DfsQueueStrategy;

impl<Graph: GraphBase, Queue: BidirectedQueue<Graph::Vertex>>
    TraversalQueueStrategy<Graph, Queue> for DfsQueueStrategy
{
    fn push(queue: &mut Queue, vertex: Graph::Vertex) {
        queue.push_back(vertex)
    }

    fn pop(queue: &mut Queue) -> Option<Graph::Vertex> {
        queue.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::traversal::{DfsQueueStrategy, PreOrderBfs, PreOrderDfs, PreOrderTraversal};
    use crate::implementation::adjacency_list::AdjacencyListGraph;
    use crate::implementation::petgraph_impl;
    use crate::interface::MutableGraph;
    use std::collections::LinkedList;

    fn diamond_graph() -> AdjacencyListGraph<char> {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edges(vec![('a', 'b'), ('a', 'c'), ('b', 'c'), ('b', 'd')]);
        graph
    }

    #[test]
    fn test_dfs_descends_into_the_last_reported_neighbor_first() {
        let graph = diamond_graph();
        let order: Vec<_> = PreOrderDfs::new(&graph, 'a').collect();
        assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_bfs_visits_in_distance_order() {
        let graph = diamond_graph();
        let order: Vec<_> = PreOrderBfs::new(&graph, 'a').collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_traversal_orders_are_identical_on_the_petgraph_storage() {
        let mut graph = petgraph_impl::new();
        graph.add_edges(vec![('a', 'b'), ('a', 'c'), ('b', 'c'), ('b', 'd')]);
        assert_eq!(
            PreOrderDfs::new(&graph, 'a').collect::<Vec<_>>(),
            vec!['a', 'c', 'b', 'd']
        );
        assert_eq!(
            PreOrderBfs::new(&graph, 'a').collect::<Vec<_>>(),
            vec!['a', 'b', 'c', 'd']
        );
    }

    #[test]
    fn test_each_vertex_is_yielded_at_most_once() {
        let mut graph = AdjacencyListGraph::new();
        // A cycle with a self-loop and a parallel edge.
        graph.add_edges(vec![('a', 'b'), ('b', 'c'), ('c', 'a'), ('b', 'b'), ('a', 'b')]);

        let mut order: Vec<_> = PreOrderBfs::new(&graph, 'a').collect();
        order.sort_unstable();
        assert_eq!(order, vec!['a', 'b', 'c']);

        let mut order: Vec<_> = PreOrderDfs::new(&graph, 'a').collect();
        order.sort_unstable();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_traversal_covers_only_the_component_of_the_start_vertex() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edges(vec![('a', 'b'), ('c', 'd')]);
        assert_eq!(PreOrderDfs::new(&graph, 'a').collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(PreOrderBfs::new(&graph, 'c').collect::<Vec<_>>(), vec!['c', 'd']);
    }

    #[test]
    fn test_traversal_from_an_isolated_vertex_yields_only_that_vertex() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edge('b', 'c');
        graph.add_vertex('a');
        assert_eq!(PreOrderDfs::new(&graph, 'a').collect::<Vec<_>>(), vec!['a']);
    }

    #[test]
    fn test_traversal_from_an_unknown_vertex_yields_only_that_vertex() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edge('b', 'c');
        assert_eq!(PreOrderBfs::new(&graph, 'z').collect::<Vec<_>>(), vec!['z']);
    }

    #[test]
    fn test_reset_restarts_the_traversal() {
        let graph = diamond_graph();
        let mut traversal = PreOrderDfs::new(&graph, 'a');
        assert_eq!(traversal.by_ref().collect::<Vec<_>>(), vec!['a', 'c', 'b', 'd']);

        traversal.reset('d');
        assert_eq!(traversal.collect::<Vec<_>>(), vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_linked_list_frontier_produces_the_same_order() {
        let graph = diamond_graph();
        let order: Vec<_> =
            PreOrderTraversal::<_, DfsQueueStrategy, LinkedList<_>>::new(&graph, 'a').collect();
        assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_partial_consumption_releases_the_graph() {
        let mut graph = diamond_graph();
        let first_two: Vec<_> = PreOrderBfs::new(&graph, 'a').take(2).collect();
        assert_eq!(first_two, vec!['a', 'b']);

        // The traversal is dropped, so the graph can be mutated again.
        graph.add_edge('d', 'e');
        assert_eq!(
            PreOrderBfs::new(&graph, 'a').collect::<Vec<_>>(),
            vec!['a', 'b', 'c', 'd', 'e']
        );
    }
}
