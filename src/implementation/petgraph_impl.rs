use crate::interface::{DynamicGraph, Edge, GraphBase, MutableGraph, NavigableGraph};
use petgraph::graphmap::{AllEdges, Neighbors, Nodes, UnGraphMap};
use petgraph::Undirected;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Map;

pub use petgraph;

/// Creates a new empty graph backed by a petgraph `UnGraphMap`.
///
/// Vertices and edges are enumerated in insertion order. Unlike the `AdjacencyListGraph` storage,
/// this storage deduplicates parallel edges, and edge endpoints are reported in their canonical
/// order rather than the order they were passed in.
pub fn new<Vertex: 'static + Copy + Ord + Hash + Debug>(
) -> impl DynamicGraph<Vertex = Vertex> + Default + Clone {
    UnGraphMap::<Vertex, ()>::default()
}

impl<Vertex: Copy + Ord + Hash + Debug, EdgeData> GraphBase for UnGraphMap<Vertex, EdgeData> {
    type Vertex = Vertex;
}

type PetgraphEdgeTranslator<'a, Vertex, EdgeData> = Map<
    AllEdges<'a, Vertex, EdgeData, Undirected>,
    fn((Vertex, Vertex, &'a EdgeData)) -> Edge<Vertex>,
>;

impl<'a, Vertex: 'a + Copy + Ord + Hash + Debug, EdgeData: 'a> NavigableGraph<'a>
    for UnGraphMap<Vertex, EdgeData>
{
    type VertexIterator = Nodes<'a, Vertex>;
    type EdgeIterator = PetgraphEdgeTranslator<'a, Vertex, EdgeData>;
    type NeighborIterator = Neighbors<'a, Vertex, Undirected>;

    fn vertices(&'a self) -> Self::VertexIterator {
        self.nodes()
    }

    fn edges(&'a self) -> Self::EdgeIterator {
        self.all_edges().map(|(from, to, _)| Edge::new(from, to))
    }

    fn neighbors(&'a self, vertex: &Self::Vertex) -> Self::NeighborIterator {
        self.neighbors(*vertex)
    }
}

impl<Vertex: Copy + Ord + Hash + Debug, EdgeData: Default> MutableGraph
    for UnGraphMap<Vertex, EdgeData>
{
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool {
        let is_new = !self.contains_node(vertex);
        self.add_node(vertex);
        is_new
    }

    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex) {
        self.add_edge(from, to, EdgeData::default());
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
