use crate::interface::{Edge, GraphBase, MutableGraph, NavigableGraph, VertexType};
use std::collections::HashMap;
use std::iter::Cloned;
use std::slice::Iter;

/// An unweighted graph stored as a hash-map adjacency list.
///
/// Vertices and edges are enumerated in insertion order, so all query results over this storage
/// are deterministic. The storage is a thin data holder: duplicate parallel edges are recorded as
/// given rather than deduplicated (the traversal algorithms absorb them through their visited
/// sets), and a self-loop is recorded once, contributing a single neighbor entry. Neighbor queries
/// for values that are not vertices of the graph answer with an empty sequence.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<Vertex> {
    vertices: Vec<Vertex>,
    adjacency: HashMap<Vertex, Vec<Vertex>>,
    edges: Vec<Edge<Vertex>>,
}

impl<Vertex: VertexType> AdjacencyListGraph<Vertex> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of recorded edges in the graph, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the given value is a vertex of the graph.
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

impl<Vertex: VertexType> Default for AdjacencyListGraph<Vertex> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<Vertex: VertexType> GraphBase for AdjacencyListGraph<Vertex> {
    type Vertex = Vertex;
}

impl<'a, Vertex: 'a + VertexType> NavigableGraph<'a> for AdjacencyListGraph<Vertex> {
    type VertexIterator = Cloned<Iter<'a, Vertex>>;
    type EdgeIterator = Cloned<Iter<'a, Edge<Vertex>>>;
    type NeighborIterator = Cloned<Iter<'a, Vertex>>;

    fn vertices(&'a self) -> Self::VertexIterator {
        self.vertices.iter().cloned()
    }

    fn edges(&'a self) -> Self::EdgeIterator {
        self.edges.iter().cloned()
    }

    fn neighbors(&'a self, vertex: &Self::Vertex) -> Self::NeighborIterator {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .cloned()
    }
}

impl<Vertex: VertexType> MutableGraph for AdjacencyListGraph<Vertex> {
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.vertices.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        self.adjacency
            .get_mut(&from)
            .expect("endpoint was inserted above")
            .push(to.clone());
        // A self-loop gets a single neighbor entry.
        if from != to {
            self.adjacency
                .get_mut(&to)
                .expect("endpoint was inserted above")
                .push(from.clone());
        }
        self.edges.push(Edge::new(from, to));
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        self.edges.clear();
    }
}
