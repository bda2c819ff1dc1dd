//! The graph traits.
//!
//! The traits are split up by access type:
//!  - immutable reference that must outlive the returned iterators (`NavigableGraph`)
//!  - mutable reference (`MutableGraph`)
//!
//! `NavigableGraph` is the capability consumed by every algorithm in this crate. It deliberately
//! requires nothing beyond enumerating the vertices, enumerating the edges and querying the
//! neighbors of a vertex. Anything else a storage type offers (counts, containment queries) is an
//! implementation detail outside the algorithmic core.

use std::fmt::Debug;
use std::hash::Hash;

/// A vertex value.
///
/// Vertices are opaque values without identity beyond equality: they are compared and deduplicated
/// by value, hashed into visited sets, cloned when a traversal yields them while retaining them in
/// its visited set, and rendered by `Debug` in errors and assertions.
///
/// This trait is implemented automatically for every type satisfying its bounds.
pub trait VertexType: Eq + Hash + Clone + Debug {}
impl<T: Eq + Hash + Clone + Debug> VertexType for T {}

/// Contains the associated vertex type of a graph.
pub trait GraphBase {
    /// The value type identifying a vertex of the graph.
    type Vertex: VertexType;
}

/// A graph that can be navigated, i.e. that can enumerate its vertices and edges and iterate over
/// the neighbors of its vertices.
///
/// This is the complete read capability of the crate: an unweighted graph with edges understood as
/// unordered vertex pairs. An edge `(u, v)` must make `v` appear among the neighbors of `u` and
/// vice versa; the algorithms rely on that symmetry but do not enforce it, so a capability
/// violating it silently loses the undirected-graph semantics of the connectivity results.
///
/// The iterators yield vertices by value. Whether a neighbor query for a value that is not a
/// vertex of the graph answers with an empty sequence or fails is up to the implementation and
/// must be documented by it; both storage types in this crate answer with an empty sequence.
pub trait NavigableGraph<'a>: GraphBase + Sized {
    /// The iterator type used to iterate over the vertices of the graph.
    type VertexIterator: Iterator<Item = Self::Vertex>;
    /// The iterator type used to iterate over the edges of the graph.
    type EdgeIterator: Iterator<Item = Edge<Self::Vertex>>;
    /// The iterator type used to iterate over the neighbors of a vertex.
    type NeighborIterator: Iterator<Item = Self::Vertex>;

    /// Returns an iterator over the vertices of the graph, in the enumeration order of the
    /// storage. The order determines traversal roots and export order and must be deterministic
    /// for a given graph.
    fn vertices(&'a self) -> Self::VertexIterator;

    /// Returns an iterator over the edges of the graph as unordered vertex pairs, in the
    /// enumeration order of the storage.
    fn edges(&'a self) -> Self::EdgeIterator;

    /// Returns an iterator over the neighbors of the given vertex, in the order the storage
    /// reports them.
    fn neighbors(&'a self, vertex: &Self::Vertex) -> Self::NeighborIterator;
}

/// A graph that allows adding vertices and edges.
///
/// This is the construction surface used by drivers, tests and the predefined graph builders; the
/// algorithms themselves never mutate a graph.
pub trait MutableGraph: GraphBase {
    /// Adds a vertex to the graph.
    /// Returns true if the vertex was not present before, and false otherwise.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds the edge `(from, to)` to the graph, inserting missing endpoints as vertices.
    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex);

    /// Adds all edges of the given source to the graph, inserting missing endpoints as vertices.
    fn add_edges<EdgeSource: IntoIterator<Item = (Self::Vertex, Self::Vertex)>>(
        &mut self,
        edges: EdgeSource,
    ) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    /// Removes all vertices and edges from the graph.
    fn clear(&mut self);
}

/// A graph implementing all graph traits that do not require mutable access.
/// This is a useful shortcut for generic type bounds when the graph should not be mutated.
pub trait StaticGraph: for<'a> NavigableGraph<'a> {}
impl<T: for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// A graph implementing all graph traits, including those requiring mutable access.
/// This is a useful shortcut for generic type bounds when the graph should be mutated.
pub trait DynamicGraph: StaticGraph + MutableGraph {}
impl<T: StaticGraph + MutableGraph> DynamicGraph for T {}

/// An edge represented as a pair of vertices.
///
/// Edges are unordered: the field names record the order the pair was handed to the storage, not a
/// direction.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Edge<Vertex> {
    /// The vertex the edge was recorded from.
    pub from: Vertex,
    /// The vertex the edge was recorded to.
    pub to: Vertex,
}

impl<Vertex> Edge<Vertex> {
    /// Creates a new edge over the given vertex pair.
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }
}
