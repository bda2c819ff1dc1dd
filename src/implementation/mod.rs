/// A graph implementation based on a hash-map adjacency list with insertion-ordered enumeration.
pub mod adjacency_list;
/// A graph implementation based on the `petgraph` crate.
pub mod petgraph_impl;
