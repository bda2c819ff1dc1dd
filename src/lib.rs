//! A crate providing traversal and connectivity algorithms over abstract unweighted graphs.
//!
//! Graphs are accessed through the traits in the `interface` module, which require nothing beyond
//! enumerating vertices, enumerating edges and querying the neighbors of a vertex. The algorithms
//! in the `algo` module are generic over any such graph, and the `implementation` module offers
//! two interchangeable storage types to run them on. Graphs can be rendered in DOT notation using
//! the `io` module.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// The graph algorithms, i.e. preorder depth and breadth first traversals as well as connectivity analysis.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// Concrete graph storage types implementing the graph traits.
pub mod implementation;
/// The graph traits.
pub mod interface;
/// Contains functions for writing graphs in text formats.
pub mod io;
