use crate::interface::DynamicGraph;
use num_traits::NumCast;
use num_traits::PrimInt;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;

/// Adds a path with the given amount of vertices to the given graph.
/// The vertices are the integers `0..vertex_amount` in order, so the graph should be empty.
pub fn create_path_graph<Graph: DynamicGraph>(graph: &mut Graph, vertex_amount: usize)
where
    Graph::Vertex: PrimInt,
{
    for i in 0..vertex_amount {
        graph.add_vertex(NumCast::from(i).unwrap());
    }
    for i in 1..vertex_amount {
        graph.add_edge(NumCast::from(i - 1).unwrap(), NumCast::from(i).unwrap());
    }
}

/// Adds a circle with the given amount of vertices to the given graph.
/// The vertices are the integers `0..vertex_amount` in order, so the graph should be empty.
/// A circle with a single vertex consists of that vertex and a self-loop.
pub fn create_circle_graph<Graph: DynamicGraph>(graph: &mut Graph, vertex_amount: usize)
where
    Graph::Vertex: PrimInt,
{
    if vertex_amount == 0 {
        return;
    }

    create_path_graph(graph, vertex_amount);
    graph.add_edge(
        NumCast::from(vertex_amount - 1).unwrap(),
        NumCast::from(0usize).unwrap(),
    );
}

/// Adds a binary tree to the given graph.
/// The first added vertex is the root of the tree, and the vertices are numbered in insertion order.
/// A negative depth adds no vertices to the graph, a depth of 0 just the root, a depth of 1 the root and its children, and so on.
pub fn create_binary_tree<Graph: DynamicGraph>(
    graph: &mut Graph,
    depth: i32,
) -> Option<Graph::Vertex>
where
    Graph::Vertex: PrimInt,
{
    if depth < 0 {
        return None;
    }

    let root = NumCast::from(0usize).unwrap();
    graph.add_vertex(root);
    let mut vertex_amount = 1;
    create_binary_tree_recursively(graph, depth - 1, root, &mut vertex_amount);
    Some(root)
}

fn create_binary_tree_recursively<Graph: DynamicGraph>(
    graph: &mut Graph,
    depth: i32,
    root: Graph::Vertex,
    vertex_amount: &mut usize,
) where
    Graph::Vertex: PrimInt,
{
    if depth < 0 {
        return;
    }

    let left = NumCast::from(*vertex_amount).unwrap();
    let right = NumCast::from(*vertex_amount + 1).unwrap();
    *vertex_amount += 2;
    graph.add_edge(root, left);
    graph.add_edge(root, right);
    create_binary_tree_recursively(graph, depth - 1, left, vertex_amount);
    create_binary_tree_recursively(graph, depth - 1, right, vertex_amount);
}

/// Computes the amount of edges in a random graph with n vertices, given the edge factor c.
pub fn compute_edge_amount_from_n_and_c(n: usize, c: f64) -> usize {
    let vertex_amount_f64 = n as f64;
    let target_edge_amount = c
        * vertex_amount_f64
        * (vertex_amount_f64.ln().max(1.0) + vertex_amount_f64.ln().ln().max(0.0));
    target_edge_amount.round() as usize
}

/// Adds a random graph with the given amount of vertices to the given graph.
/// Assumes that the graph is empty.
/// The amount of edges will be `c * n * (log(n) + log(log(n)))`, where `n` is the amount of vertices.
/// Self-loops and parallel edges are not created.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    vertex_amount: usize,
    c: f64,
    random: &mut Random,
) where
    Graph::Vertex: PrimInt,
{
    if vertex_amount == 0 {
        return;
    }

    for i in 0..vertex_amount {
        graph.add_vertex(NumCast::from(i).unwrap());
    }

    let target_edge_amount = compute_edge_amount_from_n_and_c(vertex_amount, c);
    debug_assert!(
        target_edge_amount >= vertex_amount
            && target_edge_amount <= vertex_amount * (vertex_amount - 1) / 2
    );

    let mut inserted_edges = HashSet::new();
    while inserted_edges.len() < target_edge_amount {
        let n1 = graph.vertices().choose(random).unwrap();
        let n2 = graph.vertices().choose(random).unwrap();

        if n1 == n2 {
            continue;
        }

        let edge_key = if n1 < n2 { (n1, n2) } else { (n2, n1) };
        if inserted_edges.insert(edge_key) {
            graph.add_edge(n1, n2);
        }
    }
}
