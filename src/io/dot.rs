use crate::error::Result;
use crate::interface::StaticGraph;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the graph in DOT format, ignoring everything but the vertex and edge sets.
///
/// ```text
/// graph {
///     <vertex>;
///     <from> -- <to>;
/// }
/// ```
///
/// The vertex line is repeated for each vertex and the edge line for each edge, each indented by
/// a single tab. Vertices and edges appear in the enumeration order of the graph without any
/// canonicalization, so the output is deterministic exactly when the graph's enumeration is.
pub fn write_dot<Graph: StaticGraph, Writer: Write>(
    graph: &Graph,
    writer: &mut Writer,
) -> Result<()>
where
    Graph::Vertex: Display,
{
    writeln!(writer, "graph {{")?;
    for vertex in graph.vertices() {
        writeln!(writer, "\t{};", vertex)?;
    }
    for edge in graph.edges() {
        writeln!(writer, "\t{} -- {};", edge.from, edge.to)?;
    }
    writeln!(writer, "}}")?;

    Ok(())
}

/// Write the graph in DOT format to a file at the given path.
pub fn write_dot_to_file<Graph: StaticGraph, P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()>
where
    Graph::Vertex: Display,
{
    info!("Writing graph in DOT format to {:?}", path.as_ref());
    write_dot(graph, &mut BufWriter::new(File::create(path)?))
}

/// Render the graph in DOT format into a string.
pub fn to_dot_string<Graph: StaticGraph>(graph: &Graph) -> Result<String>
where
    Graph::Vertex: Display,
{
    let mut dot = Vec::new();
    write_dot(graph, &mut dot)?;
    Ok(String::from_utf8(dot).expect("DOT output is always valid UTF-8"))
}
