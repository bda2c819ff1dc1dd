error_chain! {
    foreign_links {
        Io(std::io::Error)
        /// An error thrown while writing a graph to an output stream.
        ;
    }

    errors {
        /// The start vertex handed to a checked traversal is not a vertex of the graph.
        StartVertexNotFound(vertex: String) {
            description("start vertex not found in the graph")
            display("start vertex not found in the graph: {}", vertex)
        }
    }
}
