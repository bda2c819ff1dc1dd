/// Functions for writing graphs in the DOT format.
pub mod dot;
