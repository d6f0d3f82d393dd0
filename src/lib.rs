//! adjacency-graph — an in-memory undirected graph.
//!
//! Vertices carry caller-chosen values and are addressed by stable handles.
//! The graph supports vertex/edge mutation, depth-first and breadth-first
//! traversal, and a breadth-first hop-count distance query.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
