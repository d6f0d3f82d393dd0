//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use traversal::{shortest_distance, traverse, TraversalOrder};
pub use undirected_graph::Graph;
