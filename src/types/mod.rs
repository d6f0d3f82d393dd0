//! All data types for the adjacency-graph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};
