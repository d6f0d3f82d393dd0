//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices added through the builder are registered members. Edges are
/// recorded and validated when [`build`](Self::build) runs.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            edges: Vec::new(),
        }
    }

    /// Create a member vertex holding `value`.
    pub fn add(&mut self, value: T) -> VertexId {
        self.graph.insert_vertex(value)
    }

    /// Create a member vertex for each value, returning handles in input order.
    pub fn add_all<I>(&mut self, values: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.add(v)).collect()
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Link consecutive handles into a path.
    pub fn chain(&mut self, ids: &[VertexId]) -> &mut Self {
        for pair in ids.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = self.graph;
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
