//! Vertex handles and the vertex record stored in the graph arena.

use std::fmt;

use serde::{Serialize, Serializer};

/// Stable handle to a vertex inside one [`Graph`](crate::graph::Graph).
///
/// A handle is an arena index stamped with the id of the graph that created
/// it, so handles from another graph are rejected. Handles stay valid for the
/// lifetime of the graph, including after the vertex has been removed from
/// the graph's population. Serializes as the bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl VertexId {
    /// The arena index behind this handle.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}

/// A value holder together with its adjacency set.
///
/// The adjacency set keeps unique membership and iterates neighbors in the
/// order they were linked. It is a `Vec` with linear membership checks, so
/// linking is O(degree) and removing a vertex is O(degree²) on its neighbors.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    value: T,
    adjacent: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: Vec::new(),
        }
    }

    /// The payload carried by this vertex.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload. Adjacency stays under graph control.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbors in link order.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Number of neighbors (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` is in this vertex's adjacency set.
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Whether the vertex has no neighbors.
    pub fn is_isolated(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Insert `other`; returns false if it was already present.
    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        if self.is_adjacent(other) {
            return false;
        }
        self.adjacent.push(other);
        true
    }

    /// Remove `other`; returns false if it was not present.
    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        let initial_len = self.adjacent.len();
        self.adjacent.retain(|&n| n != other);
        self.adjacent.len() != initial_len
    }
}
