//! Core graph structure — a vertex arena plus the set of member vertices.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::traversal::{self, TraversalOrder};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// An undirected graph whose vertices carry values of type `T`.
///
/// Vertices live in an arena and are addressed by [`VertexId`]. Membership in
/// the graph's population (`nodes`) is tracked separately from the arena, so a
/// removed vertex keeps a valid, isolated handle. Edges may connect vertices
/// that are not members; callers decide when to register them.
///
/// A clone keeps the original's stamp, so handles remain usable on both.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Stamp carried by every handle this graph creates.
    id: u64,
    /// Every vertex ever created in this graph, indexed by handle.
    vertices: Vec<Vertex<T>>,
    /// The vertex population.
    nodes: BTreeSet<VertexId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            nodes: BTreeSet::new(),
        }
    }

    /// Allocate a vertex holding `value`. The vertex is not yet a member.
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId {
            graph: self.id,
            index: self.vertices.len(),
        };
        self.vertices.push(Vertex::new(value));
        log::trace!("created vertex {}", id);
        id
    }

    /// Allocate a vertex and link it to each of `neighbors`.
    ///
    /// Initial neighbors are linked in both directions so adjacency stays
    /// symmetric. Fails without allocating if any neighbor is unknown.
    pub fn create_vertex_with_adjacent<I>(
        &mut self,
        value: T,
        neighbors: I,
    ) -> GraphResult<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let neighbors: Vec<VertexId> = neighbors.into_iter().collect();
        for &n in &neighbors {
            self.check(n)?;
        }
        let id = self.create_vertex(value);
        for n in neighbors {
            self.link_unchecked(id, n);
        }
        Ok(id)
    }

    /// Number of member vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges across the whole arena. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for (i, v) in self.vertices.iter().enumerate() {
            for n in v.adjacent() {
                if n.index == i {
                    loops += 1;
                } else {
                    ends += 1;
                }
            }
        }
        loops + ends / 2
    }

    /// Number of vertices ever created, members or not.
    pub fn arena_len(&self) -> usize {
        self.vertices.len()
    }

    /// Member handles in handle order.
    pub fn nodes(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    /// Whether `id` is a member of the graph.
    pub fn contains(&self, id: VertexId) -> bool {
        self.nodes.contains(&id)
    }

    /// Get a vertex by handle (immutable).
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        if id.graph != self.id {
            return None;
        }
        self.vertices.get(id.index)
    }

    /// Get a vertex by handle (mutable). Only the value can be changed through it.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        if id.graph != self.id {
            return None;
        }
        self.vertices.get_mut(id.index)
    }

    /// The value held by `id`.
    pub fn value(&self, id: VertexId) -> GraphResult<&T> {
        self.get(id).map(Vertex::value)
    }

    /// Neighbors of `id` in link order.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        self.get(id).map(Vertex::adjacent)
    }

    /// Whether `a` and `b` are linked. Unknown handles are never linked.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).is_some_and(|v| v.is_adjacent(b))
    }

    /// First member whose value satisfies `predicate`, in handle order.
    pub fn find<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(&T) -> bool,
    {
        self.nodes
            .iter()
            .copied()
            .find(|id| predicate(self.vertices[id.index].value()))
    }

    /// First member whose value equals `value`.
    pub fn find_by_value(&self, value: &T) -> Option<VertexId>
    where
        T: PartialEq,
    {
        self.find(|v| v == value)
    }

    /// Add a vertex to the population. Adding a member again has no effect.
    pub fn add_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        self.check(id)?;
        if self.nodes.insert(id) {
            log::debug!("added vertex {}", id);
        }
        Ok(())
    }

    /// Add every vertex in `ids`. Nothing is added unless all handles are known.
    pub fn add_vertices<I>(&mut self, ids: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let ids: Vec<VertexId> = ids.into_iter().collect();
        for &id in &ids {
            self.check(id)?;
        }
        for id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// Link `a` and `b` in both directions. Self-loops and repeated edges are allowed;
    /// a repeated edge has no additional effect.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        self.check(a)?;
        self.check(b)?;
        self.link_unchecked(a, b);
        log::debug!("added edge {} - {}", a, b);
        Ok(())
    }

    /// Unlink `a` and `b` in both directions. Missing edges are ignored.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        self.check(a)?;
        self.check(b)?;
        let removed = self.vertices[a.index].unlink(b);
        self.vertices[b.index].unlink(a);
        if removed {
            log::debug!("removed edge {} - {}", a, b);
        }
        Ok(())
    }

    /// Remove every edge incident to `id`, then drop it from the population.
    ///
    /// The handle stays valid and refers to an isolated vertex afterwards.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        self.check(id)?;
        let neighbors: Vec<VertexId> = self.vertices[id.index].adjacent().collect();
        for n in neighbors {
            self.remove_edge(n, id)?;
        }
        self.nodes.remove(&id);
        log::debug!("removed vertex {}", id);
        Ok(())
    }

    /// Handles reachable from `start`, in depth-first (LIFO) visit order.
    pub fn depth_first_order(&self, start: VertexId) -> GraphResult<Vec<VertexId>> {
        traversal::traverse(self, start, TraversalOrder::DepthFirst)
    }

    /// Handles reachable from `start`, in breadth-first (FIFO) visit order.
    pub fn breadth_first_order(&self, start: VertexId) -> GraphResult<Vec<VertexId>> {
        traversal::traverse(self, start, TraversalOrder::BreadthFirst)
    }

    /// Values reachable from `start`, in depth-first visit order.
    pub fn depth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        Ok(self.values_of(self.depth_first_order(start)?))
    }

    /// Values reachable from `start`, in breadth-first visit order.
    pub fn breadth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        Ok(self.values_of(self.breadth_first_order(start)?))
    }

    /// Minimum number of edges between `start` and `end`.
    ///
    /// Returns `0` when `start == end` and [`GraphError::Unreachable`] when
    /// `end` lies outside the connected component of `start`.
    pub fn distance_of_shortest_path(&self, start: VertexId, end: VertexId) -> GraphResult<usize> {
        traversal::shortest_distance(self, start, end)
    }

    /// Create a vertex and register it as a member in one step.
    pub(crate) fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(value);
        self.nodes.insert(id);
        id
    }

    /// Resolve a handle or fail with [`GraphError::UnknownVertex`].
    pub(crate) fn get(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.vertex(id).ok_or(GraphError::UnknownVertex(id))
    }

    fn check(&self, id: VertexId) -> GraphResult<()> {
        self.get(id).map(|_| ())
    }

    fn link_unchecked(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a.index].link(b);
        self.vertices[b.index].link(a);
    }

    fn values_of(&self, ids: Vec<VertexId>) -> Vec<&T> {
        ids.into_iter().map(|id| self.vertices[id.index].value()).collect()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
