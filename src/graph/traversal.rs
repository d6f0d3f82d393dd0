//! Graph traversal algorithms (DFS, BFS, hop-count distance).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// Exploration order for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Last in, first out.
    DepthFirst,
    /// First in, first out (level order).
    BreadthFirst,
}

/// Walk the connected component of `start` and return handles in visit order.
///
/// Neighbors are marked seen when they are pushed, not when they are visited,
/// so a vertex is queued at most once however many neighbors it shares.
pub fn traverse<T>(
    graph: &Graph<T>,
    start: VertexId,
    order: TraversalOrder,
) -> GraphResult<Vec<VertexId>> {
    graph.get(start)?;

    let mut seen: HashSet<VertexId> = HashSet::new();
    let mut pending: VecDeque<VertexId> = VecDeque::new();
    let mut visited_order: Vec<VertexId> = Vec::new();

    seen.insert(start);
    pending.push_back(start);

    loop {
        let next = match order {
            TraversalOrder::DepthFirst => pending.pop_back(),
            TraversalOrder::BreadthFirst => pending.pop_front(),
        };
        let Some(current) = next else { break };
        visited_order.push(current);

        for neighbor in graph.get(current)?.adjacent() {
            if seen.insert(neighbor) {
                pending.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "{:?} traversal from {} visited {} vertices",
        order,
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// Breadth-first hop count from `start` to `end`.
pub fn shortest_distance<T>(
    graph: &Graph<T>,
    start: VertexId,
    end: VertexId,
) -> GraphResult<usize> {
    graph.get(start)?;
    graph.get(end)?;

    let mut seen: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

    seen.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if current == end {
            log::trace!("distance {} -> {} = {}", start, end, depth);
            return Ok(depth);
        }
        for neighbor in graph.get(current)?.adjacent() {
            if seen.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Err(GraphError::Unreachable {
        from: start,
        to: end,
    })
}
