//! CLI command implementations.

use std::collections::HashMap;

use crate::graph::{Graph, TraversalOrder};
use crate::types::{GraphError, GraphResult, VertexId};

/// Split an `A:B` edge argument into its two labels.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(&str, &str)> {
    match spec.split_once(':') {
        Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    }
}

/// Build a labelled graph from `--vertex` and `--edge` arguments.
///
/// Every label becomes a member vertex; a label repeated across arguments
/// refers to the same vertex.
pub fn load_graph(vertices: &[String], edges: &[String]) -> GraphResult<Graph<String>> {
    let mut graph = Graph::new();
    let mut labels: HashMap<String, VertexId> = HashMap::new();

    let mut intern = |graph: &mut Graph<String>, label: &str| -> GraphResult<VertexId> {
        if let Some(&id) = labels.get(label) {
            return Ok(id);
        }
        let id = graph.create_vertex(label.to_string());
        graph.add_vertex(id)?;
        labels.insert(label.to_string(), id);
        Ok(id)
    };

    for label in vertices {
        intern(&mut graph, label)?;
    }
    for spec in edges {
        let (a, b) = parse_edge_spec(spec)?;
        let a = intern(&mut graph, a)?;
        let b = intern(&mut graph, b)?;
        graph.add_edge(a, b)?;
    }

    log::debug!(
        "loaded graph with {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Resolve a vertex label to its handle.
pub fn resolve_label(graph: &Graph<String>, label: &str) -> GraphResult<VertexId> {
    graph
        .find(|value| value == label)
        .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
}

/// Print the values reachable from `start` in the given order.
pub fn cmd_traverse(
    graph: &Graph<String>,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let start_id = resolve_label(graph, start)?;
    let visited = match order {
        TraversalOrder::DepthFirst => graph.depth_first_search(start_id)?,
        TraversalOrder::BreadthFirst => graph.breadth_first_search(start_id)?,
    };

    if json {
        let out = serde_json::json!({
            "start": start,
            "order": order_name(order),
            "visited": visited,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "{} from {}: {} vertices",
            order_name(order),
            start,
            visited.len()
        );
        let labels: Vec<&str> = visited.iter().map(|s| s.as_str()).collect();
        println!("  {}", labels.join(" -> "));
    }
    Ok(())
}

/// Print the hop count between two labels.
pub fn cmd_distance(graph: &Graph<String>, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let from_id = resolve_label(graph, from)?;
    let to_id = resolve_label(graph, to)?;
    let distance = graph.distance_of_shortest_path(from_id, to_id)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "distance": distance})
        );
    } else {
        println!("Distance {} -> {}: {}", from, to, distance);
    }
    Ok(())
}

/// Print vertex and edge counts plus each vertex's neighbors.
pub fn cmd_info(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let mut rows = Vec::with_capacity(graph.node_count());
    for id in graph.nodes() {
        let label = graph.value(id)?;
        let neighbors = graph
            .neighbors(id)?
            .map(|n| graph.value(n).map(String::as_str))
            .collect::<GraphResult<Vec<&str>>>()?;
        rows.push((id, label.as_str(), neighbors));
    }

    if json {
        let vertices: Vec<serde_json::Value> = rows
            .iter()
            .map(|(id, label, neighbors)| {
                serde_json::json!({
                    "id": id,
                    "label": label,
                    "degree": neighbors.len(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        let info = serde_json::json!({
            "vertices": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": vertices,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        for (_, label, neighbors) in &rows {
            println!("  {} ({}): {}", label, neighbors.len(), neighbors.join(", "));
        }
    }
    Ok(())
}

fn order_name(order: TraversalOrder) -> &'static str {
    match order {
        TraversalOrder::DepthFirst => "dfs",
        TraversalOrder::BreadthFirst => "bfs",
    }
}
