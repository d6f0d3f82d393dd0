//! Criterion benchmarks for adjacency-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjacency_graph::graph::Graph;
use adjacency_graph::types::VertexId;

/// Build a random graph through add_vertex/add_edge.
fn make_graph(node_count: usize, edges_per_node: usize) -> (Graph<usize>, Vec<VertexId>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..node_count).map(|i| graph.create_vertex(i)).collect();
    graph.add_vertices(ids.iter().copied()).unwrap();

    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                graph.add_edge(ids[i], ids[target]).unwrap();
            }
        }
    }

    (graph, ids)
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, ids) = make_graph(10_000, 3);
    let mut rng = rand::thread_rng();

    c.bench_function("add_edge_to_10k", |b| {
        b.iter(|| {
            let a = ids[rng.gen_range(0..ids.len())];
            let t = ids[rng.gen_range(0..ids.len())];
            let _ = graph.add_edge(a, t);
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);

    c.bench_function("remove_vertex_from_10k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                let _ = g.remove_vertex(ids[42]);
                g
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_depth_first_search(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);

    c.bench_function("dfs_10k", |b| {
        b.iter(|| black_box(graph.depth_first_search(ids[0]).unwrap().len()))
    });
}

fn bench_breadth_first_search(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);

    c.bench_function("bfs_10k", |b| {
        b.iter(|| black_box(graph.breadth_first_search(ids[0]).unwrap().len()))
    });
}

fn bench_shortest_distance(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);
    let far = *graph.breadth_first_order(ids[0]).unwrap().last().unwrap();

    c.bench_function("distance_10k_farthest", |b| {
        b.iter(|| black_box(graph.distance_of_shortest_path(ids[0], far).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_vertex,
    bench_depth_first_search,
    bench_breadth_first_search,
    bench_shortest_distance,
);
criterion_main!(benches);
