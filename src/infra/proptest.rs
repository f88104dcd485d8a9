//! [Proptest](https://proptest-rs.github.io/proptest/) strategies producing
//! random graphs for property-based tests.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use crate::storage::AdjList;

/// Strategy producing random directed graphs with up to `max_vertices`
/// vertices and up to `max_edges` edges. Parallel edges are deduplicated,
/// self-loops are kept.
pub fn graph_directed(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = AdjList> {
    (0..=max_vertices).prop_flat_map(move |n| {
        edge_list(n, max_edges).prop_map(move |edges| build(n, edges))
    })
}

/// Strategy producing random directed *acyclic* graphs. Acyclicity is
/// guaranteed by keeping only edges that point from a lower to a higher
/// vertex ID.
pub fn graph_directed_acyclic(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = AdjList> {
    (0..=max_vertices).prop_flat_map(move |n| {
        edge_list(n, max_edges).prop_map(move |edges| {
            build(n, edges.into_iter().filter(|(from, to)| from < to).collect())
        })
    })
}

fn edge_list(vertices: usize, max_edges: usize) -> BoxedStrategy<Vec<(usize, usize)>> {
    if vertices == 0 {
        Just(Vec::new()).boxed()
    } else {
        proptest::collection::vec((0..vertices, 0..vertices), 0..=max_edges).boxed()
    }
}

fn build(vertices: usize, edges: Vec<(usize, usize)>) -> AdjList {
    let mut graph = AdjList::new();

    for _ in 0..vertices {
        graph.add_vertex();
    }

    let mut seen = FxHashSet::default();
    graph.extend_with_edges(edges.into_iter().filter(|edge| seen.insert(*edge)));

    graph
}
