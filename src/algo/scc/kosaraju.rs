use std::marker::PhantomData;

use crate::{
    adapt::Transpose,
    core::{
        id::{IdType, IntegerIdType},
        Neighbors, VertexSet,
    },
    visit::Dfs,
};

use super::StronglyConnectedComponents;

// Kosaraju's two-pass algorithm. The first pass records the finish order of
// a traversal over the graph; the second pass traverses the transposed view,
// trying tree roots in decreasing finish time of the first pass. Every tree
// of the second pass is exactly one strongly connected component.
pub fn kosaraju<G>(graph: &G) -> StronglyConnectedComponents<G>
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    let mut forward = Dfs::new(graph);
    forward.run(graph);

    let order = forward.finish_order().collect::<Vec<_>>();

    // The transposed view leaves the underlying graph untouched, so there is
    // nothing to restore afterwards.
    let transposed = Transpose::new(graph);
    let mut backward = Dfs::new(&transposed);
    backward.run_from(&transposed, order);

    let mut components = vec![0; graph.vertex_bound()];

    for vertex in graph.vertices_by_id() {
        components[vertex.as_usize()] = backward.state(&vertex).component;
    }

    StronglyConnectedComponents {
        count: backward.component_count(),
        components,
        ty: PhantomData,
    }
}
