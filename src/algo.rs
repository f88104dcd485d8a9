pub mod scc;
pub mod toposort;

pub use scc::StronglyConnectedComponents;
pub use toposort::TopoSort;

use crate::{
    core::{id::IntegerIdType, Neighbors, VertexSet},
    visit::Dfs,
};

/// Returns `true` if the graph contains a cycle.
///
/// This runs a full depth-first traversal and consults its back-edge flag.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    let mut dfs = Dfs::new(graph);
    dfs.run(graph);
    dfs.is_cyclic()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::AdjList;

    #[test]
    fn cyclic_basic() {
        let mut graph = AdjList::new();

        let v0 = graph.add_vertex();
        let v1 = graph.add_vertex();
        let v2 = graph.add_vertex();

        graph.add_edge(&v0, &v1);
        graph.add_edge(&v1, &v2);
        graph.add_edge(&v2, &v0);

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn acyclic_basic() {
        let mut graph = AdjList::new();

        let v0 = graph.add_vertex();
        let v1 = graph.add_vertex();
        let v2 = graph.add_vertex();

        graph.add_edge(&v0, &v1);
        graph.add_edge(&v1, &v2);
        graph.add_edge(&v0, &v2);

        assert!(!is_cyclic(&graph));
    }
}
