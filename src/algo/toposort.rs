//! Find a [topologically sorted] collection of vertices on a [directed
//! acyclic graph] (DAG).
//!
//! The returned order is the reverse finish order of a depth-first traversal
//! over the whole graph. It is deterministic given the vertex and
//! incident-edge iteration order of the graph implementation.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use trava::{algo::TopoSort, storage::AdjList};
//!
//! let mut dependency_tree = AdjList::new();
//!
//! let cargo = dependency_tree.add_vertex();
//! let cargo_util = dependency_tree.add_vertex();
//! let serde = dependency_tree.add_vertex();
//! let libc = dependency_tree.add_vertex();
//!
//! // Edge direction in "must be compiled before" relation.
//! dependency_tree.add_edge(&cargo_util, &cargo);
//! dependency_tree.add_edge(&serde, &cargo);
//! dependency_tree.add_edge(&libc, &cargo_util);
//! dependency_tree.add_edge(&libc, &serde);
//!
//! let sorted = TopoSort::on(&dependency_tree).run().unwrap();
//!
//! let order = sorted.into_vec();
//! let position = |v| order.iter().position(|u| *u == v).unwrap();
//!
//! assert!(position(libc) < position(cargo_util));
//! assert!(position(cargo_util) < position(cargo));
//! assert!(position(serde) < position(cargo));
//! ```

use thiserror::Error;

use crate::{
    core::{id::IntegerIdType, GraphBase, Neighbors, VertexSet},
    visit::Dfs,
};

/// Topologically sorted vertices of a directed acyclic graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct TopoSort<G>
where
    G: GraphBase,
{
    sorted: Vec<G::VertexId>,
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle")]
    Cycle,
}

impl<G> TopoSort<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> TopoSortBuilder<'_, G> {
        TopoSortBuilder { graph }
    }

    /// Returns the number of sorted vertices, which equals the vertex count
    /// of the graph.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns the topologically sorted collection of vertices as [`Vec`].
    pub fn into_vec(self) -> Vec<G::VertexId> {
        self.sorted
    }

    /// Iterates over the vertices in topological order.
    pub fn iter(&self) -> impl Iterator<Item = G::VertexId> + '_
    where
        G::VertexId: IntegerIdType,
    {
        self.sorted.iter().copied()
    }
}

impl<G> IntoIterator for TopoSort<G>
where
    G: GraphBase,
{
    type Item = G::VertexId;
    type IntoIter = std::vec::IntoIter<G::VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted.into_iter()
    }
}

pub struct TopoSortBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> TopoSortBuilder<'a, G>
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    /// Runs the sort. `Err` if a cycle was detected, in which case no partial
    /// order is reported.
    pub fn run(self) -> Result<TopoSort<G>, Error> {
        let mut dfs = Dfs::new(self.graph);
        dfs.run(self.graph);

        if dfs.is_cyclic() {
            return Err(Error::Cycle);
        }

        Ok(TopoSort {
            sorted: dfs.finish_order().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use super::*;

    use crate::{
        core::{
            id::{IdType, VertexId},
            marker::Direction,
            EdgeSet,
        },
        infra::proptest::{graph_directed, graph_directed_acyclic},
        storage::AdjList,
    };

    fn assert_valid<G>(sorted: &TopoSort<G>, graph: &G)
    where
        G: Neighbors + VertexSet + EdgeSet,
        G::VertexId: IntegerIdType,
    {
        assert_eq!(
            sorted.len(),
            graph.vertex_count(),
            "sorted sequence length is not equal to vertex count"
        );

        let map = sorted
            .iter()
            .enumerate()
            .map(|(k, v)| (v, k))
            .collect::<FxHashMap<_, _>>();

        for (from, to) in graph.edges_by_id().map(|e| graph.endpoints(&e).unwrap()) {
            let i = map.get(&from).unwrap();
            let j = map.get(&to).unwrap();

            assert!(i < j, "invalid topological order for {from:?} -> {to:?}");
        }
    }

    fn create_basic_graph() -> AdjList {
        let mut graph = AdjList::new();

        let v0 = graph.add_vertex();
        let v1 = graph.add_vertex();
        let v2 = graph.add_vertex();
        let v3 = graph.add_vertex();
        let v4 = graph.add_vertex();
        let v5 = graph.add_vertex();

        graph.add_edge(&v5, &v2);
        graph.add_edge(&v5, &v0);
        graph.add_edge(&v4, &v0);
        graph.add_edge(&v4, &v1);
        graph.add_edge(&v2, &v3);
        graph.add_edge(&v3, &v1);

        graph
    }

    fn create_cyclic_graph() -> AdjList {
        let mut graph = create_basic_graph();
        graph.extend_with_edges([(1, 5)]);
        graph
    }

    fn create_disconnected_graph() -> AdjList {
        let mut graph = create_basic_graph();

        for _ in 0..4 {
            graph.add_vertex();
        }

        graph.extend_with_edges([(7, 6), (7, 8), (6, 9), (8, 9)]);
        graph
    }

    #[test]
    fn basic() {
        let graph = create_basic_graph();
        let sorted = TopoSort::on(&graph).run().unwrap();

        assert_valid(&sorted, &graph);
    }

    #[test]
    fn cycle() {
        let graph = create_cyclic_graph();
        let result = TopoSort::on(&graph).run();

        assert_matches!(result, Err(Error::Cycle));
    }

    #[test]
    fn disconnected() {
        let graph = create_disconnected_graph();
        let sorted = TopoSort::on(&graph).run().unwrap();

        assert_valid(&sorted, &graph);
    }

    #[test]
    fn three_cycle() {
        let mut graph = AdjList::new();

        for _ in 0..3 {
            graph.add_vertex();
        }

        graph.extend_with_edges([(0, 1), (1, 2), (2, 0)]);

        assert_matches!(TopoSort::on(&graph).run(), Err(Error::Cycle));
    }

    #[test]
    fn isolated_vertex() {
        let mut graph = AdjList::new();
        let v0 = graph.add_vertex();

        let sorted = TopoSort::on(&graph).run().unwrap();

        assert_eq!(sorted.into_vec(), vec![v0]);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjList::new();
        let sorted = TopoSort::on(&graph).run().unwrap();

        assert_eq!(sorted.len(), 0);
    }

    #[test]
    fn deterministic() {
        let graph = create_disconnected_graph();

        let first = TopoSort::on(&graph).run().unwrap().into_vec();
        let second = TopoSort::on(&graph).run().unwrap().into_vec();

        assert_eq!(first, second);
    }

    // Cycle check independent of the traversal engine's back-edge flag.
    fn has_cycle_by_reachability(graph: &AdjList) -> bool {
        graph.edges_by_id().any(|e| {
            let (from, to) = graph.endpoints(&e).unwrap();
            reachable(graph, to, from)
        })
    }

    fn reachable(graph: &AdjList, from: VertexId, to: VertexId) -> bool {
        let mut visited = vec![false; graph.vertex_bound()];
        let mut stack = vec![from];

        while let Some(v) = stack.pop() {
            if v == to {
                return true;
            }

            if std::mem::replace(&mut visited[v.as_usize()], true) {
                continue;
            }

            for (u, _) in graph.neighbors_directed(&v, Direction::Outgoing) {
                if !visited[u.as_usize()] {
                    stack.push(u);
                }
            }
        }

        false
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_acyclic(graph in graph_directed_acyclic(24, 80)) {
            let sorted = TopoSort::on(&graph).run().unwrap();
            assert_valid(&sorted, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_any(graph in graph_directed(24, 80)) {
            match TopoSort::on(&graph).run() {
                Ok(sorted) => {
                    prop_assert!(!has_cycle_by_reachability(&graph));
                    assert_valid(&sorted, &graph);
                }
                Err(Error::Cycle) => prop_assert!(has_cycle_by_reachability(&graph)),
            }
        }
    }
}
