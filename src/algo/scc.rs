//! Find the [strongly connected components] of a directed graph.
//!
//! [strongly connected components]:
//!     https://en.wikipedia.org/wiki/Strongly_connected_component
//!
//! # Examples
//!
//! ```
//! use trava::{algo::StronglyConnectedComponents, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! graph.add_edge(&a, &b);
//! graph.add_edge(&b, &a);
//! graph.add_edge(&b, &c);
//!
//! let components = StronglyConnectedComponents::on(&graph).run();
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.component_of(&a), components.component_of(&b));
//! assert_ne!(components.component_of(&a), components.component_of(&c));
//! ```

use std::marker::PhantomData;

use crate::core::{
    id::{IdType, IntegerIdType},
    GraphBase, Neighbors, VertexSet,
};

mod kosaraju;

use kosaraju::kosaraju;

/// Strongly connected components of a directed graph.
///
/// Two vertices belong to the same component if and only if each is reachable
/// from the other. Component numbers are 1-indexed and assigned in the order
/// the components were discovered; the numbering is deterministic given the
/// vertex and incident-edge iteration order of the graph implementation.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct StronglyConnectedComponents<G>
where
    G: GraphBase,
{
    count: usize,
    components: Vec<usize>,
    ty: PhantomData<G>,
}

impl<G> StronglyConnectedComponents<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> SccBuilder<'_, G> {
        SccBuilder { graph }
    }

    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the component number of the given vertex, counted from 1.
    pub fn component_of(&self, vertex: &G::VertexId) -> usize
    where
        G::VertexId: IntegerIdType,
    {
        self.components[vertex.as_usize()]
    }
}

pub struct SccBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> SccBuilder<'a, G>
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    pub fn run(self) -> StronglyConnectedComponents<G> {
        kosaraju(self.graph)
    }
}
