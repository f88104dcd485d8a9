use super::{
    id::{IdType, IntegerIdType},
    marker::Direction,
};

pub trait GraphBase {
    type VertexId: IdType;
    type EdgeId: IdType;

    // Upper bound, if known.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

pub trait VertexSet: GraphBase {
    type VerticesByIdIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Iterates over all vertices of the graph in a stable, implementation
    /// defined order.
    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertices_by_id().count()
    }

    /// Exclusive upper bound on the integer representation of the vertex IDs
    /// in the graph.
    fn vertex_bound(&self) -> usize
    where
        Self::VertexId: IntegerIdType,
    {
        self.vertices_by_id()
            .map(|v| v.as_usize() + 1)
            .max()
            .unwrap_or_default()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices_by_id().any(|v| &v == id)
    }
}

pub trait EdgeSet: GraphBase {
    type EdgesByIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_>;

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    fn edge_count(&self) -> usize {
        self.edges_by_id().count()
    }

    /// Resolves the endpoint of the edge that is not the given one. For
    /// self-loops, both endpoints are the same and that one is returned.
    fn other_end(&self, id: &Self::EdgeId, end: &Self::VertexId) -> Option<Self::VertexId> {
        self.endpoints(id)
            .map(|(from, to)| if &from == end { to } else { from })
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = (Self::VertexId, Self::EdgeId)>
    where
        Self: 'a;

    /// Iterates over the edges incident to the vertex in the given direction,
    /// yielding the other endpoint together with the edge, in a stable,
    /// implementation defined order.
    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        self.neighbors_directed(id, dir).count()
    }
}

macro_rules! deref_graph {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type VertexId = G::VertexId;
            type EdgeId = G::EdgeId;

            fn vertex_count_hint(&self) -> Option<usize> {
                (**self).vertex_count_hint()
            }
        }

        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
            where
                Self: 'a;

            fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
                (**self).vertices_by_id()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn vertex_bound(&self) -> usize
            where
                Self::VertexId: IntegerIdType,
            {
                (**self).vertex_bound()
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                (**self).contains_vertex(id)
            }
        }

        impl<G> EdgeSet for $($ref_kind)* G
        where
            G: EdgeSet,
        {
            type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
            where
                Self: 'a;

            fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
                (**self).edges_by_id()
            }

            fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
                (**self).endpoints(id)
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }

            fn other_end(&self, id: &Self::EdgeId, end: &Self::VertexId) -> Option<Self::VertexId> {
                (**self).other_end(id, end)
            }
        }

        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors_directed(
                &self,
                from: &Self::VertexId,
                dir: Direction,
            ) -> Self::NeighborsIter<'_> {
                (**self).neighbors_directed(from, dir)
            }

            fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
                (**self).degree_directed(id, dir)
            }
        }
    }
}

deref_graph!(&);
deref_graph!(&mut);
