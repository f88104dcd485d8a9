use crate::core::{id::IntegerIdType, marker::Direction, EdgeSet, GraphBase, Neighbors, VertexSet};

/// A view over a directed graph with the direction of every edge flipped.
///
/// The underlying graph is not mutated in any way, so no reader can ever
/// observe a half-reversed edge set. Wrapping a transposed view in another
/// [`Transpose`] observes exactly the original graph again, including the
/// incident-edge iteration order.
#[derive(Debug)]
pub struct Transpose<G> {
    graph: G,
}

impl<G> Transpose<G>
where
    G: GraphBase,
{
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<G> GraphBase for Transpose<G>
where
    G: GraphBase,
{
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;

    fn vertex_count_hint(&self) -> Option<usize> {
        self.graph.vertex_count_hint()
    }
}

impl<G> VertexSet for Transpose<G>
where
    G: VertexSet,
{
    type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        self.graph.vertices_by_id()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_bound(&self) -> usize
    where
        Self::VertexId: IntegerIdType,
    {
        self.graph.vertex_bound()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.graph.contains_vertex(id)
    }
}

impl<G> EdgeSet for Transpose<G>
where
    G: EdgeSet,
{
    type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        self.graph.edges_by_id()
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.graph.endpoints(id).map(|(from, to)| (to, from))
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<G> Neighbors for Transpose<G>
where
    G: Neighbors,
{
    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        self.graph.neighbors_directed(from, dir.opposite())
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        self.graph.degree_directed(id, dir.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::AdjList;

    fn create_graph() -> AdjList {
        let mut graph = AdjList::new();

        let v0 = graph.add_vertex();
        let v1 = graph.add_vertex();
        let v2 = graph.add_vertex();

        graph.add_edge(&v0, &v1);
        graph.add_edge(&v1, &v2);
        graph.add_edge(&v2, &v0);
        graph.add_edge(&v2, &v1);

        graph
    }

    #[test]
    fn endpoints() {
        let graph = Transpose::new(create_graph());

        assert_eq!(graph.endpoints(&1.into()), Some((2.into(), 1.into())));
        assert_eq!(graph.endpoints(&3.into()), Some((1.into(), 2.into())));
    }

    #[test]
    fn neighbors() {
        let graph = Transpose::new(create_graph());

        let outgoing = graph
            .neighbors_directed(&1.into(), Direction::Outgoing)
            .collect::<Vec<_>>();
        assert_eq!(outgoing, vec![(0.into(), 0.into()), (2.into(), 3.into())]);

        let incoming = graph
            .neighbors_directed(&1.into(), Direction::Incoming)
            .collect::<Vec<_>>();
        assert_eq!(incoming, vec![(2.into(), 1.into())]);
    }

    #[test]
    fn involution() {
        let original = create_graph();
        let double = Transpose::new(Transpose::new(&original));

        assert_eq!(
            double.edges_by_id().collect::<Vec<_>>(),
            original.edges_by_id().collect::<Vec<_>>()
        );

        for edge in original.edges_by_id() {
            assert_eq!(double.endpoints(&edge), original.endpoints(&edge));
        }

        for vertex in original.vertices_by_id() {
            assert_eq!(
                double
                    .neighbors_directed(&vertex, Direction::Outgoing)
                    .collect::<Vec<_>>(),
                original
                    .neighbors_directed(&vertex, Direction::Outgoing)
                    .collect::<Vec<_>>()
            );
        }
    }
}
