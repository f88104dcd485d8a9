use crate::core::{
    id::{DefaultId, IdPair, IdType, IntegerIdType},
    marker::Direction,
    EdgeSet, GraphBase, Neighbors, VertexSet,
};

/// Directed graph storage based on adjacency lists.
///
/// Vertex and edge IDs are dense integers assigned in insertion order, and
/// incident edges are iterated in the order the edges were added. Traversals
/// over this storage are therefore fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<Id: IdPair = DefaultId> {
    vertices: Vec<Vertex<Id>>,
    endpoints: Vec<[Id::VertexId; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<Id: IdPair> {
    edges: [Vec<Id::EdgeId>; 2],
}

impl<Id: IdPair> Vertex<Id> {
    fn new() -> Self {
        Self {
            edges: [Vec::new(), Vec::new()],
        }
    }
}

impl AdjList<DefaultId> {
    pub fn new() -> Self {
        Self::with_id()
    }
}

impl Default for AdjList<DefaultId> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: IdPair> AdjList<Id> {
    pub fn with_id() -> Self {
        Self {
            vertices: Vec::new(),
            endpoints: Vec::new(),
        }
    }
}

impl<Id: IdPair> AdjList<Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    pub fn add_vertex(&mut self) -> Id::VertexId {
        let id = Id::VertexId::from_usize(self.vertices.len());
        self.vertices.push(Vertex::new());
        id
    }

    pub fn add_edge(&mut self, from: &Id::VertexId, to: &Id::VertexId) -> Id::EdgeId {
        assert!(
            from.as_usize() < self.vertices.len() && to.as_usize() < self.vertices.len(),
            "endpoint vertex does not exist"
        );

        let id = Id::EdgeId::from_usize(self.endpoints.len());
        self.vertices[from.as_usize()].edges[Direction::Outgoing.index()].push(id);
        self.vertices[to.as_usize()].edges[Direction::Incoming.index()].push(id);
        self.endpoints.push([*from, *to]);
        id
    }

    /// Adds edges given as `(from, to)` pairs of integer vertex IDs.
    pub fn extend_with_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (from, to) in edges {
            self.add_edge(
                &Id::VertexId::from_usize(from),
                &Id::VertexId::from_usize(to),
            );
        }
    }
}

impl<Id: IdPair> GraphBase for AdjList<Id> {
    type VertexId = Id::VertexId;
    type EdgeId = Id::EdgeId;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<Id: IdPair> VertexSet for AdjList<Id>
where
    Id::VertexId: IntegerIdType,
{
    type VerticesByIdIter<'a> = RangeIds<Id::VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertices.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }
}

impl<Id: IdPair> EdgeSet for AdjList<Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type EdgesByIdIter<'a> = RangeIds<Id::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        (0..self.endpoints.len()).into()
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.endpoints
            .get(id.as_usize())
            .map(|&[from, to]| (from, to))
    }

    fn edge_count(&self) -> usize {
        self.endpoints.len()
    }
}

impl<Id: IdPair> Neighbors for AdjList<Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type NeighborsIter<'a> = NeighborsIter<'a, Id>
    where
        Self: 'a;

    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            edges: self.vertices[from.as_usize()].edges[dir.index()].iter(),
            endpoints: &self.endpoints,
            dir,
        }
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        self.vertices[id.as_usize()].edges[dir.index()].len()
    }
}

#[derive(Debug, Clone)]
pub struct RangeIds<I> {
    range: std::ops::Range<usize>,
    ty: std::marker::PhantomData<I>,
}

impl<I> From<std::ops::Range<usize>> for RangeIds<I> {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            range,
            ty: std::marker::PhantomData,
        }
    }
}

impl<I: IntegerIdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }
}

pub struct NeighborsIter<'a, Id: IdPair> {
    edges: std::slice::Iter<'a, Id::EdgeId>,
    endpoints: &'a [[Id::VertexId; 2]],
    dir: Direction,
}

impl<'a, Id: IdPair> Iterator for NeighborsIter<'a, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type Item = (Id::VertexId, Id::EdgeId);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.edges.next()?;
        // The other endpoint of an outgoing edge is its head, of an incoming
        // edge its tail.
        let other = self.endpoints[edge.as_usize()][self.dir.opposite().index()];
        Some((other, edge))
    }
}
