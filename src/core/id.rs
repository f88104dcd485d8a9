//! Traits and types used for identifying vertices and edges in graphs.
//!
//! All types that are supposed to be used as vertex/edge identifiers must
//! implement the [`IdType`] trait. Identifiers that are backed by an integer
//! should also implement [`IntegerIdType`], which allows algorithms to use
//! them as indices into contiguous arrays.
//!
//! The default ID types are [`VertexId`] and [`EdgeId`]. They are of size
//! `u64` by default, but this can be changed via their generic parameter `N`.

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

/// A unique identification of a vertex or edge in a graph.
pub trait IdType: Clone + Ord + Hash + Debug {
    /// Converts an ID into the corresponding `u64`.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding ID.
    fn from_bits(bits: u64) -> Self;

    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(id: usize) -> Self {
        Self::from_bits(id as u64)
    }
}

/// Type-level specification that an ID type is representable by an integer.
///
/// All integer values up to some upper bound must be valid IDs and there must
/// be no discontinuity, so that an ID can be used for indexing into an array
/// of per-vertex or per-edge data.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {}

/// The default representation of an integer index for vertices. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<N = u64>(N);

/// The default representation of an integer index for edges. Generic type `N`
/// can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId<N = u64>(N);

macro_rules! impl_int_id {
    ($id_ty:ident, $int_ty:ty) => {
        impl IdType for $id_ty<$int_ty> {
            fn as_bits(&self) -> u64 {
                self.0 as u64
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits as $int_ty)
            }
        }

        impl From<usize> for $id_ty<$int_ty> {
            fn from(id: usize) -> Self {
                Self::from_usize(id)
            }
        }

        impl From<$id_ty<$int_ty>> for usize {
            fn from(id: $id_ty<$int_ty>) -> Self {
                id.as_usize()
            }
        }

        impl IntegerIdType for $id_ty<$int_ty> {}
    };
}

impl_int_id!(VertexId, usize);
impl_int_id!(VertexId, u64);
impl_int_id!(VertexId, u32);
impl_int_id!(VertexId, u16);
impl_int_id!(VertexId, u8);

impl_int_id!(EdgeId, usize);
impl_int_id!(EdgeId, u64);
impl_int_id!(EdgeId, u32);
impl_int_id!(EdgeId, u16);
impl_int_id!(EdgeId, u8);

/// Specification of vertex and edge ID types pair.
///
/// The main purpose is a reduction of the number of generic parameters from
/// two to one (accepting the increase of associated types).
pub trait IdPair {
    /// ID type for vertices.
    type VertexId: IdType;

    /// ID type for edges.
    type EdgeId: IdType;
}

/// Default indexing using [`VertexId`] and [`EdgeId`] as the ID pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefaultId {}

impl IdPair for DefaultId {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

/// Custom indexing using `VI` and `EI` generic types as the ID pair.
pub struct CustomId<VI, EI> {
    ty: PhantomData<fn() -> (VI, EI)>,
}

impl<VI: IdType, EI: IdType> IdPair for CustomId<VI, EI> {
    type VertexId = VI;
    type EdgeId = EI;
}
