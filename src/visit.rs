//! The depth-first traversal engine.
//!
//! The traversal is **iterative**. An explicit stack of partially expanded
//! vertices replaces recursion, so the depth of the traversal is bounded by
//! the heap and not by the size of the program stack, while the observable
//! behavior (timestamps, finish order, detected back edges) is identical to
//! the textbook recursive formulation.
//!
//! All traversal state lives in an array of per-vertex records owned by the
//! engine, indexed by the integer representation of the vertex ID. The
//! records are reset at the beginning of every run and are valid until the
//! next run.

pub mod dfs;

#[doc(inline)]
pub use dfs::{Dfs, VertexState};

/// Traversal progress marking of a single vertex.
///
/// A vertex transitions `Unvisited` → `InProgress` → `Done` exactly once per
/// run. `InProgress` means the vertex is on the traversal stack; an edge
/// pointing to an `InProgress` vertex is a back edge and proves a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Strictly monotonically increasing numbering of traversal events.
///
/// Discovery and finish stamps of one run over the whole graph form a
/// permutation of `1..=2n`. The zero value is reserved for "not stamped".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub usize);
