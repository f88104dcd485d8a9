pub mod adapt;
pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{EdgeSet, GraphBase, Neighbors, VertexSet};
}
