//! Boundary traits between the traversal engine and a graph implementation.
//!
//! The engine never stores a graph itself. It consumes any type that provides
//! ordered vertex iteration ([`VertexSet`]), ordered incident-edge iteration
//! ([`Neighbors`]) and edge endpoint resolution ([`EdgeSet`]).

pub mod graph;
pub mod id;
pub mod marker;

pub use graph::{EdgeSet, GraphBase, Neighbors, VertexSet};
