//! Supporting utilities that are not part of the algorithm surface.

#[cfg(feature = "proptest")]
pub mod proptest;
