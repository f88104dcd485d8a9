//! Non-destructive views changing how an underlying graph is observed.

mod transpose;

pub use transpose::Transpose;
