//! CLI command implementations.

pub mod graph;
pub mod serve;
#[cfg(feature = "native-viz")]
pub mod viz;
