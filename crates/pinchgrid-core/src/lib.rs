#![forbid(unsafe_code)]

//! Core: geometry primitives and the logging facade shared by the grid
//! layout engine and its host adapters.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
