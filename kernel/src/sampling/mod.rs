//! Sampling

mod discrete;

// Re-export
pub use discrete::*;
