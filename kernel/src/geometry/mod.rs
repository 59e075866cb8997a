//! Geometry

mod basis;
mod vector3;

// Re-export
pub use basis::*;
pub use vector3::*;
