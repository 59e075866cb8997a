//! Closures
//!
//! Converts shading language closure trees into composites of renderer
//! native scattering parameter blocks that are ready to be sampled.

#[macro_use]
extern crate log;

mod closure_id;
mod closure_tree;
mod composite;
mod error;
mod kinds;
mod params;
mod reduce;
mod registry;
mod shading;

#[cfg(test)]
mod test_utils;

// Re-export
pub use closure_id::*;
pub use closure_tree::*;
pub use composite::*;
pub use error::*;
pub use kinds::*;
pub use params::*;
pub use reduce::*;
pub use registry::*;
pub use shading::*;
