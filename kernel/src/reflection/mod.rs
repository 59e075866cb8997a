//! Reflection and surface scattering models
//!
//! Only the parameter blocks consumed by the scattering models live here;
//! the models' evaluation and sampling are provided by the integrator.

use crate::math::*;
use crate::spectrum::*;

mod bsdf_inputs;
mod bssrdf_inputs;
mod edf_inputs;
mod scattering_mode;

// Re-export
pub use bsdf_inputs::*;
pub use bssrdf_inputs::*;
pub use edf_inputs::*;
pub use scattering_mode::*;
