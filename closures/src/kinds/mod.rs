//! Closure Kinds
//!
//! One module per closure kind: its raw parameter block, the layout shaders
//! see, its scattering modes and the routine converting it to a renderer
//! parameter block.

use crate::*;
use bumpalo::Bump;
use kernel::fresnel::*;
use kernel::geometry::*;
use kernel::math::*;
use kernel::microfacet::*;
use kernel::reflection::*;
use kernel::spectrum::*;

mod ashikhmin_shirley;
mod background;
mod blinn;
mod debug;
mod diffuse;
mod disney;
mod emission;
mod glass;
mod glossy;
mod holdout;
mod metal;
mod oren_nayar;
mod phong;
mod plastic;
mod reflection;
mod sheen;
mod subsurface;
mod translucent;
mod transparent;

// Re-export
pub use ashikhmin_shirley::*;
pub use background::*;
pub use blinn::*;
pub use debug::*;
pub use diffuse::*;
pub use disney::*;
pub use emission::*;
pub use glass::*;
pub use glossy::*;
pub use holdout::*;
pub use metal::*;
pub use oren_nayar::*;
pub use phong::*;
pub use plastic::*;
pub use reflection::*;
pub use sheen::*;
pub use subsurface::*;
pub use translucent::*;
pub use transparent::*;

/// Keyword default of `energy_compensation`.
const DEFAULT_ENERGY_COMPENSATION: Float = 0.0;
