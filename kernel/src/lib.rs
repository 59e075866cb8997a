//! Kernel

extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod fresnel;
pub mod geometry;
pub mod math;
pub mod microfacet;
pub mod reflection;
pub mod sampling;
pub mod spectrum;
