//! Errors

use std::error::Error;
use std::fmt;

/// Errors that abort the processing of a closure tree at one shading point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClosureError {
    /// A closure requested a microfacet distribution it does not support.
    InvalidDistribution(String),

    /// The subsurface closure requested an unknown diffusion profile.
    UnknownSubsurfaceProfile(String),

    /// Adding a closure would exceed the fixed number of entries a composite
    /// can hold.
    CapacityExceeded {
        /// The composite capacity.
        capacity: usize,
    },

    /// A component's parameter block does not belong to its closure id.
    ParamsMismatch {
        /// Name of the closure the component claims to be.
        closure: &'static str,
    },
}

impl fmt::Display for ClosureError {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDistribution(name) => {
                write!(f, "invalid microfacet distribution function: {}", name)
            }
            Self::UnknownSubsurfaceProfile(name) => write!(f, "unknown subsurface profile: {}", name),
            Self::CapacityExceeded { capacity } => write!(
                f,
                "maximum number of closures in shader group exceeded ({})",
                capacity
            ),
            Self::ParamsMismatch { closure } => {
                write!(f, "parameter block does not match closure `{}`", closure)
            }
        }
    }
}

impl Error for ClosureError {}

/// Result type for closure processing.
pub type Result<T> = std::result::Result<T, ClosureError>;
