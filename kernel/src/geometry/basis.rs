//! Orthonormal Basis

use super::*;
use crate::math::*;
use std::fmt;

/// An orthonormal coordinate system made of a normal and two tangents.
///
/// The normal is the third axis of the local frame, matching the
/// convention used by the scattering models where `cos θ = w.z`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis3f {
    /// The normal; third axis of the local frame.
    normal: Vector3f,

    /// First tangent; first axis of the local frame.
    tangent_u: Vector3f,

    /// Second tangent; second axis of the local frame.
    tangent_v: Vector3f,
}

impl Basis3f {
    /// Create a new `Basis3f` from a unit normal and a tangent. The tangent
    /// does not need to be orthogonal to the normal; it is projected onto the
    /// plane perpendicular to the normal. A tangent parallel to the normal is
    /// replaced by an arbitrary one.
    ///
    /// * `normal`    - Unit length normal.
    /// * `tangent_u` - Tangent in the u direction.
    pub fn new(normal: Vector3f, tangent_u: Vector3f) -> Self {
        debug_assert!(abs(normal.length_squared() - 1.0) < 1e-3);

        let tangent_v = normal.cross(&tangent_u);
        if tangent_v.length_squared() < 1e-12 {
            return Self::from_normal(normal);
        }

        match tangent_v.try_normalize() {
            Some(tangent_v) => {
                let tangent_u = tangent_v.cross(&normal);
                Self {
                    normal,
                    tangent_u,
                    tangent_v,
                }
            }
            None => Self::from_normal(normal),
        }
    }

    /// Create a new `Basis3f` from a unit normal, choosing the tangents. A
    /// zero or NaN normal yields the default basis.
    ///
    /// * `normal` - Unit length normal.
    pub fn from_normal(normal: Vector3f) -> Self {
        let tangent = if abs(normal.x) > abs(normal.y) {
            Vector3f::new(-normal.z, 0.0, normal.x)
        } else {
            Vector3f::new(0.0, normal.z, -normal.y)
        };

        // The tangent is already orthogonal to the normal.
        match tangent.try_normalize() {
            Some(tangent_u) => Self {
                normal,
                tangent_u,
                tangent_v: normal.cross(&tangent_u),
            },
            None => Self::default(),
        }
    }

    /// Returns the normal.
    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    /// Returns the tangent in the u direction.
    pub fn tangent_u(&self) -> Vector3f {
        self.tangent_u
    }

    /// Returns the tangent in the v direction.
    pub fn tangent_v(&self) -> Vector3f {
        self.tangent_v
    }

    /// Transforms a vector from world space to the local frame.
    ///
    /// * `v` - The vector to transform.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.tangent_u), v.dot(&self.tangent_v), v.dot(&self.normal))
    }

    /// Transforms a vector from the local frame to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.tangent_u * v.x + self.tangent_v * v.y + self.normal * v.z
    }
}

impl Default for Basis3f {
    /// Returns the basis aligned with the world axes with the normal along +z.
    fn default() -> Self {
        Self {
            normal: Vector3f::Z_AXIS,
            tangent_u: Vector3f::X_AXIS,
            tangent_v: Vector3f::Y_AXIS,
        }
    }
}

impl fmt::Display for Basis3f {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Basis3f {{ n: {}, u: {}, v: {} }}",
            self.normal, self.tangent_u, self.tangent_v
        )
    }
}
