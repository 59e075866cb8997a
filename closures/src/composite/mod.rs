//! Composite Closures
//!
//! A composite is the flat, sampling-ready form of a closure tree: a fixed
//! capacity array of entries, each holding a closure id, weights, a shading
//! basis and a parameter block placed in the arena.

use crate::*;
use bumpalo::Bump;
use kernel::geometry::*;
use kernel::math::*;
use kernel::reflection::*;
use kernel::sampling::*;
use kernel::spectrum::*;

mod emission;
mod inputs;
mod subsurface;
mod surface;

// Re-export
pub use emission::*;
pub use inputs::*;
pub use subsurface::*;
pub use surface::*;

/// Maximum number of entries in a composite.
pub const MAX_CLOSURE_ENTRIES: usize = 16;

/// One closure of a composite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompositeEntry<I> {
    /// Closure id; selects the layout of `input_values`.
    pub closure_type: ClosureId,

    /// Accumulated color weight.
    pub weight: Spectrum,

    /// Sampling weight; the luminance of `weight` unless overridden.
    pub scalar_weight: Float,

    /// Shading basis of the closure.
    pub shading_basis: Basis3f,

    /// Parameter block in the arena.
    pub input_values: I,
}

/// The entry storage shared by the surface, subsurface and emission
/// composites.
#[derive(Copy, Clone, Debug)]
pub struct CompositeClosure<I: Copy> {
    /// Number of entries.
    closure_count: usize,

    /// Entries; only the first `closure_count` are set.
    entries: [Option<CompositeEntry<I>>; MAX_CLOSURE_ENTRIES],
}

impl<I: Copy> CompositeClosure<I> {
    /// Returns an empty `CompositeClosure`.
    pub fn new() -> Self {
        Self {
            closure_count: 0,
            entries: [None; MAX_CLOSURE_ENTRIES],
        }
    }

    /// Returns the number of entries.
    pub fn closure_count(&self) -> usize {
        self.closure_count
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.closure_count == 0
    }

    /// Returns an entry.
    ///
    /// * `index` - Index of the entry.
    pub fn entry(&self, index: usize) -> Option<&CompositeEntry<I>> {
        self.entries[..self.closure_count].get(index)?.as_ref()
    }

    /// Returns an iterator over the entries.
    pub fn entries(&self) -> impl Iterator<Item = &CompositeEntry<I>> {
        self.entries[..self.closure_count].iter().flatten()
    }

    /// Returns the scalar weights of the entries; unused slots are zero.
    pub fn scalar_weights(&self) -> [Float; MAX_CLOSURE_ENTRIES] {
        let mut weights = [0.0; MAX_CLOSURE_ENTRIES];
        for (w, entry) in weights.iter_mut().zip(self.entries()) {
            *w = entry.scalar_weight;
        }
        weights
    }

    /// Fails if no more entries can be added.
    fn ensure_capacity(&self) -> Result<()> {
        if self.closure_count >= MAX_CLOSURE_ENTRIES {
            Err(ClosureError::CapacityExceeded {
                capacity: MAX_CLOSURE_ENTRIES,
            })
        } else {
            Ok(())
        }
    }

    /// Appends an entry whose scalar weight is the luminance of its weight.
    ///
    /// * `closure_type`  - Closure id.
    /// * `weight`        - Color weight; its luminance must be positive.
    /// * `shading_basis` - Shading basis.
    /// * `input_values`  - Parameter block.
    fn push(&mut self, closure_type: ClosureId, weight: &Spectrum, shading_basis: Basis3f, input_values: I) -> Result<()> {
        self.ensure_capacity()?;

        let scalar_weight = luminance(weight);
        debug_assert!(scalar_weight > 0.0);

        self.entries[self.closure_count] = Some(CompositeEntry {
            closure_type,
            weight: *weight,
            scalar_weight,
            shading_basis,
            input_values,
        });
        self.closure_count += 1;
        Ok(())
    }

    /// Replaces the scalar weight of the most recently added entry.
    ///
    /// * `scalar_weight` - The new scalar weight.
    pub fn override_closure_scalar_weight(&mut self, scalar_weight: Float) {
        assert!(self.closure_count > 0);
        if let Some(entry) = self.entries[self.closure_count - 1].as_mut() {
            entry.scalar_weight = scalar_weight;
        }
    }

    /// Computes the selection probability of each entry from the scalar
    /// weights. Probabilities are all zero if the total weight is zero.
    ///
    /// * `pdfs` - Receives the probabilities; unused slots are zero.
    pub fn compute_pdfs(&self, pdfs: &mut [Float; MAX_CLOSURE_ENTRIES]) {
        *pdfs = self.scalar_weights();
        normalize_weights(&mut pdfs[..self.closure_count]);
    }
}

impl<I: Copy> Default for CompositeClosure<I> {
    /// Returns an empty `CompositeClosure`.
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the shading basis of a closure.
///
/// The closure's normal replaces the original normal and the original
/// tangent is re-orthogonalized against it. A non-zero tangent, when given,
/// replaces the original tangent too. A zero or non-finite normal keeps the
/// original basis and such a tangent is ignored.
///
/// * `normal`                 - Requested normal; need not be unit length.
/// * `tangent`                - Requested tangent; need not be unit length.
/// * `original_shading_basis` - Shading basis at the shading point.
pub fn compute_closure_shading_basis(
    normal: &Vector3f,
    tangent: Option<&Vector3f>,
    original_shading_basis: &Basis3f,
) -> Basis3f {
    let normal = match normal.try_normalize() {
        Some(normal) => normal,
        None => return *original_shading_basis,
    };

    match tangent.and_then(Vector3f::try_normalize) {
        Some(tangent) => Basis3f::new(normal, tangent),
        None => Basis3f::new(normal, original_shading_basis.tangent_u()),
    }
}
