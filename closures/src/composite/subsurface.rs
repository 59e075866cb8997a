//! Subsurface Composite

use super::*;
use std::ops::Deref;

/// The BSSRDF closures found at a shading point.
#[derive(Clone, Debug)]
pub struct CompositeSubsurfaceClosure<'a> {
    /// The entries.
    closures: CompositeClosure<BssrdfInputs<'a>>,

    /// Selection probability of each entry.
    pdfs: [Float; MAX_CLOSURE_ENTRIES],
}

impl<'a> CompositeSubsurfaceClosure<'a> {
    /// Returns a composite with no entries.
    pub fn new() -> Self {
        Self {
            closures: CompositeClosure::new(),
            pdfs: [0.0; MAX_CLOSURE_ENTRIES],
        }
    }

    /// Converts the subsurface closures of the closure tree at a shading
    /// point. Other closures are ignored.
    ///
    /// * `original_shading_basis` - The shading basis at the shading point.
    /// * `closure`                - Root of the closure tree.
    /// * `arena`                  - Arena for the parameter blocks.
    pub fn build(original_shading_basis: &Basis3f, closure: Option<&ClosureColor>, arena: &'a Bump) -> Result<Self> {
        let mut composite = Self::new();

        if let Some(closure) = closure {
            closure.for_each_component(Spectrum::ONE, &mut |component, weight| {
                if component.id == ClosureId::Subsurface && luminance(&weight) > 0.0 {
                    SubsurfaceClosure::convert(
                        &mut composite,
                        original_shading_basis,
                        &component.params,
                        &weight,
                        arena,
                    )?;
                }
                Ok(())
            })?;
        }

        composite.closures.compute_pdfs(&mut composite.pdfs);
        Ok(composite)
    }

    /// Adds an entry and places its parameter block in the arena. Fails
    /// without modifying the composite if it is full.
    ///
    /// * `closure_type`           - Closure id recorded in the entry.
    /// * `original_shading_basis` - The shading basis at the shading point.
    /// * `weight`                 - Color weight; its luminance must be
    ///                              positive.
    /// * `normal`                 - Requested normal.
    /// * `values`                 - The parameter block.
    /// * `arena`                  - Arena for the parameter block.
    pub fn add_closure<V: IntoBssrdfInputs>(
        &mut self,
        closure_type: ClosureId,
        original_shading_basis: &Basis3f,
        weight: &Spectrum,
        normal: &Vector3f,
        values: V,
        arena: &'a Bump,
    ) -> Result<&'a V> {
        self.closures.ensure_capacity()?;

        let shading_basis = compute_closure_shading_basis(normal, None, original_shading_basis);
        let values: &'a V = arena.alloc(values);
        self.closures
            .push(closure_type, weight, shading_basis, values.bssrdf_inputs())?;
        Ok(values)
    }

    /// Returns the selection probabilities of the entries.
    pub fn pdfs(&self) -> &[Float] {
        &self.pdfs[..self.closures.closure_count()]
    }

    /// Picks an entry with probability proportional to its scalar weight.
    /// Returns `None` if there are no entries.
    ///
    /// * `u` - Uniform sample in [0, 1).
    pub fn choose_closure(&self, u: Float) -> Option<usize> {
        sample_pdf_linear_search(self.pdfs(), u)
    }
}

impl<'a> Default for CompositeSubsurfaceClosure<'a> {
    /// Returns a composite with no entries.
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Deref for CompositeSubsurfaceClosure<'a> {
    type Target = CompositeClosure<BssrdfInputs<'a>>;

    /// Returns the entries.
    fn deref(&self) -> &Self::Target {
        &self.closures
    }
}
