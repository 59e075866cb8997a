//! Emission Composite

use super::*;
use std::ops::Deref;

/// The EDF closures found at a shading point.
#[derive(Clone, Debug)]
pub struct CompositeEmissionClosure<'a> {
    /// The entries; their shading basis is not used.
    closures: CompositeClosure<EdfInputs<'a>>,

    /// Selection probability of each entry.
    pdfs: [Float; MAX_CLOSURE_ENTRIES],
}

impl<'a> CompositeEmissionClosure<'a> {
    /// Returns a composite with no entries.
    pub fn new() -> Self {
        Self {
            closures: CompositeClosure::new(),
            pdfs: [0.0; MAX_CLOSURE_ENTRIES],
        }
    }

    /// Converts the emission closures of a closure tree. Other closures are
    /// ignored.
    ///
    /// * `closure` - Root of the closure tree.
    /// * `arena`   - Arena for the parameter blocks.
    pub fn build(closure: Option<&ClosureColor>, arena: &'a Bump) -> Result<Self> {
        let mut composite = Self::new();

        if let Some(closure) = closure {
            closure.for_each_component(Spectrum::ONE, &mut |component, weight| {
                let max_weight_component = weight.max_component_value();
                if component.id == ClosureId::Emission && max_weight_component > 0.0 && luminance(&weight) > 0.0 {
                    EmissionClosure::convert(&mut composite, &weight, max_weight_component, arena)?;
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
    /// * `closure_type` - Closure id recorded in the entry.
    /// * `weight`       - Color weight; its luminance must be positive.
    /// * `values`       - The parameter block.
    /// * `arena`        - Arena for the parameter block.
    pub fn add_closure(
        &mut self,
        closure_type: ClosureId,
        weight: &Spectrum,
        values: DiffuseEdfInputValues,
        arena: &'a Bump,
    ) -> Result<&'a DiffuseEdfInputValues> {
        self.closures.ensure_capacity()?;

        let values: &'a DiffuseEdfInputValues = arena.alloc(values);
        self.closures
            .push(closure_type, weight, Basis3f::default(), EdfInputs::Diffuse(values))?;
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

impl<'a> Default for CompositeEmissionClosure<'a> {
    /// Returns a composite with no entries.
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Deref for CompositeEmissionClosure<'a> {
    type Target = CompositeClosure<EdfInputs<'a>>;

    /// Returns the entries.
    fn deref(&self) -> &Self::Target {
        &self.closures
    }
}
