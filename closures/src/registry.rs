//! Closure Registry
//!
//! Maps closure ids to their conversion routine and scattering modes. The
//! registry is filled once, before any closure tree is processed, and is
//! shared read-only afterwards.

use crate::*;
use bumpalo::Bump;
use kernel::geometry::*;
use kernel::reflection::*;
use kernel::spectrum::*;
use std::mem::size_of;

/// Converts a closure's raw parameters into an entry of a surface composite.
///
/// * `composite`     - The composite to add the entry to.
/// * `shading_basis` - The original shading basis at the shading point.
/// * `params`        - Raw parameters.
/// * `weight`        - Accumulated weight of the closure; its luminance is
///                     positive.
/// * `arena`         - Arena for the renderer parameter block.
pub type ConvertFn = for<'a> fn(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()>;

/// Returns a raw parameter block with keyword parameter defaults filled in.
pub type PrepareFn = fn() -> ClosureParams;

/// The shading language side of closure registration.
pub trait ShadingSystem {
    /// Declares a closure so shaders can construct it.
    ///
    /// * `name`       - Name used in shaders.
    /// * `id`         - Id carried by the closure's components.
    /// * `params`     - Ordered parameter layout.
    /// * `block_size` - Size of the raw parameter block in bytes.
    /// * `prepare`    - Fills keyword parameter defaults, if any.
    fn register_closure(
        &mut self,
        name: &'static str,
        id: ClosureId,
        params: &'static [ClosureParam],
        block_size: usize,
        prepare: Option<PrepareFn>,
    );
}

/// Describes one closure kind.
pub trait ClosureKind {
    /// Raw parameter block.
    type Params: Clone + Default;

    /// Name used in shaders.
    const NAME: &'static str;

    /// Id carried by components of this kind.
    const ID: ClosureId;

    /// Ordered parameter layout.
    const PARAMS: &'static [ClosureParam];

    /// Scattering modes of the entries the kind produces. Empty when the
    /// kind does not scatter light.
    const MODES: ScatteringMode = ScatteringMode::empty();

    /// Per-distribution ids the converter records; they share `MODES`.
    const VARIANT_IDS: &'static [ClosureId] = &[];

    /// Keyword parameter defaults.
    const PREPARE: Option<PrepareFn> = None;

    /// Surface conversion routine.
    const CONVERT: Option<ConvertFn> = None;

    /// Wraps a parameter block.
    ///
    /// * `params` - The parameter block.
    fn into_params(params: Self::Params) -> ClosureParams;

    /// Returns the parameter block if it belongs to this kind.
    ///
    /// * `params` - The raw parameters.
    fn from_params(params: &ClosureParams) -> Option<&Self::Params>;
}

/// Returns the parameter block of closure kind `K`, or an error when the
/// block belongs to another kind.
///
/// * `params` - The raw parameters.
pub fn params_of<K: ClosureKind>(params: &ClosureParams) -> Result<&K::Params> {
    K::from_params(params).ok_or(ClosureError::ParamsMismatch { closure: K::NAME })
}

/// Returns the default parameter block of closure kind `K`.
fn default_params<K: ClosureKind>() -> ClosureParams {
    K::into_params(K::Params::default())
}

/// Conversion routine for ids without one; adds nothing.
fn convert_closure_nop<'a>(
    _composite: &mut CompositeSurfaceClosure<'a>,
    _shading_basis: &Basis3f,
    _params: &ClosureParams,
    _weight: &Spectrum,
    _arena: &'a Bump,
) -> Result<()> {
    Ok(())
}

/// Dispatch tables indexed by closure id.
#[derive(Clone)]
pub struct ClosureRegistry {
    /// Surface conversion routines.
    convert_fns: [ConvertFn; NUM_CLOSURE_IDS],

    /// Scattering modes.
    modes: [ScatteringMode; NUM_CLOSURE_IDS],

    /// Parameter block factories; `None` for ids never registered.
    prepare_fns: [Option<PrepareFn>; NUM_CLOSURE_IDS],

    /// Names of the registered kinds.
    names: [Option<&'static str>; NUM_CLOSURE_IDS],
}

impl ClosureRegistry {
    /// Returns a registry where every id converts to nothing and has no
    /// scattering modes.
    pub fn new() -> Self {
        Self {
            convert_fns: [convert_closure_nop as ConvertFn; NUM_CLOSURE_IDS],
            modes: [ScatteringMode::empty(); NUM_CLOSURE_IDS],
            prepare_fns: [None; NUM_CLOSURE_IDS],
            names: [None; NUM_CLOSURE_IDS],
        }
    }

    /// Registers closure kind `K` with the shading system and fills the
    /// dispatch tables.
    ///
    /// * `shading_system` - The shading system.
    pub fn register<K: ClosureKind, S: ShadingSystem + ?Sized>(&mut self, shading_system: &mut S) {
        shading_system.register_closure(K::NAME, K::ID, K::PARAMS, size_of::<K::Params>(), K::PREPARE);

        let i = K::ID.index();
        if let Some(convert) = K::CONVERT {
            self.convert_fns[i] = convert;
        }
        self.modes[i] = K::MODES;
        for id in K::VARIANT_IDS {
            self.modes[id.index()] = K::MODES;
        }
        self.prepare_fns[i] = Some(K::PREPARE.unwrap_or(default_params::<K>));
        self.names[i] = Some(K::NAME);

        debug!("Registered closure `{}`.", K::NAME);
    }

    /// Returns the surface conversion routine for a closure id.
    ///
    /// * `id` - The closure id.
    pub fn lookup_convert(&self, id: ClosureId) -> ConvertFn {
        self.convert_fns[id.index()]
    }

    /// Returns the scattering modes of a closure id.
    ///
    /// * `id` - The closure id.
    pub fn lookup_modes(&self, id: ClosureId) -> ScatteringMode {
        self.modes[id.index()]
    }

    /// Returns a raw parameter block for a registered closure with keyword
    /// defaults filled in, or `None` if the id was never registered.
    ///
    /// * `id` - The closure id.
    pub fn prepare_params(&self, id: ClosureId) -> Option<ClosureParams> {
        self.prepare_fns[id.index()].map(|prepare| prepare())
    }

    /// Returns the name of a registered closure.
    ///
    /// * `id` - The closure id.
    pub fn name(&self, id: ClosureId) -> Option<&'static str> {
        self.names[id.index()]
    }

    /// Returns true if a closure kind was registered under the id.
    ///
    /// * `id` - The closure id.
    pub fn is_registered(&self, id: ClosureId) -> bool {
        self.names[id.index()].is_some()
    }
}

impl Default for ClosureRegistry {
    /// Returns an empty registry.
    fn default() -> Self {
        Self::new()
    }
}

/// Registers every closure kind, in alphabetical order, and returns the
/// filled registry.
///
/// * `shading_system` - The shading system.
pub fn register_closures<S: ShadingSystem + ?Sized>(shading_system: &mut S) -> ClosureRegistry {
    let mut registry = ClosureRegistry::new();
    registry.register::<AshikhminShirleyClosure, S>(shading_system);
    registry.register::<BackgroundClosure, S>(shading_system);
    registry.register::<BlinnClosure, S>(shading_system);
    registry.register::<DebugClosure, S>(shading_system);
    registry.register::<DiffuseClosure, S>(shading_system);
    registry.register::<DisneyClosure, S>(shading_system);
    registry.register::<EmissionClosure, S>(shading_system);
    registry.register::<GlassClosure, S>(shading_system);
    registry.register::<GlossyClosure, S>(shading_system);
    registry.register::<HoldoutClosure, S>(shading_system);
    registry.register::<MetalClosure, S>(shading_system);
    registry.register::<OrenNayarClosure, S>(shading_system);
    registry.register::<PhongClosure, S>(shading_system);
    registry.register::<PlasticClosure, S>(shading_system);
    registry.register::<ReflectionClosure, S>(shading_system);
    registry.register::<SheenClosure, S>(shading_system);
    registry.register::<SubsurfaceClosure, S>(shading_system);
    registry.register::<TranslucentClosure, S>(shading_system);
    registry.register::<TransparentClosure, S>(shading_system);
    registry
}
