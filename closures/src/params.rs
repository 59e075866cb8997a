//! Closure Parameters

use crate::*;

/// Type of a closure parameter as declared to the shading language.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParamType {
    Vector,
    Color,
    Float,
    String,
}

/// Declares one parameter of a closure. Parameters are declared in the
/// order the shading language passes them; keyword parameters are optional
/// and passed by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClosureParam {
    /// Parameter name.
    pub name: &'static str,

    /// Parameter type.
    pub param_type: ParamType,

    /// Keyword when the parameter is optional.
    pub keyword: Option<&'static str>,
}

impl ClosureParam {
    /// Declares a positional vector parameter.
    ///
    /// * `name` - Parameter name.
    pub const fn vector(name: &'static str) -> Self {
        Self { name, param_type: ParamType::Vector, keyword: None }
    }

    /// Declares a positional color parameter.
    ///
    /// * `name` - Parameter name.
    pub const fn color(name: &'static str) -> Self {
        Self { name, param_type: ParamType::Color, keyword: None }
    }

    /// Declares a positional float parameter.
    ///
    /// * `name` - Parameter name.
    pub const fn float(name: &'static str) -> Self {
        Self { name, param_type: ParamType::Float, keyword: None }
    }

    /// Declares a positional string parameter.
    ///
    /// * `name` - Parameter name.
    pub const fn string(name: &'static str) -> Self {
        Self { name, param_type: ParamType::String, keyword: None }
    }

    /// Declares an optional float parameter passed by keyword. The keyword
    /// is the parameter name.
    ///
    /// * `name` - Parameter name.
    pub const fn float_keyword(name: &'static str) -> Self {
        Self { name, param_type: ParamType::Float, keyword: Some(name) }
    }
}

/// The raw parameter block carried by a closure component, one variant per
/// closure kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ClosureParams {
    AshikhminShirley(AshikhminShirleyParams),
    Background,
    Blinn(BlinnParams),
    Debug(DebugParams),
    Diffuse(DiffuseParams),
    Disney(DisneyParams),
    Emission,
    Glass(GlassParams),
    Glossy(GlossyParams),
    Holdout,
    Metal(MetalParams),
    OrenNayar(OrenNayarParams),
    Phong(PhongParams),
    Plastic(PlasticParams),
    Reflection(ReflectionParams),
    Sheen(SheenParams),
    Subsurface(SubsurfaceParams),
    Translucent(TranslucentParams),
    Transparent,
}

impl ClosureParams {
    /// Returns the id of the closure kind the parameter block belongs to.
    pub fn id(&self) -> ClosureId {
        match self {
            Self::AshikhminShirley(_) => ClosureId::AshikhminShirley,
            Self::Background => ClosureId::Background,
            Self::Blinn(_) => ClosureId::Blinn,
            Self::Debug(_) => ClosureId::Debug,
            Self::Diffuse(_) => ClosureId::Diffuse,
            Self::Disney(_) => ClosureId::Disney,
            Self::Emission => ClosureId::Emission,
            Self::Glass(_) => ClosureId::Glass,
            Self::Glossy(_) => ClosureId::Glossy,
            Self::Holdout => ClosureId::Holdout,
            Self::Metal(_) => ClosureId::Metal,
            Self::OrenNayar(_) => ClosureId::OrenNayar,
            Self::Phong(_) => ClosureId::Phong,
            Self::Plastic(_) => ClosureId::Plastic,
            Self::Reflection(_) => ClosureId::Reflection,
            Self::Sheen(_) => ClosureId::Sheen,
            Self::Subsurface(_) => ClosureId::Subsurface,
            Self::Translucent(_) => ClosureId::Translucent,
            Self::Transparent => ClosureId::Transparent,
        }
    }
}
