//! Scalar Reductions
//!
//! Read back the weight of the non-scattering closures (`transparent`,
//! `holdout` and `background`) from a closure tree.

use crate::*;
use kernel::math::*;
use kernel::spectrum::*;

/// Returns the summed weight of the components of a closure tree with the
/// given id. Multiplications scale their subtree and additions sum both
/// branches. Returns black for an empty tree or when no component matches.
///
/// * `closure` - Root of the closure tree.
/// * `id`      - The closure id to look for.
pub fn process_closure_id_tree(closure: Option<&ClosureColor>, id: ClosureId) -> Spectrum {
    closure.map_or(Spectrum::ZERO, |c| closure_id_weight(c, id))
}

fn closure_id_weight(closure: &ClosureColor, id: ClosureId) -> Spectrum {
    match closure {
        ClosureColor::Mul { weight, closure } => *weight * closure_id_weight(closure, id),
        ClosureColor::Add { a, b } => closure_id_weight(a, id) + closure_id_weight(b, id),
        ClosureColor::Component(c) if c.id == id => c.weight,
        ClosureColor::Component(_) => Spectrum::ZERO,
    }
}

/// Returns the opacity of a shading point: one minus the luminance of the
/// `transparent` weight, saturated.
///
/// * `closure` - Root of the closure tree.
pub fn process_transparency_tree(closure: Option<&ClosureColor>) -> Float {
    let transparency = process_closure_id_tree(closure, ClosureId::Transparent);
    1.0 - saturate(luminance(&transparency))
}

/// Returns the saturated luminance of the `holdout` weight.
///
/// * `closure` - Root of the closure tree.
pub fn process_holdout_tree(closure: Option<&ClosureColor>) -> Float {
    saturate(luminance(&process_closure_id_tree(closure, ClosureId::Holdout)))
}

/// Returns the `background` weight.
///
/// * `closure` - Root of the closure tree.
pub fn process_background_tree(closure: Option<&ClosureColor>) -> Spectrum {
    process_closure_id_tree(closure, ClosureId::Background)
}
