//! Closure Trees
//!
//! The weighted expression a shader evaluates to at one shading point.

use crate::*;
use kernel::spectrum::*;

/// A leaf of a closure tree: one weighted closure primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureComponent {
    /// Closure kind.
    pub id: ClosureId,

    /// Color weight of the primitive.
    pub weight: Spectrum,

    /// Raw parameters.
    pub params: ClosureParams,
}

/// A node of a closure tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ClosureColor {
    /// Scales the color weight of the subtree.
    Mul {
        weight: Spectrum,
        closure: Box<ClosureColor>,
    },

    /// Sums two subtrees.
    Add {
        a: Box<ClosureColor>,
        b: Box<ClosureColor>,
    },

    /// A closure primitive.
    Component(ClosureComponent),
}

impl ClosureColor {
    /// Returns a node scaling a subtree.
    ///
    /// * `weight`  - The scale.
    /// * `closure` - The subtree.
    pub fn mul(weight: Spectrum, closure: ClosureColor) -> Self {
        Self::Mul {
            weight,
            closure: Box::new(closure),
        }
    }

    /// Returns a node adding two subtrees.
    ///
    /// * `a` - First subtree.
    /// * `b` - Second subtree.
    pub fn add(a: ClosureColor, b: ClosureColor) -> Self {
        Self::Add {
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    /// Returns a leaf for the closure kind the parameters belong to.
    ///
    /// * `weight` - Color weight.
    /// * `params` - Raw parameters.
    pub fn component(weight: Spectrum, params: ClosureParams) -> Self {
        Self::Component(ClosureComponent {
            id: params.id(),
            weight,
            params,
        })
    }

    /// Visits every leaf with its weight accumulated along the path from the
    /// root. Multiplications scale the weight; both branches of an addition
    /// receive the same incoming weight. Stops at the first error.
    ///
    /// * `weight` - Weight accumulated above this node.
    /// * `visit`  - Called with each leaf and its accumulated weight.
    pub fn for_each_component<F>(&self, weight: Spectrum, visit: &mut F) -> Result<()>
    where
        F: FnMut(&ClosureComponent, Spectrum) -> Result<()>,
    {
        match self {
            Self::Mul { weight: w, closure } => closure.for_each_component(weight * *w, visit),
            Self::Add { a, b } => {
                a.for_each_component(weight, visit)?;
                b.for_each_component(weight, visit)
            }
            Self::Component(c) => visit(c, weight * c.weight),
        }
    }
}
