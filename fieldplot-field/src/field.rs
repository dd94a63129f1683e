//! Two-component vector-field definitions.

use kurbo::{Point, Vec2};

use fieldplot_core::bindings::Bindings;
use fieldplot_core::error::EvalResult;
use fieldplot_core::eval::evaluate;
use fieldplot_core::Scalar;

/// A vector field given by one formula per component.
///
/// The formulas may use four names, bound fresh for every sample:
///
/// | Name | Value                                    |
/// |------|------------------------------------------|
/// | `x`  | x coordinate of the sampled point        |
/// | `y`  | y coordinate of the sampled point        |
/// | `r`  | distance of the point from the origin    |
/// | `t`  | the caller's time scalar                 |
///
/// The field itself knows nothing about screens, pixels, or frames; `t`
/// is whatever the caller advances between samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Formula for the x component.
    pub x_formula: String,
    /// Formula for the y component.
    pub y_formula: String,
}

impl FieldDef {
    /// Create a field from its two component formulas.
    #[must_use]
    pub fn new(x_formula: impl Into<String>, y_formula: impl Into<String>) -> Self {
        Self {
            x_formula: x_formula.into(),
            y_formula: y_formula.into(),
        }
    }

    /// The substitution table for one sampled point at time `t`.
    #[must_use]
    pub fn bindings_at(point: Point, t: Scalar) -> Bindings {
        Bindings::new()
            .with("x", point.x)
            .with("y", point.y)
            .with("r", point.to_vec2().hypot())
            .with("t", t)
    }

    /// Evaluate the field at a point.
    ///
    /// # Errors
    /// Propagates the first component's evaluation error unchanged; the
    /// y component is not evaluated once the x component has failed.
    pub fn eval_at(&self, point: Point, t: Scalar) -> EvalResult<Vec2> {
        let bindings = Self::bindings_at(point, t);
        let dx = evaluate(&self.x_formula, &bindings)?;
        let dy = evaluate(&self.y_formula, &bindings)?;
        Ok(Vec2::new(dx, dy))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
