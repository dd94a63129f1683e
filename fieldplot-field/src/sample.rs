//! Grid sampling of a vector field.
//!
//! Covers the numeric half of plotting a field: walk a lattice of points
//! over a rectangular region, evaluate the field at each one, and track
//! the largest magnitude seen (callers scale arrows against it). How the
//! resulting arrows are drawn is none of this module's business.

use kurbo::{Point, Rect, Vec2};

use fieldplot_core::error::EvalResult;
use fieldplot_core::Scalar;

use crate::field::FieldDef;

/// Tolerance for lattice boundary comparisons.
const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Sampling region
// ---------------------------------------------------------------------------

/// A rectangular sampling region with a fixed lattice step.
///
/// Lattice points are the multiples of `step` falling inside the
/// rectangle. Anchoring to multiples keeps the lattice fixed in world
/// space: panning the region slides the window over the same points
/// instead of dragging the points along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRegion {
    /// World-space rectangle to sample.
    pub rect: Rect,
    /// Lattice spacing in world units.
    pub step: Scalar,
}

impl SampleRegion {
    /// Create a region.
    #[must_use]
    pub const fn new(rect: Rect, step: Scalar) -> Self {
        Self { rect, step }
    }

    /// All lattice points of the region, x-major.
    ///
    /// A non-positive step yields no points.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let xs = ticks(self.rect.min_x(), self.rect.max_x(), self.step);
        let ys = ticks(self.rect.min_y(), self.rect.max_y(), self.step);

        let mut points = Vec::with_capacity(xs.len() * ys.len());
        for &x in &xs {
            for &y in &ys {
                points.push(Point::new(x, y));
            }
        }
        points
    }
}

/// Multiples of `step` in `[min, max]`, ascending.
fn ticks(min: Scalar, max: Scalar, step: Scalar) -> Vec<Scalar> {
    let mut out = Vec::new();
    if step <= 0.0 || max < min {
        return out;
    }
    let mut k = (min / step).ceil();
    while k * step <= max + EPSILON {
        out.push(k * step);
        k += 1.0;
    }
    out
}

// ---------------------------------------------------------------------------
// Sweep
// ---------------------------------------------------------------------------

/// One sampled arrow: the lattice point and the field vector there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Lattice point the arrow is anchored at.
    pub origin: Point,
    /// Field vector at that point.
    pub vector: Vec2,
}

/// The result of sampling a field over a whole region.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSweep {
    /// One sample per lattice point, x-major.
    pub samples: Vec<FieldSample>,
    /// Largest vector magnitude across the sweep (0 for an empty sweep).
    pub max_magnitude: Scalar,
}

/// Sample `field` at every lattice point of `region` at time `t`.
///
/// # Errors
/// The first failing sample aborts the sweep and its error propagates
/// unchanged; no partial sweep is returned.
pub fn sweep(field: &FieldDef, region: &SampleRegion, t: Scalar) -> EvalResult<FieldSweep> {
    let points = region.points();

    let mut samples = Vec::with_capacity(points.len());
    let mut max_magnitude: Scalar = 0.0;
    for origin in points {
        let vector = field.eval_at(origin, t)?;
        max_magnitude = max_magnitude.max(vector.hypot());
        samples.push(FieldSample { origin, vector });
    }

    Ok(FieldSweep {
        samples,
        max_magnitude,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
