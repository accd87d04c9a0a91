//! Robust orientation predicate for Mercator points.
//!
//! Side-of-street decisions are made for points that are often nearly on
//! the street's line, where a naive cross product loses its sign to
//! cancellation.  The adaptive-precision kernel from `geo` returns the exact
//! sign for any finite input.

pub use ::geo::kernels::Orientation;
use ::geo::Coord;
use ::geo::kernels::{Kernel, RobustKernel};

use crate::geo::MercatorPoint;

/// Exact orientation of `q` relative to the directed line `p0 → p1`.
#[inline]
pub fn orientation(p0: MercatorPoint, p1: MercatorPoint, q: MercatorPoint) -> Orientation {
    <RobustKernel as Kernel<f64>>::orient2d(Coord::from(p0), Coord::from(p1), Coord::from(q))
}

/// Sign of the doubled signed area of triangle `(p0, p1, q)`:
/// `1.0` when `q` is to the left of `p0 → p1`, `-1.0` to the right,
/// `0.0` when the three points are collinear.
pub fn oriented_s(p0: MercatorPoint, p1: MercatorPoint, q: MercatorPoint) -> f64 {
    match orientation(p0, p1, q) {
        Orientation::CounterClockwise => 1.0,
        Orientation::Clockwise => -1.0,
        Orientation::Collinear => 0.0,
    }
}
