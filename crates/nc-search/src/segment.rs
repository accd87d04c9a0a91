//! Closest point on a single segment.

use nc_core::MercatorPoint;

/// Projects points onto the finite segment `p0 → p1`.
///
/// A degenerate segment (`p0 == p1`) projects everything onto `p0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentProjector {
    p0:         MercatorPoint,
    p1:         MercatorPoint,
    dir:        MercatorPoint,
    length_sq:  f64,
}

impl SegmentProjector {
    pub fn new(p0: MercatorPoint, p1: MercatorPoint) -> Self {
        let dir = p1 - p0;
        Self { p0, p1, dir, length_sq: dir.length_squared() }
    }

    #[inline]
    pub fn p0(&self) -> MercatorPoint {
        self.p0
    }

    #[inline]
    pub fn p1(&self) -> MercatorPoint {
        self.p1
    }

    pub fn is_degenerate(&self) -> bool {
        self.length_sq == 0.0
    }

    /// Closest point to `q` on the segment.  Clamped projections return the
    /// endpoint itself, not a recomputed approximation of it.
    pub fn project(&self, q: MercatorPoint) -> MercatorPoint {
        if self.is_degenerate() {
            return self.p0;
        }
        let t = (q - self.p0).dot(self.dir) / self.length_sq;
        if t <= 0.0 {
            self.p0
        } else if t >= 1.0 {
            self.p1
        } else {
            self.p0 + self.dir * t
        }
    }
}
