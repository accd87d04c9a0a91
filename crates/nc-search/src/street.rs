//! Nearest point on a street polyline.
//!
//! Used by the geocoder to decide which side of a street a house lies on:
//! the house point is projected onto every segment of the street, the
//! segment whose projection is closest on the ground wins, and the house's
//! side is read off that segment's direction.

use nc_core::{MercatorPoint, distance_on_earth, oriented_s};

use crate::SegmentProjector;

/// The outcome of a successful projection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionOnStreet {
    /// Closest point on the street, Mercator coordinates.
    pub proj:        MercatorPoint,
    /// Ground distance from the query point to `proj`, metres.
    pub dist_meters: f64,
    /// Index of the winning segment; segment `i` runs from vertex `i` to
    /// vertex `i + 1`.
    pub seg_index:   usize,
    /// `true` when the query point lies to the right of the winning segment
    /// (walking from its start to its end) or exactly on its line.
    pub proj_sign:   bool,
}

impl Default for ProjectionOnStreet {
    /// The "no projection" state: infinitely far away.
    fn default() -> Self {
        Self {
            proj:        MercatorPoint::default(),
            dist_meters: f64::INFINITY,
            seg_index:   0,
            proj_sign:   false,
        }
    }
}

/// Projects query points onto one street polyline.
///
/// # Example
///
/// ```
/// use nc_core::MercatorPoint;
/// use nc_search::StreetProjector;
///
/// let street = StreetProjector::new(&[
///     MercatorPoint::new(0.0, 0.0),
///     MercatorPoint::new(0.01, 0.0),
/// ]);
/// let p = street.project(MercatorPoint::new(0.005, -0.001)).unwrap();
/// assert_eq!(p.seg_index, 0);
/// assert!(p.proj_sign); // below an eastbound street = right-hand side
/// ```
#[derive(Clone, Debug, Default)]
pub struct StreetProjector {
    segments: Vec<SegmentProjector>,
}

impl StreetProjector {
    /// One segment per consecutive vertex pair.  Fewer than two vertices
    /// leave the projector empty, and every query on it fails.
    pub fn new(points: &[MercatorPoint]) -> Self {
        let segments = points
            .windows(2)
            .map(|w| SegmentProjector::new(w[0], w[1]))
            .collect();
        Self { segments }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[SegmentProjector] {
        &self.segments
    }

    /// Closest point on the street to `point`, or `None` if the street has
    /// no segments or none is at a finite distance (a NaN query, say).
    /// Equidistant segments resolve to the lowest index.
    pub fn project(&self, point: MercatorPoint) -> Option<ProjectionOnStreet> {
        let mut result = ProjectionOnStreet::default();
        let mut found = false;

        // Strict `<` against +inf: NaN distances never win.
        for (seg_index, segment) in self.segments.iter().enumerate() {
            let proj = segment.project(point);
            let dist_meters = distance_on_earth(point, proj);
            if dist_meters < result.dist_meters {
                result = ProjectionOnStreet { proj, dist_meters, seg_index, proj_sign: false };
                found = true;
            }
        }
        if !found {
            return None;
        }

        let winner = &self.segments[result.seg_index];
        result.proj_sign = oriented_s(winner.p0(), winner.p1(), point) <= 0.0;

        log::trace!(
            "projected {point} onto segment {} of {}: {} at {:.2} m",
            result.seg_index,
            self.segments.len(),
            result.proj,
            result.dist_meters
        );
        Some(result)
    }

    /// Out-parameter form of [`project`](Self::project).  On failure
    /// `result` is reset to [`ProjectionOnStreet::default`] and `false` is
    /// returned.
    pub fn get_projection(&self, point: MercatorPoint, result: &mut ProjectionOnStreet) -> bool {
        match self.project(point) {
            Some(p) => {
                *result = p;
                true
            }
            None => {
                *result = ProjectionOnStreet::default();
                false
            }
        }
    }
}
