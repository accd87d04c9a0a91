//! Unit tests for nc-search.

#[cfg(test)]
mod segment {
    use nc_core::MercatorPoint;

    use crate::SegmentProjector;

    fn pt(x: f64, y: f64) -> MercatorPoint {
        MercatorPoint::new(x, y)
    }

    #[test]
    fn interior_projection() {
        let s = SegmentProjector::new(pt(0.0, 0.0), pt(10.0, 0.0));
        assert_eq!(s.project(pt(4.0, 3.0)), pt(4.0, 0.0));
    }

    #[test]
    fn clamps_to_endpoints() {
        let s = SegmentProjector::new(pt(1.0, 1.0), pt(3.0, 2.0));
        assert_eq!(s.project(pt(-5.0, -5.0)), pt(1.0, 1.0));
        assert_eq!(s.project(pt(10.0, 9.0)), pt(3.0, 2.0));
    }

    #[test]
    fn degenerate_segment_returns_start() {
        let s = SegmentProjector::new(pt(3.0, 3.0), pt(3.0, 3.0));
        assert!(s.is_degenerate());
        assert_eq!(s.project(pt(7.0, -1.0)), pt(3.0, 3.0));
    }
}

#[cfg(test)]
mod street {
    use nc_core::MercatorPoint;

    use crate::{ProjectionOnStreet, StreetProjector};

    fn pt(x: f64, y: f64) -> MercatorPoint {
        MercatorPoint::new(x, y)
    }

    fn l_shape() -> StreetProjector {
        StreetProjector::new(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)])
    }

    #[test]
    fn segment_count() {
        assert_eq!(l_shape().segment_count(), 2);
        assert_eq!(l_shape().segments()[1].p0(), pt(10.0, 0.0));
        assert!(StreetProjector::new(&[]).is_empty());
        assert!(StreetProjector::new(&[pt(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn nearest_segment_wins() {
        let street = l_shape();

        let p = street.project(pt(5.0, 1.0)).unwrap();
        assert_eq!(p.seg_index, 0);
        assert_eq!(p.proj, pt(5.0, 0.0));
        // One Mercator degree at the equator is one degree of arc.
        assert!((110_000.0..112_000.0).contains(&p.dist_meters), "{}", p.dist_meters);

        let p = street.project(pt(10.0, 5.0)).unwrap();
        assert_eq!(p.seg_index, 1);
        assert_eq!(p.proj, pt(10.0, 5.0));
        assert_eq!(p.dist_meters, 0.0);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let street = StreetProjector::new(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)]);
        let p = street.project(pt(1.0, 0.0)).unwrap();
        assert_eq!(p.seg_index, 0);
        assert_eq!(p.proj, pt(1.0, 0.0));
        assert!(p.proj_sign, "collinear counts as the right-hand side");
    }

    #[test]
    fn side_flag_flips_across_the_street() {
        let street = StreetProjector::new(&[pt(0.0, 0.0), pt(10.0, 0.0)]);
        let left = street.project(pt(5.0, 1.0)).unwrap();
        let right = street.project(pt(5.0, -1.0)).unwrap();
        assert!(!left.proj_sign);
        assert!(right.proj_sign);

        // Reversing the street swaps the sides.
        let reversed = StreetProjector::new(&[pt(10.0, 0.0), pt(0.0, 0.0)]);
        assert!(reversed.project(pt(5.0, 1.0)).unwrap().proj_sign);
    }

    #[test]
    fn beyond_the_end_clamps() {
        let street = StreetProjector::new(&[pt(0.0, 0.0), pt(10.0, 0.0)]);
        let p = street.project(pt(12.0, 0.0)).unwrap();
        assert_eq!(p.proj, pt(10.0, 0.0));
        assert!(p.dist_meters > 0.0);
    }

    #[test]
    fn distance_is_on_the_ground_not_in_the_plane() {
        // The same Mercator offset covers less ground further from the equator.
        let equator = StreetProjector::new(&[pt(0.0, 0.0), pt(1.0, 0.0)]);
        let north = StreetProjector::new(&[pt(0.0, 60.0), pt(1.0, 60.0)]);
        let d_eq = equator.project(pt(0.5, 0.5)).unwrap().dist_meters;
        let d_north = north.project(pt(0.5, 60.5)).unwrap().dist_meters;
        assert!(d_north < d_eq);
    }

    #[test]
    fn side_flag_exact_next_to_a_diagonal() {
        let street = StreetProjector::new(&[pt(0.0, 0.0), pt(2.0, 2.0)]);
        let side = |y: f64| street.project(pt(1.0, y)).unwrap().proj_sign;

        // One ULP either side of y = 1.0.
        let above = 1.0 + f64::EPSILON;
        let below = 1.0 - f64::EPSILON / 2.0;
        assert!(!side(above));
        assert!(side(below));
        assert!(side(1.0));

        for k in 1..=8 {
            let step = k as f64 * f64::EPSILON;
            assert!(!side(1.0 + step), "above by {step}");
            assert!(side(1.0 - step / 2.0), "below by {}", step / 2.0);
        }
    }

    #[test]
    fn nan_query_fails() {
        let street = StreetProjector::new(&[pt(0.0, 0.0), pt(1.0, 0.0)]);
        assert!(street.project(pt(f64::NAN, 0.5)).is_none());

        let mut result = ProjectionOnStreet { seg_index: 7, ..ProjectionOnStreet::default() };
        assert!(!street.get_projection(pt(0.5, f64::NAN), &mut result));
        assert_eq!(result, ProjectionOnStreet::default());
    }

    #[test]
    fn too_few_vertices_fail() {
        let cases: [&[MercatorPoint]; 2] = [&[], &[pt(3.0, 4.0)]];
        for points in cases {
            let street = StreetProjector::new(points);
            assert!(street.project(pt(0.0, 0.0)).is_none());

            let mut result = ProjectionOnStreet {
                proj:        pt(1.0, 1.0),
                dist_meters: 5.0,
                seg_index:   3,
                proj_sign:   true,
            };
            assert!(!street.get_projection(pt(0.0, 0.0), &mut result));
            assert_eq!(result, ProjectionOnStreet::default());
        }
    }

    #[test]
    fn get_projection_matches_project() {
        let street = l_shape();
        let mut result = ProjectionOnStreet::default();
        assert!(street.get_projection(pt(11.0, 4.0), &mut result));
        assert_eq!(Some(result), street.project(pt(11.0, 4.0)));
        assert_eq!(result.seg_index, 1);
        // East of a northbound segment.
        assert!(result.proj_sign);
    }

    #[test]
    fn default_means_no_projection() {
        let d = ProjectionOnStreet::default();
        assert!(d.dist_meters.is_infinite());
        assert_eq!(d.seg_index, 0);
        assert!(!d.proj_sign);
    }
}
