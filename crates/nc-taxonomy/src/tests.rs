//! Unit tests for nc-taxonomy.

#[cfg(test)]
mod classificator {
    use nc_core::TypeId;

    use crate::{Classificator, TaxonomyError};

    #[test]
    fn prefixes_are_registered() {
        let mut c = Classificator::new();
        let bridge = c.add_path(&["highway", "primary", "bridge"]).unwrap();
        assert_eq!(c.len(), 3);

        let highway = c.type_by_path(&["highway"]).unwrap();
        let primary = c.type_by_path(&["highway", "primary"]).unwrap();
        assert_eq!(c.parent(bridge), Some(primary));
        assert_eq!(c.parent(primary), Some(highway));
        assert_eq!(c.parent(highway), None);
        assert_eq!(c.level(bridge), 3);
    }

    #[test]
    fn add_is_idempotent() {
        let mut c = Classificator::new();
        let a = c.add_path(&["hwtag", "oneway"]).unwrap();
        let b = c.add_path(&["hwtag", "oneway"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn siblings_get_distinct_ids() {
        let mut c = Classificator::new();
        let primary = c.add_path(&["highway", "primary"]).unwrap();
        let secondary = c.add_path(&["highway", "secondary"]).unwrap();
        assert_ne!(primary, secondary);
        assert_eq!(c.parent(primary), c.parent(secondary));
    }

    #[test]
    fn truncate_walks_up() {
        let mut c = Classificator::new();
        let bridge = c.add_path(&["highway", "primary", "bridge"]).unwrap();
        let primary = c.type_by_path(&["highway", "primary"]).unwrap();
        let highway = c.type_by_path(&["highway"]).unwrap();

        assert_eq!(c.truncate(bridge, 2), primary);
        assert_eq!(c.truncate(bridge, 1), highway);
        assert_eq!(c.truncate(primary, 2), primary);
        assert_eq!(c.truncate(highway, 5), highway);
    }

    #[test]
    fn foreign_handles_are_left_alone() {
        let c = Classificator::new();
        assert_eq!(c.truncate(TypeId(99), 2), TypeId(99));
        assert_eq!(c.level(TypeId::INVALID), 0);
        assert!(c.path_of(TypeId(3)).is_empty());
        assert!(!c.contains(TypeId(0)));
    }

    #[test]
    fn readable_name() {
        let mut c = Classificator::new();
        let t = c.add_path(&["route", "ferry", "motorcar"]).unwrap();
        assert_eq!(c.readable_name(t), "route-ferry-motorcar");
        assert_eq!(c.path_of(t), vec!["route", "ferry", "motorcar"]);
    }

    #[test]
    fn require_reports_unknown_path() {
        let c = Classificator::from_paths([["highway", "primary"].as_slice()]).unwrap();
        assert!(c.require(&["highway", "primary"]).is_ok());
        match c.require(&["highway", "tertiary"]) {
            Err(TaxonomyError::UnknownPath(p)) => assert_eq!(p, "highway|tertiary"),
            other => panic!("expected UnknownPath, got {other:?}"),
        }
    }

    #[test]
    fn malformed_paths_rejected() {
        let mut c = Classificator::new();
        assert!(matches!(c.add_path(&[]), Err(TaxonomyError::EmptyPath)));
        assert!(matches!(c.add_path(&["highway", ""]), Err(TaxonomyError::BadSegment { .. })));
        assert!(matches!(c.add_path(&["a|b"]), Err(TaxonomyError::BadSegment { .. })));
        assert!(matches!(c.add_path(&["highway ", "primary"]), Err(TaxonomyError::BadSegment { .. })));
        assert!(matches!(c.add_path(&["highway", "  "]), Err(TaxonomyError::BadSegment { .. })));
        assert!(matches!(
            c.add_path(&["a", "b", "c", "d", "e", "f"]),
            Err(TaxonomyError::TooDeep { max: 5, .. })
        ));
        assert!(c.is_empty());
    }
}

#[cfg(test)]
mod ids {
    use nc_core::TypeId;

    use crate::TaxonomyError;
    use crate::classificator::next_id;

    #[test]
    fn ids_follow_entry_count() {
        assert_eq!(next_id(0).unwrap(), TypeId(0));
        assert_eq!(next_id(41).unwrap(), TypeId(41));
    }

    #[test]
    fn invalid_sentinel_is_never_minted() {
        assert!(matches!(next_id(u32::MAX as usize), Err(TaxonomyError::Full { .. })));
        assert!(matches!(next_id(usize::MAX), Err(TaxonomyError::Full { .. })));
        assert!(next_id(u32::MAX as usize - 1).unwrap().is_valid());
    }
}

#[cfg(test)]
mod types_holder {
    use nc_core::TypeId;

    use crate::TypesHolder;

    #[test]
    fn add_and_has() {
        let mut types = TypesHolder::new();
        types.add(TypeId(1));
        types.add(TypeId(5));
        assert!(types.has(TypeId(5)));
        assert!(!types.has(TypeId(2)));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn remove_keeps_order() {
        let mut types: TypesHolder = [1, 2, 3, 4].into_iter().map(TypeId).collect();
        assert!(types.remove(TypeId(2)));
        assert!(!types.remove(TypeId(9)));
        assert_eq!(types.as_slice(), &[TypeId(1), TypeId(3), TypeId(4)]);
    }

    #[test]
    fn many_types_still_work() {
        let types: TypesHolder = (0..20).map(TypeId).collect();
        assert_eq!(types.len(), 20);
        assert!(types.has(TypeId(19)));
        assert_eq!(types.iter().count(), 20);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{TaxonomyError, load_taxonomy_reader};

    const CSV: &[u8] = b"\
path\n\
# roads\n\
highway|motorway\n\
highway|primary|bridge\n\
route|ferry|motorcar\n\
hwtag|oneway\n\
";

    #[test]
    fn loads_paths_and_prefixes() {
        let c = load_taxonomy_reader(Cursor::new(CSV)).unwrap();
        assert!(c.type_by_path(&["highway", "motorway"]).is_some());
        assert!(c.type_by_path(&["highway", "primary"]).is_some());
        assert!(c.type_by_path(&["route", "ferry"]).is_some());
        assert!(c.type_by_path(&["hwtag", "oneway"]).is_some());
        // highway, motorway, primary, bridge, route, ferry, motorcar, hwtag, oneway
        assert_eq!(c.len(), 9);
    }

    #[test]
    fn padded_segments_are_trimmed() {
        let csv = b"path\nhighway | primary\n hwtag |oneway\n";
        let c = load_taxonomy_reader(Cursor::new(csv.as_slice())).unwrap();
        assert!(c.type_by_path(&["highway", "primary"]).is_some());
        assert!(c.type_by_path(&["hwtag", "oneway"]).is_some());
        assert!(c.type_by_path(&["highway ", " primary"]).is_none());
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn bad_row_errors() {
        let bad = b"path\nhighway||primary\n";
        let result = load_taxonomy_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(TaxonomyError::BadSegment { .. })));
    }
}
