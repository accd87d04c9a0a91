//! Bicycle profile.

use std::sync::Arc;

use nc_core::TypeId;
use nc_taxonomy::{Classificator, TypesHolder};

use crate::{RoadProfile, RoutingResult, SpeedForType, VehicleModel};

const ROAD_KMPH: f64 = 15.0;
const CYCLEWAY_KMPH: f64 = 15.0;
const MINOR_KMPH: f64 = 12.0;
const UNPAVED_KMPH: f64 = 8.0;
/// Pushing the bike.
const DISMOUNT_KMPH: f64 = 4.0;

/// Roads and cycle infrastructure; no footways.
pub const BICYCLE_LIMITS_DEFAULT: &[SpeedForType] = &[
    SpeedForType::new("highway", "trunk",          ROAD_KMPH),
    SpeedForType::new("highway", "trunk_link",     ROAD_KMPH),
    SpeedForType::new("highway", "primary",        ROAD_KMPH),
    SpeedForType::new("highway", "primary_link",   ROAD_KMPH),
    SpeedForType::new("highway", "secondary",      ROAD_KMPH),
    SpeedForType::new("highway", "secondary_link", ROAD_KMPH),
    SpeedForType::new("highway", "tertiary",       ROAD_KMPH),
    SpeedForType::new("highway", "tertiary_link",  ROAD_KMPH),
    SpeedForType::new("highway", "service",        MINOR_KMPH),
    SpeedForType::new("highway", "unclassified",   MINOR_KMPH),
    SpeedForType::new("highway", "road",           MINOR_KMPH),
    SpeedForType::new("highway", "residential",    MINOR_KMPH),
    SpeedForType::new("highway", "living_street",  MINOR_KMPH),
    SpeedForType::new("highway", "track",          UNPAVED_KMPH),
    SpeedForType::new("highway", "path",           UNPAVED_KMPH),
    SpeedForType::new("highway", "cycleway",       CYCLEWAY_KMPH),
];

/// Default minus trunk roads.
pub const BICYCLE_LIMITS_NO_TRUNK: &[SpeedForType] = &[
    SpeedForType::new("highway", "primary",        ROAD_KMPH),
    SpeedForType::new("highway", "primary_link",   ROAD_KMPH),
    SpeedForType::new("highway", "secondary",      ROAD_KMPH),
    SpeedForType::new("highway", "secondary_link", ROAD_KMPH),
    SpeedForType::new("highway", "tertiary",       ROAD_KMPH),
    SpeedForType::new("highway", "tertiary_link",  ROAD_KMPH),
    SpeedForType::new("highway", "service",        MINOR_KMPH),
    SpeedForType::new("highway", "unclassified",   MINOR_KMPH),
    SpeedForType::new("highway", "road",           MINOR_KMPH),
    SpeedForType::new("highway", "residential",    MINOR_KMPH),
    SpeedForType::new("highway", "living_street",  MINOR_KMPH),
    SpeedForType::new("highway", "track",          UNPAVED_KMPH),
    SpeedForType::new("highway", "path",           UNPAVED_KMPH),
    SpeedForType::new("highway", "cycleway",       CYCLEWAY_KMPH),
];

/// Default plus footways, pedestrian zones and bridleways, ridden at
/// walking pace.
pub const BICYCLE_LIMITS_ALL: &[SpeedForType] = &[
    SpeedForType::new("highway", "trunk",          ROAD_KMPH),
    SpeedForType::new("highway", "trunk_link",     ROAD_KMPH),
    SpeedForType::new("highway", "primary",        ROAD_KMPH),
    SpeedForType::new("highway", "primary_link",   ROAD_KMPH),
    SpeedForType::new("highway", "secondary",      ROAD_KMPH),
    SpeedForType::new("highway", "secondary_link", ROAD_KMPH),
    SpeedForType::new("highway", "tertiary",       ROAD_KMPH),
    SpeedForType::new("highway", "tertiary_link",  ROAD_KMPH),
    SpeedForType::new("highway", "service",        MINOR_KMPH),
    SpeedForType::new("highway", "unclassified",   MINOR_KMPH),
    SpeedForType::new("highway", "road",           MINOR_KMPH),
    SpeedForType::new("highway", "residential",    MINOR_KMPH),
    SpeedForType::new("highway", "living_street",  MINOR_KMPH),
    SpeedForType::new("highway", "track",          UNPAVED_KMPH),
    SpeedForType::new("highway", "path",           UNPAVED_KMPH),
    SpeedForType::new("highway", "cycleway",       CYCLEWAY_KMPH),
    SpeedForType::new("highway", "bridleway",      DISMOUNT_KMPH),
    SpeedForType::new("highway", "footway",        DISMOUNT_KMPH),
    SpeedForType::new("highway", "pedestrian",     DISMOUNT_KMPH),
];

pub const BICYCLE_ROAD_TYPES: &[&[&str]] = &[
    &["route", "ferry"],
    &["man_made", "pier"],
];

/// Countries whose rules differ from [`BICYCLE_LIMITS_DEFAULT`].
pub const BICYCLE_COUNTRY_LIMITS: &[(&str, &[SpeedForType])] = &[
    ("Australia",                BICYCLE_LIMITS_ALL),
    ("Austria",                  BICYCLE_LIMITS_NO_TRUNK),
    ("Belgium",                  BICYCLE_LIMITS_ALL),
    ("Denmark",                  BICYCLE_LIMITS_NO_TRUNK),
    ("Finland",                  BICYCLE_LIMITS_ALL),
    ("France",                   BICYCLE_LIMITS_NO_TRUNK),
    ("Hungary",                  BICYCLE_LIMITS_NO_TRUNK),
    ("Netherlands",              BICYCLE_LIMITS_NO_TRUNK),
    ("Russia",                   BICYCLE_LIMITS_ALL),
    ("Switzerland",              BICYCLE_LIMITS_NO_TRUNK),
];

/// Tag closing a way to bicycles.
pub const NO_BICYCLE_PATH: [&str; 2] = ["hwtag", "nobicycle"];

/// Bicycle profile.  A way tagged `hwtag|nobicycle` is never a road.
#[derive(Debug, Clone)]
pub struct BicycleModel {
    base:       VehicleModel,
    no_bicycle: TypeId,
}

impl BicycleModel {
    pub fn new(classificator: Arc<Classificator>) -> RoutingResult<Self> {
        Self::with_speed_limits(classificator, BICYCLE_LIMITS_DEFAULT)
    }

    pub fn with_speed_limits(
        classificator: Arc<Classificator>,
        speed_limits: &[SpeedForType],
    ) -> RoutingResult<Self> {
        let base = VehicleModel::new("bicycle", classificator, speed_limits)?
            .with_additional_road_types(BICYCLE_ROAD_TYPES)?;
        let no_bicycle = base.require(&NO_BICYCLE_PATH)?;
        Ok(Self { base, no_bicycle })
    }

    pub fn base(&self) -> &VehicleModel {
        &self.base
    }

    fn is_no_bicycle(&self, types: &TypesHolder) -> bool {
        types.has(self.no_bicycle)
    }
}

impl RoadProfile for BicycleModel {
    fn speed(&self, types: &TypesHolder) -> f64 {
        if self.is_no_bicycle(types) {
            return 0.0;
        }
        self.base.min_type_speed(types)
    }

    fn max_speed(&self) -> f64 {
        self.base.max_speed()
    }

    fn is_one_way(&self, types: &TypesHolder) -> bool {
        self.base.has_one_way_type(types)
    }

    fn is_road(&self, types: &TypesHolder) -> bool {
        !self.is_no_bicycle(types) && self.base.has_road_type(types)
    }
}
