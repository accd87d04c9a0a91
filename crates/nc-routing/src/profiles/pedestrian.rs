//! Pedestrian profile.
//!
//! Walking speed barely depends on road class, so the tables differ mostly
//! in which classes are walkable at all.  Some countries close trunk roads
//! to pedestrians; others allow every path, bridleway and cycleway.

use std::sync::Arc;

use nc_core::TypeId;
use nc_taxonomy::{Classificator, TypesHolder};

use crate::{RoadProfile, RoutingResult, SpeedForType, VehicleModel};

const WALK_KMPH: f64 = 5.0;
const STEPS_KMPH: f64 = 4.0;
const ROUGH_KMPH: f64 = 4.5;

/// Walkable everywhere by default.
pub const PEDESTRIAN_LIMITS_DEFAULT: &[SpeedForType] = &[
    SpeedForType::new("highway", "trunk",         WALK_KMPH),
    SpeedForType::new("highway", "trunk_link",    WALK_KMPH),
    SpeedForType::new("highway", "primary",       WALK_KMPH),
    SpeedForType::new("highway", "primary_link",  WALK_KMPH),
    SpeedForType::new("highway", "secondary",     WALK_KMPH),
    SpeedForType::new("highway", "secondary_link", WALK_KMPH),
    SpeedForType::new("highway", "tertiary",      WALK_KMPH),
    SpeedForType::new("highway", "tertiary_link", WALK_KMPH),
    SpeedForType::new("highway", "service",       WALK_KMPH),
    SpeedForType::new("highway", "unclassified",  WALK_KMPH),
    SpeedForType::new("highway", "road",          WALK_KMPH),
    SpeedForType::new("highway", "track",         ROUGH_KMPH),
    SpeedForType::new("highway", "path",          ROUGH_KMPH),
    SpeedForType::new("highway", "residential",   WALK_KMPH),
    SpeedForType::new("highway", "living_street", WALK_KMPH),
    SpeedForType::new("highway", "steps",         STEPS_KMPH),
    SpeedForType::new("highway", "pedestrian",    WALK_KMPH),
    SpeedForType::new("highway", "footway",       WALK_KMPH),
];

/// Default minus trunk roads.
pub const PEDESTRIAN_LIMITS_NO_TRUNK: &[SpeedForType] = &[
    SpeedForType::new("highway", "primary",       WALK_KMPH),
    SpeedForType::new("highway", "primary_link",  WALK_KMPH),
    SpeedForType::new("highway", "secondary",     WALK_KMPH),
    SpeedForType::new("highway", "secondary_link", WALK_KMPH),
    SpeedForType::new("highway", "tertiary",      WALK_KMPH),
    SpeedForType::new("highway", "tertiary_link", WALK_KMPH),
    SpeedForType::new("highway", "service",       WALK_KMPH),
    SpeedForType::new("highway", "unclassified",  WALK_KMPH),
    SpeedForType::new("highway", "road",          WALK_KMPH),
    SpeedForType::new("highway", "track",         ROUGH_KMPH),
    SpeedForType::new("highway", "path",          ROUGH_KMPH),
    SpeedForType::new("highway", "residential",   WALK_KMPH),
    SpeedForType::new("highway", "living_street", WALK_KMPH),
    SpeedForType::new("highway", "steps",         STEPS_KMPH),
    SpeedForType::new("highway", "pedestrian",    WALK_KMPH),
    SpeedForType::new("highway", "footway",       WALK_KMPH),
];

/// Default plus bridleways and cycleways.
pub const PEDESTRIAN_LIMITS_ALL: &[SpeedForType] = &[
    SpeedForType::new("highway", "trunk",         WALK_KMPH),
    SpeedForType::new("highway", "trunk_link",    WALK_KMPH),
    SpeedForType::new("highway", "primary",       WALK_KMPH),
    SpeedForType::new("highway", "primary_link",  WALK_KMPH),
    SpeedForType::new("highway", "secondary",     WALK_KMPH),
    SpeedForType::new("highway", "secondary_link", WALK_KMPH),
    SpeedForType::new("highway", "tertiary",      WALK_KMPH),
    SpeedForType::new("highway", "tertiary_link", WALK_KMPH),
    SpeedForType::new("highway", "service",       WALK_KMPH),
    SpeedForType::new("highway", "unclassified",  WALK_KMPH),
    SpeedForType::new("highway", "road",          WALK_KMPH),
    SpeedForType::new("highway", "track",         ROUGH_KMPH),
    SpeedForType::new("highway", "path",          ROUGH_KMPH),
    SpeedForType::new("highway", "bridleway",     ROUGH_KMPH),
    SpeedForType::new("highway", "cycleway",      WALK_KMPH),
    SpeedForType::new("highway", "residential",   WALK_KMPH),
    SpeedForType::new("highway", "living_street", WALK_KMPH),
    SpeedForType::new("highway", "steps",         STEPS_KMPH),
    SpeedForType::new("highway", "pedestrian",    WALK_KMPH),
    SpeedForType::new("highway", "footway",       WALK_KMPH),
];

pub const PEDESTRIAN_ROAD_TYPES: &[&[&str]] = &[
    &["route", "ferry"],
    &["man_made", "pier"],
];

/// Countries whose rules differ from [`PEDESTRIAN_LIMITS_DEFAULT`].
pub const PEDESTRIAN_COUNTRY_LIMITS: &[(&str, &[SpeedForType])] = &[
    ("Australia",                PEDESTRIAN_LIMITS_ALL),
    ("Austria",                  PEDESTRIAN_LIMITS_NO_TRUNK),
    ("Belarus",                  PEDESTRIAN_LIMITS_ALL),
    ("Denmark",                  PEDESTRIAN_LIMITS_NO_TRUNK),
    ("France",                   PEDESTRIAN_LIMITS_NO_TRUNK),
    ("Hungary",                  PEDESTRIAN_LIMITS_NO_TRUNK),
    ("Russia",                   PEDESTRIAN_LIMITS_ALL),
    ("Switzerland",              PEDESTRIAN_LIMITS_NO_TRUNK),
    ("United Kingdom",           PEDESTRIAN_LIMITS_ALL),
    ("United States of America", PEDESTRIAN_LIMITS_ALL),
];

/// Tag closing a way to pedestrians.
pub const NO_FOOT_PATH: [&str; 2] = ["hwtag", "nofoot"];

/// Pedestrian profile.
///
/// Differs from the base rules in two ways: a way tagged `hwtag|nofoot` is
/// never a road, and one-way restrictions do not apply on foot.
#[derive(Debug, Clone)]
pub struct PedestrianModel {
    base:    VehicleModel,
    no_foot: TypeId,
}

impl PedestrianModel {
    pub fn new(classificator: Arc<Classificator>) -> RoutingResult<Self> {
        Self::with_speed_limits(classificator, PEDESTRIAN_LIMITS_DEFAULT)
    }

    pub fn with_speed_limits(
        classificator: Arc<Classificator>,
        speed_limits: &[SpeedForType],
    ) -> RoutingResult<Self> {
        let base = VehicleModel::new("pedestrian", classificator, speed_limits)?
            .with_additional_road_types(PEDESTRIAN_ROAD_TYPES)?;
        let no_foot = base.require(&NO_FOOT_PATH)?;
        Ok(Self { base, no_foot })
    }

    pub fn base(&self) -> &VehicleModel {
        &self.base
    }

    fn is_no_foot(&self, types: &TypesHolder) -> bool {
        types.has(self.no_foot)
    }
}

impl RoadProfile for PedestrianModel {
    fn speed(&self, types: &TypesHolder) -> f64 {
        if self.is_no_foot(types) {
            return 0.0;
        }
        self.base.min_type_speed(types)
    }

    fn max_speed(&self) -> f64 {
        self.base.max_speed()
    }

    fn is_one_way(&self, _types: &TypesHolder) -> bool {
        false
    }

    fn is_road(&self, types: &TypesHolder) -> bool {
        !self.is_no_foot(types) && self.base.has_road_type(types)
    }
}
