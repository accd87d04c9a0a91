//! Motor-car profile.

use std::sync::Arc;

use nc_taxonomy::{Classificator, TypesHolder};

use crate::{RoadProfile, RoutingResult, SpeedForType, VehicleModel};

/// Car speeds by road class, km/h.
pub const CAR_SPEED_LIMITS: &[SpeedForType] = &[
    SpeedForType::new("highway", "motorway",       90.0),
    SpeedForType::new("highway", "trunk",          85.0),
    SpeedForType::new("highway", "motorway_link",  75.0),
    SpeedForType::new("highway", "trunk_link",     70.0),
    SpeedForType::new("highway", "primary",        65.0),
    SpeedForType::new("highway", "primary_link",   60.0),
    SpeedForType::new("highway", "secondary",      55.0),
    SpeedForType::new("highway", "secondary_link", 50.0),
    SpeedForType::new("highway", "tertiary",       40.0),
    SpeedForType::new("highway", "tertiary_link",  30.0),
    SpeedForType::new("highway", "residential",    25.0),
    SpeedForType::new("highway", "pedestrian",     25.0),
    SpeedForType::new("highway", "unclassified",   25.0),
    SpeedForType::new("highway", "service",        15.0),
    SpeedForType::new("highway", "living_street",  10.0),
    SpeedForType::new("highway", "road",           10.0),
    SpeedForType::new("highway", "track",           5.0),
];

/// Ferries and rail shuttles that carry cars.
pub const CAR_ROAD_TYPES: &[&[&str]] = &[
    &["route", "ferry", "motorcar"],
    &["route", "ferry", "motor_vehicle"],
    &["railway", "rail", "motor_vehicle"],
];

/// Car profile.  Uses the base rules unchanged.
#[derive(Debug, Clone)]
pub struct CarModel {
    base: VehicleModel,
}

impl CarModel {
    pub fn new(classificator: Arc<Classificator>) -> RoutingResult<Self> {
        let base = VehicleModel::new("car", classificator, CAR_SPEED_LIMITS)?
            .with_additional_road_types(CAR_ROAD_TYPES)?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &VehicleModel {
        &self.base
    }
}

impl RoadProfile for CarModel {
    fn speed(&self, types: &TypesHolder) -> f64 {
        self.base.min_type_speed(types)
    }

    fn max_speed(&self) -> f64 {
        self.base.max_speed()
    }

    fn is_one_way(&self, types: &TypesHolder) -> bool {
        self.base.has_one_way_type(types)
    }

    fn is_road(&self, types: &TypesHolder) -> bool {
        self.base.has_road_type(types)
    }
}
