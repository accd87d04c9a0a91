//! Per-mode profile factory with country specialisations.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use nc_taxonomy::Classificator;

use crate::profiles::{bicycle, pedestrian, BicycleModel, CarModel, PedestrianModel};
use crate::{RoadProfile, RoutingResult, SpeedForType, VehicleType};

/// Builds every profile of one [`VehicleType`] up front and hands out shared
/// read-only handles.
///
/// Countries whose rules match one another share a single profile instance.
pub struct VehicleModelFactory {
    vehicle_type: VehicleType,
    default:      Arc<dyn RoadProfile>,
    by_country:   FxHashMap<&'static str, Arc<dyn RoadProfile>>,
}

impl VehicleModelFactory {
    pub fn new(vehicle_type: VehicleType, classificator: Arc<Classificator>) -> RoutingResult<Self> {
        match vehicle_type {
            VehicleType::Car => {
                let default: Arc<dyn RoadProfile> = Arc::new(CarModel::new(classificator)?);
                log::debug!("car factory: default profile only");
                Ok(Self { vehicle_type, default, by_country: FxHashMap::default() })
            }
            VehicleType::Pedestrian => Self::with_countries(
                vehicle_type,
                &classificator,
                pedestrian::PEDESTRIAN_LIMITS_DEFAULT,
                pedestrian::PEDESTRIAN_COUNTRY_LIMITS,
                |c, limits| Ok(Arc::new(PedestrianModel::with_speed_limits(c, limits)?) as Arc<dyn RoadProfile>),
            ),
            VehicleType::Bicycle => Self::with_countries(
                vehicle_type,
                &classificator,
                bicycle::BICYCLE_LIMITS_DEFAULT,
                bicycle::BICYCLE_COUNTRY_LIMITS,
                |c, limits| Ok(Arc::new(BicycleModel::with_speed_limits(c, limits)?) as Arc<dyn RoadProfile>),
            ),
        }
    }

    fn with_countries<F>(
        vehicle_type: VehicleType,
        classificator: &Arc<Classificator>,
        default_limits: &'static [SpeedForType],
        countries: &[(&'static str, &'static [SpeedForType])],
        build: F,
    ) -> RoutingResult<Self>
    where
        F: Fn(Arc<Classificator>, &[SpeedForType]) -> RoutingResult<Arc<dyn RoadProfile>>,
    {
        let default = build(Arc::clone(classificator), default_limits)?;

        let mut built: Vec<(&'static [SpeedForType], Arc<dyn RoadProfile>)> =
            vec![(default_limits, Arc::clone(&default))];
        let mut by_country = FxHashMap::default();
        by_country.reserve(countries.len());

        for &(country, limits) in countries {
            let profile = match built.iter().find(|(l, _)| *l == limits) {
                Some((_, p)) => Arc::clone(p),
                None => {
                    let p = build(Arc::clone(classificator), limits)?;
                    built.push((limits, Arc::clone(&p)));
                    p
                }
            };
            by_country.insert(country, profile);
        }

        log::debug!(
            "{vehicle_type} factory: {} countries over {} distinct profiles",
            by_country.len(),
            built.len()
        );

        Ok(Self { vehicle_type, default, by_country })
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// The profile used where no country rule applies.
    pub fn vehicle_model(&self) -> Arc<dyn RoadProfile> {
        Arc::clone(&self.default)
    }

    /// The profile for `country`, or the default if it has no special rules.
    pub fn vehicle_model_for_country(&self, country: &str) -> Arc<dyn RoadProfile> {
        match self.by_country.get(country) {
            Some(profile) => Arc::clone(profile),
            None => {
                log::debug!(
                    "{} factory: no rules for {country:?}, using default",
                    self.vehicle_type
                );
                self.vehicle_model()
            }
        }
    }

    /// `true` if `country` has its own rules.
    pub fn has_country(&self, country: &str) -> bool {
        self.by_country.contains_key(country)
    }
}

impl std::fmt::Debug for VehicleModelFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut countries: Vec<_> = self.by_country.keys().copied().collect();
        countries.sort_unstable();
        f.debug_struct("VehicleModelFactory")
            .field("vehicle_type", &self.vehicle_type)
            .field("countries", &countries)
            .finish()
    }
}
