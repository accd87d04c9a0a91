//! The table-driven road traversal model shared by every profile.
//!
//! A [`VehicleModel`] answers four questions about a feature given its
//! resolved [`TypesHolder`]:
//!
//! | query                                    | answer                                   |
//! |------------------------------------------|------------------------------------------|
//! | [`min_type_speed`](VehicleModel::min_type_speed) | slowest tabled speed among its types, else 0 |
//! | [`max_speed`](VehicleModel::max_speed)   | fastest speed in the table               |
//! | [`has_one_way_type`](VehicleModel::has_one_way_type) | carries the one-way tag       |
//! | [`has_road_type`](VehicleModel::has_road_type) | any type is tabled or auxiliary    |
//!
//! Feature types may be deeper than the two-level keys of the speed table
//! (`highway|primary|bridge`), so lookups truncate every type to two levels
//! first.  Auxiliary road types (ferries, piers) are matched exactly.
//!
//! Specialised profiles wrap a base model and implement [`RoadProfile`],
//! narrowing [`RoadProfile::is_road`] with their own restriction tags.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use nc_core::{HybridSequence, TypeId};
use nc_taxonomy::{Classificator, TypesHolder};

use crate::{RoutingError, RoutingResult};

/// Speed-table keys are truncated to this many levels.
pub const SPEED_KEY_LEVEL: usize = 2;

/// Most profiles add at most this many auxiliary road types.
const INLINE_AUX_TYPES: usize = 4;

/// Tag path marking a one-way road.
pub const ONEWAY_PATH: [&str; 2] = ["hwtag", "oneway"];

/// One entry of a profile's speed table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedForType {
    /// Two-level tag path, e.g. `["highway", "primary"]`.
    pub types: [&'static str; 2],
    pub speed_kmph: f64,
}

impl SpeedForType {
    pub const fn new(category: &'static str, kind: &'static str, speed_kmph: f64) -> Self {
        Self { types: [category, kind], speed_kmph }
    }
}

/// The four traversal queries a router asks of a profile.
///
/// Implementors must keep `speed(f) > 0` implying `is_road(f)`, and
/// `speed(f) <= max_speed()`.
pub trait RoadProfile: Send + Sync {
    /// Traversal speed in km/h; `0.0` means the feature cannot be used.
    fn speed(&self, types: &TypesHolder) -> f64;

    /// Upper bound over every speed this profile can return.
    fn max_speed(&self) -> f64;

    fn is_one_way(&self, types: &TypesHolder) -> bool;

    /// Whether the feature is traversable by this profile at all.
    fn is_road(&self, types: &TypesHolder) -> bool;
}

/// Base road model: a speed table plus auxiliary road types.
#[derive(Debug, Clone)]
pub struct VehicleModel {
    name:                  &'static str,
    classificator:         Arc<Classificator>,
    speeds:                FxHashMap<TypeId, f64>,
    additional_road_types: HybridSequence<TypeId, INLINE_AUX_TYPES>,
    oneway_type:           TypeId,
    max_speed_kmph:        f64,
}

impl VehicleModel {
    /// Resolve `speed_limits` against `classificator` and build the model.
    ///
    /// Fails if the table is empty, a speed is not a positive finite number,
    /// or a tag path (including `hwtag|oneway`) is missing from the registry.
    /// When a path is listed twice the later speed wins.
    pub fn new(
        name: &'static str,
        classificator: Arc<Classificator>,
        speed_limits: &[SpeedForType],
    ) -> RoutingResult<Self> {
        if speed_limits.is_empty() {
            return Err(RoutingError::EmptySpeedTable { model: name });
        }

        let mut speeds = FxHashMap::default();
        speeds.reserve(speed_limits.len());
        let mut max_speed_kmph = 0.0_f64;

        for limit in speed_limits {
            if !limit.speed_kmph.is_finite() || limit.speed_kmph <= 0.0 {
                return Err(RoutingError::BadSpeed {
                    model: name,
                    path:  limit.types.join("|"),
                    speed: limit.speed_kmph,
                });
            }
            let id = classificator.require(&limit.types)?;
            speeds.insert(id, limit.speed_kmph);
            max_speed_kmph = max_speed_kmph.max(limit.speed_kmph);
        }

        let oneway_type = classificator.require(&ONEWAY_PATH)?;

        log::debug!(
            "{name} model: {} speed entries, max {max_speed_kmph} km/h",
            speeds.len()
        );

        Ok(Self {
            name,
            classificator,
            speeds,
            additional_road_types: HybridSequence::new(),
            oneway_type,
            max_speed_kmph,
        })
    }

    /// Add auxiliary road types: features carrying one of these exact types
    /// count as roads even though they have no speed entry.
    ///
    /// Consumes the model, so it can only run while a profile is still being
    /// assembled.
    pub fn with_additional_road_types(mut self, paths: &[&[&str]]) -> RoutingResult<Self> {
        for path in paths {
            let id = self.classificator.require(path)?;
            if !self.additional_road_types.contains(&id) {
                self.additional_road_types.push_back(id);
            }
        }
        log::debug!(
            "{} model: {} auxiliary road types",
            self.name,
            self.additional_road_types.len()
        );
        Ok(self)
    }

    /// Replace the tag that marks a feature as one-way.
    pub fn with_oneway_path(mut self, path: &[&str]) -> RoutingResult<Self> {
        self.oneway_type = self.classificator.require(path)?;
        Ok(self)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn classificator(&self) -> &Classificator {
        &self.classificator
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed_kmph
    }

    /// Slowest tabled speed among `types`, or `0.0` if none is tabled.
    pub fn min_type_speed(&self, types: &TypesHolder) -> f64 {
        types
            .iter()
            .filter_map(|&t| self.speeds.get(&self.speed_key(t)))
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn has_one_way_type(&self, types: &TypesHolder) -> bool {
        types.has(self.oneway_type)
    }

    /// `true` if `t` is an auxiliary road type or its two-level prefix has a
    /// speed entry.
    pub fn is_road_type(&self, t: TypeId) -> bool {
        self.additional_road_types.contains(&t) || self.speeds.contains_key(&self.speed_key(t))
    }

    /// `true` if any of `types` is a road type.
    pub fn has_road_type<'a, I>(&self, types: I) -> bool
    where
        I: IntoIterator<Item = &'a TypeId>,
    {
        types.into_iter().any(|&t| self.is_road_type(t))
    }

    /// Resolve a path through this model's registry.
    pub(crate) fn require(&self, path: &[&str]) -> RoutingResult<TypeId> {
        Ok(self.classificator.require(path)?)
    }

    #[inline]
    fn speed_key(&self, t: TypeId) -> TypeId {
        self.classificator.truncate(t, SPEED_KEY_LEVEL)
    }
}

impl RoadProfile for VehicleModel {
    fn speed(&self, types: &TypesHolder) -> f64 {
        self.min_type_speed(types)
    }

    fn max_speed(&self) -> f64 {
        self.max_speed_kmph
    }

    fn is_one_way(&self, types: &TypesHolder) -> bool {
        self.has_one_way_type(types)
    }

    fn is_road(&self, types: &TypesHolder) -> bool {
        self.has_road_type(types)
    }
}
