//! `nc-routing`: road traversal profiles.
//!
//! A profile turns a feature's taxonomy types into the answers a router
//! needs: how fast it can be traversed, whether it is one-way, and whether
//! it is a road at all for this mode of travel.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`vehicle_model`]| `VehicleModel` (base rules), `RoadProfile`, `SpeedForType` |
//! | [`profiles`]     | `CarModel`, `PedestrianModel`, `BicycleModel` + tables    |
//! | [`factory`]      | `VehicleModelFactory` (default + per-country profiles)    |
//! | [`vehicle_type`] | `VehicleType`                                             |
//! | [`error`]        | `RoutingError`, `RoutingResult<T>`                        |
//!
//! Profiles are built once from a shared
//! [`Classificator`](nc_taxonomy::Classificator) and are read-only
//! afterwards; `Arc<dyn RoadProfile>` handles can be queried from any number
//! of threads.

pub mod error;
pub mod factory;
pub mod profiles;
pub mod vehicle_model;
pub mod vehicle_type;


pub use error::{RoutingError, RoutingResult};
pub use factory::VehicleModelFactory;
pub use profiles::{BicycleModel, CarModel, PedestrianModel};
pub use vehicle_model::{RoadProfile, SpeedForType, VehicleModel};
pub use vehicle_type::VehicleType;
