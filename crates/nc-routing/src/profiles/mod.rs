//! Concrete road profiles built on [`VehicleModel`](crate::VehicleModel).

pub mod bicycle;
pub mod car;
pub mod pedestrian;

pub use bicycle::BicycleModel;
pub use car::CarModel;
pub use pedestrian::PedestrianModel;
