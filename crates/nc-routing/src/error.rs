//! Routing-profile error type.
//!
//! Every variant is a configuration defect found while a profile is being
//! built.  Queries against a finished profile never fail.

use thiserror::Error;

use nc_taxonomy::TaxonomyError;

/// Errors produced while constructing a vehicle model.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("taxonomy: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("{model} model has an empty speed table")]
    EmptySpeedTable { model: &'static str },

    #[error("{model} model: speed {speed} km/h for {path} must be positive and finite")]
    BadSpeed { model: &'static str, path: String, speed: f64 },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
