//! `nc-search`: street geometry helpers for the geocoder.
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`segment`] | `SegmentProjector` (clamped projection on one edge) |
//! | [`street`]  | `StreetProjector`, `ProjectionOnStreet`            |

pub mod segment;
pub mod street;

#[cfg(test)]
mod tests;

pub use segment::SegmentProjector;
pub use street::{ProjectionOnStreet, StreetProjector};
