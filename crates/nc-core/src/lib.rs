//! `nc-core`: foundational types for the `navcore` engine.
//!
//! This crate is a dependency of every other `nc-*` crate.  It has no
//! `nc-*` dependencies and minimal external ones (only `geo`, for its
//! robust predicates, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TypeId`                                              |
//! | [`hybrid`]      | `HybridSequence<T, N>` (inline/heap small vector)     |
//! | [`geo`]         | `LatLon`, `MercatorPoint`, `distance_on_earth`        |
//! | [`orientation`] | robust side-of-line predicate                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.      |

pub mod geo;
pub mod hybrid;
pub mod ids;
pub mod orientation;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use self::geo::{LatLon, MercatorPoint, distance_on_earth};
pub use hybrid::HybridSequence;
pub use ids::TypeId;
pub use orientation::{orientation, oriented_s};
