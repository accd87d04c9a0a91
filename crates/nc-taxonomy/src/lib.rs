//! `nc-taxonomy`: the type-tag registry and per-feature type lists.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`classificator`] | `Classificator` (path ↔ `TypeId`, truncation, names)   |
//! | [`types_holder`]  | `TypesHolder` (a feature's types, inline up to 8)      |
//! | [`loader`]        | `load_taxonomy_csv`, `load_taxonomy_reader`            |
//! | [`error`]         | `TaxonomyError`, `TaxonomyResult<T>`                   |

pub mod classificator;
pub mod error;
pub mod loader;
pub mod types_holder;

#[cfg(test)]
mod tests;

pub use classificator::Classificator;
pub use error::{TaxonomyError, TaxonomyResult};
pub use loader::{load_taxonomy_csv, load_taxonomy_reader};
pub use types_holder::TypesHolder;
