//! CSV taxonomy loader.
//!
//! # CSV format
//!
//! One row per type.  Path segments are separated by `|` and trimmed; every
//! prefix of a path is registered implicitly.  Lines starting with `#` are
//! comments.
//!
//! ```csv
//! path
//! highway|motorway
//! highway|primary|bridge
//! route|ferry|motorcar
//! hwtag|oneway
//! ```
//!
//! Rows are registered in file order, so handles are stable for a given file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::classificator::{Classificator, PATH_SEPARATOR};
use crate::TaxonomyError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TaxonomyRecord {
    path: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Classificator`] from a CSV file.
pub fn load_taxonomy_csv(path: &Path) -> Result<Classificator, TaxonomyError> {
    let file = std::fs::File::open(path)
        .map_err(TaxonomyError::Io)?;
    load_taxonomy_reader(file)
}

/// Like [`load_taxonomy_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for taxonomies embedded
/// with `include_bytes!`.
pub fn load_taxonomy_reader<R: Read>(reader: R) -> Result<Classificator, TaxonomyError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut classificator = Classificator::new();
    for result in csv_reader.deserialize::<TaxonomyRecord>() {
        let row = result.map_err(|e| TaxonomyError::Parse(e.to_string()))?;
        let segments: Vec<&str> = row.path.split(PATH_SEPARATOR).map(str::trim).collect();
        classificator.add_path(&segments)?;
    }

    log::debug!("loaded taxonomy with {} types", classificator.len());
    Ok(classificator)
}
