//! # wisecat
//!
//! Reader and validator for the two fixed-width catalog files published
//! with the AllWISE SVM YSO-candidate study: `clasi-ii.dat` (Class I/II)
//! and `clasiii.dat` (Class III), 354 bytes per record.
//!
//! The layout is declarative: a [`schema::CatalogSchema`] names every
//! column's byte range, format code, unit and nullability, and the built-in
//! [`schema::allwise`] layout reproduces the published byte table exactly.
//! [`parse::CatalogReader`] streams records lazily; missing optional fields
//! parse to an explicit [`parse::Value::Absent`], never to zero or NaN, and
//! malformed lines surface as errors with their line number instead of
//! being skipped. [`catalog::YsoCandidate`] is the typed view of one row,
//! and [`photometry`] converts its magnitudes to flux densities.
//!
//! ```no_run
//! use wisecat::parse::CatalogReader;
//!
//! # fn main() -> Result<(), wisecat::Error> {
//! for record in CatalogReader::open("clasiii.dat")? {
//!     let record = record?;
//!     if let Some(name) = record.get("Name").and_then(|v| v.as_str()) {
//!         println!("{name}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod parse;
pub mod photometry;
pub mod schema;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{Error, FormatError, SchemaError};
