//! `menu-csv-import` turns an arbitrary, possibly malformed CSV file
//! describing a restaurant menu into a validated, ordered list of
//! [`types::ImportRow`]s, or fails with a precise, user-actionable
//! [`ImportError`].
//!
//! The primary entrypoints are [`import::import_from_path`] and
//! [`import::import_from_str`].
//!
//! ## Input format
//!
//! A CSV text file with a mandatory header row containing at minimum
//! `section_name`, `item_name`, and `price` (column order irrelevant, extra
//! columns ignored), plus the optional columns `description`, `dietary_tags`,
//! and `allergens`. Fields are double-quoted when they embed commas; embedded
//! quotes are escaped by doubling.
//!
//! ## Three-tier parsing
//!
//! Parsing strategies are attempted in order, each strictly more lenient than
//! the last, moving on only when the previous one fails or yields no rows:
//!
//! 1. `csv`-crate parse with a delimiter sniffed from the header line
//! 2. `csv`-crate parse with the delimiter forced to comma
//! 3. a hand-rolled, quote-aware line parser that salvages what it can,
//!    skipping (and reporting) individually-invalid rows instead of aborting
//!
//! Under tiers 1–2 a single invalid row fails the whole import; a partially
//! imported menu would be confusing. The manual fallback trades that
//! strictness for salvage, and every skipped row is recorded in
//! [`types::MenuImport::skipped`].
//!
//! ## Quick example
//!
//! ```rust
//! use menu_csv_import::import::{import_from_str, ImportOptions};
//!
//! # fn main() -> Result<(), menu_csv_import::ImportError> {
//! let csv = "\
//! section_name,item_name,price,description,dietary_tags,allergens
//! Starters,Caesar Salad,8.99,\"Fresh romaine, with croutons\",Vegetarian,Dairy
//! Starters,Garlic Bread,5.50,,,
//! ";
//! let import = import_from_str(csv, &ImportOptions::default())?;
//! assert_eq!(import.row_count(), 2);
//! assert_eq!(import.rows[0].price, 8.99);
//! assert_eq!(import.rows[1].description, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Grouping for persistence
//!
//! The importer never constructs sections; [`grouping::group_into_sections`]
//! is the downstream step that clusters rows by exact `section_name` equality,
//! preserving first-seen section order and within-section item order:
//!
//! ```rust
//! use menu_csv_import::grouping::group_into_sections;
//! use menu_csv_import::import::{import_from_str, ImportOptions};
//!
//! # fn main() -> Result<(), menu_csv_import::ImportError> {
//! let csv = "section_name,item_name,price\nStarters,Soup,4.50\nStarters,Bread,3.00\n";
//! let import = import_from_str(csv, &ImportOptions::default())?;
//! let sections = group_into_sections(&import.rows);
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].items.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! Tier fallbacks, tolerated parser irregularities, and skipped rows are
//! reported through an injected [`import::ImportObserver`]; see
//! [`import::ImportOptions`]. Without an observer the importer is silent.
//!
//! ## Modules
//!
//! - [`import`]: the three-tier parse/clean/validate pipeline
//! - [`types`]: import row and result types
//! - [`grouping`]: downstream section grouping for menu creation
//! - [`error`]: error types used across the importer

pub mod error;
pub mod grouping;
pub mod import;
pub mod types;

pub use error::{ImportError, ImportResult};
