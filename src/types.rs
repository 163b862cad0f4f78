//! Core data model types for the menu importer.
//!
//! The importer turns a CSV file into a [`MenuImport`]: an ordered list of
//! validated [`ImportRow`]s plus, for the manual fallback strategy, a record
//! of the rows it had to skip.

use serde::{Deserialize, Serialize};

/// Header columns that must be present in every menu CSV.
pub const REQUIRED_COLUMNS: [&str; 3] = ["section_name", "item_name", "price"];

/// Optional header columns recognized by the importer. Any other columns in
/// the file are ignored.
pub const OPTIONAL_COLUMNS: [&str; 3] = ["description", "dietary_tags", "allergens"];

/// One validated, normalized record: a single menu item and its section
/// assignment.
///
/// Rows sharing the same `section_name` (case-sensitive, exact match) are
/// intended to be grouped into one section downstream; the importer preserves
/// the name text exactly so repeated occurrences stay equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    /// Section this item belongs to. Non-empty after trimming.
    pub section_name: String,
    /// Item display name. Non-empty after trimming.
    pub item_name: String,
    /// Item price. Always finite.
    pub price: f64,
    /// Optional free-text description. Empty strings normalize to `None`.
    pub description: Option<String>,
    /// Optional comma-separated dietary tags. Empty normalizes to `None`.
    pub dietary_tags: Option<String>,
    /// Optional comma-separated allergens. Empty normalizes to `None`.
    pub allergens: Option<String>,
}

/// Which parsing strategy produced the rows of a [`MenuImport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportTier {
    /// `csv`-crate parse with a sniffed delimiter.
    AutoDetect,
    /// `csv`-crate parse with the delimiter forced to comma.
    CommaForced,
    /// Hand-rolled line parser, used when both parser-based strategies fail.
    ManualFallback,
}

/// A data row the manual fallback strategy dropped instead of failing the
/// whole import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data-row number (header line not counted).
    pub row: usize,
    /// Human-readable reason the row was dropped.
    pub reason: String,
}

/// The success value of an import call.
///
/// `rows` preserves input file order; ordering determines item display order
/// within a section once grouped downstream. `skipped` is populated only by
/// the manual fallback strategy (the parser-based strategies abort on the
/// first invalid row instead of skipping).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuImport {
    /// Validated rows, in input order.
    pub rows: Vec<ImportRow>,
    /// Rows dropped by the manual fallback strategy.
    pub skipped: Vec<SkippedRow>,
    /// Strategy that produced the rows.
    pub tier: ImportTier,
}

impl MenuImport {
    /// Create an import result from rows, skip records, and the producing tier.
    pub fn new(rows: Vec<ImportRow>, skipped: Vec<SkippedRow>, tier: ImportTier) -> Self {
        Self {
            rows,
            skipped,
            tier,
        }
    }

    /// Number of validated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate distinct section names in first-seen order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.rows.iter().filter_map(move |r| {
            if seen.contains(&r.section_name.as_str()) {
                None
            } else {
                seen.push(r.section_name.as_str());
                Some(r.section_name.as_str())
            }
        })
    }
}
