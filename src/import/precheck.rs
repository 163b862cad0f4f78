//! Fast-fail header pre-check.
//!
//! Before any parse attempt, only the first line of the file is inspected.
//! This catches obviously-wrong files (an invoice export, a config file)
//! without paying for the multi-strategy parse pipeline.

use crate::error::{ImportError, ImportResult};
use crate::types::REQUIRED_COLUMNS;

/// Verify the first line mentions all required header tokens.
///
/// Matching is case-insensitive and substring-based, so delimiter and quoting
/// irregularities do not produce false failures here; exact header presence is
/// enforced again, per-column, during validation.
pub fn check_first_line(text: &str) -> ImportResult<()> {
    let first_line = text.lines().next().unwrap_or("").to_lowercase();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !first_line.contains(**col))
        .map(|col| (*col).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingHeaders { columns: missing })
    }
}
