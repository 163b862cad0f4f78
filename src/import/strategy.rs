//! Parser-based import strategies (tiers 1 and 2).
//!
//! Both tiers delegate to the `csv` crate: headers on, double-quote
//! quoting/escaping, no comment-line interpretation, flexible record lengths
//! (ragged rows parse and are judged by validation, never dropped here).
//! Tier 1 sniffs the delimiter from the header line; tier 2 forces a comma.
//! Record-level UTF-8 errors are reported as warnings and the record skipped;
//! any other parser error fails the strategy.

use crate::error::{ImportError, ImportResult};

use super::normalize::{clean_field, normalize_header};
use super::table::{RawRecord, RawTable};

/// Delimiters the sniffer considers, in tie-losing order.
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Guess the field delimiter from the header line.
///
/// The candidate occurring most often wins. Zero occurrences of every
/// candidate, or a tie for first place, is a detection failure (`None`); the
/// caller escalates to the comma-forced strategy.
pub fn sniff_delimiter(text: &str) -> Option<u8> {
    let first_line = text.lines().next()?;

    let counts: Vec<usize> = DELIMITER_CANDIDATES
        .iter()
        .map(|d| first_line.bytes().filter(|b| b == d).count())
        .collect();

    let max = *counts.iter().max()?;
    if max == 0 || counts.iter().filter(|c| **c == max).count() > 1 {
        return None;
    }
    let winner = counts.iter().position(|c| *c == max)?;
    Some(DELIMITER_CANDIDATES[winner])
}

/// Parse the input with the `csv` crate using a fixed delimiter.
///
/// Record lengths are flexible: a ragged row parses and is left for strict
/// validation to accept or reject, so a stray delimiter can never silently
/// drop a row. Unreadable (non-UTF-8) records are passed to `warn` and
/// skipped over. A parse that yields zero records is a strategy failure
/// ([`ImportError::EmptyFile`]) so the caller can fall back.
pub fn parse_with_delimiter(
    text: &str,
    delimiter: u8,
    warn: &mut dyn FnMut(String),
) -> ImportResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .quote(b'"')
        .double_quote(true)
        .comment(None)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();

    let mut records: Vec<RawRecord> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // 1-based data-row number; the header line is not counted.
        let row = idx + 1;
        match result {
            Ok(record) => records.push(RawRecord {
                row,
                fields: record.iter().map(|f| clean_field(Some(f))).collect(),
            }),
            Err(e) if is_tolerated(&e) => {
                warn(format!("row {row}: tolerated parser irregularity: {e}"));
            }
            Err(e) => return Err(ImportError::Csv(e)),
        }
    }

    if records.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    Ok(RawTable { headers, records })
}

fn is_tolerated(e: &csv::Error) -> bool {
    matches!(e.kind(), csv::ErrorKind::Utf8 { .. })
}
