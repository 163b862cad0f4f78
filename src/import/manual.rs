//! Manual fallback strategy (tier 3).
//!
//! A hand-rolled line parser used only when both `csv`-crate strategies fail.
//! It is deliberately forgiving: instead of aborting on the first bad row, the
//! lenient row builder in [`super::validate`] drops invalid rows so as much of
//! a badly-formed file as possible is salvaged.

use crate::error::{ImportError, ImportResult};
use crate::types::REQUIRED_COLUMNS;

use super::normalize::{clean_field, normalize_header};
use super::table::{RawRecord, RawTable};

/// Parse the input line by line.
///
/// Blank lines are discarded; both `\n` and `\r\n` endings are supported. The
/// first surviving line is the header, tokenized on commas and normalized; all
/// three required headers must be present or the parse fails naming the
/// missing ones. At least one data line must remain.
pub fn parse_manual(text: &str) -> ImportResult<RawTable> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .collect();

    // Need a header plus at least one data row.
    if lines.len() < 2 {
        return Err(ImportError::EmptyFile);
    }

    let headers: Vec<String> = lines[0].split(',').map(normalize_header).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingHeaders { columns: missing });
    }

    let records = lines[1..]
        .iter()
        .enumerate()
        .map(|(idx, line)| RawRecord {
            row: idx + 1,
            fields: split_quoted(line),
        })
        .collect();

    Ok(RawTable { headers, records })
}

/// Split one line on commas, respecting double-quoted fields.
///
/// A quote toggles in-quotes mode, inside which commas are literal content; a
/// doubled quote inside a quoted field emits a literal quote. Fields are
/// trimmed and empty fields become `None`.
fn split_quoted(line: &str) -> Vec<Option<String>> {
    let mut fields: Vec<Option<String>> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(Some(&current)));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(clean_field(Some(&current)));
    fields
}
