//! Intermediate representation shared by the parsing strategies.
//!
//! Every strategy, library-based or manual, reduces the input to a
//! [`RawTable`]: normalized header names plus positionally-indexed, cleaned
//! field values. Validation then turns a `RawTable` into
//! [`crate::types::ImportRow`]s without caring which strategy produced it.

/// A single parsed data row. Fields are cleaned (trimmed, empty mapped to
/// `None`) but not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based data-row number (header line not counted).
    pub row: usize,
    /// Field values in header order.
    pub fields: Vec<Option<String>>,
}

impl RawRecord {
    /// Field value at a header position, if the row has one.
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).and_then(|f| f.as_deref())
    }
}

/// Parsed-but-unvalidated output of one parsing strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Normalized header names (trimmed, lowercased, whitespace collapsed
    /// to underscores), in file order.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Position of a normalized header name, if present.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
