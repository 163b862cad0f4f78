//! Row validation and [`ImportRow`] construction.
//!
//! Two policies over the same per-row check:
//!
//! - [`build_rows_strict`] (tiers 1–2): the first invalid row aborts the whole
//!   import. A partially-imported menu would be confusing.
//! - [`build_rows_lenient`] (manual fallback): invalid rows are dropped and
//!   reported, so a badly-formed file still yields whatever is salvageable.

use crate::error::{ImportError, ImportResult};
use crate::types::{ImportRow, SkippedRow, REQUIRED_COLUMNS};

use super::normalize::parse_price;
use super::table::{RawRecord, RawTable};

/// Header positions of the known columns, resolved once per table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    section_name: usize,
    item_name: usize,
    price: usize,
    description: Option<usize>,
    dietary_tags: Option<usize>,
    allergens: Option<usize>,
}

/// Resolve the known columns against a table's normalized headers.
///
/// Column order is irrelevant and unrecognized columns are ignored. Missing
/// required columns are all named in the error.
pub fn resolve_columns(table: &RawTable) -> ImportResult<ColumnMap> {
    let section_name = table.header_index("section_name");
    let item_name = table.header_index("item_name");
    let price = table.header_index("price");

    match (section_name, item_name, price) {
        (Some(section_name), Some(item_name), Some(price)) => Ok(ColumnMap {
            section_name,
            item_name,
            price,
            description: table.header_index("description"),
            dietary_tags: table.header_index("dietary_tags"),
            allergens: table.header_index("allergens"),
        }),
        _ => {
            let present = [section_name, item_name, price];
            let columns = REQUIRED_COLUMNS
                .iter()
                .zip(present)
                .filter(|(_, idx)| idx.is_none())
                .map(|(col, _)| (*col).to_string())
                .collect();
            Err(ImportError::MissingHeaders { columns })
        }
    }
}

/// Build every row, aborting on the first invalid one.
pub fn build_rows_strict(table: &RawTable) -> ImportResult<Vec<ImportRow>> {
    let map = resolve_columns(table)?;

    if table.records.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    table
        .records
        .iter()
        .map(|rec| build_row(&map, rec))
        .collect()
}

/// Build every valid row, collecting a skip record for each invalid one.
pub fn build_rows_lenient(table: &RawTable) -> ImportResult<(Vec<ImportRow>, Vec<SkippedRow>)> {
    let map = resolve_columns(table)?;

    let mut rows = Vec::with_capacity(table.records.len());
    let mut skipped = Vec::new();
    for rec in &table.records {
        match build_row(&map, rec) {
            Ok(row) => rows.push(row),
            Err(e) => skipped.push(SkippedRow {
                row: rec.row,
                reason: e.to_string(),
            }),
        }
    }
    Ok((rows, skipped))
}

/// Validate a single record, checking required fields in order:
/// `section_name`, then `item_name`, then `price`. The first violation
/// determines the row's error.
fn build_row(map: &ColumnMap, rec: &RawRecord) -> ImportResult<ImportRow> {
    let section_name = rec
        .field(map.section_name)
        .ok_or(ImportError::MissingField {
            row: rec.row,
            field: "section_name",
        })?;
    let item_name = rec.field(map.item_name).ok_or(ImportError::MissingField {
        row: rec.row,
        field: "item_name",
    })?;
    let raw_price = rec.field(map.price).ok_or(ImportError::MissingField {
        row: rec.row,
        field: "price",
    })?;
    let price = parse_price(raw_price).ok_or_else(|| ImportError::InvalidPrice {
        row: rec.row,
        raw: raw_price.to_owned(),
    })?;

    let optional = |idx: Option<usize>| idx.and_then(|i| rec.field(i)).map(str::to_owned);

    Ok(ImportRow {
        section_name: section_name.to_owned(),
        item_name: item_name.to_owned(),
        price,
        description: optional(map.description),
        dietary_tags: optional(map.dietary_tags),
        allergens: optional(map.allergens),
    })
}
