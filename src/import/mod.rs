//! The CSV menu importer.
//!
//! Most callers should use [`import_from_path`] / [`import_from_str`] (from
//! [`pipeline`]), which:
//!
//! - pre-check the header line and fail fast on obviously-wrong files
//! - try three parsing strategies in order of increasing leniency
//! - clean and validate the parsed rows into a [`crate::types::MenuImport`]
//! - optionally report outcomes to an [`ImportObserver`]
//!
//! Strategy internals are available under:
//! - [`strategy`] (tiers 1–2, `csv`-crate based)
//! - [`manual`] (tier 3, hand-rolled line parser)

pub mod manual;
pub mod normalize;
pub mod observability;
pub mod pipeline;
pub mod precheck;
pub mod strategy;
pub mod table;
pub mod validate;

pub use observability::{
    CompositeObserver, FileObserver, ImportContext, ImportObserver, ImportSeverity, ImportStats,
    StdErrObserver,
};
pub use pipeline::{import_from_path, import_from_reader, import_from_str, ImportOptions};
