//! Import entry points and tier orchestration.
//!
//! Most callers should use [`import_from_path`] or [`import_from_str`], which:
//!
//! - fast-fail on an obviously-wrong header line ([`super::precheck`])
//! - attempt the three parsing strategies in order, each strictly more lenient
//!   than the last ([`super::strategy`], then [`super::manual`])
//! - clean and validate whatever the winning strategy produced
//! - optionally report success/warnings/failures to an
//!   [`super::observability::ImportObserver`]
//!
//! Tier fallback is not a retry of the same operation: a strategy is attempted
//! at most once, and if the manual fallback also fails the call fails
//! permanently for that input.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ImportError, ImportResult};
use crate::types::{ImportTier, MenuImport};

use super::observability::{ImportContext, ImportObserver, ImportSeverity, ImportStats};
use super::table::RawTable;
use super::{manual, precheck, strategy, validate};

/// Options controlling import behavior.
///
/// Use [`Default`] for common cases (no observer, alert at `Critical`).
#[derive(Clone)]
pub struct ImportOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ImportObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ImportSeverity,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: ImportSeverity::Critical,
        }
    }
}

impl fmt::Debug for ImportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Import a menu CSV from a file path.
///
/// Reading the file is the only I/O this module performs; everything after is
/// a pure transformation of the text.
pub fn import_from_path(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> ImportResult<MenuImport> {
    let path = path.as_ref();
    let ctx = ImportContext {
        source: path.display().to_string(),
    };
    let result = std::fs::read_to_string(path)
        .map_err(ImportError::from)
        .and_then(|text| run_tiers(&text, &ctx, options));
    observe_outcome(&ctx, options, &result);
    result
}

/// Import a menu CSV from any reader (e.g. an uploaded byte stream).
pub fn import_from_reader(
    mut reader: impl Read,
    options: &ImportOptions,
) -> ImportResult<MenuImport> {
    let ctx = ImportContext {
        source: "<memory>".to_string(),
    };
    let mut text = String::new();
    let result = reader
        .read_to_string(&mut text)
        .map_err(ImportError::from)
        .and_then(|_| run_tiers(&text, &ctx, options));
    observe_outcome(&ctx, options, &result);
    result
}

/// Import a menu CSV already held in memory. The pure core of the importer.
pub fn import_from_str(text: &str, options: &ImportOptions) -> ImportResult<MenuImport> {
    let ctx = ImportContext {
        source: "<memory>".to_string(),
    };
    let result = run_tiers(text, &ctx, options);
    observe_outcome(&ctx, options, &result);
    result
}

fn run_tiers(
    text: &str,
    ctx: &ImportContext,
    options: &ImportOptions,
) -> ImportResult<MenuImport> {
    precheck::check_first_line(text)?;

    let mut warn = |message: String| {
        if let Some(obs) = options.observer.as_ref() {
            obs.on_warning(ctx, &message);
        }
    };

    // Tier 1: sniffed delimiter. A parse error, a sniff failure, or zero
    // parsed records all escalate; a successful parse is final and goes
    // through strict validation.
    let tier1_failure = match strategy::sniff_delimiter(text) {
        Some(delimiter) => match strategy::parse_with_delimiter(text, delimiter, &mut warn) {
            Ok(table) => return finish_strict(table, ImportTier::AutoDetect),
            Err(e) => e.to_string(),
        },
        None => "could not detect a delimiter in the header line".to_string(),
    };
    warn(format!(
        "auto-detect parse failed ({tier1_failure}); retrying with comma delimiter"
    ));

    // Tier 2: comma forced.
    let tier2_failure = match strategy::parse_with_delimiter(text, b',', &mut warn) {
        Ok(table) => return finish_strict(table, ImportTier::CommaForced),
        Err(e) => e.to_string(),
    };
    warn(format!(
        "comma-delimited parse failed ({tier2_failure}); falling back to manual line parser"
    ));

    // Tier 3: manual fallback. Missing-header and empty-data conditions keep
    // their specific errors; anything else the manual parser reports becomes
    // the tiers-exhausted message.
    let table = match manual::parse_manual(text) {
        Ok(table) => table,
        Err(e @ (ImportError::MissingHeaders { .. } | ImportError::EmptyFile)) => return Err(e),
        Err(e) => {
            return Err(ImportError::TiersExhausted {
                message: e.to_string(),
            });
        }
    };
    let (rows, skipped) = validate::build_rows_lenient(&table)?;
    for skip in &skipped {
        warn(format!("row {} skipped: {}", skip.row, skip.reason));
    }
    if rows.is_empty() {
        return Err(ImportError::TiersExhausted {
            message: "no valid rows remained after manual parsing".to_string(),
        });
    }
    Ok(MenuImport::new(rows, skipped, ImportTier::ManualFallback))
}

fn finish_strict(table: RawTable, tier: ImportTier) -> ImportResult<MenuImport> {
    let rows = validate::build_rows_strict(&table)?;
    Ok(MenuImport::new(rows, Vec::new(), tier))
}

fn observe_outcome(
    ctx: &ImportContext,
    options: &ImportOptions,
    result: &ImportResult<MenuImport>,
) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(import) => obs.on_success(
            ctx,
            ImportStats {
                rows: import.row_count(),
                skipped: import.skipped.len(),
                tier: import.tier,
            },
        ),
        Err(e) => {
            let severity = severity_for_error(e);
            obs.on_failure(ctx, severity, e);
            if severity >= options.alert_at_or_above {
                obs.on_alert(ctx, severity, e);
            }
        }
    }
}

fn severity_for_error(e: &ImportError) -> ImportSeverity {
    match e {
        ImportError::Io(_) => ImportSeverity::Critical,
        ImportError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => ImportSeverity::Critical,
            _ => ImportSeverity::Error,
        },
        _ => ImportSeverity::Error,
    }
}
