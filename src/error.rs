use thiserror::Error;

/// Convenience result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Error type returned by the menu importer.
///
/// Every variant maps to a distinct user-facing message; callers are expected
/// to show the message verbatim and let the user fix and re-upload the file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic CSV parse failure, wrapping the underlying parser's message.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more of the required header columns is absent.
    #[error("missing required column(s): {}", columns.join(", "))]
    MissingHeaders { columns: Vec<String> },

    /// The file contains a header but no data rows (or no rows at all).
    #[error("the file contains no menu rows")]
    EmptyFile,

    /// A data row is missing a required field. `row` is the 1-based data-row
    /// number (the header line is not counted).
    #[error("row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    /// A data row's price did not parse to a finite number.
    #[error("row {row} has an invalid price (raw='{raw}')")]
    InvalidPrice { row: usize, raw: String },

    /// Every parsing strategy failed, including the manual fallback. Carries
    /// the most specific message available from the last attempted strategy.
    #[error("could not parse file with any strategy: {message}")]
    TiersExhausted { message: String },
}
