//! Error types for the crate.
//!
//! All fallible operations return [`LifeError`] through the crate's
//! [`Result`] alias.

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors that can occur while building, querying, or persisting a simulation.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A coordinate fell outside the grid.
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A persisted document contained no rows, or its first row was empty.
    #[error("grid document is empty")]
    EmptyDocument,

    /// A persisted document's rows do not all have the same length.
    #[error("grid document row {row} has {found} cells, expected {expected}")]
    JaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A persisted document contained something other than 0 or 1.
    #[error("grid document cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: i64,
    },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document was not well-formed JSON of the expected shape.
    #[error("malformed grid document: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a grid file failed.
    #[error("grid file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A grid's cell count does not match its dimensions.
    #[error("{rows}x{cols} grid holds {found} cells")]
    CellCountMismatch {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Number of cells actually present.
        found: usize,
    },

    /// A decoded checkpoint violates the engine's invariants.
    #[error("corrupt checkpoint: {0}")]
    CorruptCheckpoint(String),

    /// A binary checkpoint could not be encoded or decoded.
    #[error("checkpoint encoding failed: {0}")]
    Checkpoint(#[from] bincode::Error),
}

impl LifeError {
    /// Whether this error describes a malformed persisted document.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            LifeError::EmptyDocument
                | LifeError::JaggedRow { .. }
                | LifeError::InvalidCellValue { .. }
                | LifeError::Json(_)
        )
    }
}
