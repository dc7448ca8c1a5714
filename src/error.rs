// src/error.rs

use thiserror::Error;

/// A malformed column specification: the layout itself is wrong, before any
/// data line is looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column `{label}`: invalid byte range {start}-{end}")]
    BadRange {
        label: String,
        start: usize,
        end: usize,
    },

    #[error("column `{label}` ends at byte {end}, past record length {record_len}")]
    OutOfBounds {
        label: String,
        end: usize,
        record_len: usize,
    },

    #[error("`{first}` and `{second}` both claim byte {byte}")]
    Overlap {
        first: String,
        second: String,
        byte: usize,
    },

    #[error("bytes {start}-{end} are covered by no column and not declared spare")]
    UndeclaredGap { start: usize, end: usize },

    #[error("duplicate column label `{label}`")]
    DuplicateLabel { label: String },

    #[error("unrecognized format code `{code}`")]
    BadFormatCode { code: String },

    #[error("column `{label}`: format width {format_width} != byte range width {range_width}")]
    WidthMismatch {
        label: String,
        format_width: usize,
        range_width: usize,
    },
}

/// A data line violating its schema. Line numbers are attached by the
/// reader via [`Error::Format`](crate::error::Error).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("record is {actual} bytes, schema requires {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("column `{column}`: `{value}` is not a valid {kind}")]
    BadNumber {
        column: String,
        value: String,
        kind: &'static str,
    },

    #[error("column `{column}` is blank but not nullable")]
    BlankField { column: String },

    #[error("column `{column}` contains non-UTF-8 bytes")]
    BadEncoding { column: String },

    #[error("separator byte {offset} is not blank")]
    DirtySeparator { offset: usize },

    #[error("column `{column}`: `{value}` does not fit in {width} bytes")]
    Overflow {
        column: String,
        value: String,
        width: usize,
    },

    #[error("record has no column `{column}`")]
    MissingColumn { column: String },

    #[error("column `{column}` holds a {found} where a {expected} was expected")]
    WrongType {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Top-level error for streaming reads: schema problems, per-line format
/// problems (with the offending 1-based line number), or plain I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("line {line}: {source}")]
    Format {
        line: u64,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Attach a 1-based line number, lifting into the top-level error.
    pub fn at_line(self, line: u64) -> Error {
        Error::Format { line, source: self }
    }
}
