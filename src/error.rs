//! Error types for the summary engine.

use crate::transaction::TxType;
use thiserror::Error;

/// Result type alias for summary operations
pub type Result<T> = std::result::Result<T, SummaryError>;

/// A single raw record that could not be turned into a transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Date is not a valid `MM/DD` month and day
    #[error("invalid date {0:?}, expected MM/DD")]
    InvalidDate(String),

    /// Amount is not a plain decimal literal
    #[error("invalid amount {0:?}, expected a decimal number")]
    InvalidAmount(String),

    /// Amount too large to carry 2 decimal places
    #[error("amount {0:?} is out of range")]
    AmountOutOfRange(String),

    /// A required column is absent or empty
    #[error("missing {0} field")]
    MissingField(&'static str),
}

/// Errors that can occur while summarizing a transaction file.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed transaction record; aborts the whole batch
    #[error("Invalid transaction at row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ParseError,
    },

    /// Average requested for a type with no transactions
    #[error("Average undefined: no {0} transactions")]
    DivisionUndefined(TxType),

    /// A running sum no longer fits in a 2-decimal amount
    #[error("Amount overflow while summing {0}")]
    Overflow(&'static str),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: account-summary <input.csv>...")]
    MissingArgument,

    /// Invalid environment configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
