//! Error types for payment methods.

use thiserror::Error;

/// Result type alias for payment operations
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors that can occur while building or processing payments.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Amount below zero
    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    /// Amount that is not a finite number in plain decimal notation
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount too large to represent exactly
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Payment method name that matches no known kind
    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// Batch row that cannot be turned into a payment request
    #[error("Invalid payment request at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// More than one command line argument
    #[error("Unexpected argument {0:?}. Usage: payment-methods [requests.csv]")]
    UnexpectedArgument(std::ffi::OsString),
}
