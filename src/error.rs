//! Error types for the order report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading input files or rendering the report.
///
/// None of these are recovered from: the first error aborts the run.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to open an input or output file
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or write a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed customer line
    #[error("Invalid customer record at line {line}: {message}")]
    InvalidCustomer { line: u64, message: String },

    /// Malformed catalog item line
    #[error("Invalid item record at line {line}: {message}")]
    InvalidItem { line: u64, message: String },

    /// Malformed order header line
    #[error("Invalid order record at line {line}: {message}")]
    InvalidOrder { line: u64, message: String },

    /// Malformed payment line
    #[error("Invalid payment record at line {line}: {message}")]
    InvalidPayment { line: u64, message: String },

    /// Order date not in `YYYY-MM-DD` form
    #[error("Invalid order date {value:?} at line {line}, expected YYYY-MM-DD")]
    InvalidDate { line: u64, value: String },

    /// Payment code other than 1, 2 or 3
    #[error("Unknown payment code {code} at line {line}")]
    UnknownPaymentCode { line: u64, code: u32 },

    /// Order references a customer id missing from the customer table
    #[error("Order #{order_id} references unknown customer {customer_id}")]
    UnknownCustomer { order_id: u32, customer_id: u32 },

    /// Order references an item id missing from the catalog
    #[error("Order #{order_id} references unknown item {item_id}")]
    UnknownItem { order_id: u32, item_id: u32 },
}
