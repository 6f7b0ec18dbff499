//! Moneylens is the analysis engine of a personal-finance tracker.
//!
//! It turns a list of income, expense, and savings transactions into the
//! derived views a budgeting UI displays: filtered subsets, totals by type
//! and category, dense monthly series, month-over-month comparisons,
//! running balances, budget reports, and CSV exports.
//!
//! Persistence and authentication live elsewhere. This crate consumes
//! already-deserialized data through the read seams in [store], performs
//! pure synchronous transformations, and returns plain immutable values.

#![warn(missing_docs)]

use time::Date;

pub mod category;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod format;
pub mod preferences;
pub mod store;
pub mod summary;
pub mod transaction;

pub use category::{Category, CategoryLabel, CategoryName};
pub use filter::{AmountRange, CategoryFilter, FilterSpec, TimePeriod, TypeFilter};
pub use transaction::{Transaction, TransactionRecord, TransactionType, sanitize_records};

/// The errors that may occur in the engine.
///
/// Degenerate inputs (empty transaction lists, zero income, missing custom
/// filter bounds) are never errors; they are resolved by definition in the
/// functions that encounter them. These variants cover genuine contract
/// violations at the crate's boundaries.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction amount was negative.
    ///
    /// Amounts are always non-negative; whether a transaction adds to or
    /// subtracts from the balance is decided by its type.
    #[error("transaction amount must not be negative, got {0}")]
    NegativeAmount(f64),

    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore
    /// future dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// There was an error parsing a date string from an upstream record.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not parse date \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// An upstream record carried a transaction type the engine does not
    /// recognize.
    #[error("unrecognized transaction type \"{0}\"")]
    UnknownTransactionType(String),

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The CSV export could not be written.
    #[error("could not write CSV export: {0}")]
    CsvExport(String),

    /// A data source failed to produce its records.
    ///
    /// Implementations of the [store] traits wrap their transport or
    /// storage errors in this variant.
    #[error("the data source request failed: {0}")]
    SourceError(String),

    /// Display preferences could not be saved to the injected store.
    #[error("failed to save preferences: {0}")]
    PreferencesSave(String),

    /// Display preferences could not be loaded from the injected store.
    #[error("failed to load preferences: {0}")]
    PreferencesLoad(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvExport(value.to_string())
    }
}
