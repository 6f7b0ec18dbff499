//! Declarative filtering of transaction lists.
//!
//! A [FilterSpec] is owned by the UI layer: it is created with every field
//! defaulted ("no filter"), mutated field by field as the user interacts
//! with the controls, and reset on demand. [apply] reduces a transaction
//! list to the order-preserving subsequence matching the spec. It is a pure
//! function: "now" is the explicit `today` argument, so results are
//! memoizable on `(transactions, spec, today)`.

mod amount;
mod period;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::{Transaction, TransactionType};

pub use amount::AmountRange;
pub use period::{DateRange, TimePeriod, month_bounds, resolve_period};

/// A transaction-type constraint: everything, or one type exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// No type constraint.
    #[default]
    All,
    /// Only expense transactions.
    Expense,
    /// Only income transactions.
    Income,
    /// Only savings transactions.
    Savings,
}

impl TypeFilter {
    /// Whether a transaction of `transaction_type` satisfies the constraint.
    pub fn matches(self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Expense => transaction_type == TransactionType::Expense,
            TypeFilter::Income => transaction_type == TransactionType::Income,
            TypeFilter::Savings => transaction_type == TransactionType::Savings,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Expense => TypeFilter::Expense,
            TransactionType::Income => TypeFilter::Income,
            TransactionType::Savings => TypeFilter::Savings,
        }
    }
}

/// A category constraint: everything, or one label exactly.
///
/// Deserializes from the UI's string field, where the literal `"all"` means
/// no constraint and any other string is an exact label match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category constraint.
    #[default]
    All,
    /// Only transactions whose label equals the given string.
    Only(String),
}

impl CategoryFilter {
    /// Whether a transaction labelled `category` satisfies the constraint.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_owned(),
            CategoryFilter::Only(label) => label,
        }
    }
}

/// The user-selected constraints narrowing which transactions are shown.
///
/// `Default` is the "no filter" state. The spec is ephemeral: it is never
/// persisted and is recreated per session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// The time-period preset to filter by.
    pub time_period: TimePeriod,
    /// The start date used when `time_period` is [TimePeriod::Custom].
    pub custom_date_from: Option<Date>,
    /// The end date used when `time_period` is [TimePeriod::Custom].
    pub custom_date_to: Option<Date>,
    /// The transaction-type constraint.
    #[serde(rename = "type")]
    pub type_filter: TypeFilter,
    /// The category constraint.
    pub category: CategoryFilter,
    /// The amount-range preset to filter by.
    pub amount_range: AmountRange,
    /// The lower bound used when `amount_range` is [AmountRange::Custom].
    pub custom_amount_min: Option<f64>,
    /// The upper bound used when `amount_range` is [AmountRange::Custom].
    pub custom_amount_max: Option<f64>,
}

impl FilterSpec {
    /// Return the spec to its all-fields-default "no filter" state.
    pub fn reset(&mut self) {
        *self = FilterSpec::default();
    }
}

/// Reduce `transactions` to the subsequence matching `spec`.
///
/// The result preserves the input order and the input is never mutated.
/// A transaction passes iff it satisfies the time AND type AND category AND
/// amount predicates; the predicates are independent of one another.
pub fn apply(transactions: &[Transaction], spec: &FilterSpec, today: Date) -> Vec<Transaction> {
    let date_range = resolve_period(
        spec.time_period,
        today,
        spec.custom_date_from,
        spec.custom_date_to,
    );

    transactions
        .iter()
        .filter(|transaction| matches_spec(transaction, spec, date_range.as_ref()))
        .cloned()
        .collect()
}

fn matches_spec(
    transaction: &Transaction,
    spec: &FilterSpec,
    date_range: Option<&DateRange>,
) -> bool {
    let in_period = date_range.is_none_or(|range| range.contains(transaction.date));
    let type_matches = spec.type_filter.matches(transaction.transaction_type);
    let category_matches = spec.category.matches(&transaction.category);
    let amount_matches = spec.amount_range.matches(
        transaction.amount,
        spec.custom_amount_min,
        spec.custom_amount_max,
    );

    in_period && type_matches && category_matches && amount_matches
}
