//! Defines the core transaction model and the validation of raw records
//! arriving from the external data service.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// Dates from the data service are ISO-8601 calendar dates, e.g. "2025-01-15".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Opaque identifier assigned to a transaction by the external data service.
pub type TransactionId = String;

/// The kind of money movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
    /// Money put aside. Savings are committed funds, so they reduce the
    /// spendable balance just like an expense.
    Savings,
}

impl TransactionType {
    /// The effect of one unit of this type on the spendable balance.
    pub fn sign(self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Expense | TransactionType::Savings => -1.0,
        }
    }

    /// The lowercase string form used by the data service and CSV export.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Savings => "savings",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            "savings" => Ok(TransactionType::Savings),
            _ => Err(Error::UnknownTransactionType(s.to_owned())),
        }
    }
}

/// A single recorded money movement.
///
/// The amount is always non-negative; the effect on the balance comes from
/// [TransactionType::sign]. To create a validated `Transaction`, use
/// [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is an expense, income, or savings contribution.
    pub transaction_type: TransactionType,
    /// The free-text category label for the transaction.
    ///
    /// The label should match a category's name, but orphaned labels are
    /// tolerated; see [crate::category::CategoryLabel].
    pub category: String,
    /// The amount of money moved, always `>= 0`.
    pub amount: f64,
    /// An optional note describing the transaction.
    pub notes: Option<String>,
}

impl Transaction {
    /// Start building a validated transaction.
    pub fn build(
        id: &str,
        amount: f64,
        date: Date,
        transaction_type: TransactionType,
    ) -> TransactionBuilder {
        TransactionBuilder {
            id: id.to_owned(),
            amount,
            date,
            transaction_type,
            category: String::new(),
            notes: None,
        }
    }

    /// The transaction's contribution to the spendable balance: positive for
    /// income, negative for expenses and savings.
    pub fn signed_amount(&self) -> f64 {
        self.transaction_type.sign() * self.amount
    }
}

/// A builder for creating [Transaction] instances.
///
/// Category and notes are optional; call [TransactionBuilder::finalize] to
/// validate and create the transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    id: String,
    amount: f64,
    date: Date,
    transaction_type: TransactionType,
    category: String,
    notes: Option<String>,
}

impl TransactionBuilder {
    /// Set the category label for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the notes for the transaction.
    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_owned());
        self
    }

    /// Validate the builder and create the transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NegativeAmount] if the amount is negative,
    /// - or [Error::FutureDate] if the date is after `today`.
    pub fn finalize(self, today: Date) -> Result<Transaction, Error> {
        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        if self.date > today {
            return Err(Error::FutureDate(self.date));
        }

        Ok(Transaction {
            id: self.id,
            date: self.date,
            transaction_type: self.transaction_type,
            category: self.category,
            amount: self.amount,
            notes: self.notes,
        })
    }
}

/// The untyped shape of a transaction as delivered by the external data
/// service, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    /// The ID assigned by the data service.
    pub id: String,
    /// The transaction date as an ISO-8601 string.
    pub date: String,
    /// The transaction type as a lowercase string.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The free-text category label.
    pub category: String,
    /// The transaction amount.
    pub amount: f64,
    /// An optional note.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TransactionRecord {
    /// Validate the record and convert it into a [Transaction].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidDateFormat] if the date string cannot be parsed,
    /// - or [Error::UnknownTransactionType] if the type string is not one of
    ///   `expense`, `income`, or `savings`,
    /// - or [Error::NegativeAmount] if the amount is negative,
    /// - or [Error::FutureDate] if the date is after `today`.
    pub fn into_transaction(self, today: Date) -> Result<Transaction, Error> {
        let date = Date::parse(&self.date, DATE_FORMAT)
            .map_err(|error| Error::InvalidDateFormat(error.to_string(), self.date.clone()))?;
        let transaction_type = self.transaction_type.parse()?;

        let mut builder =
            Transaction::build(&self.id, self.amount, date, transaction_type).category(&self.category);

        if let Some(notes) = &self.notes {
            builder = builder.notes(notes);
        }

        builder.finalize(today)
    }
}

/// Validate a batch of upstream records, dropping malformed ones.
///
/// Malformed records are a defect in the data service's contract, so rather
/// than let them silently skew the aggregates they are rejected here and
/// logged at the `warn` level.
pub fn sanitize_records(records: Vec<TransactionRecord>, today: Date) -> Vec<Transaction> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();

            match record.into_transaction(today) {
                Ok(transaction) => Some(transaction),
                Err(error) => {
                    tracing::warn!("dropping malformed transaction record {id}: {error}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{Transaction, TransactionRecord, TransactionType, sanitize_records},
    };

    #[test]
    fn type_strings_round_trip() {
        for (text, want) in [
            ("expense", TransactionType::Expense),
            ("income", TransactionType::Income),
            ("savings", TransactionType::Savings),
        ] {
            let got: TransactionType = text.parse().unwrap();
            assert_eq!(got, want);
            assert_eq!(got.to_string(), text);
        }
    }

    #[test]
    fn unknown_type_string_is_rejected() {
        let result = "transfer".parse::<TransactionType>();

        assert_eq!(
            result,
            Err(Error::UnknownTransactionType("transfer".to_owned()))
        );
    }

    #[test]
    fn sign_convention_treats_savings_as_deduction() {
        assert_eq!(TransactionType::Income.sign(), 1.0);
        assert_eq!(TransactionType::Expense.sign(), -1.0);
        assert_eq!(TransactionType::Savings.sign(), -1.0);
    }

    #[test]
    fn build_succeeds() {
        let today = date!(2025 - 08 - 20);

        let transaction = Transaction::build("txn-1", 45.5, today, TransactionType::Expense)
            .category("Food")
            .notes("coffee beans")
            .finalize(today)
            .unwrap();

        assert_eq!(transaction.category, "Food");
        assert_eq!(transaction.notes.as_deref(), Some("coffee beans"));
        assert_eq!(transaction.signed_amount(), -45.5);
    }

    #[test]
    fn build_fails_on_negative_amount() {
        let today = date!(2025 - 08 - 20);

        let result =
            Transaction::build("txn-1", -10.0, today, TransactionType::Income).finalize(today);

        assert_eq!(result, Err(Error::NegativeAmount(-10.0)));
    }

    #[test]
    fn build_fails_on_future_date() {
        let today = date!(2025 - 08 - 20);
        let tomorrow = date!(2025 - 08 - 21);

        let result =
            Transaction::build("txn-1", 10.0, tomorrow, TransactionType::Income).finalize(today);

        assert_eq!(result, Err(Error::FutureDate(tomorrow)));
    }

    fn record(id: &str, date: &str, transaction_type: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            id: id.to_owned(),
            date: date.to_owned(),
            transaction_type: transaction_type.to_owned(),
            category: "Misc".to_owned(),
            amount,
            notes: None,
        }
    }

    #[test]
    fn sanitize_keeps_valid_records() {
        let today = date!(2025 - 08 - 20);
        let records = vec![
            record("a", "2025-08-01", "income", 100.0),
            record("b", "2025-08-02", "expense", 25.0),
        ];

        let transactions = sanitize_records(records, today);

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].date, date!(2025 - 08 - 01));
        assert_eq!(transactions[1].transaction_type, TransactionType::Expense);
    }

    #[test]
    fn sanitize_drops_malformed_records() {
        let today = date!(2025 - 08 - 20);
        let records = vec![
            record("bad-date", "01/08/2025", "income", 100.0),
            record("bad-type", "2025-08-01", "transfer", 100.0),
            record("bad-amount", "2025-08-01", "income", -1.0),
            record("future", "2025-12-31", "income", 100.0),
            record("good", "2025-08-01", "savings", 50.0),
        ];

        let transactions = sanitize_records(records, today);

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, "good");
    }
}
