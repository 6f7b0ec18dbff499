//! CSV export of transaction lists.
//!
//! The export format is fixed: a header row followed by one row per
//! transaction with the fields `date,type,category,amount,notes`, ISO-8601
//! dates, and plain decimal amounts. Absent notes export as an empty field.

use std::io::Write;

use crate::{Error, transaction::Transaction};

const HEADER: [&str; 5] = ["date", "type", "category", "amount", "notes"];

/// Write `transactions` as CSV to `writer`.
///
/// # Errors
/// Returns [Error::CsvExport] if writing fails.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for transaction in transactions {
        csv_writer.write_record([
            transaction.date.to_string(),
            transaction.transaction_type.to_string(),
            transaction.category.clone(),
            transaction.amount.to_string(),
            transaction.notes.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|error| Error::CsvExport(error.to_string()))?;

    tracing::debug!("exported {} transactions as CSV", transactions.len());

    Ok(())
}

/// Render `transactions` as a CSV string.
///
/// # Errors
/// Returns [Error::CsvExport] if writing fails or the output is not valid
/// UTF-8.
pub fn to_csv_string(transactions: &[Transaction]) -> Result<String, Error> {
    let mut buffer = Vec::new();

    write_csv(transactions, &mut buffer)?;

    String::from_utf8(buffer).map_err(|error| Error::CsvExport(error.to_string()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        export::to_csv_string,
        transaction::{Transaction, TransactionType},
    };

    #[test]
    fn exports_fields_in_order_with_iso_dates() {
        let transactions = vec![
            Transaction {
                id: "a".to_owned(),
                date: date!(2025 - 08 - 03),
                transaction_type: TransactionType::Expense,
                category: "Rent".to_owned(),
                amount: 800.0,
                notes: Some("August rent".to_owned()),
            },
            Transaction {
                id: "b".to_owned(),
                date: date!(2025 - 08 - 01),
                transaction_type: TransactionType::Income,
                category: "Salary".to_owned(),
                amount: 2450.75,
                notes: None,
            },
        ];

        let csv = to_csv_string(&transactions).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,type,category,amount,notes");
        assert_eq!(lines[1], "2025-08-03,expense,Rent,800,August rent");
        assert_eq!(lines[2], "2025-08-01,income,Salary,2450.75,");
    }

    #[test]
    fn empty_list_exports_only_the_header() {
        let csv = to_csv_string(&[]).unwrap();

        assert_eq!(csv.trim_end(), "date,type,category,amount,notes");
    }

    #[test]
    fn commas_in_fields_are_quoted() {
        let transactions = vec![Transaction {
            id: "a".to_owned(),
            date: date!(2025 - 08 - 03),
            transaction_type: TransactionType::Expense,
            category: "Food".to_owned(),
            amount: 12.5,
            notes: Some("coffee, beans".to_owned()),
        }];

        let csv = to_csv_string(&transactions).unwrap();

        assert!(csv.contains("\"coffee, beans\""));
    }
}
