//! Read seams over the external data service.
//!
//! The service owns persistence and validation; the engine only needs its
//! records, already deserialized. Embedders implement these traits over
//! their transport and wrap failures in [Error::SourceError].

use crate::{Error, category::Category, transaction::Transaction};

/// Provides the transaction list.
pub trait TransactionSource {
    /// List every transaction, already type-validated.
    ///
    /// # Errors
    /// Returns [Error::SourceError] if the records cannot be produced.
    fn list_transactions(&self) -> Result<Vec<Transaction>, Error>;
}

/// Provides the category list.
pub trait CategorySource {
    /// List every category.
    ///
    /// # Errors
    /// Returns [Error::SourceError] if the records cannot be produced.
    fn list_categories(&self) -> Result<Vec<Category>, Error>;
}

/// An in-memory source for tests and embedders that already hold the data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// The transactions to serve.
    pub transactions: Vec<Transaction>,
    /// The categories to serve.
    pub categories: Vec<Category>,
}

impl TransactionSource for MemorySource {
    fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }
}

impl CategorySource for MemorySource {
    fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        store::{CategorySource, MemorySource, TransactionSource},
        transaction::{Transaction, TransactionType},
    };

    #[test]
    fn memory_source_serves_its_data() {
        let source = MemorySource {
            transactions: vec![Transaction {
                id: "a".to_owned(),
                date: date!(2025 - 08 - 01),
                transaction_type: TransactionType::Income,
                category: "Salary".to_owned(),
                amount: 100.0,
                notes: None,
            }],
            categories: Vec::new(),
        };

        assert_eq!(source.list_transactions().unwrap().len(), 1);
        assert!(source.list_categories().unwrap().is_empty());
    }
}
