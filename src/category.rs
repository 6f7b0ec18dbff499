//! Core category domain types and label resolution.
//!
//! A transaction's category field is a free-text label with no referential
//! integrity: it *should* match a category's name and type, but orphaned
//! labels are tolerated. [CategoryLabel::resolve] performs the join at the
//! presentation boundary and tags unmatched labels distinctly instead of
//! silently grouping them under the raw string.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, transaction::TransactionType};

/// Opaque identifier assigned to a category by the external data service.
pub type CategoryId = String;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// an empty string after trimming whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-defined label grouping transactions of one type, optionally with
/// a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The category's name.
    pub name: CategoryName,
    /// The type of transaction the category applies to.
    pub transaction_type: TransactionType,
    /// The budget for the category, if one has been set.
    pub budget: Option<f64>,
    /// How many times the category has been used.
    pub usage_count: u32,
    /// The date the category was last used, if ever.
    pub last_used: Option<Date>,
}

impl Category {
    /// Record that the category was used on `date`.
    ///
    /// Increments the usage count and advances `last_used`, which never
    /// moves backwards when older transactions are recorded late.
    pub fn record_use(&mut self, date: Date) {
        self.usage_count += 1;
        self.last_used = match self.last_used {
            Some(last) if last >= date => Some(last),
            _ => Some(date),
        };
    }
}

/// The result of joining a transaction's free-text category label against
/// the category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum CategoryLabel {
    /// The label matched a category's name and type.
    Matched(CategoryName),
    /// The label did not match any category; the raw label is kept so it can
    /// be displayed distinctly.
    Unlabeled(String),
}

impl CategoryLabel {
    /// Join `label` against `categories`, matching on name and type.
    pub fn resolve(
        label: &str,
        transaction_type: TransactionType,
        categories: &[Category],
    ) -> CategoryLabel {
        categories
            .iter()
            .find(|category| {
                category.transaction_type == transaction_type && category.name.as_ref() == label
            })
            .map(|category| CategoryLabel::Matched(category.name.clone()))
            .unwrap_or_else(|| CategoryLabel::Unlabeled(label.to_owned()))
    }

    /// Whether the label failed to match a category.
    pub fn is_unlabeled(&self) -> bool {
        matches!(self, CategoryLabel::Unlabeled(_))
    }
}

impl Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryLabel::Matched(name) => write!(f, "{name}"),
            CategoryLabel::Unlabeled(label) => write!(f, "{label}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::{Category, CategoryLabel, CategoryName},
        transaction::TransactionType,
    };

    fn category(name: &str, transaction_type: TransactionType) -> Category {
        Category {
            id: format!("cat-{name}"),
            name: CategoryName::new_unchecked(name),
            transaction_type,
            budget: None,
            usage_count: 0,
            last_used: None,
        }
    }

    #[test]
    fn name_rejects_empty_strings() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategoryName));
        assert_eq!(CategoryName::new("   "), Err(Error::EmptyCategoryName));
    }

    #[test]
    fn name_trims_whitespace() {
        let name = CategoryName::new("  Food ").unwrap();

        assert_eq!(name.as_ref(), "Food");
    }

    #[test]
    fn resolve_matches_on_name_and_type() {
        let categories = vec![
            category("Food", TransactionType::Expense),
            category("Salary", TransactionType::Income),
        ];

        let label = CategoryLabel::resolve("Food", TransactionType::Expense, &categories);

        assert_eq!(
            label,
            CategoryLabel::Matched(CategoryName::new_unchecked("Food"))
        );
        assert!(!label.is_unlabeled());
    }

    #[test]
    fn resolve_tags_unknown_labels_as_unlabeled() {
        let categories = vec![category("Food", TransactionType::Expense)];

        let label = CategoryLabel::resolve("Gadgets", TransactionType::Expense, &categories);

        assert_eq!(label, CategoryLabel::Unlabeled("Gadgets".to_owned()));
        assert!(label.is_unlabeled());
    }

    #[test]
    fn resolve_requires_matching_type() {
        // "Food" exists as an expense category, so an income transaction
        // labelled "Food" is an orphan.
        let categories = vec![category("Food", TransactionType::Expense)];

        let label = CategoryLabel::resolve("Food", TransactionType::Income, &categories);

        assert_eq!(label, CategoryLabel::Unlabeled("Food".to_owned()));
    }

    #[test]
    fn record_use_tracks_count_and_latest_date() {
        let mut food = category("Food", TransactionType::Expense);

        food.record_use(date!(2025 - 03 - 10));
        food.record_use(date!(2025 - 01 - 02));

        assert_eq!(food.usage_count, 2);
        // A back-dated transaction must not move last_used backwards.
        assert_eq!(food.last_used, Some(date!(2025 - 03 - 10)));
    }
}
