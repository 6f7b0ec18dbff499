//! Scalar and keyed sums over transaction lists.

use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

use crate::{
    category::{Category, CategoryName},
    transaction::{Transaction, TransactionType},
};

/// Transaction amounts summed by type.
///
/// Each field is a plain sum of non-negative amounts; negativity only
/// emerges in the derived [Totals::balance].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// The sum of income amounts.
    pub income: f64,
    /// The sum of expense amounts.
    pub expense: f64,
    /// The sum of savings contributions.
    pub savings: f64,
}

impl Totals {
    /// The spendable balance: income minus expenses minus savings.
    ///
    /// Savings are committed funds, so they are deducted here rather than
    /// treated as a neutral transfer.
    pub fn balance(&self) -> f64 {
        self.income - self.expense - self.savings
    }

    /// Add a transaction's amount to the matching total.
    pub fn add(&mut self, transaction: &Transaction) {
        match transaction.transaction_type {
            TransactionType::Income => self.income += transaction.amount,
            TransactionType::Expense => self.expense += transaction.amount,
            TransactionType::Savings => self.savings += transaction.amount,
        }
    }
}

/// Sum transaction amounts by type.
///
/// An empty list yields all-zero totals; this never fails.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut result = Totals::default();

    for transaction in transactions {
        result.add(transaction);
    }

    result
}

/// Sum the amounts of transactions of `transaction_type`, keyed by their
/// category label.
///
/// Keys are the distinct labels observed in the matching subset. Iteration
/// order is unspecified; consumers sort for display.
pub fn by_category(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> HashMap<String, f64> {
    let mut sums = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
    {
        *sums.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    sums
}

/// Express `value` as a percentage of `income`.
///
/// Zero or negative income yields zero by definition, never an error or NaN.
pub fn percentage_of_income(value: f64, income: f64) -> f64 {
    if income > 0.0 {
        (value / income) * 100.0
    } else {
        0.0
    }
}

/// How spending in a budgeted category compares to its budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// The budgeted category.
    pub category: CategoryName,
    /// The budget set on the category.
    pub budget: f64,
    /// The summed amount spent against the category.
    pub spent: f64,
    /// Spending as a percentage of the budget; zero when the budget is zero.
    pub utilization: f64,
}

/// Report spending against every category that has a budget.
///
/// Categories without a budget are skipped. The report is sorted by
/// utilization, most stretched budgets first.
pub fn budget_report(transactions: &[Transaction], categories: &[Category]) -> Vec<BudgetStatus> {
    let mut report: Vec<BudgetStatus> = categories
        .iter()
        .filter_map(|category| {
            let budget = category.budget?;
            let spent = transactions
                .iter()
                .filter(|t| {
                    t.transaction_type == category.transaction_type
                        && t.category == category.name.as_ref()
                })
                .map(|t| t.amount)
                .sum();
            let utilization = if budget > 0.0 {
                (spent / budget) * 100.0
            } else {
                0.0
            };

            Some(BudgetStatus {
                category: category.name.clone(),
                budget,
                spent,
                utilization,
            })
        })
        .collect();

    report.sort_by(|a, b| {
        b.utilization
            .partial_cmp(&a.utilization)
            .unwrap_or(Ordering::Equal)
    });

    report
}
