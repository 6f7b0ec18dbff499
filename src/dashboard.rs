//! The dashboard query pipeline.
//!
//! The presentation layer calls [build] whenever the transaction list or
//! filter changes and renders the returned [DashboardSummary] directly.
//! There is no reactive graph; recomputation is total and cheap at personal
//! data volumes.

use std::cmp::Ordering;

use serde::Serialize;
use time::{Date, Duration};

use crate::{
    Error,
    category::{Category, CategoryLabel},
    filter::{self, DateRange, FilterSpec, month_bounds},
    store::{CategorySource, TransactionSource},
    summary::{
        BalancePoint, BudgetStatus, MonthlySummary, PeriodComparison, Totals, budget_report,
        by_category, by_month, compare_periods, percentage_of_income, running_balance, totals,
    },
    transaction::{Transaction, TransactionType},
};

/// One row of the expense-by-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// The category label, resolved against the category list.
    pub label: CategoryLabel,
    /// The summed expense amount for the label.
    pub total: f64,
    /// The total as a percentage of the period's income.
    pub share_of_income: f64,
}

/// Everything the dashboard displays, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// The transactions matching the filter, in input order.
    pub transactions: Vec<Transaction>,
    /// Amounts summed by type over the filtered subset.
    pub totals: Totals,
    /// Expense totals per category label, sorted descending by amount.
    pub expense_by_category: Vec<CategoryBreakdown>,
    /// The dense monthly series for the filtered subset.
    pub monthly: Vec<MonthlySummary>,
    /// This calendar month compared to the previous one, computed over the
    /// full transaction list so the cards stay stable while filtering.
    pub month_comparison: PeriodComparison,
    /// The cumulative balance series for the filtered subset.
    pub running_balance: Vec<BalancePoint>,
    /// Spending against each budgeted category within the filtered subset.
    pub budgets: Vec<BudgetStatus>,
}

/// Compute every derived view the dashboard needs.
///
/// `today` anchors the filter's relative periods and the month-over-month
/// comparison; passing it explicitly keeps the pipeline pure.
pub fn build(
    transactions: &[Transaction],
    categories: &[Category],
    spec: &FilterSpec,
    today: Date,
) -> DashboardSummary {
    let filtered = filter::apply(transactions, spec, today);
    let filtered_totals = totals(&filtered);

    DashboardSummary {
        totals: filtered_totals,
        expense_by_category: expense_breakdown(&filtered, categories, filtered_totals.income),
        monthly: by_month(&filtered),
        month_comparison: month_over_month(transactions, today),
        running_balance: running_balance(&filtered),
        budgets: budget_report(&filtered, categories),
        transactions: filtered,
    }
}

/// Compute the dashboard from the external read seams.
///
/// # Errors
/// Returns the first error raised by the underlying sources.
pub fn build_from_sources<S>(
    source: &S,
    spec: &FilterSpec,
    today: Date,
) -> Result<DashboardSummary, Error>
where
    S: TransactionSource + CategorySource,
{
    let transactions = source.list_transactions()?;
    let categories = source.list_categories()?;

    Ok(build(&transactions, &categories, spec, today))
}

fn expense_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    income: f64,
) -> Vec<CategoryBreakdown> {
    let mut breakdown: Vec<CategoryBreakdown> =
        by_category(transactions, TransactionType::Expense)
            .into_iter()
            .map(|(label, total)| CategoryBreakdown {
                label: CategoryLabel::resolve(&label, TransactionType::Expense, categories),
                total,
                share_of_income: percentage_of_income(total, income),
            })
            .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.to_string().cmp(&b.label.to_string()))
    });

    breakdown
}

fn month_over_month(transactions: &[Transaction], today: Date) -> PeriodComparison {
    let this_month = month_bounds(today);
    let last_month = month_bounds(this_month.start - Duration::days(1));

    compare_periods(
        &totals_in_range(transactions, this_month),
        &totals_in_range(transactions, last_month),
    )
}

fn totals_in_range(transactions: &[Transaction], range: DateRange) -> Totals {
    let mut result = Totals::default();

    for transaction in transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date))
    {
        result.add(transaction);
    }

    result
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        category::{Category, CategoryLabel, CategoryName},
        dashboard::{build, build_from_sources},
        filter::{FilterSpec, TimePeriod, TypeFilter},
        store::MemorySource,
        summary::Direction,
        transaction::{Transaction, TransactionType},
    };

    const TODAY: Date = date!(2025 - 08 - 20);

    fn transaction(
        id: &str,
        date: Date,
        transaction_type: TransactionType,
        category: &str,
        amount: f64,
    ) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date,
            transaction_type,
            category: category.to_owned(),
            amount,
            notes: None,
        }
    }

    fn expense_category(name: &str, budget: Option<f64>) -> Category {
        Category {
            id: format!("cat-{name}"),
            name: CategoryName::new_unchecked(name),
            transaction_type: TransactionType::Expense,
            budget,
            usage_count: 0,
            last_used: None,
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            transaction(
                "salary",
                date!(2025 - 08 - 01),
                TransactionType::Income,
                "Salary",
                2000.0,
            ),
            transaction(
                "rent",
                date!(2025 - 08 - 03),
                TransactionType::Expense,
                "Rent",
                800.0,
            ),
            transaction(
                "food",
                date!(2025 - 08 - 10),
                TransactionType::Expense,
                "Food",
                200.0,
            ),
            transaction(
                "snacks",
                date!(2025 - 08 - 12),
                TransactionType::Expense,
                "Mystery",
                50.0,
            ),
            transaction(
                "stash",
                date!(2025 - 08 - 15),
                TransactionType::Savings,
                "Emergency Fund",
                300.0,
            ),
            transaction(
                "old-salary",
                date!(2025 - 07 - 01),
                TransactionType::Income,
                "Salary",
                1000.0,
            ),
        ]
    }

    #[test]
    fn build_composes_every_view() {
        let transactions = sample_transactions();
        let categories = vec![
            expense_category("Rent", Some(1000.0)),
            expense_category("Food", Some(250.0)),
        ];
        let spec = FilterSpec {
            time_period: TimePeriod::ThisMonth,
            ..FilterSpec::default()
        };

        let summary = build(&transactions, &categories, &spec, TODAY);

        assert_eq!(summary.transactions.len(), 5);
        assert_eq!(summary.totals.income, 2000.0);
        assert_eq!(summary.totals.expense, 1050.0);
        assert_eq!(summary.totals.savings, 300.0);
        assert_eq!(summary.totals.balance(), 650.0);

        // Breakdown is sorted descending by amount.
        let labels: Vec<String> = summary
            .expense_by_category
            .iter()
            .map(|entry| entry.label.to_string())
            .collect();
        assert_eq!(labels, vec!["Rent", "Food", "Mystery"]);
        assert_eq!(summary.expense_by_category[0].share_of_income, 40.0);
        // "Mystery" matches no category, so it is tagged distinctly.
        assert_eq!(
            summary.expense_by_category[2].label,
            CategoryLabel::Unlabeled("Mystery".to_owned())
        );

        assert_eq!(summary.monthly.len(), 1);
        assert_eq!(summary.monthly[0].balance, 650.0);

        // Income doubled month over month.
        assert_eq!(summary.month_comparison.income.percent, 100.0);
        assert_eq!(summary.month_comparison.income.direction, Direction::Up);
        // July had no expenses, August does.
        assert_eq!(summary.month_comparison.expense.percent, 100.0);

        assert_eq!(summary.running_balance.len(), 5);
        assert_eq!(
            summary.running_balance.last().unwrap().balance,
            summary.totals.balance()
        );

        assert_eq!(summary.budgets.len(), 2);
        assert_eq!(summary.budgets[0].category.as_ref(), "Rent");
        assert_eq!(summary.budgets[0].utilization, 80.0);
    }

    #[test]
    fn month_comparison_ignores_the_filter() {
        let transactions = sample_transactions();
        // Filter down to savings only; the month cards still compare full
        // months.
        let spec = FilterSpec {
            type_filter: TypeFilter::Savings,
            ..FilterSpec::default()
        };

        let summary = build(&transactions, &[], &spec, TODAY);

        assert_eq!(summary.transactions.len(), 1);
        assert_eq!(summary.month_comparison.income.percent, 100.0);
    }

    #[test]
    fn build_from_sources_reads_both_seams() {
        let source = MemorySource {
            transactions: sample_transactions(),
            categories: vec![expense_category("Rent", Some(1000.0))],
        };

        let summary = build_from_sources(&source, &FilterSpec::default(), TODAY).unwrap();

        assert_eq!(summary.transactions.len(), 6);
        assert_eq!(summary.budgets.len(), 1);
    }
}
