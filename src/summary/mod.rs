//! Aggregation of transaction lists into totals, category sums, monthly
//! series, comparisons, and running balances.
//!
//! Every function here is a pure, synchronous transformation: results are
//! recomputed from scratch whenever inputs change and are never mutated
//! after construction.

mod monthly;
mod totals;
mod trend;

pub use monthly::{MonthlySummary, by_month};
pub use totals::{BudgetStatus, Totals, budget_report, by_category, percentage_of_income, totals};
pub use trend::{
    BalancePoint, Direction, MAX_CHART_POINTS, MetricChange, PeriodComparison, compare,
    compare_periods, running_balance,
};
