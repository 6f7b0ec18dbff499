//! Period-over-period comparison and running-balance series.

use serde::Serialize;
use time::Date;

use crate::{
    summary::totals::Totals,
    transaction::{Transaction, TransactionType},
};

/// Changes smaller than this many percentage points display as "no change".
const FLAT_EPSILON: f64 = 0.1;

/// The maximum number of points a running-balance chart should carry.
///
/// Above this, consecutive same-date points are collapsed to the last one
/// per date. This is display-only downsampling; the retained points still
/// carry exact cumulative balances.
pub const MAX_CHART_POINTS: usize = 30;

/// The direction a metric moved between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The metric increased.
    Up,
    /// The metric decreased.
    Down,
    /// The change is within display epsilon of zero.
    Flat,
}

/// How one metric changed between a previous and a current period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricChange {
    /// The raw difference, current minus previous, unrounded.
    pub absolute: f64,
    /// The percentage change relative to the previous period.
    pub percent: f64,
    /// Which way the metric moved, for display.
    pub direction: Direction,
}

/// Compare a metric's current value against its previous value.
///
/// When the previous value is zero the percentage is defined rather than
/// undefined: exactly 100 when the current value is positive, otherwise 0.
pub fn compare(current: f64, previous: f64) -> MetricChange {
    let absolute = current - previous;
    let percent = if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous.abs() * 100.0
    };

    let direction = if percent.abs() < FLAT_EPSILON {
        Direction::Flat
    } else if absolute > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    MetricChange {
        absolute,
        percent,
        direction,
    }
}

/// Per-metric comparison of two aggregated periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodComparison {
    /// Change in total income.
    pub income: MetricChange,
    /// Change in total expenses.
    pub expense: MetricChange,
    /// Change in total savings contributions.
    pub savings: MetricChange,
    /// Change in net profit: income minus expenses minus savings.
    pub net: MetricChange,
}

/// Compare the totals of a current period against a previous one.
pub fn compare_periods(current: &Totals, previous: &Totals) -> PeriodComparison {
    PeriodComparison {
        income: compare(current.income, previous.income),
        expense: compare(current.expense, previous.expense),
        savings: compare(current.savings, previous.savings),
        net: compare(current.balance(), previous.balance()),
    }
}

/// One point in a running-balance series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancePoint {
    /// The date of the transaction that produced this point.
    pub date: Date,
    /// The cumulative balance after this transaction.
    pub balance: f64,
    /// The amount of the transaction that produced this point.
    pub last_amount: f64,
    /// The type of the transaction that produced this point.
    pub last_type: TransactionType,
}

/// Build the cumulative balance series for a transaction list.
///
/// Transactions are sorted ascending by date first; the sort is stable, so
/// same-date transactions keep their input order. Each point's balance is
/// the cumulative effect of all prior transactions plus itself, with income
/// adding and expenses and savings deducting.
///
/// When the series would exceed [MAX_CHART_POINTS], consecutive same-date
/// points are collapsed to the last one per date to keep chart density
/// bounded.
pub fn running_balance(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|transaction| transaction.date);

    let mut points = Vec::with_capacity(sorted.len());
    let mut balance = 0.0;

    for transaction in sorted {
        balance += transaction.signed_amount();
        points.push(BalancePoint {
            date: transaction.date,
            balance,
            last_amount: transaction.amount,
            last_type: transaction.transaction_type,
        });
    }

    if points.len() > MAX_CHART_POINTS {
        collapse_by_date(points)
    } else {
        points
    }
}

/// Keep only the last point per date.
fn collapse_by_date(points: Vec<BalancePoint>) -> Vec<BalancePoint> {
    let mut collapsed: Vec<BalancePoint> = Vec::with_capacity(points.len());

    for point in points {
        match collapsed.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => collapsed.push(point),
        }
    }

    collapsed
}
