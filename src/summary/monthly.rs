//! Monthly aggregation of transaction lists for trend charts.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::{summary::totals::Totals, transaction::Transaction};

/// Transaction amounts summed over one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month, represented as its first day.
    pub month: Date,
    /// A display label for the month, e.g. "Jan 2025".
    pub label: String,
    /// The sum of income amounts in the month.
    pub income: f64,
    /// The sum of expense amounts in the month.
    pub expense: f64,
    /// The sum of savings contributions in the month.
    pub savings: f64,
    /// Income minus expenses minus savings for the month.
    pub balance: f64,
}

/// Aggregate transactions into a dense sequence of calendar months.
///
/// The sequence spans every month from the earliest to the latest
/// transaction date inclusive, in chronological order. Months with no
/// transactions appear as zero-valued entries so trend charts have no gaps.
/// An empty input yields an empty sequence.
pub fn by_month(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut buckets: HashMap<Date, Totals> = HashMap::new();

    for transaction in transactions {
        let month = transaction
            .date
            .replace_day(1)
            .expect("day 1 is valid in every month");
        buckets.entry(month).or_default().add(transaction);
    }

    let Some(first) = buckets.keys().min().copied() else {
        return Vec::new();
    };
    let last = buckets
        .keys()
        .max()
        .copied()
        .expect("a non-empty map has a latest month");

    let mut summaries = Vec::new();
    let mut month = first;

    loop {
        let totals = buckets.get(&month).copied().unwrap_or_default();
        summaries.push(MonthlySummary {
            month,
            label: month_label(month),
            income: totals.income,
            expense: totals.expense,
            savings: totals.savings,
            balance: totals.balance(),
        });

        if month == last {
            break;
        }

        month = next_month(month);
    }

    summaries
}

fn next_month(month: Date) -> Date {
    let (year, next) = match month.month() {
        Month::December => (month.year() + 1, Month::January),
        other => (month.year(), other.next()),
    };

    Date::from_calendar_date(year, next, 1).expect("the first of a month is always valid")
}

fn month_label(month: Date) -> String {
    format!("{} {}", month_abbrev(month.month()), month.year())
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
