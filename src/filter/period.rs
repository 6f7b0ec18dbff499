//! Time-period presets and their resolution into concrete date ranges.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// The time-period presets a filter can select.
///
/// The serde names match the values sent by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    /// No time constraint.
    #[default]
    #[serde(rename = "all")]
    All,
    /// The current day only.
    #[serde(rename = "today")]
    Today,
    /// The previous day only.
    #[serde(rename = "yesterday")]
    Yesterday,
    /// The last seven days, today inclusive.
    #[serde(rename = "last7days")]
    Last7Days,
    /// The current Monday-start week.
    #[serde(rename = "thisWeek")]
    ThisWeek,
    /// The previous Monday-start week.
    #[serde(rename = "lastWeek")]
    LastWeek,
    /// The current calendar month.
    #[serde(rename = "thisMonth")]
    ThisMonth,
    /// The previous calendar month.
    #[serde(rename = "lastMonth")]
    LastMonth,
    /// The current calendar year.
    #[serde(rename = "thisYear")]
    ThisYear,
    /// A caller-supplied range; both bounds must be present for the
    /// constraint to apply.
    #[serde(rename = "custom")]
    Custom,
}

/// A closed interval of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date in the range.
    pub start: Date,
    /// The last date in the range, inclusive.
    pub end: Date,
}

impl DateRange {
    /// Whether `date` falls within the range, bounds inclusive.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolve a time-period preset into a concrete date range relative to
/// `today`.
///
/// Returns `None` when the period imposes no constraint: either the preset
/// is [TimePeriod::All], or it is [TimePeriod::Custom] with one or both
/// bounds missing. The missing-bound case is a deliberately permissive
/// fallback, not an error.
pub fn resolve_period(
    period: TimePeriod,
    today: Date,
    custom_from: Option<Date>,
    custom_to: Option<Date>,
) -> Option<DateRange> {
    match period {
        TimePeriod::All => None,
        TimePeriod::Today => Some(DateRange {
            start: today,
            end: today,
        }),
        TimePeriod::Yesterday => {
            let yesterday = today - Duration::days(1);
            Some(DateRange {
                start: yesterday,
                end: yesterday,
            })
        }
        TimePeriod::Last7Days => Some(DateRange {
            start: today - Duration::days(6),
            end: today,
        }),
        TimePeriod::ThisWeek => Some(week_bounds(today)),
        TimePeriod::LastWeek => Some(week_bounds(today - Duration::days(7))),
        TimePeriod::ThisMonth => Some(month_bounds(today)),
        TimePeriod::LastMonth => {
            let first_of_this_month = month_bounds(today).start;
            Some(month_bounds(first_of_this_month - Duration::days(1)))
        }
        TimePeriod::ThisYear => Some(year_bounds(today.year())),
        TimePeriod::Custom => match (custom_from, custom_to) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        },
    }
}

/// The Monday-start week containing `anchor_date`.
fn week_bounds(anchor_date: Date) -> DateRange {
    let weekday_number = anchor_date.weekday().number_from_monday() as i64;
    let start = anchor_date - Duration::days(weekday_number - 1);
    let end = start + Duration::days(6);

    DateRange { start, end }
}

/// The calendar month containing `anchor_date`.
pub fn month_bounds(anchor_date: Date) -> DateRange {
    let year = anchor_date.year();
    let month = anchor_date.month();
    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    DateRange { start, end }
}

fn year_bounds(year: i32) -> DateRange {
    DateRange {
        start: Date::from_calendar_date(year, Month::January, 1).expect("invalid year start date"),
        end: Date::from_calendar_date(year, Month::December, 31).expect("invalid year end date"),
    }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
