//! Display formatting for currency amounts and percentages.
//!
//! Aggregation keeps full precision; amounts are only rounded here, to
//! whole units, when they are turned into display strings.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format an amount as a whole-dollar currency string, e.g. `-$1,235`.
pub fn currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let rounded = amount.round();

    // Zero is hardcoded as "0" by numfmt, and rounding can produce -0.0,
    // so zero gets its formatted string specified here.
    if rounded == 0.0 {
        "$0".to_owned()
    } else if rounded < 0.0 {
        negative_fmt.fmt_string(rounded.abs())
    } else {
        positive_fmt.fmt_string(rounded)
    }
}

/// Format an amount with a caller-supplied currency symbol.
///
/// Falls back to an unseparated rendering if the symbol cannot be used as
/// a formatter prefix.
pub fn currency_with(symbol: &str, amount: f64) -> String {
    let rounded = amount.round();

    if rounded == 0.0 {
        return format!("{symbol}0");
    }

    let (prefix, value) = if rounded < 0.0 {
        (format!("-{symbol}"), rounded.abs())
    } else {
        (symbol.to_owned(), rounded)
    };

    match Formatter::currency(&prefix) {
        Ok(formatter) => formatter.precision(Precision::Decimals(0)).fmt_string(value),
        Err(_) => format!("{prefix}{value:.0}"),
    }
}

/// Format a ratio as a percentage with one decimal place, e.g. `42.3%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}
