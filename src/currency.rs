//! Formatting amounts of money for display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Format `amount` as dollars with two decimal places, e.g. "$1,234.50" or "-$12.00".
pub fn format_currency(amount: Decimal) -> String {
    static CENTS_FMT: OnceLock<Formatter> = OnceLock::new();

    format_dollars(&CENTS_FMT, amount, 2)
}

/// Format `amount` rounded to whole dollars, e.g. "$1,235".
pub fn format_currency_rounded(amount: Decimal) -> String {
    static DOLLARS_FMT: OnceLock<Formatter> = OnceLock::new();

    format_dollars(&DOLLARS_FMT, amount, 0)
}

/// Round `amount` half away from zero to `decimals` places and format it with
/// the formatter in `cell`, creating the formatter on first use.
fn format_dollars(cell: &OnceLock<Formatter>, amount: Decimal, decimals: u8) -> String {
    let formatter = cell.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(decimals))
    });

    let rounded = amount
        .round_dp_with_strategy(u32::from(decimals), RoundingStrategy::MidpointAwayFromZero);

    let formatted_string = if rounded.is_zero() {
        // numfmt renders zero as a bare "0".
        "$0".to_owned()
    } else {
        let magnitude = rounded.abs().to_f64().unwrap_or_default();
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        format!("{sign}{}", formatter.fmt_string(magnitude))
    };

    pad_decimals(formatted_string, usize::from(decimals))
}

/// numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3" and "12.00"
/// as "12", so they are added back.
fn pad_decimals(mut formatted_string: String, decimals: usize) -> String {
    if decimals == 0 {
        return formatted_string;
    }

    match formatted_string.rfind('.') {
        Some(dot) => {
            let present = formatted_string.len() - dot - 1;
            for _ in present..decimals {
                formatted_string.push('0');
            }
        }
        None => {
            formatted_string.push('.');
            for _ in 0..decimals {
                formatted_string.push('0');
            }
        }
    }

    formatted_string
}
