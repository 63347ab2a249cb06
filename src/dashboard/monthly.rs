//! Per-month series for the dashboard and analytics bar charts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    month::{MonthKey, parse_month_token},
    transaction::{GroupedIndex, Transaction, filter_by_month_key},
};

use super::aggregation::{net_flow, sum_spend};

/// The amount spent in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySpending {
    /// The month.
    pub month: MonthKey,
    /// The three-letter abbreviation of the month, e.g. "Mar".
    pub label: &'static str,
    /// The total amount spent.
    pub spending: Decimal,
}

/// The account balance at the end of a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBalance {
    /// The month.
    pub month: MonthKey,
    /// The three-letter abbreviation of the month, e.g. "Mar".
    pub label: &'static str,
    /// The balance at the end of the month.
    pub balance: Decimal,
}

/// Parse the source's list of months with data, e.g. `["03/2024", "02/2024"]`.
///
/// Tokens that cannot be parsed are skipped and logged. The order of the
/// remaining tokens is kept.
pub fn parse_transaction_months<S: AsRef<str>>(tokens: &[S]) -> Vec<MonthKey> {
    tokens
        .iter()
        .filter_map(|token| match parse_month_token(token.as_ref()) {
            Ok(key) => Some(key),
            Err(error) => {
                tracing::warn!("Skipping transaction month {:?}: {error}", token.as_ref());
                None
            }
        })
        .collect()
}

/// The amount spent in each of `months`, in the order given.
///
/// Months without transactions have zero spending.
pub fn monthly_spending(transactions: &[Transaction], months: &[MonthKey]) -> Vec<MonthlySpending> {
    months
        .iter()
        .map(|&month| MonthlySpending {
            month,
            label: month.abbreviation(),
            spending: sum_spend(filter_by_month_key(transactions, month)),
        })
        .collect()
}

/// The highest monthly spending, or zero if there are no months.
pub fn max_spending(spending: &[MonthlySpending]) -> Decimal {
    spending
        .iter()
        .map(|month| month.spending)
        .fold(Decimal::ZERO, Decimal::max)
}

/// The amount spent in each month of `year` that has transactions, oldest
/// month first.
///
/// Returns an empty list if the index has no transactions in `year`.
pub fn year_spending(index: &GroupedIndex<'_>, year: i32) -> Vec<MonthlySpending> {
    let Some(year) = index.year(year) else {
        return Vec::new();
    };

    year.months
        .iter()
        .rev()
        .map(|group| MonthlySpending {
            month: group.key,
            label: group.key.abbreviation(),
            spending: sum_spend(group.transactions.iter().copied()),
        })
        .collect()
}

/// Calculates the balance at the end of each month by working backwards from
/// the current balance.
///
/// The most recent month in the index ends on `current_balance`, and each
/// earlier month ends on the balance before the net flow of the months after
/// it. Months are returned oldest first.
pub fn running_balances(current_balance: Decimal, index: &GroupedIndex<'_>) -> Vec<MonthlyBalance> {
    let mut balances = Vec::new();
    let mut cumulative = Decimal::ZERO;

    for year in index.years() {
        for group in &year.months {
            balances.push(MonthlyBalance {
                month: group.key,
                label: group.key.abbreviation(),
                balance: current_balance - cumulative,
            });
            cumulative += net_flow(group.transactions.iter().copied());
        }
    }

    balances.reverse();
    balances
}
