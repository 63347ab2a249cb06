//! Spendview turns a flat list of bank transactions into the grouped, sorted
//! and summarised views a personal-finance dashboard needs.
//!
//! The transactions are fetched elsewhere and handed over through a
//! [TransactionSource]. Everything in this crate is a pure, synchronous
//! function of that data:
//!
//! - [month]: parsing transaction dates and `MM/YYYY` tokens into [MonthKey]s,
//!   and formatting them for display.
//! - [transaction]: the [Transaction] model, the month filter, the
//!   year → month [GroupedIndex] and the recency selector.
//! - [dashboard]: spend/income totals, per-category totals and per-month
//!   series for charts.
//! - [report]: builds every dashboard view from a source in one go.

#![warn(missing_docs)]

pub mod account;
pub mod currency;
pub mod dashboard;
pub mod month;
pub mod report;
pub mod source;
pub mod transaction;

pub use account::{Account, AccountsResponse, total_balance};
pub use dashboard::{
    CategoryTotal, MonthlyBalance, MonthlySpending, Palette, category_totals,
    category_totals_with_palette, max_spending, monthly_spending, net_flow,
    parse_transaction_months, running_balances, sum_income, sum_spend, year_spending,
};
pub use month::{
    MonthKey, month_abbreviation, normalize_date, parse_month_token, parse_transaction_date,
    readable_label,
};
pub use report::{DashboardReport, ReportOptions};
pub use source::{SourceSnapshot, TransactionSource};
pub use transaction::{
    CashFlow, GroupedIndex, MonthGroup, Transaction, TransactionId, TransactionResponse,
    UNCATEGORIZED_LABEL, YearGroup, build_index, filter_by_month, filter_by_month_key, recent,
};

/// The errors that may occur while aggregating transactions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction date or month token could not be parsed.
    ///
    /// Aggregations skip records with this error instead of failing, callers
    /// only see it when parsing a single value directly.
    #[error("could not parse \"{0}\" as a date")]
    UnparseableDate(String),

    /// A month index outside of 1 to 12 (January is 1).
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonthIndex(i64),

    /// A color palette was created without any colors.
    #[error("a color palette needs at least one color")]
    EmptyPalette,

    /// The transaction source could not be read.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not read the transaction source: {0}")]
    SourceUnavailable(String),

    /// The transaction source was read but its contents were malformed.
    #[error("the transaction source contains invalid data: {0}")]
    InvalidSourceData(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}
