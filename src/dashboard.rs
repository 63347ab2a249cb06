//! Summaries of transactions for the dashboard, analytics and transaction
//! history screens.
//!
//! - [aggregation]: spend and income totals and per-category totals.
//! - [monthly]: per-month series for bar charts and running balances.

pub mod aggregation;
pub mod monthly;

pub use aggregation::{
    CategoryTotal, DEFAULT_PALETTE, Palette, category_totals, category_totals_with_palette,
    net_flow, sum_income, sum_spend,
};
pub use monthly::{
    MonthlyBalance, MonthlySpending, max_spending, monthly_spending, parse_transaction_months,
    running_balances, year_spending,
};
