//! Builds every dashboard view from a transaction source in one pass.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Error,
    account::total_balance,
    currency::format_currency,
    dashboard::{
        CategoryTotal, MonthlyBalance, MonthlySpending, Palette, category_totals_with_palette,
        max_spending, monthly_spending, parse_transaction_months, running_balances, sum_income,
        sum_spend, year_spending,
    },
    month::MonthKey,
    source::TransactionSource,
    transaction::{Transaction, build_index, recent},
};

/// How many recent transactions the dashboard lists by default.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Choices that shape a [DashboardReport].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// How many recent transactions to list.
    pub recent_limit: usize,
    /// The month to break down by category.
    ///
    /// Defaults to the first of the source's transaction months, or the most
    /// recent month with transactions.
    pub month: Option<MonthKey>,
    /// The year to chart month by month.
    ///
    /// Defaults to the year of the selected month, or the most recent year with
    /// transactions.
    pub year: Option<i32>,
    /// The colors for the category breakdown.
    pub palette: Palette,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            month: None,
            year: None,
            palette: Palette::default(),
        }
    }
}

/// Spending and income in a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    /// The month.
    pub month: MonthKey,
    /// The readable name of the month, e.g. "March 2024".
    pub label: String,
    /// How many transactions happened in the month.
    pub transaction_count: usize,
    /// The total amount spent.
    pub spent: Decimal,
    /// The total amount received.
    pub income: Decimal,
    /// Spending per category.
    pub categories: Vec<CategoryTotal>,
}

/// Spending per month over one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearReport {
    /// The calendar year.
    pub year: i32,
    /// The total amount spent in the year.
    pub spent: Decimal,
    /// Spending per month, oldest first.
    pub months: Vec<MonthlySpending>,
}

/// Everything the dashboard, analytics and transaction history screens show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// The sum of the linked account balances.
    pub total_balance: Decimal,
    /// How many transactions the source sent.
    pub transaction_count: usize,
    /// How many transactions were left out of monthly views because of a
    /// malformed date.
    pub skipped_records: usize,
    /// The total amount spent over all transactions.
    pub total_spent: Decimal,
    /// The total amount received over all transactions.
    pub total_income: Decimal,
    /// The most recent transactions, newest first.
    pub recent: Vec<Transaction>,
    /// Spending in each of the source's transaction months.
    pub monthly_spending: Vec<MonthlySpending>,
    /// The highest value in [DashboardReport::monthly_spending].
    pub max_monthly_spending: Decimal,
    /// The category breakdown of the selected month.
    pub selected_month: Option<MonthReport>,
    /// Spending per month in the selected year.
    pub selected_year: Option<YearReport>,
    /// The balance at the end of each month with transactions, oldest first.
    pub running_balances: Vec<MonthlyBalance>,
}

impl DashboardReport {
    /// Fetch the data from `source` and build the report.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `source`. Malformed records never cause an
    /// error, they are skipped and counted instead.
    pub fn build(
        source: &impl TransactionSource,
        options: &ReportOptions,
    ) -> Result<Self, Error> {
        let transactions = source.transactions()?;
        let month_tokens = source.transaction_months()?;
        let accounts = source.accounts()?;

        let index = build_index(&transactions);

        let mut months = parse_transaction_months(&month_tokens);
        if months.is_empty() {
            months = index.month_keys();
        }

        let selected_month = options.month.or_else(|| months.first().copied());
        let selected_year = options
            .year
            .or_else(|| selected_month.map(|month| month.year()))
            .or_else(|| index.years().first().map(|year| year.year));

        let month_report = selected_month.map(|month| {
            let in_month = index.transactions_in(month);

            MonthReport {
                month,
                label: month.long_label(),
                transaction_count: in_month.len(),
                spent: sum_spend(in_month.iter().copied()),
                income: sum_income(in_month.iter().copied()),
                categories: category_totals_with_palette(in_month.iter().copied(), &options.palette),
            }
        });

        let year_report = selected_year.map(|year| {
            let months = year_spending(&index, year);

            YearReport {
                year,
                spent: months.iter().map(|month| month.spending).sum(),
                months,
            }
        });

        let monthly_spending = monthly_spending(&transactions, &months);
        let total_balance = total_balance(&accounts);

        let report = Self {
            total_balance,
            transaction_count: transactions.len(),
            skipped_records: index.skipped(),
            total_spent: sum_spend(&transactions),
            total_income: sum_income(&transactions),
            recent: recent(&transactions, options.recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            max_monthly_spending: max_spending(&monthly_spending),
            monthly_spending,
            selected_month: month_report,
            selected_year: year_report,
            running_balances: running_balances(total_balance, &index),
        };

        tracing::debug!(
            "Built report from {} transactions ({} skipped) over {} months",
            report.transaction_count,
            report.skipped_records,
            months.len()
        );

        Ok(report)
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [Error::JSONSerializationError] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))
    }

    /// Render the report as plain text.
    pub fn render_text(&self) -> String {
        let mut text = String::new();

        // Writing to a `String` never fails.
        let _ = self.write_text(&mut text);

        text
    }

    fn write_text(&self, text: &mut String) -> std::fmt::Result {
        writeln!(text, "Total balance: {}", format_currency(self.total_balance))?;
        writeln!(text, "Total spent:   {}", format_currency(self.total_spent))?;
        writeln!(text, "Total income:  {}", format_currency(self.total_income))?;
        writeln!(
            text,
            "Transactions:  {} ({} with unreadable dates)",
            self.transaction_count, self.skipped_records
        )?;

        writeln!(text, "\nRecent transactions")?;
        if self.recent.is_empty() {
            writeln!(text, "  none")?;
        }
        for transaction in &self.recent {
            writeln!(
                text,
                "  {}  {:<24} {:<20} {:>12}",
                transaction.transaction_date,
                transaction.merchant_name.as_deref().unwrap_or("-"),
                transaction.category_label(),
                format_currency(transaction.amount),
            )?;
        }

        writeln!(text, "\nSpending by month")?;
        for month in &self.monthly_spending {
            writeln!(
                text,
                "  {} {}  {:>12}",
                month.label,
                month.month.year(),
                format_currency(month.spending)
            )?;
        }

        if let Some(month) = &self.selected_month {
            writeln!(
                text,
                "\nCategory breakdown for {} ({} transactions)",
                month.label, month.transaction_count
            )?;
            writeln!(text, "  Spent:  {}", format_currency(month.spent))?;
            writeln!(text, "  Income: {}", format_currency(month.income))?;
            for category in &month.categories {
                writeln!(
                    text,
                    "  {} {:<28} {:>12}",
                    category.color,
                    category.name,
                    format_currency(category.value)
                )?;
            }
        }

        if let Some(year) = &self.selected_year {
            writeln!(
                text,
                "\nSpending in {}: {}",
                year.year,
                format_currency(year.spent)
            )?;
            for month in &year.months {
                writeln!(
                    text,
                    "  {}  {:>12}",
                    month.label,
                    format_currency(month.spending)
                )?;
            }
        }

        if !self.running_balances.is_empty() {
            writeln!(text, "\nBalance at end of month")?;
            for balance in &self.running_balances {
                writeln!(
                    text,
                    "  {} {}  {:>12}",
                    balance.label,
                    balance.month.year(),
                    format_currency(balance.balance)
                )?;
            }
        }

        Ok(())
    }
}
