//! Grouping transactions into a year → month index.

use std::collections::BTreeMap;

use crate::month::MonthKey;

use super::Transaction;

/// Transactions grouped by year, then by month.
///
/// Years are ordered most recent first, and so are the months within each
/// year. The transactions in a month keep the order they had in the input list.
/// Transactions with a malformed date are left out and counted in
/// [GroupedIndex::skipped].
#[derive(Debug, Default, PartialEq)]
pub struct GroupedIndex<'a> {
    years: Vec<YearGroup<'a>>,
    skipped: usize,
}

/// The transactions of one calendar year, grouped by month.
#[derive(Debug, PartialEq)]
pub struct YearGroup<'a> {
    /// The calendar year.
    pub year: i32,
    /// The months with transactions, most recent first.
    pub months: Vec<MonthGroup<'a>>,
}

/// The transactions of one calendar month.
#[derive(Debug, PartialEq)]
pub struct MonthGroup<'a> {
    /// The month.
    pub key: MonthKey,
    /// The transactions in input order.
    pub transactions: Vec<&'a Transaction>,
}

impl MonthGroup<'_> {
    /// The month zero-padded to two digits, e.g. "03".
    pub fn month(&self) -> String {
        self.key.padded_month()
    }
}

impl<'a> YearGroup<'a> {
    /// Get the group for a zero-padded month such as "03".
    pub fn month(&self, padded_month: &str) -> Option<&MonthGroup<'a>> {
        self.months
            .iter()
            .find(|group| group.month() == padded_month)
    }

    /// Get the group for a 1-based month.
    pub fn month_number(&self, month: u8) -> Option<&MonthGroup<'a>> {
        self.months.iter().find(|group| group.key.month() == month)
    }

    /// How many transactions happened in this year.
    pub fn len(&self) -> usize {
        self.months.iter().map(|group| group.transactions.len()).sum()
    }

    /// Whether the year has no transactions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> GroupedIndex<'a> {
    /// The years with transactions, most recent first.
    pub fn years(&self) -> &[YearGroup<'a>] {
        &self.years
    }

    /// Get the group for `year`.
    pub fn year(&self, year: i32) -> Option<&YearGroup<'a>> {
        self.years.iter().find(|group| group.year == year)
    }

    /// Get the transactions of the month `key`, or an empty slice.
    pub fn transactions_in(&self, key: MonthKey) -> &[&'a Transaction] {
        self.year(key.year())
            .and_then(|year| year.month_number(key.month()))
            .map(|group| group.transactions.as_slice())
            .unwrap_or_default()
    }

    /// Every month with transactions, most recent first.
    pub fn month_keys(&self) -> Vec<MonthKey> {
        self.years
            .iter()
            .flat_map(|year| year.months.iter().map(|group| group.key))
            .collect()
    }

    /// How many transactions were placed in the index.
    pub fn len(&self) -> usize {
        self.years.iter().map(YearGroup::len).sum()
    }

    /// Whether no transactions were placed in the index.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// How many transactions were left out because their date could not be parsed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Group `transactions` by year and month.
///
/// Given the same transactions, the years and months always come out in the
/// same order regardless of the input order. Only the order of transactions
/// within a month follows the input.
pub fn build_index(transactions: &[Transaction]) -> GroupedIndex<'_> {
    let mut by_year: BTreeMap<i32, BTreeMap<String, MonthGroup>> = BTreeMap::new();
    let mut skipped = 0;

    for transaction in transactions {
        let Ok(key) = transaction.month_key() else {
            skipped += 1;
            continue;
        };

        by_year
            .entry(key.year())
            .or_default()
            .entry(key.padded_month())
            .or_insert_with(|| MonthGroup {
                key,
                transactions: Vec::new(),
            })
            .transactions
            .push(transaction);
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {skipped} of {} transactions with unparseable dates",
            transactions.len()
        );
    }

    let years: Vec<YearGroup> = by_year
        .into_iter()
        .rev()
        .map(|(year, months)| YearGroup {
            year,
            months: months.into_values().rev().collect(),
        })
        .collect();

    tracing::debug!(
        "Grouped {} transactions into {} years",
        transactions.len() - skipped,
        years.len()
    );

    GroupedIndex { years, skipped }
}
