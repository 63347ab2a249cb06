//! Totals over a list of transactions.
//!
//! Every function accepts anything that iterates over `&Transaction`: a raw
//! slice, the output of the month filter or a month of the grouped index.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Error, transaction::Transaction};

/// The colors assigned to spending categories, in order.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#00786F", // Teal
    "#10B981", // Emerald
    "#60D5C0", // Soft teal
    "#93E4D8", // Light teal
    "#CBFBF1", // Pale teal
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#3B82F6", // Blue
];

/// An ordered, non-empty list of display colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Create a palette.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyPalette] if `colors` is empty.
    pub fn new(colors: Vec<String>) -> Result<Self, Error> {
        if colors.is_empty() {
            Err(Error::EmptyPalette)
        } else {
            Ok(Self(colors))
        }
    }

    /// The color for the `index`-th item, wrapping around the palette.
    pub fn color(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    /// The colors in order.
    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect())
    }
}

/// The spending in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category label.
    pub name: String,
    /// The total amount spent.
    pub value: Decimal,
    /// The display color.
    pub color: String,
}

/// The total amount spent.
///
/// Equal to the sum of the [category_totals] values for the same transactions.
pub fn sum_spend<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .map(|transaction| transaction.flow().spend())
        .sum()
}

/// The total amount received.
pub fn sum_income<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .map(|transaction| transaction.flow().income())
        .sum()
}

/// How much the transactions changed the balance by: income minus spending.
pub fn net_flow<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .map(|transaction| transaction.flow().net())
        .sum()
}

/// Total spending per category, colored with the [DEFAULT_PALETTE].
///
/// See [category_totals_with_palette].
pub fn category_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<CategoryTotal> {
    category_totals_with_palette(transactions, &Palette::default())
}

/// Total spending per category.
///
/// Only spending counts, so categories that only received income are left
/// out. Categories come in the order they were first seen and take their
/// colors from `palette` in that order, so the same data always gets the same
/// colors.
pub fn category_totals_with_palette<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    palette: &Palette,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let spend = transaction.flow().spend();
        if spend.is_zero() {
            continue;
        }

        let name = transaction.category_label();
        let position = *positions.entry(name).or_insert_with(|| {
            totals.push(CategoryTotal {
                name: name.to_owned(),
                value: Decimal::ZERO,
                color: palette.color(totals.len()).to_owned(),
            });
            totals.len() - 1
        });

        totals[position].value += spend;
    }

    totals
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        Error,
        transaction::{
            Transaction, TransactionId, UNCATEGORIZED_LABEL, filter_by_month,
            test_utils::create_test_transaction,
        },
    };

    use super::{
        CategoryTotal, DEFAULT_PALETTE, Palette, category_totals, category_totals_with_palette,
        net_flow, sum_income, sum_spend,
    };

    #[test]
    fn sums_spend_and_income_separately() {
        let transactions = vec![
            create_test_transaction(1, dec!(100.0), "2024-03-15", "Shopping"),
            create_test_transaction(2, dec!(-50.0), "2024-03-20", "Income"),
        ];

        assert_eq!(sum_spend(&transactions), dec!(100));
        assert_eq!(sum_income(&transactions), dec!(50));
        assert_eq!(net_flow(&transactions), dec!(-50));
        assert_eq!(
            category_totals(&transactions),
            vec![CategoryTotal {
                name: "Shopping".to_owned(),
                value: dec!(100),
                color: DEFAULT_PALETTE[0].to_owned(),
            }]
        );
    }

    #[test]
    fn empty_input_gives_zero() {
        let transactions: Vec<Transaction> = Vec::new();

        assert_eq!(sum_spend(&transactions), dec!(0));
        assert_eq!(sum_income(&transactions), dec!(0));
        assert!(category_totals(&transactions).is_empty());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let transactions = vec![
            create_test_transaction(1, dec!(5.0), "2024-03-01", "Travel"),
            create_test_transaction(2, dec!(500.0), "2024-03-02", "Rent"),
            create_test_transaction(3, dec!(7.0), "2024-03-03", "Travel"),
            create_test_transaction(4, dec!(20.0), "2024-03-04", "Food"),
        ];

        let got = category_totals(&transactions);

        let names: Vec<_> = got.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Rent", "Food"]);
        assert_eq!(got[0].value, dec!(12));
        assert_eq!(got[1].color, DEFAULT_PALETTE[1]);
        assert_eq!(got[2].color, DEFAULT_PALETTE[2]);
    }

    #[test]
    fn missing_categories_are_grouped_together() {
        let transactions = vec![
            Transaction::new(TransactionId::Integer(1), dec!(5), "2024-03-01"),
            create_test_transaction(2, dec!(6.0), "2024-03-01", ""),
        ];

        let got = category_totals(&transactions);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, UNCATEGORIZED_LABEL);
        assert_eq!(got[0].value, dec!(11));
    }

    #[test]
    fn income_only_categories_are_left_out() {
        let transactions = vec![
            create_test_transaction(1, dec!(-1000.0), "2024-03-01", "Salary"),
            create_test_transaction(2, dec!(30.0), "2024-03-01", "Food"),
            create_test_transaction(3, dec!(-10.0), "2024-03-01", "Food"),
        ];

        let got = category_totals(&transactions);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Food");
        assert_eq!(got[0].value, dec!(30));
    }

    #[test]
    fn colors_wrap_around_the_palette() {
        let palette = Palette::new(vec!["red".to_owned(), "blue".to_owned()]).unwrap();
        let transactions = vec![
            create_test_transaction(1, dec!(1.0), "2024-03-01", "A"),
            create_test_transaction(2, dec!(1.0), "2024-03-01", "B"),
            create_test_transaction(3, dec!(1.0), "2024-03-01", "C"),
        ];

        let got = category_totals_with_palette(&transactions, &palette);

        let colors: Vec<_> = got.iter().map(|c| c.color.as_str()).collect();
        assert_eq!(colors, vec!["red", "blue", "red"]);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(Error::EmptyPalette));
    }

    #[test]
    fn spend_reconciles_with_category_totals() {
        let transactions = vec![
            create_test_transaction(1, dec!(12.5), "2024-03-01", "A"),
            create_test_transaction(2, dec!(-3.0), "2024-03-01", "B"),
            create_test_transaction(3, dec!(7.25), "2024-03-01", ""),
            create_test_transaction(4, dec!(0.0), "2024-03-01", "C"),
            create_test_transaction(5, dec!(80.0), "2024-03-01", "A"),
        ];

        let from_categories: Decimal = category_totals(&transactions)
            .iter()
            .map(|c| c.value)
            .sum();

        assert_eq!(sum_spend(&transactions), from_categories);
    }

    #[test]
    fn cents_reconcile_exactly_across_categories() {
        let transactions = vec![
            create_test_transaction(1, dec!(0.1), "2024-03-01", "A"),
            create_test_transaction(2, dec!(0.2), "2024-03-02", "B"),
            create_test_transaction(3, dec!(0.3), "2024-03-03", "A"),
            create_test_transaction(4, dec!(19.99), "2024-03-04", "C"),
            create_test_transaction(5, dec!(4.35), "2024-03-05", "B"),
            create_test_transaction(6, dec!(0.7), "2024-03-06", "A"),
        ];

        let totals = category_totals(&transactions);
        let from_categories: Decimal = totals.iter().map(|c| c.value).sum();

        assert_eq!(sum_spend(&transactions), dec!(25.64));
        assert_eq!(from_categories, dec!(25.64));
        let values: Vec<_> = totals.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![dec!(1.1), dec!(4.55), dec!(19.99)]);
    }

    #[test]
    fn cents_from_source_json_stay_exact() {
        let json = r#"[
            {"transactionId": 1, "amount": 0.1, "transactionDate": "2024-03-01", "categoryPrimary": "A"},
            {"transactionId": 2, "amount": 0.2, "transactionDate": "2024-03-02", "categoryPrimary": "B"},
            {"transactionId": 3, "amount": "0.3", "transactionDate": "2024-03-03", "categoryPrimary": "A"}
        ]"#;
        let transactions: Vec<Transaction> = serde_json::from_str(json).unwrap();

        let from_categories: Decimal = category_totals(&transactions)
            .iter()
            .map(|c| c.value)
            .sum();

        assert_eq!(sum_spend(&transactions), dec!(0.6));
        assert_eq!(from_categories, dec!(0.6));
    }

    #[test]
    fn accepts_filtered_transactions() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-03-01", "A"),
            create_test_transaction(2, dec!(20.0), "2024-04-01", "A"),
        ];

        let march = filter_by_month(&transactions, 3, 2024).unwrap();

        assert_eq!(sum_spend(march.iter().copied()), dec!(10));
        assert_eq!(category_totals(march)[0].value, dec!(10));
    }

    #[test]
    fn running_twice_gives_the_same_output() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-03-01", "B"),
            create_test_transaction(2, dec!(20.0), "2024-04-01", "A"),
        ];

        assert_eq!(category_totals(&transactions), category_totals(&transactions));
        assert_eq!(sum_spend(&transactions), sum_spend(&transactions));
    }
}
