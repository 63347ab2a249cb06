//! Selecting the transactions of a single calendar month.

use crate::{Error, month::MonthKey};

use super::Transaction;

/// Get the transactions that happened in `month` (1-based) of `year`.
///
/// The input order is kept. Transactions with a malformed date never match.
///
/// # Errors
///
/// Returns [Error::InvalidMonthIndex] if `month` is not in 1 to 12.
pub fn filter_by_month(
    transactions: &[Transaction],
    month: i64,
    year: i32,
) -> Result<Vec<&Transaction>, Error> {
    let key = MonthKey::from_index(year, month)?;

    Ok(filter_by_month_key(transactions, key))
}

/// Get the transactions that happened in the month `key`, in input order.
pub fn filter_by_month_key(transactions: &[Transaction], key: MonthKey) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.month_key().is_ok_and(|month| month == key))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        Error,
        month::{MonthKey, normalize_date},
        transaction::test_utils::create_test_transaction,
    };

    use super::{filter_by_month, filter_by_month_key};

    #[test]
    fn keeps_only_matching_month_in_order() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-03-31", "Food"),
            create_test_transaction(2, dec!(20.0), "2024-04-01", "Food"),
            create_test_transaction(3, dec!(30.0), "2024-03-01", "Food"),
            create_test_transaction(4, dec!(40.0), "2023-03-15", "Food"),
        ];

        let got = filter_by_month(&transactions, 3, 2024).unwrap();

        let ids: Vec<_> = got.iter().map(|t| t.transaction_id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn january_is_one() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-01-10", "Food"),
            create_test_transaction(2, dec!(10.0), "2024-02-10", "Food"),
        ];

        let got = filter_by_month(&transactions, 1, 2024).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].transaction_date, "2024-01-10");
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let transactions = vec![create_test_transaction(1, dec!(10.0), "2024-01-10", "Food")];

        assert_eq!(
            filter_by_month(&transactions, 0, 2024),
            Err(Error::InvalidMonthIndex(0))
        );
        assert_eq!(
            filter_by_month(&transactions, 13, 2024),
            Err(Error::InvalidMonthIndex(13))
        );
    }

    #[test]
    fn skips_unparseable_dates() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "not-a-date", "Food"),
            create_test_transaction(2, dec!(10.0), "2024-05-02", "Food"),
        ];

        let got = filter_by_month(&transactions, 5, 2024).unwrap();

        assert_eq!(got.len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_by_month(&[], 5, 2024).unwrap().is_empty());
    }

    #[test]
    fn membership_matches_normalized_date() {
        let transactions = vec![
            create_test_transaction(1, dec!(1.0), "2023-12-31", "A"),
            create_test_transaction(2, dec!(1.0), "2024-01-01", "A"),
            create_test_transaction(3, dec!(1.0), "2024-01-31T23:59:59Z", "A"),
            create_test_transaction(4, dec!(1.0), "bogus", "A"),
            create_test_transaction(5, dec!(1.0), "2024-02-29", "A"),
        ];

        for month in 1..=12 {
            for year in [2023, 2024] {
                let key = MonthKey::new(year, month).unwrap();
                let got = filter_by_month_key(&transactions, key);

                for transaction in &transactions {
                    let in_month = normalize_date(&transaction.transaction_date) == Ok(key);
                    let in_result = got.iter().any(|t| std::ptr::eq(*t, transaction));
                    assert_eq!(in_month, in_result, "{transaction:?} in {key}");
                }
            }
        }
    }
}
