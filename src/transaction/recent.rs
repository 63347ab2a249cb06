//! Selecting the most recent transactions.

use std::cmp::Reverse;

use super::Transaction;

/// Get at most `limit` transactions, most recent first.
///
/// Transactions on the same day keep their input order. Transactions with a
/// malformed date sort after every dated transaction. The input is not
/// reordered.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    // `sort_by_cached_key` is stable and parses each date only once.
    sorted.sort_by_cached_key(|transaction| Reverse(transaction.date().ok()));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::transaction::test_utils::create_test_transaction;

    use super::recent;

    #[test]
    fn returns_most_recent_first_truncated() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-01-01", "A"),
            create_test_transaction(2, dec!(10.0), "2024-01-03", "A"),
            create_test_transaction(3, dec!(10.0), "2024-01-02", "A"),
        ];

        let got = recent(&transactions, 2);

        let dates: Vec<_> = got.iter().map(|t| t.transaction_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-02"]);
    }

    #[test]
    fn does_not_mutate_input() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-01-01", "A"),
            create_test_transaction(2, dec!(10.0), "2024-01-03", "A"),
        ];
        let before = transactions.clone();

        let _ = recent(&transactions, 2);

        assert_eq!(transactions, before);
    }

    #[test]
    fn ties_keep_input_order() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-01-02", "A"),
            create_test_transaction(2, dec!(10.0), "2024-01-05", "A"),
            create_test_transaction(3, dec!(10.0), "2024-01-02", "A"),
            create_test_transaction(4, dec!(10.0), "2024-01-02T12:00:00", "A"),
        ];

        let got = recent(&transactions, 10);

        let ids: Vec<_> = got.iter().map(|t| t.transaction_id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn length_is_min_of_limit_and_input() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "2024-01-02", "A"),
            create_test_transaction(2, dec!(10.0), "bad", "A"),
            create_test_transaction(3, dec!(10.0), "2023-07-02", "A"),
        ];

        for limit in 0..6 {
            let got = recent(&transactions, limit);
            assert_eq!(got.len(), limit.min(transactions.len()));
        }
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let transactions = vec![
            create_test_transaction(1, dec!(10.0), "bad", "A"),
            create_test_transaction(2, dec!(10.0), "2020-01-02", "A"),
        ];

        let got = recent(&transactions, 2);

        assert_eq!(got[0].transaction_date, "2020-01-02");
        assert_eq!(got[1].transaction_date, "bad");
    }

    #[test]
    fn dates_never_increase() {
        let transactions: Vec<_> = ["2024-03-01", "2022-01-09", "2024-11-30", "2023-05-05"]
            .iter()
            .enumerate()
            .map(|(i, date)| create_test_transaction(i as i64, dec!(1.0), date, "A"))
            .collect();

        let got = recent(&transactions, 4);

        assert!(
            got.windows(2)
                .all(|pair| pair[0].date().unwrap() >= pair[1].date().unwrap())
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(recent(&[], 6).is_empty());
    }
}
