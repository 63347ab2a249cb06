//! Linked bank accounts and their balances.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank account linked through the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The ID of the account.
    pub account_id: i64,
    /// The kind of account, e.g. "checking" or "savings".
    #[serde(default)]
    pub account_type: String,
    /// The display name of the account.
    #[serde(default)]
    pub account_name: String,
    /// The current balance, sent as a decimal string.
    pub current_balance: String,
    /// The last few digits of the account number.
    #[serde(default)]
    pub plaid_mask: Option<String>,
}

impl Account {
    /// The current balance as a number, or `None` if the source sent something
    /// that is not a decimal number.
    pub fn balance(&self) -> Option<Decimal> {
        Decimal::from_str(self.current_balance.trim()).ok()
    }
}

/// The envelope the transaction source sends accounts in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountsResponse {
    /// The accounts.
    pub accounts: Vec<Account>,
}

/// The sum of the balances of `accounts`.
///
/// Accounts whose balance cannot be parsed are skipped and logged.
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .filter_map(|account| {
            let balance = account.balance();
            if balance.is_none() {
                tracing::warn!(
                    "Skipping account {} with invalid balance {:?}",
                    account.account_id,
                    account.current_balance
                );
            }
            balance
        })
        .sum()
}
