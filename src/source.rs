//! The transaction source: whatever fetched the user's transactions.
//!
//! The aggregation code never talks to a backend or holds an auth token. An
//! orchestrating layer is handed a [TransactionSource] instead.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    Error,
    account::{Account, AccountsResponse},
    transaction::{Transaction, TransactionResponse},
};

/// Provides the raw data the dashboard is computed from.
pub trait TransactionSource {
    /// Get every transaction.
    fn transactions(&self) -> Result<Vec<Transaction>, Error>;

    /// Get the months that have data as `MM/YYYY` tokens, most recent first.
    fn transaction_months(&self) -> Result<Vec<String>, Error>;

    /// Get the linked accounts.
    fn accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    #[serde(default)]
    transaction_months: Vec<String>,
}

/// A transaction source that has already been fetched into memory.
///
/// The JSON form mirrors the backend's responses:
///
/// ```json
/// {
///   "transactions": { "transactionCount": 1, "transactions": [ ... ] },
///   "user": { "transactionMonths": ["03/2024"] },
///   "accounts": { "accounts": [ ... ] }
/// }
/// ```
///
/// `user` and `accounts` are optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceSnapshot {
    transactions: TransactionResponse,
    #[serde(default)]
    user: UserData,
    #[serde(default)]
    accounts: AccountsResponse,
}

impl SourceSnapshot {
    /// Create a snapshot from data that is already in memory.
    pub fn new(
        transactions: Vec<Transaction>,
        transaction_months: Vec<String>,
        accounts: Vec<Account>,
    ) -> Self {
        Self {
            transactions: TransactionResponse {
                transaction_count: transactions.len(),
                transactions,
            },
            user: UserData { transaction_months },
            accounts: AccountsResponse { accounts },
        }
    }

    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidSourceData] if `json` does not describe a snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|error| Error::InvalidSourceData(error.to_string()))?;

        let response = &snapshot.transactions;
        if response.transaction_count != response.transactions.len() {
            tracing::warn!(
                "Source reported {} transactions but sent {}, using the transactions sent",
                response.transaction_count,
                response.transactions.len()
            );
        }

        Ok(snapshot)
    }

    /// Read a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [Error::SourceUnavailable] if the file cannot be read, or
    /// [Error::InvalidSourceData] if its contents are not a snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|error| Error::SourceUnavailable(format!("{}: {error}", path.display())))?;

        tracing::debug!("Read {} bytes from {}", json.len(), path.display());

        Self::from_json_str(&json)
    }
}

impl TransactionSource for SourceSnapshot {
    fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.transactions.clone())
    }

    fn transaction_months(&self) -> Result<Vec<String>, Error> {
        Ok(self.user.transaction_months.clone())
    }

    fn accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(self.accounts.accounts.clone())
    }
}
