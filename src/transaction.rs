//! The bank transaction model and the views built directly on lists of
//! transactions: the month filter, the year → month index and the recency
//! selector.

mod filter;
mod grouping;
mod recent;

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    month::{MonthKey, normalize_date, parse_transaction_date},
};

pub use filter::{filter_by_month, filter_by_month_key};
pub use grouping::{GroupedIndex, MonthGroup, YearGroup, build_index};
pub use recent::recent;

/// The category label for transactions without a primary category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Identifies a transaction within one result set of a transaction source.
///
/// Backends hand out either integers or opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    /// A numeric ID.
    Integer(i64),
    /// An opaque string ID.
    Text(String),
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionId::Integer(id) => write!(f, "{id}"),
            TransactionId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// A bank transaction as delivered by the transaction source.
///
/// Amounts follow the bank aggregator's sign convention: a positive amount is
/// money spent and a negative amount is money received. Use
/// [Transaction::flow] rather than inspecting the sign directly.
///
/// Amounts are exact decimals. The source may send them as JSON numbers or as
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub transaction_id: TransactionId,
    /// The amount of money spent (positive) or received (negative).
    pub amount: Decimal,
    /// When the transaction happened, as sent by the source.
    pub transaction_date: String,
    /// Who the money was paid to or received from.
    #[serde(default)]
    pub merchant_name: Option<String>,
    /// A coarse category label, e.g. "FOOD_AND_DRINK".
    #[serde(default, alias = "plaidCategoryPrimary")]
    pub category_primary: Option<String>,
    /// A finer category label.
    #[serde(default, alias = "plaidCategoryDetailed")]
    pub category_detailed: Option<String>,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the transaction has yet to settle.
    #[serde(default)]
    pub is_pending: bool,
}

impl Transaction {
    /// Create a settled transaction with no merchant or category.
    pub fn new(transaction_id: TransactionId, amount: Decimal, transaction_date: &str) -> Self {
        Self {
            transaction_id,
            amount,
            transaction_date: transaction_date.to_owned(),
            merchant_name: None,
            category_primary: None,
            category_detailed: None,
            description: None,
            is_pending: false,
        }
    }

    /// Set the primary category.
    pub fn category(mut self, category: &str) -> Self {
        self.category_primary = Some(category.to_owned());
        self
    }

    /// Set the merchant name.
    pub fn merchant(mut self, merchant_name: &str) -> Self {
        self.merchant_name = Some(merchant_name.to_owned());
        self
    }

    /// The calendar date of the transaction.
    ///
    /// # Errors
    ///
    /// Returns [Error::UnparseableDate] if the date sent by the source is malformed.
    pub fn date(&self) -> Result<Date, Error> {
        parse_transaction_date(&self.transaction_date)
    }

    /// The month the transaction happened in.
    ///
    /// # Errors
    ///
    /// Returns [Error::UnparseableDate] if the date sent by the source is malformed.
    pub fn month_key(&self) -> Result<MonthKey, Error> {
        normalize_date(&self.transaction_date)
    }

    /// The category label to group this transaction under.
    ///
    /// Missing or blank categories are grouped under [UNCATEGORIZED_LABEL].
    pub fn category_label(&self) -> &str {
        self.category_primary
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Whether the transaction is spending or income.
    pub fn flow(&self) -> CashFlow {
        CashFlow::from_amount(self.amount)
    }
}

/// The direction money moved in a transaction, with the magnitude always
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlow {
    /// Money spent.
    Spend(Decimal),
    /// Money received.
    Income(Decimal),
    /// Zero.
    Neutral,
}

impl CashFlow {
    /// Interpret a raw transaction amount.
    ///
    /// This is the only place that knows the source's sign convention: positive
    /// amounts are spending and negative amounts are income.
    pub fn from_amount(amount: Decimal) -> Self {
        if amount.is_zero() {
            CashFlow::Neutral
        } else if amount.is_sign_positive() {
            CashFlow::Spend(amount)
        } else {
            CashFlow::Income(-amount)
        }
    }

    /// The amount spent, zero for income.
    pub fn spend(self) -> Decimal {
        match self {
            CashFlow::Spend(amount) => amount,
            _ => Decimal::ZERO,
        }
    }

    /// The amount received, zero for spending.
    pub fn income(self) -> Decimal {
        match self {
            CashFlow::Income(amount) => amount,
            _ => Decimal::ZERO,
        }
    }

    /// How the transaction changed the account balance: income minus spending.
    pub fn net(self) -> Decimal {
        self.income() - self.spend()
    }
}

/// The envelope the transaction source sends transactions in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// How many transactions the source says it sent.
    #[serde(default)]
    pub transaction_count: usize,
    /// The transactions.
    pub transactions: Vec<Transaction>,
}
