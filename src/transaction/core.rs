//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, Time};
use uuid::Uuid;

use crate::category::default_category;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque, unique identifier of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => f.write_str("income"),
            TransactionType::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!(
                "\"{other}\" is not a transaction type, use \"income\" or \"expense\""
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money spent or earned in this transaction, always positive.
    pub amount: f64,
    /// The category of the transaction, drawn from the vocabulary of its type.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened, normalized to UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: f64,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            transaction_type,
            amount,
            category: default_category(transaction_type).to_owned(),
            description: description.to_owned(),
            date: start_of_day(OffsetDateTime::now_utc()),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The builder holds everything except the ID. The store attaches a fresh ID
/// when the transaction is added, and edits reuse the ID of the transaction
/// they replace.
///
/// # Examples
///
/// ```ignore
/// use time::macros::datetime;
///
/// use crate::transaction::{Transaction, TransactionId, TransactionType};
///
/// let transaction = Transaction::build(TransactionType::Expense, 45.99, "Coffee")
///     .category("Food")
///     .date(datetime!(2025-01-15 0:00 UTC))
///     .finalize(TransactionId::new_random());
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,

    /// The monetary amount of the transaction.
    ///
    /// Always positive, the direction of the money is given by the type.
    pub amount: f64,

    /// The category of the transaction.
    ///
    /// Defaults to the first category in the vocabulary of the type.
    pub category: String,

    /// A human-readable description of the transaction.
    pub description: String,

    /// When the transaction occurred.
    ///
    /// Defaults to the start of the current day in UTC.
    pub date: OffsetDateTime,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = date;
        self
    }

    /// Attach `id` and create the [Transaction].
    pub fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

/// Truncate `date_time` to midnight and convert it to UTC.
pub(crate) fn start_of_day(date_time: OffsetDateTime) -> OffsetDateTime {
    date_time
        .to_offset(time::UtcOffset::UTC)
        .replace_time(Time::MIDNIGHT)
}

// ============================================================================
// TESTS
// ============================================================================
