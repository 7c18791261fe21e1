//! Aggregates a transaction list into totals and a per-category expense breakdown.
//!
//! Everything here is a pure function of the list it is given. Callers recompute
//! after every change to the store instead of keeping running totals.

use std::collections::HashMap;

use serde::Serialize;

use crate::transaction::{Transaction, TransactionType};

/// The income and expense totals over a list of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
}

impl Summary {
    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }

    /// The percentage of all expenses that `amount` makes up.
    ///
    /// Zero when the expense total is not positive, e.g. when every stored expense has a
    /// zero amount.
    pub fn expense_share(&self, amount: f64) -> f64 {
        if self.expense > 0.0 {
            amount / self.expense * 100.0
        } else {
            0.0
        }
    }
}

/// Sum the income and expense amounts of `transactions`.
///
/// An empty list gives zero totals.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    transactions
        .iter()
        .fold(Summary::default(), |mut summary, transaction| {
            match transaction.transaction_type {
                TransactionType::Income => summary.income += transaction.amount,
                TransactionType::Expense => summary.expense += transaction.amount,
            }

            summary
        })
}

/// Sum the expense amounts of `transactions` per category.
///
/// Income is ignored. An empty map means there is no expense data to show.
pub fn category_breakdown(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
    {
        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    totals
}
