//! Builds the prompts sent to the language model.

use crate::transaction::{Transaction, TransactionType};

/// The prompt asking the model to pick one of `categories` for `description`.
pub(crate) fn category_prompt(description: &str, categories: &[String]) -> String {
    format!(
        "Based on the transaction description \"{description}\", which of the following \
        categories fits best? Categories: {}. Reply only with the name of the \
        category from the list. Do not add explanations or any other text.",
        categories.join(", ")
    )
}

/// The prompt asking the model to answer `query` from `transactions` alone.
pub(crate) fn chat_prompt(query: &str, transactions: &[Transaction]) -> String {
    let history = if transactions.is_empty() {
        "There are no transactions yet.".to_owned()
    } else {
        transactions
            .iter()
            .map(transaction_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are a friendly and helpful financial assistant. Your only source of knowledge \
        is the transaction data provided below.\n\
        Do not make up information. Base your answers solely on this data.\n\
        \n\
        Here are the user's transactions:\n\
        ---\n\
        {history}\n\
        ---\n\
        \n\
        User question: \"{query}\"\n\
        \n\
        Please answer the user's question concisely and directly, based on the transaction data."
    )
}

/// A compact one line summary, e.g. `Expense: 250 in Food (Groceries) on 2025-01-31`.
fn transaction_line(transaction: &Transaction) -> String {
    let kind = match transaction.transaction_type {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
    };

    format!(
        "{kind}: {} in {} ({}) on {}",
        transaction.amount,
        transaction.category,
        transaction.description,
        transaction.date.date()
    )
}
