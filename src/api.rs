//! The JSON bodies exchanged between the clients and the assistant server.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// The body of a request for a category suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestCategoryRequest {
    /// The description of the transaction to categorize.
    pub description: String,
    /// The categories the suggestion must be drawn from.
    pub categories: Vec<String>,
}

/// The body of a successful category suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestCategoryResponse {
    /// The category the language model picked, not yet checked against the vocabulary.
    pub category: String,
}

/// The body of a question about the user's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub query: String,
    /// Every transaction the answer may draw on.
    pub transactions: Vec<Transaction>,
}

/// The body of a successful answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The answer text.
    pub response: String,
}

/// The body sent alongside any non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A message that can be shown to the user.
    pub error: String,
}
