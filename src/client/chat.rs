use crate::{
    Error,
    api::{ChatRequest, ChatResponse},
    client::{endpoint_url, post_json},
    endpoints,
    transaction::{Transaction, ValidationError},
};

const GENERIC_ERROR: &str = "Could not get a response from the AI assistant.";

/// Asks the assistant server questions about the user's transactions.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    url: String,
}

impl ChatClient {
    /// Create a client for the assistant server at `base_url`, e.g. "http://127.0.0.1:3000".
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            url: endpoint_url(base_url, endpoints::CHAT),
        }
    }

    /// Ask `question` about `transactions` and return the answer with surrounding whitespace
    /// removed.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Validation] if `question` is empty, no request is made,
    /// - or [Error::RequestFailed] if the request failed or the server responded with an error.
    pub async fn ask(&self, question: &str, transactions: &[Transaction]) -> Result<String, Error> {
        let question = question.trim();

        if question.is_empty() {
            return Err(ValidationError::MissingField("question").into());
        }

        let request = ChatRequest {
            query: question.to_owned(),
            transactions: transactions.to_vec(),
        };

        let response: ChatResponse =
            post_json(&self.http, &self.url, &request, GENERIC_ERROR).await?;

        Ok(response.response.trim().to_owned())
    }
}
