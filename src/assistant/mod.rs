//! The AI assistant endpoints and the language model they forward to.
//!
//! Both endpoints are thin proxies: they check the request, build a prompt and
//! return the model's text. The API key for the model never leaves the server.

mod chat;
mod model;
mod prompt;
mod suggest;

pub use chat::chat_endpoint;
pub use model::{API_KEY_ENV, DEFAULT_MODEL, GEMINI_BASE_URL, GeminiModel, LanguageModel};
pub use suggest::suggest_category_endpoint;

use crate::Error;

/// Route handler for non-POST requests to the assistant endpoints.
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
