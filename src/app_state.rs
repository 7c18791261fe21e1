//! Implements a struct that holds the state of the assistant server.

use std::sync::Arc;

use crate::{Error, assistant::LanguageModel};

/// The state of the assistant server.
#[derive(Clone)]
pub struct AppState {
    /// The language model requests are forwarded to.
    ///
    /// `None` when the server has no API key.
    model: Option<Arc<dyn LanguageModel>>,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// Pass `None` for `model` when no API key is configured. The server still
    /// starts, but every assistant request fails with a configuration error.
    pub fn new(model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { model }
    }

    /// The configured language model.
    ///
    /// # Errors
    /// Returns [Error::MissingApiKey] if the server has no model.
    pub fn model(&self) -> Result<&dyn LanguageModel, Error> {
        self.model.as_deref().ok_or(Error::MissingApiKey)
    }
}
