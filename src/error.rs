//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{api::ErrorResponse, assistant::API_KEY_ENV, transaction::ValidationError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user input for a transaction was incomplete or invalid.
    ///
    /// No changes are made to the store when this error occurs.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request to the assistant server failed, either because the server
    /// could not be reached or because it responded with an error status.
    ///
    /// The string is a human-readable message that can be shown to the user
    /// as is.
    #[error("{0}")]
    RequestFailed(String),

    /// The request to the assistant server was missing fields or was not valid JSON.
    #[error("{0}")]
    BadRequest(String),

    /// An assistant endpoint was called with a method other than POST.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The server has no API key for the language model.
    ///
    /// The detail is logged on the server, the client only receives a
    /// general configuration error message.
    #[error("the API key is not configured on the server")]
    MissingApiKey,

    /// The call to the language model failed or returned something unusable.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("the language model request failed: {0}")]
    ModelError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// The persisted transaction list could not be parsed.
    #[error("the stored transactions could not be read: {0}")]
    CorruptStorage(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Error::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Error::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_owned(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.".to_owned(),
            ),
            Error::MissingApiKey => {
                tracing::error!(
                    "The environment variable '{API_KEY_ENV}' is not set, \
                    cannot forward the request to the language model."
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The API key is not configured on the server.".to_owned(),
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not get a response from the AI assistant.".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
