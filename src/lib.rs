//! Pocketbook is a personal finance tracker.
//!
//! Transactions live in a [TransactionStore] that is persisted as a single
//! JSON record on every change. Totals and the expense breakdown are derived
//! from the current list by [summarize] and [category_breakdown].
//!
//! An optional AI assistant suggests expense categories and answers questions
//! about the recorded transactions. The assistant is reached through a small
//! proxy server (see [build_router]) that holds the language model credential,
//! and is called from the [SuggestionClient] and [ChatClient].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod assistant;
mod category;
mod client;
mod currency;
mod db;
pub mod endpoints;
mod error;
mod logging;
mod routing;
mod stores;
mod summary;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{
    ChatRequest, ChatResponse, ErrorResponse, SuggestCategoryRequest, SuggestCategoryResponse,
};
pub use app_state::AppState;
pub use assistant::{API_KEY_ENV, DEFAULT_MODEL, GEMINI_BASE_URL, GeminiModel, LanguageModel};
pub use category::{
    EXPENSE_CATEGORIES, FALLBACK_CATEGORY, INCOME_CATEGORIES, default_category, fallback_category,
    is_valid_category, vocabulary,
};
pub use client::{ChatClient, DEFAULT_TIMEOUT, SuggestionClient, build_http_client};
pub use currency::format_currency;
pub use error::Error;
pub use routing::build_router;
pub use stores::{MemoryStorage, SQLiteStorage, Storage, TRANSACTIONS_KEY, TransactionStore};
pub use summary::{Summary, category_breakdown, summarize};
pub use transaction::{
    Transaction, TransactionBuilder, TransactionForm, TransactionId, TransactionType,
    ValidationError,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
