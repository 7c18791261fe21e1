//! Helpers shared by the tests of the assistant server and clients.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use crate::{AppState, Error, assistant::LanguageModel, build_router};

/// Replies with the same text to every prompt.
pub(crate) struct StubModel {
    reply: String,
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, _: &str) -> Result<String, Error> {
        Ok(self.reply.clone())
    }
}

/// Fails every prompt with a model error carrying `detail`.
pub(crate) struct FailingModel {
    detail: String,
}

#[async_trait]
impl LanguageModel for FailingModel {
    async fn generate(&self, _: &str) -> Result<String, Error> {
        Err(Error::ModelError(self.detail.clone()))
    }
}

/// The full router with a model that always replies `reply`.
pub(crate) fn stub_router(reply: &str) -> Router {
    build_router(AppState::new(Some(Arc::new(StubModel {
        reply: reply.to_owned(),
    }))))
}

/// The full router without a model, as if the API key was not set.
pub(crate) fn router_without_model() -> Router {
    build_router(AppState::new(None))
}

pub(crate) fn stub_server(reply: &str) -> TestServer {
    TestServer::new(stub_router(reply)).expect("Could not create test server.")
}

pub(crate) fn server_without_model() -> TestServer {
    TestServer::new(router_without_model()).expect("Could not create test server.")
}

pub(crate) fn failing_server(detail: &str) -> TestServer {
    let app = build_router(AppState::new(Some(Arc::new(FailingModel {
        detail: detail.to_owned(),
    }))));

    TestServer::new(app).expect("Could not create test server.")
}

/// Serve `app` on an ephemeral local port and return its base URL, e.g. "http://127.0.0.1:41234".
pub(crate) async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener.");
    let address = listener.local_addr().expect("Could not get local address.");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server stopped unexpectedly.");
    });

    format!("http://{address}")
}
