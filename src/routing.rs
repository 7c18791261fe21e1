//! Assistant server router configuration.

use axum::{Router, middleware, routing::post};

use crate::{
    AppState, Error,
    assistant::{chat_endpoint, method_not_allowed, suggest_category_endpoint},
    endpoints,
    logging::logging_middleware,
};

/// Return a router with all the assistant server's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::SUGGEST_CATEGORY,
            post(suggest_category_endpoint).fallback(method_not_allowed),
        )
        .route(
            endpoints::CHAT,
            post(chat_endpoint).fallback(method_not_allowed),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{api::ErrorResponse, test_utils::stub_server};

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let server = stub_server("unused");

        let response = server.get("/api/nope").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "The requested resource could not be found."
        );
    }
}
