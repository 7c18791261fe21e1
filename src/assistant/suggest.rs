use axum::{Json, body::Bytes, extract::State};

use crate::{
    AppState, Error,
    api::{SuggestCategoryRequest, SuggestCategoryResponse},
    assistant::prompt::category_prompt,
};

const MISSING_FIELDS: &str = "The request is missing the description or the categories.";

/// A route handler that asks the language model to pick a category for a description.
///
/// Responds with the model's trimmed reply. The reply is not checked against the
/// categories, that is left to the client.
pub async fn suggest_category_endpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestCategoryResponse>, Error> {
    let request: SuggestCategoryRequest = serde_json::from_slice(&body).map_err(|error| {
        tracing::debug!("Rejected category suggestion request: {error}");
        Error::BadRequest(MISSING_FIELDS.to_owned())
    })?;

    if request.description.trim().is_empty() {
        return Err(Error::BadRequest(MISSING_FIELDS.to_owned()));
    }

    let model = state.model()?;
    let prompt = category_prompt(request.description.trim(), &request.categories);
    let reply = model.generate(&prompt).await?;

    Ok(Json(SuggestCategoryResponse {
        category: reply.trim().to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        api::{ErrorResponse, SuggestCategoryResponse},
        endpoints,
        test_utils::{failing_server, server_without_model, stub_server},
    };

    #[tokio::test]
    async fn returns_trimmed_model_reply() {
        let server = stub_server("  Food\n");

        let response = server
            .post(endpoints::SUGGEST_CATEGORY)
            .json(&json!({"description": "Pizza", "categories": ["Food", "Other"]}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<SuggestCategoryResponse>(),
            SuggestCategoryResponse {
                category: "Food".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn rejects_get() {
        let server = stub_server("Food");

        let response = server.get(endpoints::SUGGEST_CATEGORY).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<ErrorResponse>().error, "Method Not Allowed");
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = stub_server("Food");

        let response = server
            .post(endpoints::SUGGEST_CATEGORY)
            .text("{\"description\": ")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let server = stub_server("Food");

        for body in [
            json!({"description": "Pizza"}),
            json!({"categories": ["Food"]}),
            json!({"description": "", "categories": ["Food"]}),
            json!({"description": "Pizza", "categories": "Food"}),
        ] {
            let response = server.post(endpoints::SUGGEST_CATEGORY).json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let server = server_without_model();

        let response = server
            .post(endpoints::SUGGEST_CATEGORY)
            .json(&json!({"description": "Pizza", "categories": ["Food"]}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "The API key is not configured on the server."
        );
    }

    #[tokio::test]
    async fn model_failure_hides_details() {
        let server = failing_server("quota exceeded for key abc123");

        let response = server
            .post(endpoints::SUGGEST_CATEGORY)
            .json(&json!({"description": "Pizza", "categories": ["Food"]}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let error = response.json::<ErrorResponse>().error;
        assert!(!error.contains("abc123"));
    }
}
