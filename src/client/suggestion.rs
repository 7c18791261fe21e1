use crate::{
    Error,
    api::{SuggestCategoryRequest, SuggestCategoryResponse},
    category::fallback_category,
    client::{endpoint_url, post_json},
    endpoints,
    transaction::ValidationError,
};

const GENERIC_ERROR: &str = "Could not get a category suggestion from the AI assistant.";

/// Asks the assistant server which category fits a transaction description.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    url: String,
}

impl SuggestionClient {
    /// Create a client for the assistant server at `base_url`, e.g. "http://127.0.0.1:3000".
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            url: endpoint_url(base_url, endpoints::SUGGEST_CATEGORY),
        }
    }

    /// Suggest one of `categories` for `description`.
    ///
    /// The suggestion is always a member of `categories`: if the server replies with
    /// anything else, the catch-all category of the list is returned instead, see
    /// [fallback_category].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Validation] if `description` is empty, no request is made,
    /// - or [Error::RequestFailed] if the request failed or the server responded with an error.
    pub async fn suggest(&self, description: &str, categories: &[&str]) -> Result<String, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }

        let request = SuggestCategoryRequest {
            description: description.to_owned(),
            categories: categories.iter().map(|&category| category.to_owned()).collect(),
        };

        let response: SuggestCategoryResponse =
            post_json(&self.http, &self.url, &request, GENERIC_ERROR).await?;
        let suggested = response.category.trim();

        if categories.contains(&suggested) {
            Ok(suggested.to_owned())
        } else {
            let fallback = fallback_category(categories);
            tracing::warn!(
                "The assistant suggested \"{suggested}\" which is not a valid category, \
                using \"{fallback}\" instead."
            );
            Ok(fallback.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::json;

    use crate::{
        EXPENSE_CATEGORIES, Error, INCOME_CATEGORIES, endpoints,
        test_utils::{router_without_model, serve, stub_router},
        transaction::{TransactionForm, TransactionType, ValidationError},
    };

    use super::SuggestionClient;

    async fn client_for(app: Router) -> SuggestionClient {
        let base_url = serve(app).await;
        SuggestionClient::new(reqwest::Client::new(), &base_url)
    }

    #[tokio::test]
    async fn returns_valid_suggestion() {
        let client = client_for(stub_router(" Transport\n")).await;

        let category = client.suggest("Bus ticket", EXPENSE_CATEGORIES).await;

        assert_eq!(category, Ok("Transport".to_owned()));
    }

    #[tokio::test]
    async fn falls_back_when_suggestion_is_not_in_vocabulary() {
        let client = client_for(stub_router("Pizza")).await;

        let category = client.suggest("Pizza night", EXPENSE_CATEGORIES).await;

        assert_eq!(category, Ok("Other".to_owned()));
    }

    #[tokio::test]
    async fn income_fallback_stays_in_income_vocabulary() {
        let client = client_for(stub_router("Lottery")).await;

        let category = client
            .suggest("Won the lottery", INCOME_CATEGORIES)
            .await
            .unwrap();

        assert_eq!(category, "Other Income");
        let mut form = TransactionForm::new(TransactionType::Income);
        form.amount = "500".to_owned();
        form.description = "Won the lottery".to_owned();
        form.category = category;
        assert!(form.validate().is_ok());
    }

    #[tokio::test]
    async fn surfaces_server_error_message_verbatim() {
        let app = Router::new().route(
            endpoints::SUGGEST_CATEGORY,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "X"}))) }),
        );
        let client = client_for(app).await;

        let result = client.suggest("Pizza", EXPENSE_CATEGORIES).await;

        assert_eq!(result, Err(Error::RequestFailed("X".to_owned())));
    }

    #[tokio::test]
    async fn surfaces_missing_api_key() {
        let client = client_for(router_without_model()).await;

        let result = client.suggest("Pizza", EXPENSE_CATEGORIES).await;

        assert_eq!(
            result,
            Err(Error::RequestFailed(
                "The API key is not configured on the server.".to_owned()
            ))
        );
    }

    #[tokio::test]
    async fn uses_generic_message_without_error_body() {
        let app = Router::new().route(
            endpoints::SUGGEST_CATEGORY,
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream hiccup") }),
        );
        let client = client_for(app).await;

        let result = client.suggest("Pizza", EXPENSE_CATEGORIES).await;

        assert_eq!(
            result,
            Err(Error::RequestFailed(
                "Could not get a category suggestion from the AI assistant.".to_owned()
            ))
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_request_failed() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let client = SuggestionClient::new(reqwest::Client::new(), &format!("http://{address}"));

        let result = client.suggest("Pizza", EXPENSE_CATEGORIES).await;

        assert!(matches!(result, Err(Error::RequestFailed(_))));
    }

    #[tokio::test]
    async fn empty_description_is_rejected_locally() {
        let client = SuggestionClient::new(reqwest::Client::new(), "http://127.0.0.1:9");

        let result = client.suggest("   ", EXPENSE_CATEGORIES).await;

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::MissingField(
                "description"
            )))
        );
    }
}
