use axum::{Json, body::Bytes, extract::State};

use crate::{
    AppState, Error,
    api::{ChatRequest, ChatResponse},
    assistant::prompt::chat_prompt,
};

const MISSING_FIELDS: &str = "The request is missing the query or the transactions.";

/// A route handler that answers a question about the transactions in the request.
///
/// The model is told to answer from the transactions alone. The server cannot
/// check that it does.
pub async fn chat_endpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, Error> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|error| {
        tracing::debug!("Rejected chat request: {error}");
        Error::BadRequest(MISSING_FIELDS.to_owned())
    })?;

    if request.query.trim().is_empty() {
        return Err(Error::BadRequest(MISSING_FIELDS.to_owned()));
    }

    let model = state.model()?;
    let prompt = chat_prompt(request.query.trim(), &request.transactions);
    let reply = model.generate(&prompt).await?;

    Ok(Json(ChatResponse {
        response: reply.trim().to_owned(),
    }))
}
