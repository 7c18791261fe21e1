//! Clients for the assistant server endpoints.
//!
//! Any failure, whether the server could not be reached or it answered with
//! an error status, becomes an [Error::RequestFailed] with a message that can
//! be shown to the user as is. Nothing is retried.

mod chat;
mod suggestion;

pub use chat::ChatClient;
pub use suggestion::SuggestionClient;

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, api::ErrorResponse};

/// How long a client waits for the assistant server before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Create an HTTP client that gives up on requests after `timeout`.
///
/// # Errors
/// Returns an [Error::RequestFailed] if the HTTP client could not be initialized.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|error| Error::RequestFailed(format!("Could not create the HTTP client: {error}")))
}

/// Join `base_url` and `endpoint` without doubling the slash.
fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}

/// POST `body` as JSON to `url` and parse the JSON reply.
///
/// On a non-success status the `error` field of the reply is used as the message if
/// there is one, otherwise `fallback_message`.
async fn post_json<Req, Res>(
    http: &reqwest::Client,
    url: &str,
    body: &Req,
    fallback_message: &str,
) -> Result<Res, Error>
where
    Req: Serialize + ?Sized,
    Res: DeserializeOwned,
{
    let response = http.post(url).json(body).send().await.map_err(|error| {
        tracing::error!("Request to {url} failed: {error}");
        Error::RequestFailed(fallback_message.to_owned())
    })?;

    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse { error }) if !error.trim().is_empty() => error,
            _ => fallback_message.to_owned(),
        };

        tracing::warn!("{url} responded with {status}: {message}");
        return Err(Error::RequestFailed(message));
    }

    response.json::<Res>().await.map_err(|error| {
        tracing::error!("Could not parse the response from {url}: {error}");
        Error::RequestFailed(fallback_message.to_owned())
    })
}
