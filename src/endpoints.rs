//! The API endpoint URIs.

/// The route for suggesting a category for a transaction description.
pub const SUGGEST_CATEGORY: &str = "/api/suggest-category";
/// The route for asking a question about the user's transactions.
pub const CHAT: &str = "/api/chat";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::SUGGEST_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::CHAT);
    }
}
