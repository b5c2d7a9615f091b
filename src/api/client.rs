//! HTTP client for the book-search endpoint.
//!
//! `BooksClient` issues exactly one GET per search against a fixed volumes
//! endpoint and parses the JSON envelope. There is no caching, no retry, no
//! cancellation surface, and no timeout policy beyond the transport defaults.
//!
//! Request construction (`search_url`) and body parsing (`parse_search_body`)
//! are pure helpers so the failure taxonomy can be tested without touching
//! the network.

use tracing::info;

use crate::api::raw::RawSearchResponse;
use crate::domain::{BookgridError, Result};

/// Default base URL of the volumes search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Client for the volumes search endpoint.
///
/// Holds a reusable `reqwest::Client` and the endpoint base URL. The base is
/// injectable for tests; the observed application surface always uses
/// [`DEFAULT_BASE_URL`].
#[derive(Debug, Clone)]
pub struct BooksClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for BooksClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BooksClient {
    /// Creates a client against the given base URL.
    ///
    /// A trailing slash on the base is stripped so that joined paths never
    /// contain `//`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the full search URL for a query and result limit.
    ///
    /// The query is percent-encoded for the characters that matter in a
    /// query-string value (space, `&`, `=`, `%`, `+`, `#`).
    ///
    /// # Examples
    ///
    /// ```
    /// use bookgrid::api::BooksClient;
    ///
    /// let client = BooksClient::new("https://example.test/books/v1");
    /// assert_eq!(
    ///     client.search_url("android", 10),
    ///     "https://example.test/books/v1/volumes?q=android&maxResults=10"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &str, max_results: u32) -> String {
        format!(
            "{}/volumes?q={}&maxResults={max_results}",
            self.base_url,
            encode_query_value(query)
        )
    }

    /// Performs the search request.
    ///
    /// Issues a single GET to `<base>/volumes?q=<query>&maxResults=<n>` and
    /// parses the JSON envelope.
    ///
    /// # Parameters
    ///
    /// * `query` - Non-empty search query text
    /// * `max_results` - Positive result-count limit
    ///
    /// # Errors
    ///
    /// - [`BookgridError::Network`] on any transport failure
    /// - [`BookgridError::Response`] on a non-2xx status (body discarded)
    /// - [`BookgridError::Parse`] when the body is not the expected envelope
    ///
    /// No failure is retried and no partial data is returned.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<RawSearchResponse> {
        let url = self.search_url(query, max_results);
        info!(url = %url, "fetching book search results");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BookgridError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BookgridError::Network(e.to_string()))?;

        parse_search_body(status, &body)
    }
}

/// Parses a completed HTTP exchange into the raw envelope.
///
/// Split out from [`BooksClient::search`] so the status and body handling can
/// be exercised without a live endpoint.
///
/// # Errors
///
/// - [`BookgridError::Response`] if `status` is outside 200-299
/// - [`BookgridError::Parse`] if `body` is not a valid envelope
pub fn parse_search_body(status: u16, body: &str) -> Result<RawSearchResponse> {
    if !(200..300).contains(&status) {
        return Err(BookgridError::Response { status });
    }

    serde_json::from_str(body).map_err(|e| BookgridError::Parse(e.to_string()))
}

/// Percent-encodes the characters that would corrupt a query-string value.
fn encode_query_value(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            ' ' => encoded.push_str("%20"),
            '&' => encoded.push_str("%26"),
            '=' => encoded.push_str("%3D"),
            '%' => encoded.push_str("%25"),
            '+' => encoded.push_str("%2B"),
            '#' => encoded.push_str("%23"),
            _ => encoded.push(ch),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BooksClient {
        BooksClient::new("https://example.test/books/v1")
    }

    #[test]
    fn search_url_includes_query_and_limit() {
        let url = client().search_url("android", 10);
        assert_eq!(
            url,
            "https://example.test/books/v1/volumes?q=android&maxResults=10"
        );
    }

    #[test]
    fn search_url_encodes_spaces() {
        let url = client().search_url("rust programming", 5);
        assert_eq!(
            url,
            "https://example.test/books/v1/volumes?q=rust%20programming&maxResults=5"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BooksClient::new("https://example.test/books/v1/");
        assert_eq!(
            client.search_url("a", 1),
            "https://example.test/books/v1/volumes?q=a&maxResults=1"
        );
    }

    #[test]
    fn parse_search_body_success() {
        let body = r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#;
        let response = parse_search_body(200, body).unwrap();
        assert_eq!(response.items.unwrap().len(), 1);
    }

    #[test]
    fn parse_search_body_not_found() {
        let err = parse_search_body(404, "").unwrap_err();
        assert!(matches!(err, BookgridError::Response { status: 404 }));
    }

    #[test]
    fn parse_search_body_server_error() {
        let err = parse_search_body(500, "internal error").unwrap_err();
        assert!(matches!(err, BookgridError::Response { status: 500 }));
    }

    #[test]
    fn parse_search_body_bad_json() {
        let err = parse_search_body(200, "not json").unwrap_err();
        assert!(matches!(err, BookgridError::Parse(_)));
    }
}
