use crate::search::Recipe;
use futures::StreamExt;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Maximum accepted response body size (10MB).
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Errors that can occur while querying the search service.
///
/// Every variant renders as a human-readable sentence; the UI shows the
/// message verbatim in the status region without distinguishing transport
/// failures from service-side errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured service origin is not a valid URL.
    #[error("Invalid search service URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("Search service returned status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body was not a JSON array of recipe records
    #[error("Could not parse search results: {0}")]
    Parse(String),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

/// Create a redirect policy with loop detection and limited hops.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

/// HTTP client for the external recipe search service.
///
/// Wraps a pooled `reqwest::Client` and the configured service origin.
/// Cloning is cheap (the inner client is reference-counted), which lets the
/// UI hand a copy to each spawned search task.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    origin: Url,
    timeout: Duration,
}

impl SearchClient {
    /// Build a client for the given service origin (e.g. `http://127.0.0.1:8000`).
    ///
    /// The path and query of `origin` are ignored; requests always go to
    /// `<origin>/search`.
    pub fn new(origin: &str, timeout: Duration) -> Result<Self, SearchError> {
        let origin = Url::parse(origin)?;
        let http = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            origin,
            timeout,
        })
    }

    /// The configured service origin, for display and logging.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Query the search service for recipes matching `query`.
    ///
    /// Issues `GET <origin>/search?q=<query>` with the query URL-encoded and
    /// parses the body as a JSON array of [`Recipe`] records. There is no
    /// retry logic: any failure is returned to the caller, who surfaces it
    /// and waits for the user to resubmit.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Timeout`] - no response within the configured timeout
    /// - [`SearchError::Network`] - connection or TLS errors
    /// - [`SearchError::HttpStatus`] - non-2xx HTTP response
    /// - [`SearchError::ResponseTooLarge`] - body exceeded 10MB
    /// - [`SearchError::IncompleteResponse`] - body shorter than Content-Length
    /// - [`SearchError::Parse`] - body was not a JSON array of records
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let mut url = self.origin.clone();
        url.set_path("/search");
        url.query_pairs_mut().clear().append_pair("q", query);

        tracing::debug!(url = %url, "Issuing search request");

        let response = tokio::time::timeout(self.timeout, self.http.get(url).send())
            .await
            .map_err(|_| SearchError::Timeout)?
            .map_err(SearchError::Network)?;

        if !response.status().is_success() {
            return Err(SearchError::HttpStatus(response.status().as_u16()));
        }

        let bytes = read_limited_bytes(response, MAX_RESPONSE_SIZE).await?;

        let recipes: Vec<Recipe> =
            serde_json::from_slice(&bytes).map_err(|e| SearchError::Parse(e.to_string()))?;

        tracing::debug!(count = recipes.len(), query = %query, "Search completed");
        Ok(recipes)
    }
}

/// Read a response body while enforcing a size cap and completeness check.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, SearchError> {
    let expected_length = response.content_length();

    // Fast path: reject oversized bodies before reading anything.
    if let Some(len) = expected_length {
        if len as usize > limit {
            return Err(SearchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(SearchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(SearchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    // A truncated body would otherwise surface as a confusing parse error.
    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(SearchError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PIE_RESULTS: &str = r#"[
        {"Recipe":"Apple Pie","Category":"Desserts","Date":"1/1","Months":"Jan","Year":"2020","Cover Color (Border)":"Red","Notes":""}
    ]"#;

    fn test_client(origin: &str) -> SearchClient {
        SearchClient::new(origin, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_search_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "pie"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(PIE_RESULTS)
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let recipes = client.search("pie").await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Apple Pie");
        assert_eq!(recipes[0].category, "Desserts");
        assert_eq!(recipes[0].notes, None);
    }

    #[tokio::test]
    async fn test_query_is_url_encoded() {
        let mock_server = MockServer::start().await;
        // wiremock matches against the decoded parameter value.
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "apple & pear pie"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let recipes = client.search("apple & pear pie").await.unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_404_is_http_status_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        match client.search("pie").await.unwrap_err() {
            SearchError::HttpStatus(404) => {}
            e => panic!("Expected HttpStatus(404), got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_500_fails_without_retry() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1) // Exactly one request: failures are not retried
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        match client.search("pie").await.unwrap_err() {
            SearchError::HttpStatus(500) => {}
            e => panic!("Expected HttpStatus(500), got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        match client.search("pie").await.unwrap_err() {
            SearchError::Parse(_) => {}
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_error_object_body_is_parse_error() {
        // The service reports internal failures as a JSON object, not an array.
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"error":"index unavailable"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert!(matches!(
            client.search("pie").await.unwrap_err(),
            SearchError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_empty_array_is_ok() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let recipes = client.search("nothing").await.unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mock_server = MockServer::start().await;
        let huge = "x".repeat(MAX_RESPONSE_SIZE + 1);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(huge))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert!(matches!(
            client.search("pie").await.unwrap_err(),
            SearchError::ResponseTooLarge
        ));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&mock_server)
            .await;

        let client = SearchClient::new(&mock_server.uri(), Duration::from_millis(100)).unwrap();
        match client.search("pie").await.unwrap_err() {
            SearchError::Timeout | SearchError::Network(_) => {}
            e => panic!("Expected timeout, got {:?}", e),
        }
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result = SearchClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result.unwrap_err(), SearchError::BaseUrl(_)));
    }
}
