use thiserror::Error;
use url::Url;

/// Errors that can occur when validating a link before opening it.
#[derive(Debug, Error)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validates a notes link before it is handed to `open::that`.
///
/// The value comes straight from the search service, so it is treated as
/// untrusted input: only `http` and `https` URLs are allowed. Rejecting
/// `file://` and friends prevents a hostile record from launching arbitrary
/// local resources through the system opener.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_accepted() {
        assert!(validate_url_for_open("https://example.com/recipe-notes").is_ok());
    }

    #[test]
    fn test_http_accepted() {
        assert!(validate_url_for_open("http://example.com/notes?id=3").is_ok());
    }

    #[test]
    fn test_file_scheme_rejected() {
        let err = validate_url_for_open("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, UrlValidationError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_javascript_scheme_rejected() {
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let err = validate_url_for_open("not a url at all").unwrap_err();
        assert!(matches!(err, UrlValidationError::InvalidUrl(_)));
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(validate_url_for_open("/notes/3").is_err());
    }
}
