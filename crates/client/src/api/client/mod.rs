mod client;
mod error;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

pub use client::ApiClient;
pub use error::{ApiError, RequestError};

/// Definition of an API request
pub trait ApiRequest {
    /// Decoded response body. Empty bodies decode as JSON `null`.
    type Response: DeserializeOwned;

    /// Builds a Reqwest request against `base_url`
    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError>;
}

/// Appends path segments to the base url, percent-encoding each one.
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBase(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sets the query string from `pairs`, leaving the url untouched when empty.
pub(crate) fn with_query(mut url: Url, pairs: &[(&'static str, String)]) -> Url {
    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_root_base() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let url = endpoint(&base, &["syncs", "42"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/syncs/42");
    }

    #[test]
    fn test_endpoint_nested_base() {
        let base = Url::parse("https://ops.example.com/api/").unwrap();
        let url = endpoint(&base, &["syncs", "manual", "7"]).unwrap();
        assert_eq!(url.path(), "/api/syncs/manual/7");

        let base = Url::parse("https://ops.example.com/api").unwrap();
        let url = endpoint(&base, &["syncs"]).unwrap();
        assert_eq!(url.path(), "/api/syncs");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://localhost/").unwrap();
        let url = endpoint(&base, &["syncs", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/syncs/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(matches!(
            endpoint(&base, &["syncs"]),
            Err(ApiError::InvalidBase(_))
        ));
    }

    #[test]
    fn test_with_query_empty() {
        let url = Url::parse("http://localhost/syncs").unwrap();
        assert_eq!(with_query(url, &[]).as_str(), "http://localhost/syncs");
    }
}
