use common::prelude::BuildInfo;
use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::error::ApiError;
use super::ApiRequest;
use crate::ClientConfig;

/// Transport for the dashboard API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL all resource paths are appended to
    pub remote: Url,
    /// Bearer token attached to every request
    bearer_token: Option<String>,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        Self::from_config(&ClientConfig::new(remote.clone()))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .user_agent(BuildInfo::new().user_agent());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            remote: config.api_url.clone(),
            bearer_token: config.bearer_token.clone(),
            client: builder.build()?,
        })
    }

    /// Send `request` and decode its response body
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let mut request_builder = request.build_request(&self.remote, &self.client)?;
        if let Some(token) = &self.bearer_token {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "api response");

        if status.is_success() {
            let body = response.bytes().await?;
            let payload: &[u8] = if body.is_empty() { b"null" } else { &body };
            Ok(serde_json::from_slice(payload)?)
        } else {
            Err(ApiError::HttpStatus(status, response.text().await?))
        }
    }
}
