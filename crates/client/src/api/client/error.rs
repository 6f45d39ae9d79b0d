use reqwest::StatusCode;
use serde_json::Value;

/// Raw failure from a single API call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("base url cannot carry a path: {0}")]
    InvalidBase(String),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("http status {0}: {1}")]
    HttpStatus(StatusCode, String),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::HttpStatus(status, _) => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Human-readable message for display
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidBase(_) | ApiError::Url(_) => "Invalid API address".to_string(),
            ApiError::Transport(e) if e.is_timeout() => "Request timed out".to_string(),
            ApiError::Transport(e) if e.is_connect() => "Unable to reach the server".to_string(),
            ApiError::Transport(e) if e.is_decode() => "Unexpected response from server".to_string(),
            ApiError::Transport(_) => "Network error".to_string(),
            ApiError::HttpStatus(status, body) => body_message(body).unwrap_or_else(|| {
                format!("Request failed with status code {}", status.as_u16())
            }),
            ApiError::Decode(_) => "Unexpected response from server".to_string(),
        }
    }
}

/// Pull a message out of a structured error body.
///
/// Looks at `detail` (a string, or a list of `{ msg }` validation items),
/// then `msg`, `message` and `error`.
fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    if let Some(detail) = object.get("detail") {
        match detail {
            Value::String(s) if !s.is_empty() => return Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join("; "));
                }
            }
            _ => {}
        }
    }

    ["msg", "message", "error"]
        .iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalized failure handed to callers above the transport
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    status: Option<u16>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

impl From<ApiError> for RequestError {
    fn from(error: ApiError) -> Self {
        tracing::debug!(%error, "api call failed");
        Self {
            message: error.message(),
            status: error.status().map(|s| s.as_u16()),
        }
    }
}
