use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{Envelope, ResourceId};

use crate::api::client::{endpoint, ApiError, ApiRequest};

/// `POST /syncs/manual/{project_id}`. Fire and acknowledge; the server answers
/// with an opaque string and the resulting sync shows up in later list reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerManualRequest {
    pub project_id: ResourceId,
}

pub type TriggerManualResponse = Envelope<String>;

impl ApiRequest for TriggerManualRequest {
    type Response = TriggerManualResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = endpoint(base_url, &["syncs", "manual", self.project_id.as_str()])?;
        Ok(client.post(full_url).json(&serde_json::json!({})))
    }
}
