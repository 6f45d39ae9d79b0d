use reqwest::{Client, RequestBuilder};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::ResourceId;

use crate::api::client::{endpoint, ApiError, ApiRequest};

/// `DELETE /syncs/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub sync_id: ResourceId,
}

impl ApiRequest for DeleteRequest {
    // body is empty or an acknowledgement we don't read
    type Response = IgnoredAny;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = endpoint(base_url, &["syncs", self.sync_id.as_str()])?;
        Ok(client.delete(full_url))
    }
}
