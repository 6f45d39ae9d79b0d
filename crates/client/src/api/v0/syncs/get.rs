use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{Envelope, ResourceId, SyncRecord};

use crate::api::client::{endpoint, ApiError, ApiRequest};

/// `GET /syncs/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    pub sync_id: ResourceId,
}

pub type GetResponse = Envelope<SyncRecord>;

impl ApiRequest for GetRequest {
    type Response = GetResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = endpoint(base_url, &["syncs", self.sync_id.as_str()])?;
        Ok(client.get(full_url))
    }
}
