use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{CreateSyncData, Envelope, SyncRecord};

use crate::api::client::{endpoint, ApiError, ApiRequest};

/// `POST /syncs`. Every payload field is sent; there is no partial create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateRequest {
    pub data: CreateSyncData,
}

pub type CreateResponse = Envelope<SyncRecord>;

impl ApiRequest for CreateRequest {
    type Response = CreateResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = endpoint(base_url, &["syncs"])?;
        Ok(client.post(full_url).json(&self))
    }
}
