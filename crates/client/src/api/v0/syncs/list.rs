use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{PaginatedResponse, SyncRecord, SyncsQueryParams};

use crate::api::client::{endpoint, with_query, ApiError, ApiRequest};

/// `GET /syncs` with filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(flatten)]
    pub params: SyncsQueryParams,
}

pub type ListResponse = PaginatedResponse<SyncRecord>;

impl ApiRequest for ListRequest {
    type Response = ListResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = with_query(endpoint(base_url, &["syncs"])?, &self.params.query_pairs());
        Ok(client.get(full_url))
    }
}
