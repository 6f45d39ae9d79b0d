use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use common::prelude::{PaginatedResponse, Project, ProjectsQueryParams};

use crate::api::client::{endpoint, with_query, ApiError, ApiRequest};

/// `GET /projects?page&size`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(flatten)]
    pub params: ProjectsQueryParams,
}

pub type ListResponse = PaginatedResponse<Project>;

impl ApiRequest for ListRequest {
    type Response = ListResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = with_query(endpoint(base_url, &["projects"])?, &self.params.query_pairs());
        Ok(client.get(full_url))
    }
}
