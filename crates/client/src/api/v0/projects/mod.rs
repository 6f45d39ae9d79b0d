pub mod list;

pub use list::ListRequest;

use common::prelude::{PaginatedResponse, Project, ProjectsQueryParams};

use crate::api::client::{ApiClient, RequestError};

/// Read-only access to `/projects`, used to pick a project for a sync
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: ApiClient,
}

impl ProjectsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_projects(
        &self,
        params: ProjectsQueryParams,
    ) -> Result<PaginatedResponse<Project>, RequestError> {
        Ok(self.client.call(ListRequest { params }).await?)
    }
}
