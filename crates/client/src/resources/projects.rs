use common::prelude::{PaginatedResponse, Project, ProjectsQueryParams};

use crate::api::v0::ProjectsApi;
use crate::query::{QueryClient, QueryKey, QueryOptions, QueryState};

pub const PROJECTS: &str = "projects";

#[derive(Debug, Clone)]
pub struct Projects {
    api: ProjectsApi,
    cache: QueryClient,
    options: QueryOptions,
}

impl Projects {
    pub fn new(api: ProjectsApi, cache: QueryClient, options: QueryOptions) -> Self {
        Self {
            api,
            cache,
            options,
        }
    }

    pub fn list_key(params: &ProjectsQueryParams) -> QueryKey {
        QueryKey::new(PROJECTS, params)
    }

    pub async fn list(&self, params: ProjectsQueryParams) -> QueryState<PaginatedResponse<Project>> {
        let api = self.api.clone();
        self.cache
            .fetch(Self::list_key(&params), self.options, move || {
                let api = api.clone();
                async move { api.get_projects(params).await }
            })
            .await
    }
}
