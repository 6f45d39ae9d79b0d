mod projects;
mod syncs;

pub use projects::{Projects, PROJECTS};
pub use syncs::{Syncs, SYNC, SYNCS};

use crate::api::client::{ApiClient, ApiError};
use crate::api::v0::{ProjectsApi, SyncsApi};
use crate::query::QueryClient;
use crate::ClientConfig;

/// Everything a screen needs: the resources, sharing one transport and one
/// cache
#[derive(Debug, Clone)]
pub struct Resources {
    pub syncs: Syncs,
    pub projects: Projects,
    pub cache: QueryClient,
}

impl Resources {
    pub fn new(client: ApiClient, cache: QueryClient, config: &ClientConfig) -> Self {
        let options = config.query_options();
        Self {
            syncs: Syncs::new(SyncsApi::new(client.clone()), cache.clone(), options),
            projects: Projects::new(ProjectsApi::new(client), cache.clone(), options),
            cache,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = ApiClient::from_config(config)?;
        Ok(Self::new(client, config.query_client(), config))
    }
}
