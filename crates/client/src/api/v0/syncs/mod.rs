//! Typed access to the `/syncs` resource.
//!
//! Every function performs exactly one round-trip and hands back a
//! [`RequestError`] carrying the normalized message on failure.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod manual;

pub use create::CreateRequest;
pub use delete::DeleteRequest;
pub use get::GetRequest;
pub use list::ListRequest;
pub use manual::TriggerManualRequest;

use common::prelude::{CreateSyncData, PaginatedResponse, ResourceId, SyncRecord, SyncsQueryParams};

use crate::api::client::{ApiClient, RequestError};

#[derive(Debug, Clone)]
pub struct SyncsApi {
    client: ApiClient,
}

impl SyncsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Page of syncs matching `params`
    pub async fn get_syncs(
        &self,
        params: &SyncsQueryParams,
    ) -> Result<PaginatedResponse<SyncRecord>, RequestError> {
        let request = ListRequest {
            params: params.clone(),
        };
        Ok(self.client.call(request).await?)
    }

    pub async fn get_sync(&self, sync_id: impl Into<ResourceId>) -> Result<SyncRecord, RequestError> {
        let request = GetRequest {
            sync_id: sync_id.into(),
        };
        Ok(self.client.call(request).await?.into_data())
    }

    pub async fn create_sync(&self, data: &CreateSyncData) -> Result<SyncRecord, RequestError> {
        let request = CreateRequest { data: data.clone() };
        Ok(self.client.call(request).await?.into_data())
    }

    /// Ask the backend to start a sync for a project. Returns the server's
    /// acknowledgement string.
    pub async fn trigger_manual_sync(
        &self,
        project_id: impl Into<ResourceId>,
    ) -> Result<String, RequestError> {
        let request = TriggerManualRequest {
            project_id: project_id.into(),
        };
        Ok(self.client.call(request).await?.into_data())
    }

    pub async fn delete_sync(&self, sync_id: impl Into<ResourceId>) -> Result<(), RequestError> {
        let request = DeleteRequest {
            sync_id: sync_id.into(),
        };
        self.client.call(request).await?;
        Ok(())
    }
}
