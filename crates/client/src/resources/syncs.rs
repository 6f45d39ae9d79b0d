use common::prelude::{CreateSyncData, PaginatedResponse, ResourceId, SyncRecord, SyncsQueryParams};

use crate::api::client::RequestError;
use crate::api::v0::SyncsApi;
use crate::query::{QueryClient, QueryKey, QueryOptions, QueryState};

/// Resource family for sync list reads; every sync mutation invalidates it
pub const SYNCS: &str = "syncs";
/// Resource family for single-sync reads
pub const SYNC: &str = "sync";

/// Cached reads and cache-aware mutations over `/syncs`
#[derive(Debug, Clone)]
pub struct Syncs {
    api: SyncsApi,
    cache: QueryClient,
    options: QueryOptions,
}

impl Syncs {
    pub fn new(api: SyncsApi, cache: QueryClient, options: QueryOptions) -> Self {
        Self {
            api,
            cache,
            options,
        }
    }

    pub fn api(&self) -> &SyncsApi {
        &self.api
    }

    pub fn cache(&self) -> &QueryClient {
        &self.cache
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    pub fn list_key(params: &SyncsQueryParams) -> QueryKey {
        QueryKey::new(SYNCS, &params.normalized())
    }

    pub fn detail_key(sync_id: &ResourceId) -> QueryKey {
        QueryKey::new(SYNC, sync_id)
    }

    /// Page of syncs for `params`, from cache while fresh
    pub async fn list(&self, params: &SyncsQueryParams) -> QueryState<PaginatedResponse<SyncRecord>> {
        let params = params.normalized();
        let key = Self::list_key(&params);
        let api = self.api.clone();
        self.cache
            .fetch(key, self.options, move || {
                let api = api.clone();
                let params = params.clone();
                async move { api.get_syncs(&params).await }
            })
            .await
    }

    /// One sync. Nothing is requested while `sync_id` is unset or `enabled`
    /// is false.
    pub async fn detail(&self, sync_id: Option<ResourceId>, enabled: bool) -> QueryState<SyncRecord> {
        let Some(sync_id) = sync_id else {
            return QueryState::Idle;
        };
        let key = Self::detail_key(&sync_id);
        let api = self.api.clone();
        self.cache
            .fetch(key, self.options.with_enabled(enabled), move || {
                let api = api.clone();
                let sync_id = sync_id.clone();
                async move { api.get_sync(sync_id).await }
            })
            .await
    }

    pub async fn create(&self, data: &CreateSyncData) -> Result<SyncRecord, RequestError> {
        let created = self
            .cache
            .mutate("Create sync", &[SYNCS], self.api.create_sync(data))
            .await?;
        tracing::info!(sync_id = created.id, project_id = created.project_id, "created sync");
        Ok(created)
    }

    pub async fn delete(&self, sync_id: impl Into<ResourceId>) -> Result<(), RequestError> {
        let sync_id = sync_id.into();
        self.cache
            .mutate("Delete sync", &[SYNCS], self.api.delete_sync(sync_id.clone()))
            .await?;
        tracing::info!(%sync_id, "deleted sync");
        Ok(())
    }

    /// Start a sync for a project. The returned acknowledgement is opaque; the
    /// new sync appears in the next list read.
    pub async fn trigger_manual(&self, project_id: impl Into<ResourceId>) -> Result<String, RequestError> {
        let project_id = project_id.into();
        let ack = self
            .cache
            .mutate(
                "Trigger manual sync",
                &[SYNCS],
                self.api.trigger_manual_sync(project_id.clone()),
            )
            .await?;
        tracing::info!(%project_id, ack = %ack, "manual sync triggered");
        Ok(ack)
    }
}
