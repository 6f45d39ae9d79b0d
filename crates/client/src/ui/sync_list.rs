use std::fmt;

use common::prelude::{
    format_duration, format_timestamp, Integration, PaginatedResponse, ResourceId, SyncRecord,
    SyncStatus, SyncsQueryParams,
};

use super::badge::Badge;
use crate::query::QueryState;
use crate::resources::Syncs;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRow {
    pub id: u64,
    pub project_id: u64,
    pub integration: &'static str,
    pub status: Badge,
    pub synced: Badge,
    pub duration: String,
    pub created_at: String,
}

impl From<&SyncRecord> for SyncRow {
    fn from(sync: &SyncRecord) -> Self {
        Self {
            id: sync.id,
            project_id: sync.project_id,
            integration: sync.integration.label(),
            status: Badge::sync_status(sync.status),
            synced: Badge::synced(sync.synced),
            duration: format_duration(sync.duration_ms),
            created_at: format_timestamp(&sync.created_at),
        }
    }
}

/// One rendered page of the sync list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTable {
    pub rows: Vec<SyncRow>,
    pub page: u32,
    pub page_count: u32,
    pub total: u64,
}

impl From<&PaginatedResponse<SyncRecord>> for SyncTable {
    fn from(page: &PaginatedResponse<SyncRecord>) -> Self {
        Self {
            rows: page.data.iter().map(SyncRow::from).collect(),
            page: page.page,
            page_count: page.page_count(),
            total: page.total,
        }
    }
}

impl fmt::Display for SyncTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(f, "No syncs found");
        }
        writeln!(
            f,
            "{:>6}  {:>7}  {:<11}  {:<11}  {:<6}  {:>9}  {}",
            "ID", "PROJECT", "INTEGRATION", "STATUS", "SYNCED", "DURATION", "CREATED"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>6}  {:>7}  {:<11}  {:<11}  {:<6}  {:>9}  {}",
                row.id,
                row.project_id,
                row.integration,
                row.status.label,
                row.synced.label,
                row.duration,
                row.created_at
            )?;
        }
        write!(
            f,
            "page {} of {} ({} total)",
            self.page,
            self.page_count.max(1),
            self.total
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Failed(String),
    Ready(SyncTable),
}

impl From<QueryState<PaginatedResponse<SyncRecord>>> for ListState {
    fn from(state: QueryState<PaginatedResponse<SyncRecord>>) -> Self {
        match state {
            QueryState::Idle => ListState::Idle,
            QueryState::Loading => ListState::Loading,
            QueryState::Failure(error) => {
                ListState::Failed(format!("Failed to load syncs: {}", error))
            }
            QueryState::Success(page) => ListState::Ready(SyncTable::from(page.as_ref())),
        }
    }
}

/// Sync list screen: filters, paging and the row actions.
///
/// Action errors stay in `error()` until the next successful action.
#[derive(Debug, Clone)]
pub struct SyncListView {
    params: SyncsQueryParams,
    error: Option<String>,
    notice: Option<String>,
}

impl Default for SyncListView {
    fn default() -> Self {
        Self::new(SyncsQueryParams::default())
    }
}

impl SyncListView {
    pub fn new(params: SyncsQueryParams) -> Self {
        let mut params = params.normalized();
        params.page.get_or_insert(1);
        params.size.get_or_insert(DEFAULT_PAGE_SIZE);
        Self {
            params,
            error: None,
            notice: None,
        }
    }

    pub fn params(&self) -> &SyncsQueryParams {
        &self.params
    }

    pub fn page(&self) -> u32 {
        self.params.page.unwrap_or(1)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation from the last successful action
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_status(&mut self, status: Option<SyncStatus>) {
        self.params.status = status;
        self.params.page = Some(1);
    }

    pub fn set_integration(&mut self, integration: Option<Integration>) {
        self.params.integration = integration;
        self.params.page = Some(1);
    }

    pub fn set_synced(&mut self, synced: Option<bool>) {
        self.params.synced = synced;
        self.params.page = Some(1);
    }

    pub fn set_search(&mut self, q: &str) {
        self.params.q = Some(q.trim().to_string()).filter(|q| !q.is_empty());
        self.params.page = Some(1);
    }

    pub fn next_page(&mut self) {
        self.params.page = Some(self.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.params.page = Some(self.page().saturating_sub(1).max(1));
    }

    pub async fn load(&self, syncs: &Syncs) -> ListState {
        syncs.list(&self.params).await.into()
    }

    pub async fn delete(&mut self, syncs: &Syncs, sync_id: impl Into<ResourceId>) -> bool {
        let sync_id = sync_id.into();
        match syncs.delete(sync_id.clone()).await {
            Ok(()) => {
                self.succeeded(format!("Deleted sync {}", sync_id));
                true
            }
            Err(error) => {
                self.error = Some(error.message().to_string());
                false
            }
        }
    }

    /// Returns the server's acknowledgement on success
    pub async fn trigger_manual(
        &mut self,
        syncs: &Syncs,
        project_id: impl Into<ResourceId>,
    ) -> Option<String> {
        let project_id = project_id.into();
        match syncs.trigger_manual(project_id.clone()).await {
            Ok(ack) => {
                self.succeeded(format!(
                    "Manual sync triggered for project {}: {}",
                    project_id, ack
                ));
                Some(ack)
            }
            Err(error) => {
                self.error = Some(error.message().to_string());
                None
            }
        }
    }

    fn succeeded(&mut self, notice: String) {
        self.error = None;
        self.notice = Some(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> SyncRecord {
        SyncRecord {
            id,
            project_id: 3,
            integration: Integration::Acc,
            status: SyncStatus::Success,
            synced: true,
            duration_ms: 1500,
            s3_file_key: "k".to_string(),
            acc_file_id: "a".to_string(),
            created_at: "2024-01-02T03:04:05".to_string(),
            updated_at: "2024-01-02T03:04:05".to_string(),
        }
    }

    #[test]
    fn test_defaults_to_first_page() {
        let view = SyncListView::default();
        assert_eq!(view.params().page, Some(1));
        assert_eq!(view.params().size, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_filters_reset_paging() {
        let mut view = SyncListView::default();
        view.next_page();
        view.next_page();
        assert_eq!(view.page(), 3);

        view.set_status(Some(SyncStatus::Failed));
        assert_eq!(view.page(), 1);
        assert_eq!(view.params().status, Some(SyncStatus::Failed));

        view.prev_page();
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_blank_search_clears_filter() {
        let mut view = SyncListView::default();
        view.set_search("  bridge ");
        assert_eq!(view.params().q.as_deref(), Some("bridge"));
        view.set_search("   ");
        assert_eq!(view.params().q, None);
    }

    #[test]
    fn test_table_rows() {
        let page = PaginatedResponse {
            data: vec![record(1), record(2)],
            total: 2,
            page: 1,
            size: 20,
            pages: None,
        };
        let table = SyncTable::from(&page);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].duration, "1.5s");
        assert_eq!(table.rows[0].status.label, "Success");
        assert_eq!(table.rows[0].created_at, "02/01/2024 3:04 AM");
        assert!(table.to_string().ends_with("page 1 of 1 (2 total)"));
    }

    #[test]
    fn test_empty_table() {
        let page: PaginatedResponse<SyncRecord> = PaginatedResponse {
            data: vec![],
            total: 0,
            page: 1,
            size: 20,
            pages: None,
        };
        assert_eq!(SyncTable::from(&page).to_string(), "No syncs found");
    }
}
