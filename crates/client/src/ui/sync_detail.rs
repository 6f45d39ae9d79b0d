use std::fmt;

use common::prelude::{format_duration, format_timestamp, ResourceId, SyncRecord, EMPTY_PLACEHOLDER};

use super::badge::Badge;
use crate::query::QueryState;
use crate::resources::Syncs;

pub const LOAD_FAILED: &str = "Failed to load sync details. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Identifiers and keys, shown in a fixed-width font
    Code(String),
    Badge(Badge),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Code(s) => f.write_str(s),
            FieldValue::Badge(badge) => write!(f, "{}", badge),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: FieldValue,
}

/// Rendered field list for one sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDetails {
    pub fields: Vec<DetailField>,
}

impl SyncDetails {
    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| &field.value)
    }
}

impl From<&SyncRecord> for SyncDetails {
    fn from(sync: &SyncRecord) -> Self {
        let field = |label, value| DetailField { label, value };
        let s3_key = if sync.s3_file_key.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            sync.s3_file_key.clone()
        };

        let mut fields = vec![
            field("Sync ID", FieldValue::Code(sync.id.to_string())),
            field("Status", FieldValue::Badge(Badge::sync_status(sync.status))),
            field("Project ID", FieldValue::Code(sync.project_id.to_string())),
            field("Integration", FieldValue::Text(sync.integration.label().to_string())),
            field("Synced", FieldValue::Badge(Badge::synced(sync.synced))),
            field("Duration", FieldValue::Text(format_duration(sync.duration_ms))),
            field("S3 File Key", FieldValue::Code(s3_key)),
        ];
        if !sync.acc_file_id.is_empty() {
            fields.push(field("ACC File ID", FieldValue::Code(sync.acc_file_id.clone())));
        }
        fields.push(field("Created At", FieldValue::Text(format_timestamp(&sync.created_at))));
        fields.push(field("Updated At", FieldValue::Text(format_timestamp(&sync.updated_at))));

        Self { fields }
    }
}

impl fmt::Display for SyncDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .fields
            .iter()
            .map(|field| field.label.len())
            .max()
            .unwrap_or(0);
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:width$}  {}", field.label, field.value, width = width)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Dialog closed or no sync selected
    Idle,
    Loading,
    /// Generic message; the underlying error is only logged
    Failed(&'static str),
    Ready(SyncDetails),
}

impl From<QueryState<SyncRecord>> for DetailState {
    fn from(state: QueryState<SyncRecord>) -> Self {
        match state {
            QueryState::Idle => DetailState::Idle,
            QueryState::Loading => DetailState::Loading,
            QueryState::Failure(error) => {
                tracing::warn!(%error, "sync detail failed to load");
                DetailState::Failed(LOAD_FAILED)
            }
            QueryState::Success(sync) => DetailState::Ready(SyncDetails::from(&*sync)),
        }
    }
}

/// The "Sync Details" dialog
#[derive(Debug, Clone, Default)]
pub struct SyncDetailView {
    sync_id: Option<ResourceId>,
    open: bool,
}

impl SyncDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, sync_id: impl Into<ResourceId>) {
        self.sync_id = Some(sync_id.into());
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn sync_id(&self) -> Option<&ResourceId> {
        self.sync_id.as_ref()
    }

    /// Fetch (or reuse) the selected sync. Gated on the dialog being open
    /// with a sync selected.
    pub async fn load(&self, syncs: &Syncs) -> DetailState {
        syncs.detail(self.sync_id.clone(), self.open).await.into()
    }

    /// What the dialog shows right now, without fetching
    pub fn current(&self, syncs: &Syncs) -> DetailState {
        match (&self.sync_id, self.open) {
            (Some(sync_id), true) => syncs.cache().peek(&Syncs::detail_key(sync_id)).into(),
            _ => DetailState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use common::prelude::{Integration, SyncStatus};

    use super::*;

    fn sample() -> SyncRecord {
        SyncRecord {
            id: 42,
            project_id: 7,
            integration: Integration::DroneDeploy,
            status: SyncStatus::InProgress,
            synced: true,
            duration_ms: 125_000,
            s3_file_key: String::new(),
            acc_file_id: String::new(),
            created_at: "2024-03-05T14:07:00".to_string(),
            updated_at: "garbage".to_string(),
        }
    }

    #[test]
    fn test_detail_fields() {
        let details = SyncDetails::from(&sample());

        assert_eq!(details.get("Sync ID"), Some(&FieldValue::Code("42".to_string())));
        assert_eq!(
            details.get("Status"),
            Some(&FieldValue::Badge(Badge::sync_status(SyncStatus::InProgress)))
        );
        assert_eq!(
            details.get("Integration"),
            Some(&FieldValue::Text("DroneDeploy".to_string()))
        );
        assert_eq!(details.get("Duration"), Some(&FieldValue::Text("2m 5.0s".to_string())));
        assert_eq!(
            details.get("S3 File Key"),
            Some(&FieldValue::Code(EMPTY_PLACEHOLDER.to_string()))
        );
        assert_eq!(details.get("ACC File ID"), None);
        assert_eq!(
            details.get("Created At"),
            Some(&FieldValue::Text("05/03/2024 2:07 PM".to_string()))
        );
        assert_eq!(
            details.get("Updated At"),
            Some(&FieldValue::Text(EMPTY_PLACEHOLDER.to_string()))
        );
    }

    #[test]
    fn test_acc_file_id_shown_when_present() {
        let mut sync = sample();
        sync.acc_file_id = "urn:adsk:1".to_string();
        let details = SyncDetails::from(&sync);
        assert_eq!(
            details.get("ACC File ID"),
            Some(&FieldValue::Code("urn:adsk:1".to_string()))
        );
    }

    #[test]
    fn test_failure_maps_to_generic_message() {
        let state: DetailState =
            QueryState::<SyncRecord>::Failure(crate::RequestError::new("Sync not found")).into();
        assert_eq!(state, DetailState::Failed(LOAD_FAILED));
    }

    #[test]
    fn test_display_aligns_labels() {
        let text = SyncDetails::from(&sample()).to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "Sync ID      42");
    }
}
