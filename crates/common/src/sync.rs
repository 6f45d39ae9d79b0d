use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// External platform a sync targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    #[cfg_attr(feature = "clap", value(name = "acc"))]
    Acc,
    #[cfg_attr(feature = "clap", value(name = "drone_deploy"))]
    DroneDeploy,
    #[cfg_attr(feature = "clap", value(name = "other"))]
    Other,
}

impl Integration {
    pub const ALL: [Integration; 3] = [
        Integration::Acc,
        Integration::DroneDeploy,
        Integration::Other,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Integration::Acc => "acc",
            Integration::DroneDeploy => "drone_deploy",
            Integration::Other => "other",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Integration::Acc => "ACC",
            Integration::DroneDeploy => "DroneDeploy",
            Integration::Other => "Other",
        }
    }
}

/// Lifecycle of a single sync attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[cfg_attr(feature = "clap", value(name = "pending"))]
    Pending,
    #[cfg_attr(feature = "clap", value(name = "in_progress"))]
    InProgress,
    #[cfg_attr(feature = "clap", value(name = "success"))]
    Success,
    #[cfg_attr(feature = "clap", value(name = "failed"))]
    Failed,
}

impl SyncStatus {
    pub const ALL: [SyncStatus; 4] = [
        SyncStatus::Pending,
        SyncStatus::InProgress,
        SyncStatus::Success,
        SyncStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Pending => "pending",
            SyncStatus::InProgress => "in_progress",
            SyncStatus::Success => "success",
            SyncStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Pending => "Pending",
            SyncStatus::InProgress => "In Progress",
            SyncStatus::Success => "Success",
            SyncStatus::Failed => "Failed",
        }
    }
}

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "asc",
            OrderBy::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

macro_rules! wire_enum_impls {
    ($ty:ty, $kind:literal, [$($variant:expr),* $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),*]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum_impls!(Integration, "integration", [Integration::Acc, Integration::DroneDeploy, Integration::Other]);
wire_enum_impls!(
    SyncStatus,
    "status",
    [SyncStatus::Pending, SyncStatus::InProgress, SyncStatus::Success, SyncStatus::Failed]
);
wire_enum_impls!(OrderBy, "order", [OrderBy::Asc, OrderBy::Desc]);

/// One synchronization attempt between storage and an integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRecord {
    pub id: u64,
    pub project_id: u64,
    pub integration: Integration,
    pub status: SyncStatus,
    pub synced: bool,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub s3_file_key: String,
    #[serde(default)]
    pub acc_file_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /syncs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSyncData {
    pub integration: Integration,
    pub status: SyncStatus,
    pub synced: bool,
    pub duration_ms: u64,
    pub project_id: u64,
    pub s3_file_key: String,
    pub acc_file_id: String,
}

impl Default for CreateSyncData {
    fn default() -> Self {
        Self {
            integration: Integration::Acc,
            status: SyncStatus::Pending,
            synced: false,
            duration_ms: 0,
            project_id: 0,
            s3_file_key: String::new(),
            acc_file_id: String::new(),
        }
    }
}

/// Filters for `GET /syncs`. `None` means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncsQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SyncStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<Integration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

impl SyncsQueryParams {
    pub fn with_status(mut self, status: SyncStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_integration(mut self, integration: Integration) -> Self {
        self.integration = Some(integration);
        self
    }

    pub fn with_synced(mut self, synced: bool) -> Self {
        self.synced = Some(synced);
        self
    }

    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_order(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Effective parameter set with blank search text dropped
    pub fn normalized(&self) -> Self {
        let mut params = self.clone();
        params.q = params.q.filter(|q| !q.is_empty());
        params
    }

    /// Query-string pairs for every defined filter, in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(integration) = self.integration {
            pairs.push(("integration", integration.to_string()));
        }
        if let Some(synced) = self.synced {
            pairs.push(("synced", synced.to_string()));
        }
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.to_string()));
        }
        pairs
    }
}

/// Record identifier accepted by single-record endpoints, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &SyncsQueryParams) -> Vec<&'static str> {
        params.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_empty_params_produce_no_pairs() {
        assert!(SyncsQueryParams::default().query_pairs().is_empty());
    }

    #[test]
    fn test_defined_fields_appear_once() {
        let params = SyncsQueryParams::default()
            .with_status(SyncStatus::InProgress)
            .with_synced(false)
            .with_page(2)
            .with_order(OrderBy::Desc);

        assert_eq!(
            params.query_pairs(),
            vec![
                ("status", "in_progress".to_string()),
                ("synced", "false".to_string()),
                ("page", "2".to_string()),
                ("order_by", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let params = SyncsQueryParams::default().with_search("").with_size(50);
        assert_eq!(keys(&params), vec!["size"]);
        assert_eq!(params.normalized().q, None);
    }

    #[test]
    fn test_every_field_defined() {
        let params = SyncsQueryParams::default()
            .with_status(SyncStatus::Failed)
            .with_integration(Integration::DroneDeploy)
            .with_synced(true)
            .with_search("site a")
            .with_page(1)
            .with_size(10)
            .with_order(OrderBy::Asc);
        assert_eq!(
            keys(&params),
            vec!["status", "integration", "synced", "q", "page", "size", "order_by"]
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Integration::DroneDeploy).unwrap(),
            "\"drone_deploy\""
        );
        assert_eq!(
            serde_json::to_string(&SyncStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        for status in SyncStatus::ALL {
            assert_eq!(status.as_str().parse::<SyncStatus>().unwrap(), status);
        }
        for integration in Integration::ALL {
            assert_eq!(
                integration.as_str().parse::<Integration>().unwrap(),
                integration
            );
        }
    }

    #[test]
    fn test_enums_are_case_sensitive() {
        assert!("ACC".parse::<Integration>().is_err());
        assert!(serde_json::from_str::<SyncStatus>("\"Pending\"").is_err());
    }

    #[test]
    fn test_default_draft() {
        let draft = CreateSyncData::default();
        assert_eq!(draft.integration, Integration::Acc);
        assert_eq!(draft.status, SyncStatus::Pending);
        assert!(!draft.synced);
        assert_eq!(draft.duration_ms, 0);
        assert_eq!(draft.project_id, 0);
        assert!(draft.s3_file_key.is_empty());
        assert!(draft.acc_file_id.is_empty());
    }

    #[test]
    fn test_decode_sync_record() {
        let raw = r#"{
            "id": 42, "project_id": 7, "integration": "acc", "status": "success",
            "synced": true, "duration_ms": 1500, "s3_file_key": "k", "acc_file_id": "a",
            "created_at": "2024-03-05T14:07:00", "updated_at": "2024-03-05T14:08:00"
        }"#;
        let sync: SyncRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(sync.id, 42);
        assert_eq!(sync.status, SyncStatus::Success);
        assert_eq!(sync.integration, Integration::Acc);
    }

    #[test]
    fn test_resource_id_from_number_and_text() {
        assert_eq!(ResourceId::from(42u64), ResourceId::from("42"));
        assert_eq!(ResourceId::from("abc").to_string(), "abc");
    }
}
