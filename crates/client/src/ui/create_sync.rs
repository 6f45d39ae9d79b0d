use common::prelude::{CreateSyncData, Project, SyncRecord};

use crate::api::client::RequestError;
use crate::resources::Syncs;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please select a project")]
    MissingProject,
    #[error("{0}")]
    Request(#[from] RequestError),
}

/// Entry in the project picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOption {
    pub id: u64,
    pub label: String,
}

pub fn project_options(projects: &[Project]) -> Vec<ProjectOption> {
    projects
        .iter()
        .map(|project| ProjectOption {
            id: project.id,
            label: format!("{} (ID: {})", project.name, project.id),
        })
        .collect()
}

/// State behind the "Create New Sync" dialog.
///
/// The draft is reset whenever the dialog opens, is cancelled or submits
/// successfully; closing it any other way discards the draft as well.
#[derive(Debug, Clone, Default)]
pub struct CreateSyncForm {
    open: bool,
    draft: CreateSyncData,
    error: Option<String>,
    pending: bool,
}

impl CreateSyncForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn draft(&self) -> &CreateSyncData {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CreateSyncData {
        &mut self.draft
    }

    /// Inline error shown above the fields
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn cancel(&mut self) {
        self.set_open(false);
    }

    pub fn set_open(&mut self, open: bool) {
        self.reset();
        self.open = open;
    }

    /// Duration field input. Leading digits are kept, anything unparseable
    /// becomes 0.
    pub fn set_duration_input(&mut self, raw: &str) {
        let digits: String = raw
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        self.draft.duration_ms = digits.parse().unwrap_or(0);
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.draft.project_id == 0 {
            return Err(FormError::MissingProject);
        }
        Ok(())
    }

    /// Validate and send the draft. On success the form resets and closes; on
    /// failure it stays open with the error message set.
    pub async fn submit(&mut self, syncs: &Syncs) -> Result<SyncRecord, FormError> {
        self.error = None;
        if let Err(error) = self.validate() {
            self.error = Some(error.to_string());
            return Err(error);
        }

        self.pending = true;
        let result = syncs.create(&self.draft).await;
        self.pending = false;

        match result {
            Ok(created) => {
                self.set_open(false);
                Ok(created)
            }
            Err(error) => {
                self.error = Some(error.message().to_string());
                Err(error.into())
            }
        }
    }

    fn reset(&mut self) {
        self.draft = CreateSyncData::default();
        self.error = None;
        self.pending = false;
    }
}
