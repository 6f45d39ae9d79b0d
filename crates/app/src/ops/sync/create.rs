use clap::builder::NonEmptyStringValueParser;
use clap::Args;

use client::ui::{CreateSyncForm, FormError, SyncDetails};
use common::prelude::{Integration, SyncStatus};

#[derive(Args, Debug, Clone)]
pub struct Create {
    /// Project the sync belongs to
    #[arg(long)]
    pub project_id: Option<u64>,

    #[arg(long, value_enum, default_value_t = Integration::Acc)]
    pub integration: Integration,

    #[arg(long, value_enum, default_value_t = SyncStatus::Pending)]
    pub status: SyncStatus,

    #[arg(long)]
    pub synced: bool,

    /// Duration in milliseconds; anything non-numeric counts as 0
    #[arg(long, default_value = "0")]
    pub duration_ms: String,

    /// Object key of the exported file
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub s3_file_key: String,

    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub acc_file_id: String,
}

impl Create {
    fn fill(&self, form: &mut CreateSyncForm) {
        form.set_duration_input(&self.duration_ms);
        let draft = form.draft_mut();
        draft.project_id = self.project_id.unwrap_or_default();
        draft.integration = self.integration;
        draft.status = self.status;
        draft.synced = self.synced;
        draft.s3_file_key = self.s3_file_key.clone();
        draft.acc_file_id = self.acc_file_id.clone();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncCreateError {
    #[error(transparent)]
    Form(#[from] FormError),
}

#[async_trait::async_trait]
impl crate::op::Op for Create {
    type Error = SyncCreateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut form = CreateSyncForm::new();
        form.open();
        self.fill(&mut form);

        let created = form.submit(&ctx.resources.syncs).await?;
        Ok(format!(
            "Created sync {}\n{}",
            created.id,
            SyncDetails::from(&created)
        ))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use common::prelude::CreateSyncData;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        create: Create,
    }

    #[test]
    fn test_fill_draft() {
        let cli = Cli::parse_from([
            "dockops",
            "--project-id",
            "7",
            "--integration",
            "drone_deploy",
            "--duration-ms",
            "12x",
            "--s3-file-key",
            "k",
            "--acc-file-id",
            "a",
        ]);
        let mut form = CreateSyncForm::new();
        form.open();
        cli.create.fill(&mut form);

        assert_eq!(
            form.draft(),
            &CreateSyncData {
                project_id: 7,
                integration: Integration::DroneDeploy,
                duration_ms: 12,
                s3_file_key: "k".to_string(),
                acc_file_id: "a".to_string(),
                ..CreateSyncData::default()
            }
        );
    }

    #[test]
    fn test_missing_project_fails_validation() {
        let cli = Cli::parse_from(["dockops", "--s3-file-key", "k", "--acc-file-id", "a"]);
        let mut form = CreateSyncForm::new();
        form.open();
        cli.create.fill(&mut form);
        assert_eq!(form.validate(), Err(FormError::MissingProject));
    }

    #[test]
    fn test_file_keys_are_required() {
        assert!(Cli::try_parse_from(["dockops", "--project-id", "7"]).is_err());
        assert!(
            Cli::try_parse_from(["dockops", "--project-id", "7", "--s3-file-key", "k"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "dockops",
            "--project-id",
            "7",
            "--s3-file-key",
            "",
            "--acc-file-id",
            "a",
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "dockops",
            "--project-id",
            "7",
            "--s3-file-key",
            "k",
            "--acc-file-id",
            "a",
        ])
        .is_ok());
    }
}
