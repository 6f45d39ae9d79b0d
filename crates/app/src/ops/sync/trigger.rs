use clap::Args;

use client::ui::SyncListView;

#[derive(Args, Debug, Clone)]
pub struct Trigger {
    /// Project to start a sync for
    pub project_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncTriggerError {
    #[error("{0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl crate::op::Op for Trigger {
    type Error = SyncTriggerError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut view = SyncListView::default();
        match view
            .trigger_manual(&ctx.resources.syncs, self.project_id.as_str())
            .await
        {
            Some(_) => Ok(view.notice().unwrap_or_default().to_string()),
            None => Err(SyncTriggerError::Failed(
                view.error()
                    .unwrap_or("Trigger manual sync failed")
                    .to_string(),
            )),
        }
    }
}
