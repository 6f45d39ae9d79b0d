use clap::Args;

use client::ui::SyncListView;

#[derive(Args, Debug, Clone)]
pub struct Delete {
    /// Id of the sync to delete
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncDeleteError {
    #[error("{0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl crate::op::Op for Delete {
    type Error = SyncDeleteError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut view = SyncListView::default();
        if view.delete(&ctx.resources.syncs, self.id.as_str()).await {
            Ok(view.notice().unwrap_or_default().to_string())
        } else {
            Err(SyncDeleteError::Failed(
                view.error().unwrap_or("Delete sync failed").to_string(),
            ))
        }
    }
}
