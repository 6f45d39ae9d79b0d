use clap::Args;

use client::ui::{DetailState, SyncDetailView};

#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Id of the sync to show
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncShowError {
    #[error("{0}")]
    Failed(&'static str),
}

#[async_trait::async_trait]
impl crate::op::Op for Show {
    type Error = SyncShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut view = SyncDetailView::new();
        view.show(self.id.as_str());

        match view.load(&ctx.resources.syncs).await {
            DetailState::Ready(details) => Ok(format!("Sync Details\n{}", details)),
            DetailState::Failed(message) => Err(SyncShowError::Failed(message)),
            DetailState::Idle | DetailState::Loading => Ok(String::new()),
        }
    }
}
