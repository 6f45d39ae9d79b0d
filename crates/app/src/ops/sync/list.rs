use clap::Args;

use client::ui::sync_list::DEFAULT_PAGE_SIZE;
use client::ui::{ListState, SyncListView};
use common::prelude::{Integration, OrderBy, SyncStatus, SyncsQueryParams};

#[derive(Args, Debug, Clone)]
pub struct List {
    /// Only syncs in this state
    #[arg(long, value_enum)]
    pub status: Option<SyncStatus>,

    #[arg(long, value_enum)]
    pub integration: Option<Integration>,

    /// Only synced (true) or unsynced (false) records
    #[arg(long)]
    pub synced: Option<bool>,

    /// Free-text search
    #[arg(long)]
    pub q: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,

    #[arg(long, value_enum)]
    pub order_by: Option<OrderBy>,
}

impl List {
    pub fn params(&self) -> SyncsQueryParams {
        SyncsQueryParams {
            status: self.status,
            integration: self.integration,
            synced: self.synced,
            q: self.q.clone(),
            page: Some(self.page),
            size: Some(self.size),
            order_by: self.order_by,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncListError {
    #[error("{0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl crate::op::Op for List {
    type Error = SyncListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let view = SyncListView::new(self.params());
        match view.load(&ctx.resources.syncs).await {
            ListState::Ready(table) => Ok(table.to_string()),
            ListState::Failed(message) => Err(SyncListError::Failed(message)),
            ListState::Idle | ListState::Loading => {
                Err(SyncListError::Failed("sync list unavailable".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        list: List,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["dockops"]);
        let params = cli.list.params();
        assert_eq!(params.page, Some(1));
        assert_eq!(params.size, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(params.status, None);
        assert_eq!(params.synced, None);
    }

    #[test]
    fn test_filters() {
        let cli = Cli::parse_from([
            "dockops",
            "--status",
            "in_progress",
            "--integration",
            "drone_deploy",
            "--synced",
            "false",
            "--order-by",
            "desc",
        ]);
        let params = cli.list.params();
        assert_eq!(params.status, Some(SyncStatus::InProgress));
        assert_eq!(params.integration, Some(Integration::DroneDeploy));
        assert_eq!(params.synced, Some(false));
        assert_eq!(params.order_by, Some(OrderBy::Desc));
    }
}
