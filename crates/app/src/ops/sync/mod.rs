use clap::{Args, Subcommand};

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod trigger;

use crate::op::Op;
use create::Create;
use delete::Delete;
use list::List;
use show::Show;
use trigger::Trigger;

crate::command_enum! {
    (List, List),
    (Show, Show),
    (Create, Create),
    (Delete, Delete),
    (Trigger, Trigger),
}

pub type SyncCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Syncs {
    #[command(subcommand)]
    pub command: SyncCommand,
}

#[async_trait::async_trait]
impl Op for Syncs {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
