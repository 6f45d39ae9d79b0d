use clap::{Args, Subcommand};

pub mod list;

use crate::op::Op;
use list::List;

crate::command_enum! {
    (List, List),
}

pub type ProjectCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Projects {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[async_trait::async_trait]
impl Op for Projects {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
