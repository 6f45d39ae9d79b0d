use clap::Args;
use url::Url;

use client::DEFAULT_API_URL;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Base url of the dashboard api
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Bearer token sent with every request
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            api_url: self.api_url.to_string(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            ..AppConfig::default()
        };

        let state = AppState::init(ctx.state_dir.clone(), config)?;

        let output = format!(
            "Initialized dockops at: {}\n\
             - Config: {}\n\
             - API url: {}\n\
             - Token: {}",
            state.dir.display(),
            state.config_path.display(),
            state.config.api_url,
            if state.config.token.is_some() { "set" } else { "not set" }
        );

        Ok(output)
    }
}
