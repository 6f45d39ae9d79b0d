use std::error::Error;
use std::path::PathBuf;

use client::{ApiError, ClientConfig, Resources};

use crate::args::Args;
use crate::state::{AppState, StateError};

pub struct OpContext {
    /// Directory `init` writes to and config is read from
    pub state_dir: PathBuf,
    /// Effective client configuration after the `--remote` override
    pub config: ClientConfig,
    pub resources: Resources,
}

impl OpContext {
    /// Build the context from the saved config (defaults if `init` has not
    /// run) and the global flags
    pub fn from_args(args: &Args) -> Result<Self, ContextError> {
        let state_dir = match &args.config_dir {
            Some(dir) => dir.clone(),
            None => AppState::default_dir()?,
        };
        let mut config = AppState::load_config(&state_dir)?.client_config()?;
        if let Some(remote) = &args.remote {
            config.api_url = remote.clone();
        }
        Self::new(state_dir, config)
    }

    pub fn new(state_dir: PathBuf, config: ClientConfig) -> Result<Self, ContextError> {
        let resources = Resources::from_config(&config)?;
        Ok(Self {
            state_dir,
            config,
            resources,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("config error: {0}")]
    State(#[from] StateError),
    #[error("client error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
