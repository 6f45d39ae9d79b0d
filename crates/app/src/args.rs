use std::path::PathBuf;

pub use clap::Parser;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "dockops")]
#[command(about = "Inspect, create and trigger DockOps syncs")]
#[command(version)]
pub struct Args {
    /// API base url; overrides the one in config.toml
    #[arg(long, global = true, env = "DOCKOPS_API_URL")]
    pub remote: Option<Url>,

    /// Directory holding config.toml (default: ~/.dockops)
    #[arg(long, global = true, env = "DOCKOPS_HOME")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
