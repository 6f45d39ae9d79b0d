pub mod api;
pub mod query;
pub mod resources;
pub mod ui;

mod config;
mod logging;

pub use api::client::{ApiClient, ApiError, RequestError};
pub use config::{Config as ClientConfig, ConfigError, DEFAULT_API_URL};
pub use logging::init_logging;
pub use query::{QueryClient, QueryEvent, QueryKey, QueryOptions, QueryState, Refetch};
pub use resources::{Projects, Resources, Syncs};
