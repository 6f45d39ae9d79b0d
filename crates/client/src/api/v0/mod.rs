pub mod projects;
pub mod syncs;

pub use projects::ProjectsApi;
pub use syncs::SyncsApi;
