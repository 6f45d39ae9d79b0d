pub mod init;
pub mod project;
pub mod sync;
pub mod version;

pub use init::Init;
pub use project::Projects;
pub use sync::Syncs;
pub use version::Version;
