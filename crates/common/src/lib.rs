pub mod envelope;
pub mod format;
pub mod project;
pub mod sync;
pub mod version;

pub mod prelude {
    pub use crate::envelope::{Envelope, PaginatedResponse};
    pub use crate::format::{format_duration, format_timestamp, EMPTY_PLACEHOLDER};
    pub use crate::project::{Project, ProjectStatus, ProjectsQueryParams};
    pub use crate::sync::{
        CreateSyncData, Integration, OrderBy, ParseEnumError, ResourceId, SyncRecord, SyncStatus,
        SyncsQueryParams,
    };
    pub use crate::version::BuildInfo;
}
