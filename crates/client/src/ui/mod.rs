//! View models for the dashboard screens. They hold screen state, call into
//! [`crate::resources`] and turn query states into something renderable.

pub mod badge;
pub mod create_sync;
pub mod header;
pub mod sync_detail;
pub mod sync_list;

pub use badge::{Badge, Tone};
pub use create_sync::{project_options, CreateSyncForm, FormError, ProjectOption};
pub use header::{active_item, user_initials, NavItem, NAV_ITEMS};
pub use sync_detail::{DetailState, SyncDetailView, SyncDetails, LOAD_FAILED};
pub use sync_list::{ListState, SyncListView, SyncRow, SyncTable};
