//! Keyed, time-bounded cache for API reads.
//!
//! Reads are keyed by resource and parameters, deduplicated while in flight
//! and served from cache while fresh. Mutations invalidate whole resource
//! families so the next read refetches.

mod cache;
mod key;
mod state;

pub use cache::{
    QueryClient, QueryEvent, QueryOptions, Refetch, DEFAULT_GC_TIME, DEFAULT_RETRY,
    DEFAULT_STALE_TIME,
};
pub use key::QueryKey;
pub use state::QueryState;
