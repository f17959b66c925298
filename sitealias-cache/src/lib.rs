//! Two-tier lookup cache for resolved site ids.
//!
//! The resolver consults a process-local map first (no locking, no
//! serialization, dies with the process), then a shared cross-process tier
//! behind the [`SharedTier`] trait. The shared tier owns its own storage and
//! eviction policy; this crate only defines the surface the resolver needs:
//! `contains`, `fetch`, `save`.
//!
//! Neither tier is ever proactively invalidated. A mapping rewrite leaves
//! stale entries behind until the shared tier evicts them or the process
//! restarts; callers accept that window.

mod error;
mod key;
mod local;
mod shared;

pub use error::CacheError;
pub use key::cache_key;
pub use local::LocalTier;
pub use shared::{MemoryTier, SharedFetch, SharedTier};
