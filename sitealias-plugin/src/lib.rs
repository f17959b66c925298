//! Custom site id resolution core.
//!
//! A tracking request may carry the platform's numeric site id or an
//! operator-chosen string alias. The [`Resolver`] turns either into a
//! validated internal id, consulting a process-local cache tier, then the
//! shared cross-process tier, then the settings store — populating both
//! tiers on the way back. The [`OutboundRewriter`] covers the reverse
//! direction: stamping the stored alias into outbound tracking artifacts
//! (image tracking URLs, generated JS snippets).
//!
//! Host-platform wiring (when these get called in the request pipeline) is
//! an external concern; this crate only exposes the capabilities.

mod error;
mod hooks;
mod resolver;

pub use error::ResolveError;
pub use hooks::{OutboundRewriter, ReverseSource};
pub use resolver::{MappingSource, Resolver};
