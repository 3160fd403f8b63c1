//! Binding overlays to list hosts.
//!
//! Per-host state (data source, delegate, data-load status and the overlay
//! itself) lives in a side table keyed by the host's [`ViewId`]. The
//! [`BlankSlateExt::bs`] accessor is the public entry point; [`reconcile`]
//! is what intercepted reloads call.
//!
//! [`ViewId`]: blankslate_core::ViewId

mod ext;
mod reconcile;
mod state;

pub use ext::{BlankSlate, BlankSlateExt};
pub use reconcile::{dismiss, is_visible, reconcile};
pub use state::{orientation_changed, tracked_host_count};
