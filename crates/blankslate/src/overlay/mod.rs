//! The placeholder overlay and its element registry.

mod elements;
mod view;

pub use elements::{ElementEntry, ElementRegistry, ElementView};
pub use view::{BlankSlateView, HitTarget, overlay_frame};
