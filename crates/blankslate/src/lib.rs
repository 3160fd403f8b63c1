//! blankslate - placeholder overlays for empty list views.
//!
//! A list host (a table, a grid, or a plain scroll container) gets an overlay
//! that appears when it has no items and disappears once items arrive. What
//! the overlay shows comes from a [`DataSource`]; how it behaves comes from an
//! optional [`Delegate`]. Both are held weakly.
//!
//! Attaching a data source intercepts the host's reload entry points, so the
//! overlay follows the data without any further calls.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use blankslate::prelude::*;
//!
//! struct Inbox;
//!
//! impl DataSource for Inbox {
//!     fn title(&self, _host: &dyn ListHost) -> Option<AttributedText> {
//!         Some(AttributedText::new("No messages"))
//!     }
//! }
//!
//! blankslate_core::init_global_registry();
//! let inbox = Arc::new(Inbox);
//! let mut table = TableView::new();
//! table.bs().set_data_source(&inbox);
//! table.reload_data();
//! assert!(table.bs().is_visible());
//! ```

pub mod animation;
pub mod binding;
pub mod content;
pub mod data_source;
pub mod delegate;
pub mod error;
pub mod gesture;
pub mod host;
pub mod layout;
pub mod model;
pub mod overlay;
pub mod prelude;
pub mod style;
pub mod view;

pub use binding::{BlankSlate, BlankSlateExt};
pub use data_source::DataSource;
pub use delegate::Delegate;
pub use error::{BlankSlateError, BlankSlateResult};
pub use model::{Alignment, ControlState, DataLoadStatus, Element, ElementLayout};
pub use overlay::BlankSlateView;
