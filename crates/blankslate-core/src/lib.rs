//! Core runtime for blankslate.
//!
//! This crate holds the pieces of the overlay library that know nothing about
//! placeholders or list views:
//!
//! - **View Registry**: parent/child hierarchy with z-order, names and
//!   per-view geometry state, keyed by stable [`ViewId`]s
//! - **Signals**: synchronous notifications
//! - **Task Queue**: work deferred until after the current layout pass
//! - **Geometry**: points, sizes, rectangles, insets and colors
//! - **Thread checks**: main-thread assertions
//!
//! # Registry Example
//!
//! ```
//! use blankslate_core::{Object, ObjectBase, ViewId, global_registry, init_global_registry};
//!
//! struct Panel {
//!     base: ObjectBase,
//! }
//!
//! impl Object for Panel {
//!     fn object_id(&self) -> ViewId {
//!         self.base.id()
//!     }
//! }
//!
//! init_global_registry();
//! let host = Panel { base: ObjectBase::new::<Panel>() };
//! let header = Panel { base: ObjectBase::new::<Panel>() };
//! let registry = global_registry().unwrap();
//! registry.set_parent(header.object_id(), Some(host.object_id())).unwrap();
//! assert_eq!(header.base.sibling_index(), Some(0));
//! ```

pub mod geometry;
pub mod logging;
pub mod object;
pub mod signal;
pub mod task;
pub mod thread_check;

pub use geometry::{Color, EdgeInsets, Point, Rect, Size};
pub use logging::{PerfSpan, TreeFormatOptions, ViewTreeDebug};
pub use object::{
    Object, ObjectBase, ObjectError, ObjectResult, ScrollState, SharedViewRegistry, ViewId,
    ViewRegistry, ViewState, global_registry, init_global_registry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{TaskId, TaskQueue, cancel_task, pending_task_count, post_task, process_pending_tasks};
pub use thread_check::{is_main_thread, main_thread_id, set_main_thread};
