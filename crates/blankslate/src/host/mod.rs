//! List hosts the overlay attaches to, and interception of their reload
//! entry points.

mod collection_view;
pub mod hooks;
mod scroll_view;
mod table_view;
mod traits;

pub use collection_view::{CollectionView, ScrollDirection};
pub use hooks::{HookRecord, dispatch};
pub use scroll_view::ScrollView;
pub use table_view::TableView;
pub use traits::{ItemSource, ListHost, ReloadEntry, item_count};
