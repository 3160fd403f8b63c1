//! A sectioned, vertically scrolling list host.

use std::sync::Arc;

use blankslate_core::{EdgeInsets, Object, ScrollState, Size, ViewId};

use super::hooks;
use super::traits::{ItemSource, ListHost, ReloadEntry, item_count};
use crate::view::{View, ViewBase};

/// Row-based list host.
///
/// Both [`reload_data`](Self::reload_data) and
/// [`end_updates`](Self::end_updates) are interceptable: once a data source
/// is attached to any table view, either call reconciles the overlay.
pub struct TableView {
    base: ViewBase,
    source: Option<Arc<dyn ItemSource>>,
    row_height: f32,
    update_depth: usize,
    native_reloads: usize,
}

impl TableView {
    /// Create an empty table with 44-point rows.
    pub fn new() -> Self {
        let base = ViewBase::new::<Self>();
        base.set_name("TableView");
        base.set_scroll_state(Some(ScrollState::default()));
        Self {
            base,
            source: None,
            row_height: 44.0,
            update_depth: 0,
            native_reloads: 0,
        }
    }

    pub fn set_item_source(&mut self, source: Option<Arc<dyn ItemSource>>) {
        self.source = source;
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn set_row_height(&mut self, height: f32) {
        self.row_height = height.max(0.0);
    }

    pub fn set_content_inset(&self, inset: EdgeInsets) {
        let mut scroll = self.base.scroll_state().unwrap_or_default();
        scroll.content_inset = inset;
        self.base.set_scroll_state(Some(scroll));
    }

    /// Reload every row.
    pub fn reload_data(&mut self) {
        hooks::dispatch(self, ReloadEntry::ReloadData);
    }

    /// Open a batch of updates. Batches nest.
    pub fn begin_updates(&mut self) {
        self.update_depth += 1;
    }

    /// Close the innermost batch of updates.
    pub fn end_updates(&mut self) {
        hooks::dispatch(self, ReloadEntry::EndUpdates);
    }

    /// Whether a batch is open.
    pub fn is_updating(&self) -> bool {
        self.update_depth > 0
    }

    /// Times the native reload ran, intercepted or not.
    pub fn native_reload_count(&self) -> usize {
        self.native_reloads
    }

    fn refresh_content_size(&self) {
        let width = self.base.frame().width();
        let height = item_count(self) as f32 * self.row_height;
        let mut scroll = self.base.scroll_state().unwrap_or_default();
        scroll.content_size = Size::new(width, height);
        self.base.set_scroll_state(Some(scroll));
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for TableView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for TableView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }
}

impl ListHost for TableView {
    fn item_source(&self) -> Option<Arc<dyn ItemSource>> {
        self.source.clone()
    }

    fn responds_to(&self, entry: ReloadEntry) -> bool {
        matches!(entry, ReloadEntry::ReloadData | ReloadEntry::EndUpdates)
    }

    fn intercepted_entries(&self) -> &'static [ReloadEntry] {
        &[ReloadEntry::ReloadData, ReloadEntry::EndUpdates]
    }

    fn perform_native(&mut self, entry: ReloadEntry) {
        match entry {
            ReloadEntry::ReloadData => {
                self.native_reloads += 1;
                self.refresh_content_size();
            }
            ReloadEntry::EndUpdates => {
                self.update_depth = self.update_depth.saturating_sub(1);
                if self.update_depth == 0 {
                    self.refresh_content_size();
                }
            }
        }
        tracing::trace!(target: "blankslate::hooks", host = ?self.object_id(), %entry, "table native entry");
    }
}
