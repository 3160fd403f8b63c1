//! A grid host.

use std::sync::Arc;

use blankslate_core::{Object, ScrollState, Size, ViewId};

use super::hooks;
use super::traits::{ItemSource, ListHost, ReloadEntry, item_count};
use crate::view::{View, ViewBase};

/// Direction a [`CollectionView`] lays its items out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Grid host with fixed-size items. Only
/// [`reload_data`](Self::reload_data) is interceptable.
pub struct CollectionView {
    base: ViewBase,
    source: Option<Arc<dyn ItemSource>>,
    item_size: Size,
    direction: ScrollDirection,
    native_reloads: usize,
}

impl CollectionView {
    pub fn new(item_size: Size) -> Self {
        let base = ViewBase::new::<Self>();
        base.set_name("CollectionView");
        base.set_scroll_state(Some(ScrollState::default()));
        Self {
            base,
            source: None,
            item_size,
            direction: ScrollDirection::Vertical,
            native_reloads: 0,
        }
    }

    pub fn set_item_source(&mut self, source: Option<Arc<dyn ItemSource>>) {
        self.source = source;
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.direction = direction;
    }

    pub fn reload_data(&mut self) {
        hooks::dispatch(self, ReloadEntry::ReloadData);
    }

    /// Times the native reload ran, intercepted or not.
    pub fn native_reload_count(&self) -> usize {
        self.native_reloads
    }

    fn content_size(&self) -> Size {
        let bounds = self.base.frame().size;
        let count = item_count(self) as f32;
        match self.direction {
            ScrollDirection::Vertical => {
                let per_row = (bounds.width / self.item_size.width.max(1.0)).floor().max(1.0);
                Size::new(bounds.width, (count / per_row).ceil() * self.item_size.height)
            }
            ScrollDirection::Horizontal => {
                let per_column = (bounds.height / self.item_size.height.max(1.0)).floor().max(1.0);
                Size::new((count / per_column).ceil() * self.item_size.width, bounds.height)
            }
        }
    }
}

impl Object for CollectionView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for CollectionView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }
}

impl ListHost for CollectionView {
    fn item_source(&self) -> Option<Arc<dyn ItemSource>> {
        self.source.clone()
    }

    fn responds_to(&self, entry: ReloadEntry) -> bool {
        entry == ReloadEntry::ReloadData
    }

    fn intercepted_entries(&self) -> &'static [ReloadEntry] {
        &[ReloadEntry::ReloadData]
    }

    fn perform_native(&mut self, entry: ReloadEntry) {
        if entry != ReloadEntry::ReloadData {
            return;
        }
        self.native_reloads += 1;
        let size = self.content_size();
        let mut scroll = self.base.scroll_state().unwrap_or_default();
        scroll.content_size = size;
        self.base.set_scroll_state(Some(scroll));
    }
}
