//! A plain scroll container.

use blankslate_core::{Object, ScrollState, Size, ViewId};

use super::traits::ListHost;
use crate::view::{View, ViewBase};

/// Scroll container with no item model.
///
/// It never has items and implements no reload entry, so nothing is
/// intercepted; a data-load status change reconciles it directly.
pub struct ScrollView {
    base: ViewBase,
}

impl ScrollView {
    pub fn new() -> Self {
        let base = ViewBase::new::<Self>();
        base.set_name("ScrollView");
        base.set_scroll_state(Some(ScrollState::default()));
        Self { base }
    }

    pub fn set_content_size(&self, size: Size) {
        let mut scroll = self.base.scroll_state().unwrap_or_default();
        scroll.content_size = size;
        self.base.set_scroll_state(Some(scroll));
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ScrollView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for ScrollView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }
}

impl ListHost for ScrollView {}
