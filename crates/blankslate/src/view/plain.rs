//! A bare container view.

use blankslate_core::{Object, ViewId};

use super::base::ViewBase;
use super::traits::View;

/// A view with no content of its own.
///
/// Used for the overlay's content wrapper, and handy as a custom view or as
/// decoration (header, footer) inside a host.
pub struct PlainView {
    base: ViewBase,
    preferred_height: Option<f32>,
}

impl PlainView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new::<Self>(),
            preferred_height: None,
        }
    }

    /// Create a view that asks for a fixed height.
    pub fn with_height(height: f32) -> Self {
        Self {
            preferred_height: Some(height),
            ..Self::new()
        }
    }

    /// Create an empty view with a debug name.
    pub fn named(name: &str) -> Self {
        let view = Self::new();
        view.base.set_name(name);
        view
    }
}

impl Default for PlainView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for PlainView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for PlainView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn height_for_width(&self, _width: f32) -> Option<f32> {
        self.preferred_height
    }
}
