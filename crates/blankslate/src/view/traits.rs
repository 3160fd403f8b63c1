//! The [`View`] trait.

use blankslate_core::{Object, Point, Rect, ViewId};

use super::base::ViewBase;

/// Base trait for everything the overlay puts on screen, and for custom views
/// a data source supplies.
///
/// Implementors embed a [`ViewBase`] and return it from
/// [`view_base`](View::view_base); the remaining methods have defaults.
///
/// ```ignore
/// struct Spinner {
///     base: ViewBase,
/// }
///
/// impl Object for Spinner {
///     fn object_id(&self) -> ViewId { self.base.object_id() }
/// }
///
/// impl View for Spinner {
///     fn view_base(&self) -> &ViewBase { &self.base }
///     fn view_base_mut(&mut self) -> &mut ViewBase { &mut self.base }
///     fn height_for_width(&self, _width: f32) -> Option<f32> { Some(37.0) }
/// }
/// ```
pub trait View: Object {
    fn view_base(&self) -> &ViewBase;

    fn view_base_mut(&mut self) -> &mut ViewBase;

    /// Preferred height at `width`, used when the element's layout has no
    /// fixed height. `None` resolves to zero.
    fn height_for_width(&self, _width: f32) -> Option<f32> {
        None
    }

    /// Whether the view is an interactive control (button, switch, ...).
    /// Touches on controls are always delivered.
    fn is_control(&self) -> bool {
        false
    }

    /// The innermost control under `point` (in this view's local
    /// coordinates), for views that contain controls of their own.
    fn control_at(&self, _point: Point) -> Option<ViewId> {
        None
    }

    // =========================================================================
    // Provided
    // =========================================================================

    fn frame(&self) -> Rect {
        self.view_base().frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        self.view_base().set_frame(frame);
    }

    fn is_hidden(&self) -> bool {
        self.view_base().is_hidden()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.view_base().set_hidden(hidden);
    }

    /// Whether a point in the parent's coordinates could hit this view:
    /// inside the frame, shown, interactive and not transparent.
    fn accepts_point(&self, point: Point) -> bool {
        let base = self.view_base();
        !base.is_hidden()
            && base.is_user_interaction_enabled()
            && base.alpha() >= 0.01
            && base.frame().contains(point)
    }
}
