//! View base implementation.
//!
//! `ViewBase` is embedded in every view. Geometry and visibility live in the
//! global registry (keyed by the view's id) rather than in the struct, so a
//! deferred task holding only a [`ViewId`] can still read a host's bounds and
//! insets.

use blankslate_core::{
    Color, EdgeInsets, Object, ObjectBase, ObjectResult, Rect, ScrollState, Signal, ViewId,
    ViewState, global_registry,
};

/// Common state and hierarchy operations for views.
///
/// ```ignore
/// struct Badge {
///     base: ViewBase,
/// }
///
/// impl View for Badge {
///     fn view_base(&self) -> &ViewBase { &self.base }
///     fn view_base_mut(&mut self) -> &mut ViewBase { &mut self.base }
/// }
/// ```
pub struct ViewBase {
    object_base: ObjectBase,
    background_color: Color,
    /// Emitted with the new frame whenever it changes.
    pub frame_changed: Signal<Rect>,
}

impl ViewBase {
    /// Register a new view of type `T`.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            background_color: Color::CLEAR,
            frame_changed: Signal::new(),
        }
    }

    /// The view's registry id.
    #[inline]
    pub fn object_id(&self) -> ViewId {
        self.object_base.id()
    }

    /// Debug name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    fn state(&self) -> ViewState {
        global_registry()
            .and_then(|r| r.view_state(self.object_id()))
            .unwrap_or_default()
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        match global_registry().and_then(|r| r.update_view_state(self.object_id(), f)) {
            Ok(result) => Some(result),
            Err(err) => {
                tracing::warn!(target: "blankslate::overlay", id = ?self.object_id(), %err, "view state update ignored");
                None
            }
        }
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// The parent view, if attached.
    pub fn superview(&self) -> Option<ViewId> {
        self.object_base.parent()
    }

    /// Child views, back to front.
    pub fn subviews(&self) -> Vec<ViewId> {
        self.object_base.children()
    }

    /// Number of child views.
    pub fn subview_count(&self) -> usize {
        self.subviews().len()
    }

    /// Index among the parent's children; 0 is the back.
    pub fn sibling_index(&self) -> Option<usize> {
        self.object_base.sibling_index()
    }

    /// Attach `child` in front of the existing children.
    pub fn add_subview(&self, child: ViewId) -> ObjectResult<()> {
        global_registry()?.set_parent(child, Some(self.object_id()))
    }

    /// Attach `child` at z-index `index`. An index past the end appends.
    pub fn insert_subview(&self, child: ViewId, index: usize) -> ObjectResult<()> {
        global_registry()?.insert_child(self.object_id(), child, index)
    }

    /// Detach this view from its parent.
    pub fn remove_from_superview(&self) -> ObjectResult<()> {
        global_registry()?.remove_from_parent(self.object_id())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame in the parent's coordinates.
    pub fn frame(&self) -> Rect {
        self.state().frame
    }

    /// Set the frame, emitting `frame_changed` if it differs.
    pub fn set_frame(&self, frame: Rect) {
        let changed = self.update_state(|s| {
            let changed = s.frame != frame;
            s.frame = frame;
            changed
        });
        if changed == Some(true) {
            self.frame_changed.emit(frame);
        }
    }

    /// The frame's size at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.frame().size)
    }

    /// Region obscured by system chrome.
    pub fn safe_area_insets(&self) -> EdgeInsets {
        self.state().safe_area_insets
    }

    /// Set the safe-area insets.
    pub fn set_safe_area_insets(&self, insets: EdgeInsets) {
        self.update_state(|s| s.safe_area_insets = insets);
    }

    // =========================================================================
    // Visibility and Interaction
    // =========================================================================

    pub fn is_hidden(&self) -> bool {
        self.state().hidden
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.update_state(|s| s.hidden = hidden);
    }

    pub fn alpha(&self) -> f32 {
        self.state().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.update_state(|s| s.alpha = alpha.clamp(0.0, 1.0));
    }

    pub fn is_user_interaction_enabled(&self) -> bool {
        self.state().user_interaction_enabled
    }

    pub fn set_user_interaction_enabled(&self, enabled: bool) {
        self.update_state(|s| s.user_interaction_enabled = enabled);
    }

    /// Whether the view is in a window.
    pub fn is_in_window(&self) -> bool {
        self.state().in_window
    }

    pub fn set_in_window(&self, in_window: bool) {
        self.update_state(|s| s.in_window = in_window);
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Scroll metrics, present only for scroll containers.
    pub fn scroll_state(&self) -> Option<ScrollState> {
        self.state().scroll
    }

    /// Make this view a scroll container (or not).
    pub fn set_scroll_state(&self, scroll: Option<ScrollState>) {
        self.update_state(|s| s.scroll = scroll);
    }

    /// Whether the user can scroll. Always false for non-scroll views.
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_state().is_some_and(|s| s.scroll_enabled)
    }

    /// Toggle scrolling. Ignored for views that are not scroll containers.
    pub fn set_scroll_enabled(&self, enabled: bool) {
        self.update_state(|s| {
            if let Some(scroll) = s.scroll.as_mut() {
                scroll.scroll_enabled = enabled;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankslate_core::init_global_registry;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Probe {
        base: ViewBase,
    }

    impl Object for Probe {
        fn object_id(&self) -> ViewId {
            self.base.object_id()
        }
    }

    fn probe() -> Probe {
        init_global_registry();
        Probe {
            base: ViewBase::new::<Probe>(),
        }
    }

    #[test]
    fn test_frame_changed_only_on_change() {
        let view = probe();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        view.base.frame_changed.connect(move |r| sink.lock().push(*r));

        let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
        view.base.set_frame(frame);
        view.base.set_frame(frame);

        assert_eq!(*seen.lock(), vec![frame]);
        assert_eq!(view.base.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_scroll_enabled_requires_scroll_state() {
        let view = probe();
        view.base.set_scroll_enabled(true);
        assert!(!view.base.is_scroll_enabled());

        view.base.set_scroll_state(Some(ScrollState::default()));
        assert!(view.base.is_scroll_enabled());
        view.base.set_scroll_enabled(false);
        assert!(!view.base.is_scroll_enabled());
    }

    #[test]
    fn test_subview_insertion() {
        let parent = probe();
        let a = probe();
        let b = probe();
        parent.base.add_subview(a.object_id()).unwrap();
        parent.base.insert_subview(b.object_id(), 0).unwrap();

        assert_eq!(parent.base.subviews(), vec![b.object_id(), a.object_id()]);
        assert_eq!(b.base.superview(), Some(parent.object_id()));

        b.base.remove_from_superview().unwrap();
        assert_eq!(parent.base.subview_count(), 1);
        assert_eq!(b.base.superview(), None);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let view = probe();
        view.base.set_alpha(1.5);
        assert_eq!(view.base.alpha(), 1.0);
        view.base.set_alpha(-1.0);
        assert_eq!(view.base.alpha(), 0.0);
    }
}
