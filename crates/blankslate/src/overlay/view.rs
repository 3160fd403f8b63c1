//! The overlay view.

use std::time::Duration;

use blankslate_core::{
    Color, EdgeInsets, Object, PerfSpan, Point, Rect, ScrollState, Size, ViewId, global_registry,
};

use super::elements::{ElementRegistry, ElementView};
use crate::animation::{FadeIn, FadeState};
use crate::content::Gradient;
use crate::error::BlankSlateResult;
use crate::gesture::{GestureId, GestureRef, GestureType};
use crate::layout::{self, ConstraintSet, ResolvedLayout};
use crate::model::{Alignment, Element, ElementLayout};
use crate::style::{OverlayStyle, default_style};
use crate::view::{Button, ImageView, Label, PlainView, View, ViewBase};

/// What a point inside the overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An interactive control: the button, or a control inside the custom
    /// view.
    Control(ViewId),
    /// The content wrapper, outside any control.
    ContentView(ViewId),
    /// The custom view, outside any control it contains.
    CustomView(ViewId),
}

/// Frame an overlay takes inside a host.
///
/// The host's bounds shrink by its safe-area insets, plus its content insets
/// when it is a scroll container. The overlay is shifted right by the left
/// inset only when the host scrolls vertically (its content is exactly as
/// wide as its bounds); it always sits at `y = 0`.
pub fn overlay_frame(host_size: Size, safe_area: EdgeInsets, scroll: Option<ScrollState>) -> Rect {
    let insets = scroll.map_or(safe_area, |s| safe_area + s.content_inset);
    let scrolls_vertically = scroll.is_some_and(|s| s.content_size.width == host_size.width);
    let x = if scrolls_vertically { insets.left } else { 0.0 };
    Rect::new(
        x,
        0.0,
        (host_size.width - insets.horizontal()).max(0.0),
        (host_size.height - insets.vertical()).max(0.0),
    )
}

fn detach(view: &ElementView) {
    if let Err(err) = view.as_view().view_base().remove_from_superview() {
        tracing::warn!(target: "blankslate::overlay", element = ?view.element(), %err, "element already detached");
    }
}

/// The placeholder shown over an empty host.
///
/// Holds a content wrapper that the elements are stacked in. Everything the
/// overlay shows is rebuilt from scratch on every reconciliation: callers run
/// [`reset_for_reuse`](Self::reset_for_reuse), the `make_*` methods, then
/// [`apply_layout`](Self::apply_layout).
pub struct BlankSlateView {
    base: ViewBase,
    content: PlainView,
    elements: ElementRegistry,
    alignment: Alignment,
    style: OverlayStyle,
    background_gradient: Option<Gradient>,
    fade: FadeIn,
    fade_duration: Duration,
    /// Overlay-level constraints placing the content wrapper.
    constraints: ConstraintSet,
    /// Wrapper-level constraints placing the elements.
    content_constraints: ConstraintSet,
    layout: ResolvedLayout,
    tap_gesture: GestureRef,
}

impl BlankSlateView {
    /// Create an overlay using the current default style.
    pub fn new() -> Self {
        Self::with_style(default_style())
    }

    /// Create an overlay with an explicit style.
    pub fn with_style(style: OverlayStyle) -> Self {
        let base = ViewBase::new::<Self>();
        base.set_name("BlankSlateView");

        let content = PlainView::named("BlankSlateContentView");
        content.view_base().set_alpha(0.0);
        if let Err(err) = base.add_subview(content.object_id()) {
            tracing::warn!(target: "blankslate::overlay", %err, "content wrapper not attached");
        }

        let tap_gesture = GestureRef::new(
            GestureId::next(),
            GestureType::Tap,
            Some(content.object_id()),
        );

        tracing::trace!(target: "blankslate::overlay", id = ?base.object_id(), "overlay created");
        Self {
            base,
            content,
            elements: ElementRegistry::new(),
            alignment: Alignment::default(),
            style,
            background_gradient: None,
            fade: FadeIn::new(),
            fade_duration: Duration::ZERO,
            constraints: ConstraintSet::new(),
            content_constraints: ConstraintSet::new(),
            layout: ResolvedLayout::default(),
            tap_gesture,
        }
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// A layout left at [`ElementLayout::default`] is replaced by the style's
    /// `element_layout`.
    fn install(&mut self, view: ElementView, layout: ElementLayout) -> &mut ElementView {
        let layout = if layout == ElementLayout::default() {
            self.style.element_layout
        } else {
            layout
        };
        let element = view.element();
        let id = view.id();
        if element != Element::Custom {
            view.as_view().view_base().set_name(element.name());
        }

        let (displaced, stored) = self.elements.insert(view, layout);
        if let Some(old) = displaced {
            detach(&old.view);
        }
        if let Err(err) = self.content.view_base().add_subview(id) {
            tracing::warn!(target: "blankslate::overlay", ?element, %err, "element not attached");
        }
        tracing::trace!(target: "blankslate::overlay", ?element, ?id, "element installed");
        stored
    }

    fn make_label(&self, font_size: f32) -> Label {
        let mut label = Label::new(font_size, self.style.text_color);
        label.set_alignment(self.style.text_alignment);
        label.set_max_lines(self.style.max_lines);
        label
    }

    /// Create the image element, replacing any existing one.
    pub fn make_image_view(&mut self, layout: ElementLayout) -> &mut ImageView {
        match self.install(ElementView::Image(ImageView::new()), layout) {
            ElementView::Image(view) => view,
            _ => unreachable!("image slot holds a different view"),
        }
    }

    /// Create the title element, replacing any existing one.
    pub fn make_title_label(&mut self, layout: ElementLayout) -> &mut Label {
        let label = self.make_label(self.style.title_font_size);
        match self.install(ElementView::Title(label), layout) {
            ElementView::Title(label) => label,
            _ => unreachable!("title slot holds a different view"),
        }
    }

    /// Create the detail element, replacing any existing one.
    pub fn make_detail_label(&mut self, layout: ElementLayout) -> &mut Label {
        let label = self.make_label(self.style.detail_font_size);
        match self.install(ElementView::Detail(label), layout) {
            ElementView::Detail(label) => label,
            _ => unreachable!("detail slot holds a different view"),
        }
    }

    /// Create the button element, replacing any existing one.
    pub fn make_button(&mut self, layout: ElementLayout) -> &mut Button {
        let button = Button::new(self.style.button_font_size, self.style.text_color);
        match self.install(ElementView::Button(button), layout) {
            ElementView::Button(button) => button,
            _ => unreachable!("button slot holds a different view"),
        }
    }

    /// Install a custom view, replacing any existing one. While a custom view
    /// is present it is the only element laid out.
    pub fn set_custom_view(&mut self, view: Box<dyn View>, layout: ElementLayout) {
        self.install(ElementView::Custom(view), layout);
    }

    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        self.elements.image_view()
    }

    pub fn title_label(&self) -> Option<&Label> {
        self.elements.title_label()
    }

    pub fn detail_label(&self) -> Option<&Label> {
        self.elements.detail_label()
    }

    pub fn button(&self) -> Option<&Button> {
        self.elements.button()
    }

    pub fn custom_view(&self) -> Option<&dyn View> {
        self.elements.custom_view()
    }

    /// Remove every element and deactivate all constraints.
    pub fn reset_for_reuse(&mut self) {
        let removed = self.elements.drain();
        for entry in &removed {
            detach(&entry.view);
        }
        self.constraints.clear();
        self.content_constraints.clear();
        self.layout = ResolvedLayout::default();
        tracing::trace!(target: "blankslate::overlay", removed = removed.len(), "overlay reset");
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Overlay-level constraints placing the content wrapper.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Wrapper-level constraints placing the elements.
    pub fn content_constraints(&self) -> &ConstraintSet {
        &self.content_constraints
    }

    /// Frames from the last layout pass.
    pub fn resolved_layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Rebuild and activate constraints for the current elements and
    /// alignment, then lay out.
    pub fn apply_layout(&mut self) {
        let _span = PerfSpan::new("apply_layout");
        self.constraints.clear();
        self.content_constraints.clear();
        self.constraints
            .activate(layout::wrapper_constraints(self.alignment));
        self.content_constraints
            .activate(layout::content_constraints(&self.elements.layouts()));

        tracing::debug!(
            target: "blankslate::layout",
            alignment = ?self.alignment,
            elements = ?self.elements.elements(),
            constraints = self.constraints.len() + self.content_constraints.len(),
            "constraints activated"
        );
        self.layout_subviews();
    }

    /// Resolve the active constraints against the current frame and assign
    /// frames to the wrapper and elements. Does nothing before
    /// [`apply_layout`](Self::apply_layout).
    pub fn layout_subviews(&mut self) {
        if self.constraints.is_empty() {
            return;
        }
        let elements = &self.elements;
        let resolved = layout::resolve(
            self.base.frame().size,
            &self.constraints,
            &self.content_constraints,
            |element, width| {
                elements
                    .get(element)
                    .and_then(|entry| entry.view.as_view().height_for_width(width))
                    .unwrap_or(0.0)
            },
        );

        self.content.set_frame(resolved.content);
        for (element, frame) in &resolved.elements {
            if let Some(entry) = self.elements.get_mut(*element) {
                entry.view.as_view_mut().set_frame(*frame);
            }
        }
        self.layout = resolved;
    }

    /// Re-frame inside `host` and lay out again.
    pub fn sync_frame(&mut self, host: ViewId) -> BlankSlateResult<()> {
        let state = global_registry()?.view_state(host)?;
        let frame = overlay_frame(state.frame.size, state.safe_area_insets, state.scroll);
        tracing::trace!(target: "blankslate::layout", ?host, ?frame, "overlay frame synced");
        self.base.set_frame(frame);
        self.layout_subviews();
        Ok(())
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn background_color(&self) -> Color {
        self.base.background_color()
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.base.set_background_color(color);
    }

    pub fn background_gradient(&self) -> Option<&Gradient> {
        self.background_gradient.as_ref()
    }

    pub fn set_background_gradient(&mut self, gradient: Option<Gradient>) {
        self.background_gradient = gradient;
    }

    pub fn content_view(&self) -> &PlainView {
        &self.content
    }

    pub fn content_view_mut(&mut self) -> &mut PlainView {
        &mut self.content
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        !self.base.is_hidden()
    }

    // =========================================================================
    // Animation
    // =========================================================================

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    /// Duration used by the next fade-in. Zero snaps to opaque.
    pub fn set_fade_duration(&mut self, duration: Duration) {
        self.fade_duration = duration;
    }

    /// Start the content wrapper's fade-in.
    pub fn begin_fade_in(&mut self) {
        let state = self.fade.start(self.fade_duration);
        self.content.view_base().set_alpha(state.alpha());
    }

    pub fn fade_state(&self) -> FadeState {
        self.fade.state()
    }

    /// Advance the fade and image animations by `dt`. Returns whether
    /// anything is still animating.
    pub fn advance_animations(&mut self, dt: Duration) -> bool {
        if self.fade.is_running() {
            let state = self.fade.advance(dt);
            self.content.view_base().set_alpha(state.alpha());
        }

        let mut image_animating = false;
        if let Some(entry) = self.elements.get_mut(Element::Image)
            && let ElementView::Image(image) = &mut entry.view
        {
            image.advance_animations(dt);
            image_animating = image.has_animations();
        }
        self.fade.is_running() || image_animating
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Called when `host` moves to a different window.
    pub fn did_move_to_window(&mut self, host: ViewId, in_window: bool) -> BlankSlateResult<()> {
        self.base.set_in_window(in_window);
        self.sync_frame(host)?;
        if in_window {
            self.begin_fade_in();
        }
        Ok(())
    }

    /// The overlay's own tap recognizer, attached to the content wrapper.
    pub fn tap_gesture(&self) -> &GestureRef {
        &self.tap_gesture
    }

    /// What `point` (in the overlay's coordinates) lands on.
    ///
    /// Controls, the content wrapper and the custom view capture touches.
    /// Everything else inside the overlay's bounds passes through, returning
    /// `None`.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self.base.is_hidden() || !self.base.is_user_interaction_enabled() {
            return None;
        }
        if !self.content.accepts_point(point) {
            return None;
        }

        let local = self.content.frame().to_local(point);
        for (element, entry) in self.elements.iter().rev() {
            let view = entry.view.as_view();
            if !view.accepts_point(local) {
                continue;
            }
            if view.is_control() {
                return Some(HitTarget::Control(view.object_id()));
            }
            if element == Element::Custom {
                let inner = view.frame().to_local(local);
                return Some(match view.control_at(inner) {
                    Some(control) => HitTarget::Control(control),
                    None => HitTarget::CustomView(view.object_id()),
                });
            }
        }
        Some(HitTarget::ContentView(self.content.object_id()))
    }
}

impl Default for BlankSlateView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for BlankSlateView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for BlankSlateView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }
}

static_assertions::assert_impl_all!(BlankSlateView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{IMAGE_ANIMATION_KEY, ImageAnimation};
    use crate::layout::{Constraint, LayoutItem};
    use blankslate_core::init_global_registry;

    fn setup() -> BlankSlateView {
        init_global_registry();
        let view = BlankSlateView::with_style(OverlayStyle::default());
        view.view_base().set_frame(Rect::new(0.0, 0.0, 320.0, 480.0));
        view
    }

    #[test]
    fn test_content_starts_transparent() {
        let view = setup();
        assert_eq!(view.content_view().view_base().alpha(), 0.0);
        assert_eq!(view.view_base().subviews(), vec![view.content_view().object_id()]);
    }

    #[test]
    fn test_make_replaces_previous_element() {
        let mut view = setup();
        let first = view.make_title_label(ElementLayout::default()).object_id();
        let second = view.make_title_label(ElementLayout::default()).object_id();

        assert_ne!(first, second);
        assert_eq!(view.elements().len(), 1);
        assert_eq!(view.content_view().view_base().subviews(), vec![second]);
    }

    #[test]
    fn test_style_layout_fills_in_default() {
        init_global_registry();
        let fallback = ElementLayout::new(EdgeInsets::uniform(4.0), Some(30.0));
        let mut view = BlankSlateView::with_style(OverlayStyle::default().with_element_layout(fallback));
        let explicit = ElementLayout::default().with_height(20.0);

        view.make_title_label(ElementLayout::default());
        view.make_detail_label(explicit);

        assert_eq!(
            view.elements().layouts(),
            vec![(Element::Title, fallback), (Element::Detail, explicit)]
        );
    }

    #[test]
    fn test_reset_clears_elements_and_constraints() {
        let mut view = setup();
        view.make_title_label(ElementLayout::default());
        view.make_button(ElementLayout::default());
        view.apply_layout();
        assert!(!view.content_constraints().is_empty());

        view.reset_for_reuse();
        assert!(view.elements().is_empty());
        assert!(view.constraints().is_empty());
        assert!(view.content_constraints().is_empty());
        assert_eq!(view.content_view().view_base().subview_count(), 0);
    }

    #[test]
    fn test_layout_stacks_and_centers() {
        let mut view = setup();
        view.make_title_label(ElementLayout::default().with_height(30.0));
        view.make_detail_label(ElementLayout::default().with_height(20.0));
        view.apply_layout();

        let layout = view.resolved_layout();
        assert_eq!(layout.elements[&Element::Title], Rect::new(16.0, 11.0, 288.0, 30.0));
        assert_eq!(layout.elements[&Element::Detail], Rect::new(16.0, 52.0, 288.0, 20.0));
        // 11 + 30 + 11 + 20 + 11 = 83, centered in 480
        assert_eq!(view.content_view().frame(), Rect::new(0.0, 198.5, 320.0, 83.0));
    }

    #[test]
    fn test_custom_view_constraints() {
        let mut view = setup();
        view.make_title_label(ElementLayout::default());
        view.set_custom_view(Box::new(PlainView::with_height(40.0)), ElementLayout::default());
        view.apply_layout();

        let title = LayoutItem::Element(Element::Title);
        assert!(view.content_constraints().involving(title).next().is_none());
        assert_eq!(view.content_constraints().len(), 4);
        assert!(view.content_constraints().iter().any(|c| *c
            == Constraint::equal(
                LayoutItem::Element(Element::Custom).top(),
                LayoutItem::Content.top(),
                11.0
            )));
    }

    #[test]
    fn test_overlay_frame_insets() {
        let scroll = ScrollState {
            content_inset: EdgeInsets::new(64.0, 10.0, 0.0, 10.0),
            content_size: Size::new(320.0, 0.0),
            scroll_enabled: true,
        };
        let frame = overlay_frame(
            Size::new(320.0, 568.0),
            EdgeInsets::new(20.0, 0.0, 34.0, 0.0),
            Some(scroll),
        );
        assert_eq!(frame, Rect::new(10.0, 0.0, 300.0, 450.0));

        let plain = overlay_frame(Size::new(320.0, 568.0), EdgeInsets::new(20.0, 8.0, 0.0, 8.0), None);
        assert_eq!(plain, Rect::new(0.0, 0.0, 304.0, 548.0));
    }

    #[test]
    fn test_hit_test_passes_through_padding() {
        let mut view = setup();
        view.make_button(ElementLayout::default().with_height(44.0));
        view.set_fade_duration(Duration::ZERO);
        view.begin_fade_in();
        view.apply_layout();

        let content = view.content_view().frame();
        let button = view.button().map(|b| b.object_id());

        assert_eq!(view.hit_test(Point::new(160.0, 10.0)), None);

        let on_button = Point::new(160.0, content.top() + 11.0 + 22.0);
        assert_eq!(view.hit_test(on_button), button.map(HitTarget::Control));

        let beside_button = Point::new(5.0, content.top() + 11.0 + 22.0);
        assert_eq!(
            view.hit_test(beside_button),
            Some(HitTarget::ContentView(view.content_view().object_id()))
        );
    }

    #[test]
    fn test_fade_runs_to_opaque() {
        let mut view = setup();
        view.set_fade_duration(Duration::from_millis(300));
        view.begin_fade_in();
        assert_eq!(view.content_view().view_base().alpha(), 0.0);

        assert!(view.advance_animations(Duration::from_millis(150)));
        let mid = view.content_view().view_base().alpha();
        assert!(mid > 0.0 && mid < 1.0);

        assert!(!view.advance_animations(Duration::from_millis(200)));
        assert_eq!(view.content_view().view_base().alpha(), 1.0);
    }

    #[test]
    fn test_image_animation_advances() {
        let mut view = setup();
        let image = view.make_image_view(ElementLayout::default());
        image.add_animation(IMAGE_ANIMATION_KEY, ImageAnimation::spin(Duration::from_secs(1)));
        assert!(view.advance_animations(Duration::from_millis(16)));
    }
}
