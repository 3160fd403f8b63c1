//! Button element view.

use std::collections::BTreeMap;

use blankslate_core::{Color, EdgeInsets, Object, Signal, ViewId};

use super::base::ViewBase;
use super::traits::View;
use crate::content::{AttributedText, Image, measure_text_height};
use crate::model::ControlState;

/// A tappable control with per-state title, image and background image.
///
/// Lookups for the highlighted state fall back to the normal state when the
/// highlighted variant is unset.
pub struct Button {
    base: ViewBase,
    titles: BTreeMap<ControlState, AttributedText>,
    images: BTreeMap<ControlState, Image>,
    background_images: BTreeMap<ControlState, Image>,
    highlighted: bool,
    font_size: f32,
    title_color: Color,
    content_insets: EdgeInsets,
    /// Emitted with the button's id when it is tapped.
    pub tapped: Signal<ViewId>,
}

impl Button {
    /// Create a button with no content.
    pub fn new(font_size: f32, title_color: Color) -> Self {
        Self {
            base: ViewBase::new::<Self>(),
            titles: BTreeMap::new(),
            images: BTreeMap::new(),
            background_images: BTreeMap::new(),
            highlighted: false,
            font_size,
            title_color,
            content_insets: EdgeInsets::ZERO,
            tapped: Signal::new(),
        }
    }

    fn lookup<T>(map: &BTreeMap<ControlState, T>, state: ControlState) -> Option<&T> {
        map.get(&state).or_else(|| map.get(&ControlState::Normal))
    }

    fn current_state(&self) -> ControlState {
        if self.highlighted {
            ControlState::Highlighted
        } else {
            ControlState::Normal
        }
    }

    /// Title for `state`.
    pub fn title(&self, state: ControlState) -> Option<&AttributedText> {
        Self::lookup(&self.titles, state)
    }

    pub fn set_title(&mut self, title: Option<AttributedText>, state: ControlState) {
        match title {
            Some(title) => self.titles.insert(state, title),
            None => self.titles.remove(&state),
        };
    }

    /// Image for `state`.
    pub fn image(&self, state: ControlState) -> Option<&Image> {
        Self::lookup(&self.images, state)
    }

    pub fn set_image(&mut self, image: Option<Image>, state: ControlState) {
        match image {
            Some(image) => self.images.insert(state, image),
            None => self.images.remove(&state),
        };
    }

    /// Background image for `state`.
    pub fn background_image(&self, state: ControlState) -> Option<&Image> {
        Self::lookup(&self.background_images, state)
    }

    pub fn set_background_image(&mut self, image: Option<Image>, state: ControlState) {
        match image {
            Some(image) => self.background_images.insert(state, image),
            None => self.background_images.remove(&state),
        };
    }

    /// Title shown in the current state.
    pub fn current_title(&self) -> Option<&AttributedText> {
        self.title(self.current_state())
    }

    /// Image shown in the current state.
    pub fn current_image(&self) -> Option<&Image> {
        self.image(self.current_state())
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn title_color(&self) -> Color {
        self.title_color
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    pub fn content_insets(&self) -> EdgeInsets {
        self.content_insets
    }

    pub fn set_content_insets(&mut self, insets: EdgeInsets) {
        self.content_insets = insets;
    }

    /// Whether the button has anything to show.
    pub fn has_content(&self) -> bool {
        !self.titles.is_empty() || !self.images.is_empty() || !self.background_images.is_empty()
    }

    /// Deliver a tap: emits `tapped`.
    pub fn tap(&self) {
        self.tapped.emit(self.object_id());
    }
}

impl Object for Button {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for Button {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn height_for_width(&self, width: f32) -> Option<f32> {
        let inner_width = (width - self.content_insets.horizontal()).max(0.0);
        let title_height = self.current_title().map_or(0.0, |title| {
            let font_size = title.font_size.unwrap_or(self.font_size);
            measure_text_height(&title.text, font_size, inner_width, 1)
        });
        let image_height = self
            .current_image()
            .map_or(0.0, |image| image.fitted_height(inner_width));
        let background_height = self
            .background_image(self.current_state())
            .map_or(0.0, |image| image.size.height);

        let content = title_height.max(image_height) + self.content_insets.vertical();
        Some(content.max(background_height))
    }

    fn is_control(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankslate_core::{Size, init_global_registry};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn button() -> Button {
        init_global_registry();
        Button::new(17.0, Color::BLACK)
    }

    #[test]
    fn test_highlighted_falls_back_to_normal() {
        let mut button = button();
        button.set_title(Some("Retry".into()), ControlState::Normal);
        assert_eq!(button.title(ControlState::Highlighted).unwrap().text, "Retry");

        button.set_title(Some("Retrying".into()), ControlState::Highlighted);
        button.set_highlighted(true);
        assert_eq!(button.current_title().unwrap().text, "Retrying");
    }

    #[test]
    fn test_clearing_a_state() {
        let mut button = button();
        button.set_image(Some(Image::new("plus", Size::new(20.0, 20.0))), ControlState::Normal);
        assert!(button.has_content());
        button.set_image(None, ControlState::Normal);
        assert!(!button.has_content());
    }

    #[test]
    fn test_height_uses_tallest_content() {
        let mut button = button();
        button.set_title(Some(AttributedText::new("Go").with_font_size(10.0)), ControlState::Normal);
        assert_eq!(button.height_for_width(200.0), Some(12.0));

        button.set_background_image(Some(Image::new("pill", Size::new(200.0, 44.0))), ControlState::Normal);
        assert_eq!(button.height_for_width(200.0), Some(44.0));
    }

    #[test]
    fn test_tap_emits_id() {
        let button = button();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        button.tapped.connect(move |id| *sink.lock() = Some(*id));
        button.tap();
        assert_eq!(*seen.lock(), Some(button.object_id()));
        assert!(button.is_control());
    }
}
