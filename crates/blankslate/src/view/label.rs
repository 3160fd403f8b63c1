//! Text element view used for the title and detail.

use blankslate_core::{Color, Object, ViewId};

use super::base::ViewBase;
use super::traits::View;
use crate::content::{AttributedText, TextAlignment, measure_text_height};

/// Word-wrapping text view.
pub struct Label {
    base: ViewBase,
    text: Option<AttributedText>,
    font_size: f32,
    text_color: Color,
    alignment: TextAlignment,
    /// 0 means unlimited.
    max_lines: usize,
}

impl Label {
    /// Create an empty label with the given default font size and color.
    pub fn new(font_size: f32, text_color: Color) -> Self {
        let base = ViewBase::new::<Self>();
        base.set_user_interaction_enabled(false);
        Self {
            base,
            text: None,
            font_size,
            text_color,
            alignment: TextAlignment::Center,
            max_lines: 0,
        }
    }

    pub fn attributed_text(&self) -> Option<&AttributedText> {
        self.text.as_ref()
    }

    pub fn set_attributed_text(&mut self, text: Option<AttributedText>) {
        self.text = text;
    }

    /// The plain string, or `""` when empty.
    pub fn text(&self) -> &str {
        self.text.as_ref().map_or("", |t| t.text.as_str())
    }

    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines;
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Font size after applying the text's own attribute.
    pub fn effective_font_size(&self) -> f32 {
        self.text
            .as_ref()
            .and_then(|t| t.font_size)
            .unwrap_or(self.font_size)
    }

    /// Color after applying the text's own attribute.
    pub fn effective_text_color(&self) -> Color {
        self.text
            .as_ref()
            .and_then(|t| t.color)
            .unwrap_or(self.text_color)
    }

    /// Alignment after applying the text's own attribute.
    pub fn effective_alignment(&self) -> TextAlignment {
        self.text
            .as_ref()
            .and_then(|t| t.alignment)
            .unwrap_or(self.alignment)
    }
}

impl Object for Label {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for Label {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn height_for_width(&self, width: f32) -> Option<f32> {
        Some(measure_text_height(
            self.text(),
            self.effective_font_size(),
            width,
            self.max_lines,
        ))
    }
}
