//! Default presentation of overlay elements.
//!
//! Attributes a data source leaves unset (font size, color, alignment) come
//! from an [`OverlayStyle`]. Each overlay copies the process-wide default when
//! it is created; [`set_default_style`] changes it for overlays created
//! afterwards.

use std::sync::LazyLock;

use blankslate_core::Color;
use parking_lot::RwLock;

use crate::content::TextAlignment;
use crate::model::ElementLayout;

/// Fonts, colors and spacing used when content does not say otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayStyle {
    pub title_font_size: f32,
    pub detail_font_size: f32,
    pub button_font_size: f32,
    pub text_color: Color,
    pub text_alignment: TextAlignment,
    /// Maximum lines for title and detail; 0 is unlimited.
    pub max_lines: usize,
    pub element_layout: ElementLayout,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            title_font_size: 27.0,
            detail_font_size: 17.0,
            button_font_size: 17.0,
            text_color: Color::from_white(0.6, 1.0),
            text_alignment: TextAlignment::Center,
            max_lines: 0,
            element_layout: ElementLayout::default(),
        }
    }
}

impl OverlayStyle {
    /// Builder: title font size.
    pub fn with_title_font_size(mut self, size: f32) -> Self {
        self.title_font_size = size;
        self
    }

    /// Builder: detail font size.
    pub fn with_detail_font_size(mut self, size: f32) -> Self {
        self.detail_font_size = size;
        self
    }

    /// Builder: default text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Builder: line limit for title and detail.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Builder: layout used when a data source does not supply one.
    pub fn with_element_layout(mut self, layout: ElementLayout) -> Self {
        self.element_layout = layout;
        self
    }
}

static DEFAULT_STYLE: LazyLock<RwLock<OverlayStyle>> =
    LazyLock::new(|| RwLock::new(OverlayStyle::default()));

/// The style new overlays start from.
pub fn default_style() -> OverlayStyle {
    DEFAULT_STYLE.read().clone()
}

/// Replace the style new overlays start from.
pub fn set_default_style(style: OverlayStyle) {
    tracing::debug!(target: "blankslate::overlay", ?style, "default overlay style replaced");
    *DEFAULT_STYLE.write() = style;
}
