//! Content values a data source hands to the overlay: styled text, images
//! and background gradients.

use blankslate_core::{Color, Point, Size};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Text with optional styling. Attributes left unset fall back to the
/// label's defaults from [`OverlayStyle`](crate::style::OverlayStyle).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    pub text: String,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub alignment: Option<TextAlignment>,
}

impl AttributedText {
    /// Unstyled text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder: set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Builder: set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: set the alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Whether there is no text to show.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Estimated height of `text` word-wrapped to `width`.
///
/// Glyph metrics come from the renderer; without one, an average advance of
/// half the font size and a line height of 1.2 × font size are used. A
/// `max_lines` of 0 means unlimited.
pub fn measure_text_height(text: &str, font_size: f32, width: f32, max_lines: usize) -> f32 {
    if text.trim().is_empty() || font_size <= 0.0 {
        return 0.0;
    }

    let advance = font_size * 0.5;
    let chars_per_line = ((width / advance).floor() as usize).max(1);

    let mut lines = 0usize;
    for paragraph in text.split('\n') {
        let mut current = 0usize;
        let mut paragraph_lines = 1usize;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= chars_per_line {
                current = needed;
                continue;
            }
            // Words longer than a line break mid-word.
            let extra = (len - 1) / chars_per_line;
            paragraph_lines += if current == 0 { extra } else { 1 + extra };
            current = match len % chars_per_line {
                0 => chars_per_line,
                rest => rest,
            };
        }
        lines += paragraph_lines;
    }

    if max_lines > 0 {
        lines = lines.min(max_lines);
    }
    lines as f32 * font_size * 1.2
}

/// How an image's pixels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingMode {
    /// Whatever the image asset specifies.
    #[default]
    Automatic,
    /// Original colors.
    Original,
    /// Alpha mask filled with the tint color.
    Template,
}

/// A named image asset with its natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub name: String,
    pub size: Size,
    pub rendering_mode: RenderingMode,
}

impl Image {
    /// Create an image reference.
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            rendering_mode: RenderingMode::Automatic,
        }
    }

    /// This image drawn with a different rendering mode.
    pub fn with_rendering_mode(mut self, mode: RenderingMode) -> Self {
        self.rendering_mode = mode;
        self
    }

    /// Height when scaled down (never up) to fit `width`, keeping the aspect
    /// ratio.
    pub fn fitted_height(&self, width: f32) -> f32 {
        if self.size.width <= 0.0 || self.size.width <= width {
            self.size.height
        } else {
            self.size.height * (width / self.size.width).max(0.0)
        }
    }
}

/// A linear gradient painted behind the overlay content.
///
/// `start` and `end` are in unit coordinates of the overlay's bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub colors: Vec<Color>,
    pub start: Point,
    pub end: Point,
}

impl Gradient {
    /// Top-to-bottom gradient through `colors`.
    pub fn vertical(colors: Vec<Color>) -> Self {
        Self {
            colors,
            start: Point::new(0.5, 0.0),
            end: Point::new(0.5, 1.0),
        }
    }

    /// Color at unit position `t` along the gradient.
    pub fn color_at(&self, t: f32) -> Color {
        match self.colors.len() {
            0 => Color::CLEAR,
            1 => self.colors[0],
            n => {
                let scaled = t.clamp(0.0, 1.0) * (n - 1) as f32;
                let index = (scaled.floor() as usize).min(n - 2);
                self.colors[index].lerp(self.colors[index + 1], scaled - index as f32)
            }
        }
    }
}
