//! Value types describing the overlay's elements and placement.

use blankslate_core::{EdgeInsets, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named visual slot in the overlay.
///
/// The declaration order is the vertical stacking order used when no custom
/// view is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    Image,
    Title,
    Detail,
    Button,
    Custom,
}

impl Element {
    /// Every element, in stacking order.
    pub const ALL: [Element; 5] = [
        Element::Image,
        Element::Title,
        Element::Detail,
        Element::Button,
        Element::Custom,
    ];

    /// Short lowercase name, used for view names and logs.
    pub fn name(self) -> &'static str {
        match self {
            Element::Image => "image",
            Element::Title => "title",
            Element::Detail => "detail",
            Element::Button => "button",
            Element::Custom => "custom",
        }
    }
}

/// Spacing and height for one element.
///
/// `insets.top` is the gap above the element (to the previous element or the
/// wrapper's top), `insets.bottom` is only used by the last element, and
/// `insets.left`/`insets.right` pin the element to the wrapper's sides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementLayout {
    pub insets: EdgeInsets,
    /// Fixed height, or `None` for the element's intrinsic height.
    pub height: Option<f32>,
}

impl ElementLayout {
    /// Default element insets: 11 top and bottom, 16 left and right.
    pub const DEFAULT_INSETS: EdgeInsets = EdgeInsets::new(11.0, 16.0, 11.0, 16.0);

    /// Create a layout with explicit insets and height.
    pub const fn new(insets: EdgeInsets, height: Option<f32>) -> Self {
        Self { insets, height }
    }

    /// Builder: replace the insets.
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Builder: fix the height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

impl Default for ElementLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INSETS, None)
    }
}

/// Where the content wrapper sits inside the overlay.
///
/// The wrapper is always centered horizontally (plus the offset's `x`). The
/// variant picks the vertical anchor; the offset's `y` is added for `Center`
/// and `Top` and subtracted for `Bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    Center(Point),
    Top(Point),
    Bottom(Point),
}

impl Alignment {
    /// The offset carried by the variant.
    pub fn offset(&self) -> Point {
        match *self {
            Alignment::Center(offset) | Alignment::Top(offset) | Alignment::Bottom(offset) => {
                offset
            }
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Center(Point::ZERO)
    }
}

/// Loading state for hosts that fetch their content asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataLoadStatus {
    Loading,
    Success,
    Failure,
}

/// Interaction state a button's title or image applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlState {
    Normal,
    Highlighted,
}

impl ControlState {
    /// Every state, in the order they are queried.
    pub const ALL: [ControlState; 2] = [ControlState::Normal, ControlState::Highlighted];
}
