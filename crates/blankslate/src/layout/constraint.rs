//! Linear layout constraints.
//!
//! Every constraint has the form `first == second + constant`, or
//! `first == constant` when there is no second anchor. Items are the overlay
//! itself, its content wrapper, and the elements inside the wrapper.

use std::fmt;

use crate::model::Element;

/// Something a constraint can pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutItem {
    /// The overlay view, whose frame is given.
    Overlay,
    /// The content wrapper inside the overlay.
    Content,
    /// An element view inside the content wrapper.
    Element(Element),
}

impl LayoutItem {
    /// Build an anchor on this item.
    #[inline]
    pub fn anchor(self, attribute: Attribute) -> Anchor {
        Anchor {
            item: self,
            attribute,
        }
    }

    pub fn leading(self) -> Anchor {
        self.anchor(Attribute::Leading)
    }

    pub fn trailing(self) -> Anchor {
        self.anchor(Attribute::Trailing)
    }

    pub fn top(self) -> Anchor {
        self.anchor(Attribute::Top)
    }

    pub fn bottom(self) -> Anchor {
        self.anchor(Attribute::Bottom)
    }

    pub fn center_x(self) -> Anchor {
        self.anchor(Attribute::CenterX)
    }

    pub fn center_y(self) -> Anchor {
        self.anchor(Attribute::CenterY)
    }

    pub fn width(self) -> Anchor {
        self.anchor(Attribute::Width)
    }

    pub fn height(self) -> Anchor {
        self.anchor(Attribute::Height)
    }
}

impl fmt::Display for LayoutItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutItem::Overlay => f.write_str("overlay"),
            LayoutItem::Content => f.write_str("content"),
            LayoutItem::Element(element) => f.write_str(element.name()),
        }
    }
}

/// An edge, center line or dimension of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
}

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
            Attribute::Width => "width",
            Attribute::Height => "height",
        }
    }
}

/// An attribute of a specific item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor {
    pub item: LayoutItem,
    pub attribute: Attribute,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.item, self.attribute.name())
    }
}

/// `first == second + constant`, or `first == constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub first: Anchor,
    pub second: Option<Anchor>,
    pub constant: f32,
}

impl Constraint {
    /// Relate two anchors.
    pub fn equal(first: Anchor, second: Anchor, constant: f32) -> Self {
        Self {
            first,
            second: Some(second),
            constant,
        }
    }

    /// Fix an anchor (usually a dimension) to a constant.
    pub fn fixed(first: Anchor, constant: f32) -> Self {
        Self {
            first,
            second: None,
            constant,
        }
    }

    /// Whether `item` appears on either side.
    pub fn involves(&self, item: LayoutItem) -> bool {
        self.first.item == item || self.second.is_some_and(|a| a.item == item)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) if self.constant == 0.0 => write!(f, "{} == {}", self.first, second),
            Some(second) if self.constant < 0.0 => {
                write!(f, "{} == {} - {}", self.first, second, -self.constant)
            }
            Some(second) => write!(f, "{} == {} + {}", self.first, second, self.constant),
            None => write!(f, "{} == {}", self.first, self.constant),
        }
    }
}

/// The active constraints installed on one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate constraints, keeping insertion order.
    pub fn activate(&mut self, constraints: impl IntoIterator<Item = Constraint>) {
        self.constraints.extend(constraints);
    }

    /// Deactivate everything.
    pub fn clear(&mut self) {
        self.constraints.clear();
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraints mentioning `item`.
    pub fn involving(&self, item: LayoutItem) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.iter().filter(move |c| c.involves(item))
    }

    /// Distinct elements mentioned by any constraint, in stacking order.
    pub fn elements(&self) -> Vec<Element> {
        let mut elements: Vec<Element> = self
            .constraints
            .iter()
            .flat_map(|c| [Some(c.first), c.second])
            .flatten()
            .filter_map(|anchor| match anchor.item {
                LayoutItem::Element(element) => Some(element),
                _ => None,
            })
            .collect();
        elements.sort();
        elements.dedup();
        elements
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
