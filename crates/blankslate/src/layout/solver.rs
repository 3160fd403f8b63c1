//! Constraint resolution.
//!
//! The constraint sets the overlay builds are chains of equalities, so the
//! solver is plain propagation: every axis of every item tracks its start,
//! end, center and length, and any two of them determine the rest. A
//! constraint with one known side assigns the other. When propagation stalls
//! with an element whose width is known but whose height is not, the
//! element's intrinsic height is consulted and propagation resumes.
//!
//! Resolution runs in three phases:
//!
//! 1. The overlay rect is known. Overlay-level constraints give the content
//!    wrapper its horizontal extent.
//! 2. The wrapper's constraints are solved in wrapper-local space (leading 0,
//!    top 0, width from phase 1). The last element's bottom constraint yields
//!    the wrapper's height.
//! 3. With its height known, the wrapper is placed vertically by the
//!    overlay-level constraints.

use std::collections::BTreeMap;

use blankslate_core::{Rect, Size};

use super::constraint::{Attribute, Constraint, ConstraintSet, LayoutItem};
use crate::model::Element;

/// Upper bound on propagation sweeps per phase.
const MAX_PASSES: usize = 32;

/// Output of [`resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLayout {
    /// The content wrapper's frame in overlay coordinates.
    pub content: Rect,
    /// Element frames in wrapper-local coordinates.
    pub elements: BTreeMap<Element, Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Start,
    End,
    Center,
    Length,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn split(attribute: Attribute) -> (Axis, Part) {
    match attribute {
        Attribute::Leading => (Axis::Horizontal, Part::Start),
        Attribute::Trailing => (Axis::Horizontal, Part::End),
        Attribute::CenterX => (Axis::Horizontal, Part::Center),
        Attribute::Width => (Axis::Horizontal, Part::Length),
        Attribute::Top => (Axis::Vertical, Part::Start),
        Attribute::Bottom => (Axis::Vertical, Part::End),
        Attribute::CenterY => (Axis::Vertical, Part::Center),
        Attribute::Height => (Axis::Vertical, Part::Length),
    }
}

/// One axis of one item.
#[derive(Debug, Clone, Copy, Default)]
struct Span {
    start: Option<f32>,
    end: Option<f32>,
    center: Option<f32>,
    length: Option<f32>,
}

impl Span {
    fn get(&self, part: Part) -> Option<f32> {
        match part {
            Part::Start => self.start,
            Part::End => self.end,
            Part::Center => self.center,
            Part::Length => self.length,
        }
    }

    /// Set a part if unknown. Returns whether anything changed.
    fn set(&mut self, part: Part, value: f32) -> bool {
        let slot = match part {
            Part::Start => &mut self.start,
            Part::End => &mut self.end,
            Part::Center => &mut self.center,
            Part::Length => &mut self.length,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Derive unknown parts from any two known ones.
    fn settle(&mut self) -> bool {
        let before = (self.start, self.end, self.center, self.length);

        if self.length.is_none() {
            self.length = match (self.start, self.end, self.center) {
                (Some(s), Some(e), _) => Some(e - s),
                (Some(s), None, Some(c)) => Some((c - s) * 2.0),
                (None, Some(e), Some(c)) => Some((e - c) * 2.0),
                _ => None,
            };
        }
        if let Some(len) = self.length {
            if self.start.is_none() {
                self.start = self
                    .end
                    .map(|e| e - len)
                    .or(self.center.map(|c| c - len / 2.0));
            }
            if let Some(s) = self.start {
                self.end.get_or_insert(s + len);
                self.center.get_or_insert(s + len / 2.0);
            }
        }

        before != (self.start, self.end, self.center, self.length)
    }

    fn range(&self) -> (f32, f32) {
        (self.start.unwrap_or(0.0), self.length.unwrap_or(0.0))
    }
}

#[derive(Debug, Default)]
struct Solver {
    items: BTreeMap<LayoutItem, [Span; 2]>,
}

impl Solver {
    fn span(&self, item: LayoutItem, axis: Axis) -> Option<&Span> {
        self.items.get(&item).map(|spans| &spans[axis as usize])
    }

    fn value(&self, item: LayoutItem, attribute: Attribute) -> Option<f32> {
        let (axis, part) = split(attribute);
        self.span(item, axis).and_then(|span| span.get(part))
    }

    fn assign(&mut self, item: LayoutItem, attribute: Attribute, value: f32) -> bool {
        let (axis, part) = split(attribute);
        let spans = self.items.entry(item).or_default();
        let span = &mut spans[axis as usize];
        if !span.set(part, value) {
            return false;
        }
        span.settle();
        true
    }

    fn fix_rect(&mut self, item: LayoutItem, rect: Rect) {
        self.assign(item, Attribute::Leading, rect.left());
        self.assign(item, Attribute::Width, rect.width());
        self.assign(item, Attribute::Top, rect.top());
        self.assign(item, Attribute::Height, rect.height());
    }

    fn rect(&self, item: LayoutItem) -> Rect {
        let (x, width) = self
            .span(item, Axis::Horizontal)
            .map_or((0.0, 0.0), Span::range);
        let (y, height) = self
            .span(item, Axis::Vertical)
            .map_or((0.0, 0.0), Span::range);
        Rect::new(x, y, width, height)
    }

    /// Apply constraints until nothing changes. Conflicting constraints are
    /// ignored; the first assignment wins.
    fn propagate(&mut self, constraints: &[Constraint]) -> usize {
        let mut passes = 0;
        while passes < MAX_PASSES {
            passes += 1;
            let mut changed = false;
            for c in constraints {
                let first = self.value(c.first.item, c.first.attribute);
                let second = match c.second {
                    Some(anchor) => self.value(anchor.item, anchor.attribute),
                    None => Some(0.0),
                };
                match (first, second, c.second) {
                    (None, Some(s), _) => {
                        changed |= self.assign(c.first.item, c.first.attribute, s + c.constant);
                    }
                    (Some(f), None, Some(anchor)) => {
                        changed |= self.assign(anchor.item, anchor.attribute, f - c.constant);
                    }
                    _ => {}
                }
            }
            if !changed {
                break;
            }
        }
        passes
    }
}

/// Resolve frames for the wrapper and its elements.
///
/// `wrapper` holds the overlay-level constraints placing the content wrapper;
/// `content` holds the wrapper-level constraints placing elements.
/// `intrinsic_height(element, width)` supplies heights the constraints leave
/// open.
pub fn resolve(
    overlay: Size,
    wrapper: &ConstraintSet,
    content: &ConstraintSet,
    mut intrinsic_height: impl FnMut(Element, f32) -> f32,
) -> ResolvedLayout {
    let mut outer = Solver::default();
    outer.fix_rect(LayoutItem::Overlay, Rect::from_size(overlay));
    outer.propagate(wrapper.as_slice());
    let content_width = outer
        .value(LayoutItem::Content, Attribute::Width)
        .unwrap_or(overlay.width);

    let mut inner = Solver::default();
    inner.assign(LayoutItem::Content, Attribute::Leading, 0.0);
    inner.assign(LayoutItem::Content, Attribute::Width, content_width);
    inner.assign(LayoutItem::Content, Attribute::Top, 0.0);

    let elements = content.elements();
    let mut passes = 0;
    loop {
        passes += inner.propagate(content.as_slice());
        let pending = elements.iter().copied().find_map(|element| {
            let item = LayoutItem::Element(element);
            let width = inner.value(item, Attribute::Width)?;
            inner
                .value(item, Attribute::Height)
                .is_none()
                .then_some((element, width))
        });
        match pending {
            Some((element, width)) => {
                let height = intrinsic_height(element, width).max(0.0);
                inner.assign(LayoutItem::Element(element), Attribute::Height, height);
            }
            None => break,
        }
    }

    let content_height = inner
        .value(LayoutItem::Content, Attribute::Height)
        .unwrap_or(0.0)
        .max(0.0);
    outer.assign(LayoutItem::Content, Attribute::Height, content_height);
    passes += outer.propagate(wrapper.as_slice());

    let resolved = ResolvedLayout {
        content: outer.rect(LayoutItem::Content),
        elements: elements
            .into_iter()
            .map(|element| (element, inner.rect(LayoutItem::Element(element))))
            .collect(),
    };
    tracing::trace!(
        target: "blankslate::layout",
        passes,
        content = ?resolved.content,
        elements = resolved.elements.len(),
        "layout resolved"
    );
    resolved
}
