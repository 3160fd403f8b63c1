//! Overlay layout.
//!
//! [`wrapper_constraints`] and [`content_constraints`] turn an alignment and
//! an element registry's layouts into constraint sets, and
//! [`resolve`] turns constraint sets into frames.

mod constraint;
mod solver;

pub use constraint::{Anchor, Attribute, Constraint, ConstraintSet, LayoutItem};
pub use solver::{ResolvedLayout, resolve};

use crate::model::{Alignment, Element, ElementLayout};

/// Constraints placing the content wrapper inside the overlay.
///
/// The wrapper spans the overlay's width and is centered horizontally plus
/// the offset's `x`. Vertically it follows the alignment variant.
pub fn wrapper_constraints(alignment: Alignment) -> Vec<Constraint> {
    let offset = alignment.offset();
    let content = LayoutItem::Content;
    let overlay = LayoutItem::Overlay;

    let vertical = match alignment {
        Alignment::Center(_) => Constraint::equal(content.center_y(), overlay.center_y(), offset.y),
        Alignment::Top(_) => Constraint::equal(content.top(), overlay.top(), offset.y),
        Alignment::Bottom(_) => Constraint::equal(content.bottom(), overlay.bottom(), -offset.y),
    };

    vec![
        Constraint::equal(content.center_x(), overlay.center_x(), offset.x),
        Constraint::equal(content.width(), overlay.width(), 0.0),
        vertical,
    ]
}

/// Constraints placing elements inside the content wrapper.
///
/// `elements` must be in stacking order. A custom element, if present, is
/// pinned alone to all four wrapper edges; otherwise the elements are stacked
/// top to bottom.
pub fn content_constraints(elements: &[(Element, ElementLayout)]) -> Vec<Constraint> {
    let content = LayoutItem::Content;

    if let Some((_, layout)) = elements.iter().find(|(e, _)| *e == Element::Custom) {
        let custom = LayoutItem::Element(Element::Custom);
        let insets = layout.insets;
        let mut constraints = vec![
            Constraint::equal(custom.top(), content.top(), insets.top),
            Constraint::equal(custom.leading(), content.leading(), insets.left),
            Constraint::equal(custom.bottom(), content.bottom(), -insets.bottom),
            Constraint::equal(custom.trailing(), content.trailing(), -insets.right),
        ];
        if let Some(height) = layout.height {
            constraints.push(Constraint::fixed(custom.height(), height));
        }
        return constraints;
    }

    let mut constraints = Vec::with_capacity(elements.len() * 4 + 1);
    let mut previous: Option<LayoutItem> = None;
    for &(element, layout) in elements {
        let item = LayoutItem::Element(element);
        let insets = layout.insets;
        let above = match previous {
            Some(prev) => prev.bottom(),
            None => content.top(),
        };
        constraints.push(Constraint::equal(item.top(), above, insets.top));
        constraints.push(Constraint::equal(item.leading(), content.leading(), insets.left));
        constraints.push(Constraint::equal(item.trailing(), content.trailing(), -insets.right));
        if let Some(height) = layout.height {
            constraints.push(Constraint::fixed(item.height(), height));
        }
        previous = Some(item);
    }

    if let (Some(last), Some((_, layout))) = (previous, elements.last()) {
        constraints.push(Constraint::equal(
            last.bottom(),
            content.bottom(),
            -layout.insets.bottom,
        ));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankslate_core::{EdgeInsets, Point};

    #[test]
    fn test_wrapper_follows_alignment() {
        let top = wrapper_constraints(Alignment::Top(Point::new(4.0, 12.0)));
        assert_eq!(
            top[0],
            Constraint::equal(LayoutItem::Content.center_x(), LayoutItem::Overlay.center_x(), 4.0)
        );
        assert_eq!(
            top[2],
            Constraint::equal(LayoutItem::Content.top(), LayoutItem::Overlay.top(), 12.0)
        );

        let bottom = wrapper_constraints(Alignment::Bottom(Point::new(0.0, 12.0)));
        assert_eq!(
            bottom[2],
            Constraint::equal(LayoutItem::Content.bottom(), LayoutItem::Overlay.bottom(), -12.0)
        );
    }

    #[test]
    fn test_custom_is_exclusive() {
        let layout = ElementLayout::new(EdgeInsets::uniform(8.0), Some(120.0));
        let constraints = content_constraints(&[
            (Element::Title, ElementLayout::default()),
            (Element::Custom, layout),
        ]);

        assert_eq!(constraints.len(), 5);
        let title = LayoutItem::Element(Element::Title);
        assert!(constraints.iter().all(|c| !c.involves(title)));
        assert!(constraints.contains(&Constraint::fixed(
            LayoutItem::Element(Element::Custom).height(),
            120.0
        )));
    }

    #[test]
    fn test_stack_chains_elements() {
        let constraints = content_constraints(&[
            (Element::Title, ElementLayout::default()),
            (Element::Detail, ElementLayout::default()),
        ]);
        let title = LayoutItem::Element(Element::Title);
        let detail = LayoutItem::Element(Element::Detail);

        assert_eq!(
            constraints[0],
            Constraint::equal(title.top(), LayoutItem::Content.top(), 11.0)
        );
        assert!(constraints.contains(&Constraint::equal(detail.top(), title.bottom(), 11.0)));
        assert_eq!(
            constraints.last(),
            Some(&Constraint::equal(detail.bottom(), LayoutItem::Content.bottom(), -11.0))
        );
    }

    #[test]
    fn test_no_elements_no_constraints() {
        assert!(content_constraints(&[]).is_empty());
    }
}
