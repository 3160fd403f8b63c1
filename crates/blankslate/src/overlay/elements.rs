//! The overlay's element registry.

use std::collections::BTreeMap;

use blankslate_core::ViewId;

use crate::model::{Element, ElementLayout};
use crate::view::{Button, ImageView, Label, View};

/// A live element view, tagged by its slot.
pub enum ElementView {
    Image(ImageView),
    Title(Label),
    Detail(Label),
    Button(Button),
    Custom(Box<dyn View>),
}

impl ElementView {
    /// The slot this view occupies.
    pub fn element(&self) -> Element {
        match self {
            ElementView::Image(_) => Element::Image,
            ElementView::Title(_) => Element::Title,
            ElementView::Detail(_) => Element::Detail,
            ElementView::Button(_) => Element::Button,
            ElementView::Custom(_) => Element::Custom,
        }
    }

    pub fn as_view(&self) -> &dyn View {
        match self {
            ElementView::Image(view) => view,
            ElementView::Title(label) | ElementView::Detail(label) => label,
            ElementView::Button(button) => button,
            ElementView::Custom(view) => view.as_ref(),
        }
    }

    pub fn as_view_mut(&mut self) -> &mut dyn View {
        match self {
            ElementView::Image(view) => view,
            ElementView::Title(label) | ElementView::Detail(label) => label,
            ElementView::Button(button) => button,
            ElementView::Custom(view) => view.as_mut(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.as_view().object_id()
    }
}

impl std::fmt::Debug for ElementView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementView")
            .field("element", &self.element())
            .field("id", &self.id())
            .finish()
    }
}

/// A view paired with its layout.
#[derive(Debug)]
pub struct ElementEntry {
    pub view: ElementView,
    pub layout: ElementLayout,
}

/// Element views keyed by slot, iterated in stacking order.
///
/// Each slot holds at most one entry. Inserting into an occupied slot hands
/// the previous entry back so the caller can detach it.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    entries: BTreeMap<Element, ElementEntry>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `view` in its slot. Returns the displaced entry, if any, and the
    /// newly stored view.
    pub fn insert(
        &mut self,
        view: ElementView,
        layout: ElementLayout,
    ) -> (Option<ElementEntry>, &mut ElementView) {
        let element = view.element();
        let displaced = self.entries.remove(&element);
        let entry = self
            .entries
            .entry(element)
            .or_insert(ElementEntry { view, layout });
        (displaced, &mut entry.view)
    }

    pub fn remove(&mut self, element: Element) -> Option<ElementEntry> {
        self.entries.remove(&element)
    }

    /// Empty the registry, returning the entries in stacking order.
    pub fn drain(&mut self) -> Vec<ElementEntry> {
        std::mem::take(&mut self.entries).into_values().collect()
    }

    pub fn get(&self, element: Element) -> Option<&ElementEntry> {
        self.entries.get(&element)
    }

    pub fn get_mut(&mut self, element: Element) -> Option<&mut ElementEntry> {
        self.entries.get_mut(&element)
    }

    pub fn contains(&self, element: Element) -> bool {
        self.entries.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occupied slots, in stacking order.
    pub fn elements(&self) -> Vec<Element> {
        self.entries.keys().copied().collect()
    }

    /// Occupied slots with their layouts, in stacking order.
    pub fn layouts(&self) -> Vec<(Element, ElementLayout)> {
        self.entries
            .iter()
            .map(|(element, entry)| (*element, entry.layout))
            .collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Element, &ElementEntry)> + '_ {
        self.entries.iter().map(|(element, entry)| (*element, entry))
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        match self.get(Element::Image).map(|e| &e.view) {
            Some(ElementView::Image(view)) => Some(view),
            _ => None,
        }
    }

    pub fn title_label(&self) -> Option<&Label> {
        match self.get(Element::Title).map(|e| &e.view) {
            Some(ElementView::Title(label)) => Some(label),
            _ => None,
        }
    }

    pub fn detail_label(&self) -> Option<&Label> {
        match self.get(Element::Detail).map(|e| &e.view) {
            Some(ElementView::Detail(label)) => Some(label),
            _ => None,
        }
    }

    pub fn button(&self) -> Option<&Button> {
        match self.get(Element::Button).map(|e| &e.view) {
            Some(ElementView::Button(button)) => Some(button),
            _ => None,
        }
    }

    pub fn custom_view(&self) -> Option<&dyn View> {
        match self.get(Element::Custom).map(|e| &e.view) {
            Some(ElementView::Custom(view)) => Some(view.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankslate_core::{Color, Object, init_global_registry};

    #[test]
    fn test_insert_replaces_and_returns_displaced() {
        init_global_registry();
        let mut registry = ElementRegistry::new();

        let first = Label::new(27.0, Color::GRAY);
        let first_id = first.object_id();
        let (displaced, _) = registry.insert(ElementView::Title(first), ElementLayout::default());
        assert!(displaced.is_none());

        let second = Label::new(27.0, Color::GRAY);
        let second_id = second.object_id();
        let (displaced, stored) = registry.insert(ElementView::Title(second), ElementLayout::default());
        assert_eq!(stored.id(), second_id);
        assert_eq!(displaced.map(|e| e.view.id()), Some(first_id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_follows_stacking_order() {
        init_global_registry();
        let mut registry = ElementRegistry::new();
        registry.insert(ElementView::Button(Button::new(17.0, Color::GRAY)), ElementLayout::default());
        registry.insert(ElementView::Image(ImageView::new()), ElementLayout::default());
        registry.insert(ElementView::Detail(Label::new(17.0, Color::GRAY)), ElementLayout::default());

        assert_eq!(
            registry.elements(),
            vec![Element::Image, Element::Detail, Element::Button]
        );
        assert!(registry.button().is_some());
        assert!(registry.title_label().is_none());

        let drained = registry.drain();
        assert_eq!(drained.len(), 3);
        assert!(registry.is_empty());
    }
}
