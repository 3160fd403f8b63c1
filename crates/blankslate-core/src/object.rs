//! View registry.
//!
//! Every view participating in an overlay (host list views, the overlay
//! itself, its content wrapper and elements) is registered here and owns a
//! [`ViewId`]. The registry records:
//! - The parent/child hierarchy, with children ordered back-to-front
//! - Debug names and concrete type names
//! - Per-view [`ViewState`] (frame, visibility, insets, scroll state)
//!
//! Storing state by id lets deferred work (a frame re-sync scheduled for
//! after the current layout pass) read a host's geometry without holding a
//! reference to the host.
//!
//! # Key Types
//!
//! - [`Object`] - Base trait for registered types
//! - [`ObjectBase`] - RAII registration handle
//! - [`ViewId`] - Stable generational identifier
//! - [`ViewRegistry`] - Arena of view nodes
//! - [`SharedViewRegistry`] - Locked wrapper with a `destroyed` signal

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::geometry::{EdgeInsets, Rect, Size};
use crate::signal::Signal;

new_key_type! {
    /// A unique identifier for a view in the registry.
    ///
    /// Ids stay valid while the tree changes and become invalid once the view
    /// is destroyed. A destroyed id is never handed out again.
    pub struct ViewId;
}

impl ViewId {
    /// The raw `u64` form of this id, for logging and interop.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The view id is invalid or has been destroyed.
    InvalidViewId,
    /// Attempted to make a view its own parent or ancestor.
    CircularParentage,
    /// The view registry is not initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewId => write!(f, "Invalid or destroyed view ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set a view as its own parent or ancestor")
            }
            Self::RegistryNotInitialized => write!(f, "View registry not initialized"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for registry operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Scroll container metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    /// Extra padding the container adds around its content.
    pub content_inset: EdgeInsets,
    /// Total size of the scrollable content.
    pub content_size: Size,
    /// Whether the user can scroll.
    pub scroll_enabled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            content_inset: EdgeInsets::ZERO,
            content_size: Size::ZERO,
            scroll_enabled: true,
        }
    }
}

/// View state kept in the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Frame in the parent's coordinate space.
    pub frame: Rect,
    /// The view's own hidden flag, ignoring ancestors.
    pub hidden: bool,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
    /// Whether the view takes part in hit-testing.
    pub user_interaction_enabled: bool,
    /// Region obscured by system chrome.
    pub safe_area_insets: EdgeInsets,
    /// Present only for scroll containers.
    pub scroll: Option<ScrollState>,
    /// Whether the view is in a window.
    pub in_window: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            hidden: false,
            alpha: 1.0,
            user_interaction_enabled: true,
            safe_area_insets: EdgeInsets::ZERO,
            scroll: None,
            in_window: false,
        }
    }
}

struct ViewData {
    name: String,
    type_id: TypeId,
    type_name: &'static str,
    parent: Option<ViewId>,
    /// Index 0 is the back-most child.
    children: Vec<ViewId>,
    state: ViewState,
}

impl ViewData {
    fn new(type_id: TypeId, type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_id,
            type_name,
            parent: None,
            children: Vec::new(),
            state: ViewState::default(),
        }
    }
}

/// Arena of registered views and their relationships.
pub struct ViewRegistry {
    views: SlotMap<ViewId, ViewData>,
}

impl ViewRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            views: SlotMap::with_key(),
        }
    }

    /// Register a new view and return its id.
    pub fn register<T: Object + 'static>(&mut self) -> ViewId {
        let data = ViewData::new(TypeId::of::<T>(), std::any::type_name::<T>());
        let id = self.views.insert(data);
        tracing::trace!(target: "blankslate_core::object", ?id, type_name = std::any::type_name::<T>(), "registered view");
        id
    }

    /// Remove a view and all of its descendants.
    ///
    /// Returns every removed id, descendants first.
    #[tracing::instrument(skip(self), target = "blankslate_core::object", level = "trace")]
    pub fn destroy(&mut self, id: ViewId) -> ObjectResult<Vec<ViewId>> {
        let mut removed = self.collect_descendants(id)?;
        tracing::trace!(target: "blankslate_core::object", ?id, descendant_count = removed.len(), "destroying view tree");

        if let Some(parent_id) = self.views.get(id).and_then(|d| d.parent)
            && let Some(parent_data) = self.views.get_mut(parent_id)
        {
            parent_data.children.retain(|&child| child != id);
        }

        for &child_id in &removed {
            self.views.remove(child_id);
        }
        self.views.remove(id);
        removed.push(id);
        Ok(removed)
    }

    fn collect_descendants(&self, id: ViewId) -> ObjectResult<Vec<ViewId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(&self, id: ViewId, result: &mut Vec<ViewId>) -> ObjectResult<()> {
        let data = self.views.get(id).ok_or(ObjectError::InvalidViewId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if a view exists.
    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// Move `id` under `new_parent`, appending it in front of the existing
    /// children. `None` makes the view a root.
    pub fn set_parent(&mut self, id: ViewId, new_parent: Option<ViewId>) -> ObjectResult<()> {
        match new_parent {
            Some(parent_id) => {
                let len = self.children(parent_id)?.len();
                self.insert_child(parent_id, id, len)
            }
            None => self.remove_from_parent(id),
        }
    }

    /// Insert `child` into `parent`'s children at `index`.
    ///
    /// Index 0 places the child at the back. An index past the end appends.
    /// The child is detached from any previous parent first.
    pub fn insert_child(&mut self, parent: ViewId, child: ViewId, index: usize) -> ObjectResult<()> {
        if !self.views.contains_key(child) || !self.views.contains_key(parent) {
            return Err(ObjectError::InvalidViewId);
        }
        if self.is_ancestor_of(child, parent) {
            return Err(ObjectError::CircularParentage);
        }

        self.remove_from_parent(child)?;
        let parent_data = self.views.get_mut(parent).ok_or(ObjectError::InvalidViewId)?;
        let index = index.min(parent_data.children.len());
        parent_data.children.insert(index, child);
        if let Some(data) = self.views.get_mut(child) {
            data.parent = Some(parent);
        }
        Ok(())
    }

    /// Detach a view from its parent. No-op for root views.
    pub fn remove_from_parent(&mut self, id: ViewId) -> ObjectResult<()> {
        let data = self.views.get_mut(id).ok_or(ObjectError::InvalidViewId)?;
        if let Some(parent_id) = data.parent.take()
            && let Some(parent_data) = self.views.get_mut(parent_id)
        {
            parent_data.children.retain(|&child| child != id);
        }
        Ok(())
    }

    fn is_ancestor_of(&self, potential_ancestor: ViewId, id: ViewId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.views.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Get the parent of a view.
    pub fn parent(&self, id: ViewId) -> ObjectResult<Option<ViewId>> {
        self.views
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Get the children of a view, back to front.
    pub fn children(&self, id: ViewId) -> ObjectResult<&[ViewId]> {
        self.views
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Get the view's debug name.
    pub fn view_name(&self, id: ViewId) -> ObjectResult<&str> {
        self.views
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Set the view's debug name.
    pub fn set_view_name(&mut self, id: ViewId, name: String) -> ObjectResult<()> {
        self.views
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Get the concrete type id of a view.
    pub fn type_id(&self, id: ViewId) -> ObjectResult<TypeId> {
        self.views
            .get(id)
            .map(|d| d.type_id)
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Get the concrete type name of a view.
    pub fn type_name(&self, id: ViewId) -> ObjectResult<&'static str> {
        self.views
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Get a copy of the view's state.
    pub fn view_state(&self, id: ViewId) -> ObjectResult<ViewState> {
        self.views
            .get(id)
            .map(|d| d.state)
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Mutate the view's state in place.
    pub fn update_view_state<R>(&mut self, id: ViewId, f: impl FnOnce(&mut ViewState) -> R) -> ObjectResult<R> {
        self.views
            .get_mut(id)
            .map(|d| f(&mut d.state))
            .ok_or(ObjectError::InvalidViewId)
    }

    /// Whether the view and all of its ancestors are shown.
    pub fn is_effectively_visible(&self, id: ViewId) -> ObjectResult<bool> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            let data = self.views.get(current_id).ok_or(ObjectError::InvalidViewId)?;
            if data.state.hidden {
                return Ok(false);
            }
            current = data.parent;
        }
        Ok(true)
    }

    /// Total number of registered views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Iterate views that have no parent.
    pub fn root_views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }

    // =========================================================================
    // Z-Order
    // =========================================================================

    /// Index of the view among its siblings. 0 is the back.
    ///
    /// Returns `None` for root views.
    pub fn sibling_index(&self, id: ViewId) -> ObjectResult<Option<usize>> {
        let data = self.views.get(id).ok_or(ObjectError::InvalidViewId)?;
        Ok(data.parent.and_then(|parent_id| {
            self.views
                .get(parent_id)
                .and_then(|p| p.children.iter().position(|&c| c == id))
        }))
    }

    /// Move the view in front of its siblings.
    pub fn raise(&mut self, id: ViewId) -> ObjectResult<()> {
        if let Some(parent_id) = self.parent(id)? {
            let parent_data = self.views.get_mut(parent_id).ok_or(ObjectError::InvalidViewId)?;
            parent_data.children.retain(|&child| child != id);
            parent_data.children.push(id);
        }
        Ok(())
    }

    /// Move the view behind its siblings.
    pub fn lower(&mut self, id: ViewId) -> ObjectResult<()> {
        if let Some(parent_id) = self.parent(id)? {
            let parent_data = self.views.get_mut(parent_id).ok_or(ObjectError::InvalidViewId)?;
            parent_data.children.retain(|&child| child != id);
            parent_data.children.insert(0, id);
        }
        Ok(())
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// All ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: ViewId) -> ObjectResult<Vec<ViewId>> {
        let mut result = Vec::new();
        let mut current = self.parent(id)?;
        while let Some(parent_id) = current {
            result.push(parent_id);
            current = self.views.get(parent_id).and_then(|d| d.parent);
        }
        Ok(result)
    }

    /// The view followed by its descendants in depth-first pre-order.
    pub fn depth_first_preorder(&self, id: ViewId) -> ObjectResult<Vec<ViewId>> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let data = self.views.get(current).ok_or(ObjectError::InvalidViewId)?;
            result.push(current);
            stack.extend(data.children.iter().rev().copied());
        }
        Ok(result)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ViewRegistry`].
///
/// Also owns the `destroyed` signal, emitted once per removed id after the
/// write lock has been released, so slots may freely call back into the
/// registry.
pub struct SharedViewRegistry {
    inner: RwLock<ViewRegistry>,
    destroyed: Signal<ViewId>,
}

impl SharedViewRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ViewRegistry::new()),
            destroyed: Signal::new(),
        }
    }

    /// Register a new view.
    pub fn register<T: Object + 'static>(&self) -> ViewId {
        self.inner.write().register::<T>()
    }

    /// Destroy a view and its descendants, then emit `destroyed` for each.
    pub fn destroy(&self, id: ViewId) -> ObjectResult<()> {
        let removed = self.inner.write().destroy(id)?;
        for removed_id in removed {
            self.destroyed.emit(removed_id);
        }
        Ok(())
    }

    /// Emitted after a view leaves the registry.
    pub fn destroyed(&self) -> &Signal<ViewId> {
        &self.destroyed
    }

    /// Check if a view exists.
    pub fn contains(&self, id: ViewId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of a view (appending it in front).
    pub fn set_parent(&self, id: ViewId, parent: Option<ViewId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Insert a child at a z-index.
    pub fn insert_child(&self, parent: ViewId, child: ViewId, index: usize) -> ObjectResult<()> {
        self.inner.write().insert_child(parent, child, index)
    }

    /// Detach a view from its parent.
    pub fn remove_from_parent(&self, id: ViewId) -> ObjectResult<()> {
        self.inner.write().remove_from_parent(id)
    }

    /// Get the parent of a view.
    pub fn parent(&self, id: ViewId) -> ObjectResult<Option<ViewId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of a view (cloned).
    pub fn children(&self, id: ViewId) -> ObjectResult<Vec<ViewId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the view's debug name.
    pub fn view_name(&self, id: ViewId) -> ObjectResult<String> {
        self.inner.read().view_name(id).map(|s| s.to_string())
    }

    /// Set the view's debug name.
    pub fn set_view_name(&self, id: ViewId, name: String) -> ObjectResult<()> {
        self.inner.write().set_view_name(id, name)
    }

    /// Get the concrete type name of a view.
    pub fn type_name(&self, id: ViewId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Get a copy of the view's state.
    pub fn view_state(&self, id: ViewId) -> ObjectResult<ViewState> {
        self.inner.read().view_state(id)
    }

    /// Mutate the view's state in place.
    pub fn update_view_state<R>(&self, id: ViewId, f: impl FnOnce(&mut ViewState) -> R) -> ObjectResult<R> {
        self.inner.write().update_view_state(id, f)
    }

    /// Index of the view among its siblings.
    pub fn sibling_index(&self, id: ViewId) -> ObjectResult<Option<usize>> {
        self.inner.read().sibling_index(id)
    }

    /// Move the view in front of its siblings.
    pub fn raise(&self, id: ViewId) -> ObjectResult<()> {
        self.inner.write().raise(id)
    }

    /// Move the view behind its siblings.
    pub fn lower(&self, id: ViewId) -> ObjectResult<()> {
        self.inner.write().lower(id)
    }

    /// Access the registry with a read lock for compound queries.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for compound updates.
    ///
    /// Views destroyed through this handle do not emit `destroyed`; use
    /// [`SharedViewRegistry::destroy`] for that.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ViewRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<SharedViewRegistry> = OnceLock::new();

/// Initialize the global view registry. Safe to call more than once.
pub fn init_global_registry() {
    GLOBAL_REGISTRY.get_or_init(SharedViewRegistry::new);
}

/// Get the global view registry.
///
/// Returns an error if [`init_global_registry`] has not run yet.
pub fn global_registry() -> ObjectResult<&'static SharedViewRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// Base trait for registered types.
pub trait Object: Any + Send + Sync {
    /// This object's registry id.
    fn object_id(&self) -> ViewId;
}

/// Registration handle embedded in every view.
///
/// Registers on creation and destroys the registry entry (and any remaining
/// descendants) on drop.
pub struct ObjectBase {
    id: ViewId,
}

impl ObjectBase {
    /// Register a new object of type `T` in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("View registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// The registry id.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Get the debug name.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.view_name(self.id))
            .unwrap_or_default()
    }

    /// Set the debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_view_name(self.id, name.into());
        }
    }

    /// Get the parent id.
    pub fn parent(&self) -> Option<ViewId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Get the child ids, back to front.
    pub fn children(&self) -> Vec<ViewId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Index among siblings, 0 being the back.
    pub fn sibling_index(&self) -> Option<usize> {
        global_registry()
            .and_then(|r| r.sibling_index(self.id))
            .ok()
            .flatten()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

static_assertions::assert_impl_all!(SharedViewRegistry: Send, Sync);
static_assertions::assert_impl_all!(ViewId: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct TestView {
        base: ObjectBase,
    }

    impl TestView {
        fn new(name: &str) -> Self {
            let view = Self {
                base: ObjectBase::new::<Self>(),
            };
            view.base.set_name(name);
            view
        }
    }

    impl Object for TestView {
        fn object_id(&self) -> ViewId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_view_creation() {
        setup();
        let view = TestView::new("root");
        let registry = global_registry().unwrap();
        assert!(registry.contains(view.object_id()));
        assert_eq!(view.base.name(), "root");
        assert!(registry.type_name(view.object_id()).unwrap().ends_with("TestView"));
    }

    #[test]
    fn test_drop_unregisters() {
        setup();
        let id = {
            let view = TestView::new("temp");
            view.object_id()
        };
        assert!(!global_registry().unwrap().contains(id));
    }

    #[test]
    fn test_insert_child_z_order() {
        setup();
        let registry = global_registry().unwrap();
        let parent = TestView::new("parent");
        let a = TestView::new("a");
        let b = TestView::new("b");
        let c = TestView::new("c");

        registry.set_parent(a.object_id(), Some(parent.object_id())).unwrap();
        registry.set_parent(b.object_id(), Some(parent.object_id())).unwrap();
        registry.insert_child(parent.object_id(), c.object_id(), 0).unwrap();

        assert_eq!(
            parent.base.children(),
            vec![c.object_id(), a.object_id(), b.object_id()]
        );
        assert_eq!(c.base.sibling_index(), Some(0));
    }

    #[test]
    fn test_insert_child_out_of_range_appends() {
        setup();
        let registry = global_registry().unwrap();
        let parent = TestView::new("parent");
        let a = TestView::new("a");
        let b = TestView::new("b");

        registry.set_parent(a.object_id(), Some(parent.object_id())).unwrap();
        registry.insert_child(parent.object_id(), b.object_id(), 99).unwrap();
        assert_eq!(b.base.sibling_index(), Some(1));
    }

    #[test]
    fn test_reparent_detaches_from_old_parent() {
        setup();
        let registry = global_registry().unwrap();
        let first = TestView::new("first");
        let second = TestView::new("second");
        let child = TestView::new("child");

        registry.set_parent(child.object_id(), Some(first.object_id())).unwrap();
        registry.set_parent(child.object_id(), Some(second.object_id())).unwrap();

        assert!(first.base.children().is_empty());
        assert_eq!(second.base.children(), vec![child.object_id()]);
        assert_eq!(child.base.parent(), Some(second.object_id()));
    }

    #[test]
    fn test_circular_parentage_rejected() {
        setup();
        let registry = global_registry().unwrap();
        let outer = TestView::new("outer");
        let inner = TestView::new("inner");

        registry.set_parent(inner.object_id(), Some(outer.object_id())).unwrap();
        let result = registry.set_parent(outer.object_id(), Some(inner.object_id()));
        assert_eq!(result, Err(ObjectError::CircularParentage));
    }

    #[test]
    fn test_cascade_destroy_emits_destroyed() {
        setup();
        let registry = global_registry().unwrap();
        let parent_id = registry.register::<TestView>();
        let child_id = registry.register::<TestView>();
        let grandchild_id = registry.register::<TestView>();
        registry.set_parent(child_id, Some(parent_id)).unwrap();
        registry.set_parent(grandchild_id, Some(child_id)).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let watched = [parent_id, child_id, grandchild_id];
        let _guard = registry.destroyed().connect_scoped(move |id| {
            if watched.contains(id) {
                sink.lock().push(*id);
            }
        });

        registry.destroy(parent_id).unwrap();

        assert!(!registry.contains(parent_id));
        assert!(!registry.contains(child_id));
        assert!(!registry.contains(grandchild_id));
        assert_eq!(*seen.lock(), vec![grandchild_id, child_id, parent_id]);
    }

    #[test]
    fn test_view_state_defaults_and_updates() {
        setup();
        let registry = global_registry().unwrap();
        let view = TestView::new("stateful");

        let state = registry.view_state(view.object_id()).unwrap();
        assert!(!state.hidden);
        assert_eq!(state.alpha, 1.0);
        assert!(state.scroll.is_none());

        registry
            .update_view_state(view.object_id(), |s| {
                s.frame = Rect::new(0.0, 0.0, 320.0, 480.0);
                s.hidden = true;
            })
            .unwrap();
        let state = registry.view_state(view.object_id()).unwrap();
        assert_eq!(state.frame.width(), 320.0);
        assert!(state.hidden);
    }

    #[test]
    fn test_effective_visibility_follows_ancestors() {
        setup();
        let registry = global_registry().unwrap();
        let parent = TestView::new("parent");
        let child = TestView::new("child");
        registry.set_parent(child.object_id(), Some(parent.object_id())).unwrap();

        registry
            .update_view_state(parent.object_id(), |s| s.hidden = true)
            .unwrap();
        assert_eq!(registry.with_read(|r| r.is_effectively_visible(child.object_id())), Ok(false));
    }

    #[test]
    fn test_raise_and_lower() {
        setup();
        let registry = global_registry().unwrap();
        let parent = TestView::new("parent");
        let a = TestView::new("a");
        let b = TestView::new("b");
        registry.set_parent(a.object_id(), Some(parent.object_id())).unwrap();
        registry.set_parent(b.object_id(), Some(parent.object_id())).unwrap();

        registry.lower(b.object_id()).unwrap();
        assert_eq!(parent.base.children(), vec![b.object_id(), a.object_id()]);
        registry.raise(b.object_id()).unwrap();
        assert_eq!(parent.base.children(), vec![a.object_id(), b.object_id()]);
    }

    #[test]
    fn test_preorder_traversal() {
        setup();
        let registry = global_registry().unwrap();
        let root = TestView::new("root");
        let a = TestView::new("a");
        let a1 = TestView::new("a1");
        let b = TestView::new("b");
        registry.set_parent(a.object_id(), Some(root.object_id())).unwrap();
        registry.set_parent(a1.object_id(), Some(a.object_id())).unwrap();
        registry.set_parent(b.object_id(), Some(root.object_id())).unwrap();

        let order = registry.with_read(|r| r.depth_first_preorder(root.object_id())).unwrap();
        assert_eq!(
            order,
            vec![root.object_id(), a.object_id(), a1.object_id(), b.object_id()]
        );
        assert_eq!(
            registry.with_read(|r| r.ancestors(a1.object_id())).unwrap(),
            vec![a.object_id(), root.object_id()]
        );
    }
}
