//! The per-host API.

use std::sync::{Arc, Weak};
use std::time::Duration;

use blankslate_core::{Object, Point, ViewId};

use super::reconcile::{dismiss, is_visible, reconcile};
use super::state;
use crate::data_source::DataSource;
use crate::delegate::Delegate;
use crate::gesture::GestureRef;
use crate::host::{ListHost, ReloadEntry, dispatch, hooks};
use crate::model::DataLoadStatus;
use crate::overlay::{BlankSlateView, HitTarget};
use crate::view::{PlainView, View};

/// Adds [`bs`](BlankSlateExt::bs) to every list host.
///
/// ```ignore
/// let inbox = Arc::new(InboxPlaceholder::default());
/// let mut table = TableView::new();
/// table.bs().set_data_source_and_delegate(&inbox);
/// table.reload_data(); // shows the overlay while the table is empty
/// ```
pub trait BlankSlateExt {
    /// The overlay binding for this host.
    fn bs(&mut self) -> BlankSlate<'_>;
}

impl<H: ListHost> BlankSlateExt for H {
    fn bs(&mut self) -> BlankSlate<'_> {
        BlankSlate { host: self }
    }
}

impl BlankSlateExt for dyn ListHost {
    fn bs(&mut self) -> BlankSlate<'_> {
        BlankSlate { host: self }
    }
}

/// Overlay binding for one host, returned by [`BlankSlateExt::bs`].
pub struct BlankSlate<'a> {
    host: &'a mut dyn ListHost,
}

impl BlankSlate<'_> {
    fn id(&self) -> ViewId {
        self.host.object_id()
    }

    fn intercept_reloads(&self) {
        for &entry in self.host.intercepted_entries() {
            if let Err(err) = hooks::install_if_needed(&*self.host, entry) {
                tracing::error!(target: "blankslate::hooks", %err, "cannot intercept host reloads");
                panic!("{err}");
            }
        }
    }

    // =========================================================================
    // Data source and delegate
    // =========================================================================

    /// The attached data source, if it is still alive.
    pub fn data_source(&self) -> Option<Arc<dyn DataSource>> {
        state::data_source(self.id())
    }

    /// Attach `data_source` (held weakly) and intercept the host's reload
    /// entry points. When no data source was attached before, any stale
    /// overlay is dismissed first.
    ///
    /// # Panics
    ///
    /// Panics if the host lists an intercepted entry it does not implement.
    pub fn set_data_source<D: DataSource + 'static>(&mut self, data_source: &Arc<D>) {
        let id = self.id();
        let had_source = state::data_source(id).is_some();
        let weak = Arc::downgrade(data_source);
        let weak: Weak<dyn DataSource> = weak;
        state::with_state(id, |s| s.data_source = Some(weak));
        tracing::debug!(target: "blankslate::binding", host = ?id, had_source, "data source attached");

        if !had_source {
            dismiss(&*self.host);
        }
        self.intercept_reloads();
    }

    /// Detach the data source and dismiss.
    pub fn clear_data_source(&mut self) {
        let id = self.id();
        state::with_state(id, |s| s.data_source = None);
        tracing::debug!(target: "blankslate::binding", host = ?id, "data source cleared");
        dismiss(&*self.host);
    }

    /// The attached delegate, if it is still alive.
    pub fn delegate(&self) -> Option<Arc<dyn Delegate>> {
        state::delegate(self.id())
    }

    /// Attach `delegate` (held weakly).
    pub fn set_delegate<D: Delegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak = Arc::downgrade(delegate);
        let weak: Weak<dyn Delegate> = weak;
        state::with_state(self.id(), |s| s.delegate = Some(weak));
    }

    /// Dismiss while the delegate is still attached, then detach it. The
    /// departing delegate sees the disappear callbacks and decides whether
    /// scrolling comes back.
    pub fn clear_delegate(&mut self) {
        dismiss(&*self.host);
        state::with_state(self.id(), |s| s.delegate = None);
        tracing::debug!(target: "blankslate::binding", host = ?self.id(), "delegate cleared");
    }

    /// Attach one object as both data source and delegate.
    pub fn set_data_source_and_delegate<T>(&mut self, both: &Arc<T>)
    where
        T: DataSource + Delegate + 'static,
    {
        self.set_delegate(both);
        self.set_data_source(both);
    }

    // =========================================================================
    // Data-load status
    // =========================================================================

    pub fn data_load_status(&self) -> Option<DataLoadStatus> {
        state::data_load_status(self.id())
    }

    /// Record the loading state. `Loading` (or clearing the status)
    /// reconciles the overlay only; `Success` and `Failure` run the host's
    /// full reload, which reconciles through interception. Hosts with no
    /// reload entry reconcile directly.
    pub fn set_data_load_status(&mut self, status: Option<DataLoadStatus>) {
        let id = self.id();
        state::with_state(id, |s| s.data_load_status = status);
        tracing::debug!(target: "blankslate::binding", host = ?id, ?status, "data load status set");

        match status {
            None | Some(DataLoadStatus::Loading) => reconcile(&*self.host),
            Some(DataLoadStatus::Success | DataLoadStatus::Failure) => {
                if self.host.responds_to(ReloadEntry::ReloadData) {
                    dispatch(&mut *self.host, ReloadEntry::ReloadData);
                } else {
                    reconcile(&*self.host);
                }
            }
        }
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Reconcile the overlay now.
    pub fn reload(&mut self) {
        reconcile(&*self.host);
    }

    /// Remove the overlay.
    pub fn dismiss(&mut self) {
        dismiss(&*self.host);
    }

    /// Whether an overlay is attached and not hidden.
    pub fn is_visible(&self) -> bool {
        is_visible(&*self.host)
    }

    /// Id of the overlay's content wrapper.
    pub fn content_view(&self) -> Option<ViewId> {
        state::peek_view(self.id(), |view| view.content_view().object_id())
    }

    /// Run `f` against the overlay's content wrapper. `f` may call back into
    /// the binding.
    pub fn with_content_view<R>(&mut self, f: impl FnOnce(&mut PlainView) -> R) -> Option<R> {
        let id = self.id();
        let mut view = state::take_view(id)?;
        let result = f(view.content_view_mut());
        state::put_view(id, view);
        Some(result)
    }

    /// Read the attached overlay. `f` must not call back into the binding.
    pub fn with_overlay<R>(&self, f: impl FnOnce(&BlankSlateView) -> R) -> Option<R> {
        state::peek_view(self.id(), f)
    }

    /// Advance the overlay's fade and image animations by `dt`. Returns
    /// whether anything is still animating.
    pub fn advance_animations(&mut self, dt: Duration) -> bool {
        let id = self.id();
        let Some(mut view) = state::take_view(id) else {
            return false;
        };
        let animating = view.advance_animations(dt);
        state::put_view(id, view);
        animating
    }

    /// Route a tap at `point` (in the host's coordinates) through the
    /// overlay. Returns what it landed on.
    pub fn handle_tap(&mut self, point: Point) -> Option<HitTarget> {
        let id = self.id();
        let view = state::take_view(id)?;
        let overlay = view.object_id();
        let target = view.hit_test(view.frame().to_local(point));
        let button = view.button().map(|button| button.object_id());
        if let (Some(HitTarget::Control(control)), Some(button_view)) = (target, view.button())
            && Some(control) == button
        {
            button_view.tap();
        }
        state::put_view(id, view);

        let delegate = state::delegate(id);
        let host = &*self.host;
        match (target, delegate.as_deref()) {
            (Some(HitTarget::Control(control)), Some(d)) if Some(control) == button => {
                tracing::debug!(target: "blankslate::binding", host = ?id, "overlay button tapped");
                d.did_tap_button(host, control);
            }
            (Some(HitTarget::ContentView(_) | HitTarget::CustomView(_)), Some(d))
                if d.should_allow_touch(host) =>
            {
                tracing::debug!(target: "blankslate::binding", host = ?id, "overlay tapped");
                d.did_tap_view(host, overlay);
            }
            _ => {}
        }
        target
    }

    /// Gesture arbitration. The overlay's own tap recognizer always runs
    /// alongside others; any other pair is up to the delegate's
    /// [`GestureDelegate`](crate::gesture::GestureDelegate), defaulting to
    /// `false`.
    pub fn should_recognize_simultaneously(&self, gesture: &GestureRef, other: &GestureRef) -> bool {
        let own = state::peek_view(self.id(), |view| *view.tap_gesture());
        if own.is_some_and(|tap| tap == *gesture || tap == *other) {
            return true;
        }
        self.delegate().is_some_and(|d| {
            d.as_gesture_delegate()
                .is_some_and(|g| g.should_recognize_simultaneously(gesture, other))
        })
    }

    /// The host moved to a window (or left one). Re-frames the overlay and
    /// restarts its fade.
    pub fn window_did_change(&mut self, in_window: bool) {
        let id = self.id();
        self.host.view_base().set_in_window(in_window);
        let Some(mut view) = state::take_view(id) else {
            return;
        };
        if let Err(err) = view.did_move_to_window(id, in_window) {
            tracing::warn!(target: "blankslate::binding", host = ?id, %err, "overlay frame sync skipped");
        }
        state::put_view(id, view);
        state::resync_later(id);
    }
}
