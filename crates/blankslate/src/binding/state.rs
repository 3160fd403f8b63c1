//! Per-host overlay state, kept in a side table keyed by the host's id.
//!
//! The table never owns a host. Entries are purged when the registry reports
//! the host destroyed. Data sources and delegates are held weakly.
//!
//! An overlay view must never be dropped while the table lock is held:
//! dropping it destroys registry entries, and the `destroyed` signal handler
//! takes the same lock. Views are moved out with [`take_view`] and back with
//! [`put_view`] instead.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, Weak};

use blankslate_core::{Signal, ViewId, global_registry, post_task};
use parking_lot::Mutex;

use crate::data_source::DataSource;
use crate::delegate::Delegate;
use crate::model::DataLoadStatus;
use crate::overlay::BlankSlateView;

#[derive(Default)]
pub(crate) struct OverlayState {
    pub(crate) data_source: Option<Weak<dyn DataSource>>,
    pub(crate) delegate: Option<Weak<dyn Delegate>>,
    pub(crate) data_load_status: Option<DataLoadStatus>,
    pub(crate) view: Option<BlankSlateView>,
}

fn table() -> &'static Mutex<HashMap<ViewId, OverlayState>> {
    static TABLE: OnceLock<Mutex<HashMap<ViewId, OverlayState>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        match global_registry() {
            Ok(registry) => {
                registry.destroyed().connect(|id| purge(*id));
            }
            Err(err) => {
                tracing::warn!(target: "blankslate::binding", %err, "host destruction is not observed");
            }
        }
        orientation_changed().connect(|_| resync_all());
        Mutex::new(HashMap::new())
    })
}

/// Process-wide notification that the device orientation changed. Emitting
/// it re-frames every attached overlay, now and again after the current
/// layout pass.
pub fn orientation_changed() -> &'static Signal<()> {
    static ORIENTATION_CHANGED: OnceLock<Signal<()>> = OnceLock::new();
    ORIENTATION_CHANGED.get_or_init(Signal::new)
}

fn purge(host: ViewId) {
    let removed = table().lock().remove(&host);
    if removed.is_some() {
        tracing::trace!(target: "blankslate::binding", ?host, "overlay state purged");
    }
}

/// Number of hosts with overlay state.
pub fn tracked_host_count() -> usize {
    table().lock().len()
}

pub(crate) fn with_state<R>(host: ViewId, f: impl FnOnce(&mut OverlayState) -> R) -> R {
    f(table().lock().entry(host).or_default())
}

pub(crate) fn data_source(host: ViewId) -> Option<Arc<dyn DataSource>> {
    let mut table = table().lock();
    let state = table.get_mut(&host)?;
    let upgraded = state.data_source.as_ref()?.upgrade();
    if upgraded.is_none() {
        tracing::debug!(target: "blankslate::binding", ?host, "data source released; forgetting it");
        state.data_source = None;
    }
    upgraded
}

pub(crate) fn delegate(host: ViewId) -> Option<Arc<dyn Delegate>> {
    let mut table = table().lock();
    let state = table.get_mut(&host)?;
    let upgraded = state.delegate.as_ref()?.upgrade();
    if upgraded.is_none() {
        tracing::debug!(target: "blankslate::binding", ?host, "delegate released; forgetting it");
        state.delegate = None;
    }
    upgraded
}

pub(crate) fn data_load_status(host: ViewId) -> Option<DataLoadStatus> {
    table().lock().get(&host).and_then(|state| state.data_load_status)
}

pub(crate) fn take_view(host: ViewId) -> Option<BlankSlateView> {
    table()
        .lock()
        .get_mut(&host)
        .and_then(|state| state.view.take())
}

/// Store `view` for `host`. If the host's state is gone, the view is dropped
/// after the lock is released.
pub(crate) fn put_view(host: ViewId, view: BlankSlateView) {
    let leftover = {
        let mut table = table().lock();
        match table.get_mut(&host) {
            Some(state) => state.view.replace(view),
            None => Some(view),
        }
    };
    drop(leftover);
}

/// Run `f` against the attached view without taking it out. `f` must not
/// call back into the binding layer.
pub(crate) fn peek_view<R>(host: ViewId, f: impl FnOnce(&BlankSlateView) -> R) -> Option<R> {
    table()
        .lock()
        .get(&host)
        .and_then(|state| state.view.as_ref())
        .map(f)
}

/// Re-frame the overlay attached to `host`, if any.
pub(crate) fn resync(host: ViewId) {
    let Some(mut view) = take_view(host) else {
        return;
    };
    if let Err(err) = view.sync_frame(host) {
        tracing::warn!(target: "blankslate::binding", ?host, %err, "overlay frame sync skipped");
    }
    put_view(host, view);
}

/// Re-frame once more after the current layout pass, when transient insets
/// have settled.
pub(crate) fn resync_later(host: ViewId) {
    post_task(move || resync(host));
}

/// Re-frame now, and once more after the current layout pass.
pub(crate) fn resync_now_and_later(host: ViewId) {
    resync(host);
    resync_later(host);
}

fn resync_all() {
    let hosts: Vec<ViewId> = table()
        .lock()
        .iter()
        .filter(|(_, state)| state.view.is_some())
        .map(|(host, _)| *host)
        .collect();
    tracing::debug!(target: "blankslate::binding", hosts = hosts.len(), "orientation changed");
    for host in hosts {
        resync_now_and_later(host);
    }
}
