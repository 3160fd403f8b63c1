//! Process-wide interception table.
//!
//! An entry point is intercepted per concrete host type, not per instance:
//! the first data source attached to any `TableView` intercepts
//! `reload_data` for every `TableView`. Records are never removed.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::LazyLock;

use blankslate_core::{debug_assert_main_thread, global_registry};
use parking_lot::Mutex;

use super::traits::{ListHost, ReloadEntry};
use crate::error::{BlankSlateError, BlankSlateResult};

/// One intercepted (host type, entry) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRecord {
    pub type_name: &'static str,
    pub entry: ReloadEntry,
    /// Position in install order, starting at 0.
    pub order: usize,
    /// How many times the wrapped native entry has run since install.
    pub dispatch_count: usize,
}

type HookKey = (TypeId, ReloadEntry);

static HOOKS: LazyLock<Mutex<HashMap<HookKey, HookRecord>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn host_type_id(host: &dyn ListHost) -> TypeId {
    let any: &dyn Any = host;
    any.type_id()
}

fn host_type_name(host: &dyn ListHost) -> &'static str {
    global_registry()
        .and_then(|registry| registry.type_name(host.object_id()))
        .unwrap_or("<unregistered>")
}

/// Intercept `entry` for the host's type unless it already is.
///
/// Returns whether a new interception was installed. Fails when the host
/// does not implement `entry`.
pub fn install_if_needed(host: &dyn ListHost, entry: ReloadEntry) -> BlankSlateResult<bool> {
    debug_assert_main_thread!("reload interception must be installed on the main thread");

    let type_name = host_type_name(host);
    if !host.responds_to(entry) {
        return Err(BlankSlateError::UnsupportedHost {
            host_type: type_name,
            entry,
        });
    }

    let mut hooks = HOOKS.lock();
    let key = (host_type_id(host), entry);
    if hooks.contains_key(&key) {
        return Ok(false);
    }

    let order = hooks.len();
    hooks.insert(
        key,
        HookRecord {
            type_name,
            entry,
            order,
            dispatch_count: 0,
        },
    );
    tracing::debug!(target: "blankslate::hooks", host_type = type_name, %entry, order, "reload entry intercepted");
    Ok(true)
}

/// Whether `entry` is intercepted for host type `H`.
pub fn is_installed<H: ListHost>(entry: ReloadEntry) -> bool {
    HOOKS.lock().contains_key(&(TypeId::of::<H>(), entry))
}

/// The record for `entry` on host type `H`.
pub fn record_for<H: ListHost>(entry: ReloadEntry) -> Option<HookRecord> {
    HOOKS.lock().get(&(TypeId::of::<H>(), entry)).cloned()
}

/// Number of intercepted (host type, entry) pairs.
pub fn installed_count() -> usize {
    HOOKS.lock().len()
}

/// Every record, in install order.
pub fn records() -> Vec<HookRecord> {
    let mut records: Vec<HookRecord> = HOOKS.lock().values().cloned().collect();
    records.sort_by_key(|record| record.order);
    records
}

/// Run the host's native `entry`, then reconcile its overlay if `entry` is
/// intercepted for the host's type.
///
/// Host types call this from their public reload methods.
pub fn dispatch(host: &mut dyn ListHost, entry: ReloadEntry) {
    host.perform_native(entry);

    let intercepted = {
        let mut hooks = HOOKS.lock();
        match hooks.get_mut(&(host_type_id(host), entry)) {
            Some(record) => {
                record.dispatch_count += 1;
                true
            }
            None => false,
        }
    };

    if intercepted {
        tracing::trace!(target: "blankslate::hooks", host = ?host.object_id(), %entry, "intercepted entry ran");
        crate::binding::reconcile(host);
    }
}
