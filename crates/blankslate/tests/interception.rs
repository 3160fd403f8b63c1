//! Integration tests for reload interception and side-table cleanup.

mod common;

use std::sync::Arc;

use blankslate::binding::tracked_host_count;
use blankslate::host::{
    CollectionView, ItemSource, ListHost, ReloadEntry, TableView, dispatch, hooks,
};
use blankslate::view::{View, ViewBase};
use blankslate::{BlankSlateExt, BlankSlateError};
use blankslate_core::{Object, Rect, Size, ViewId};
use common::{Placeholder, Rows, setup, table_with};

/// A host type per `N`, so each test owns its interception records.
struct Feed<const N: usize> {
    base: ViewBase,
    rows: Arc<Rows>,
    supported: &'static [ReloadEntry],
    intercepted: &'static [ReloadEntry],
    native_runs: usize,
}

impl<const N: usize> Feed<N> {
    fn new(rows: &Arc<Rows>) -> Self {
        Self::with_entries(rows, &[ReloadEntry::ReloadData], &[ReloadEntry::ReloadData])
    }

    fn with_entries(
        rows: &Arc<Rows>,
        supported: &'static [ReloadEntry],
        intercepted: &'static [ReloadEntry],
    ) -> Self {
        Self {
            base: ViewBase::new::<Self>(),
            rows: rows.clone(),
            supported,
            intercepted,
            native_runs: 0,
        }
    }

    fn reload(&mut self) {
        dispatch(self, ReloadEntry::ReloadData);
    }
}

impl<const N: usize> Object for Feed<N> {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl<const N: usize> View for Feed<N> {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }
}

impl<const N: usize> ListHost for Feed<N> {
    fn item_source(&self) -> Option<Arc<dyn ItemSource>> {
        Some(self.rows.clone() as Arc<dyn ItemSource>)
    }

    fn responds_to(&self, entry: ReloadEntry) -> bool {
        self.supported.contains(&entry)
    }

    fn intercepted_entries(&self) -> &'static [ReloadEntry] {
        self.intercepted
    }

    fn perform_native(&mut self, _entry: ReloadEntry) {
        self.native_runs += 1;
    }
}

#[test]
fn test_interception_installs_once_per_type() {
    let _guard = setup();
    let rows = Rows::new(0);
    let mut first = Feed::<1>::new(&rows);
    let mut second = Feed::<1>::new(&rows);
    let placeholder = Placeholder::titled("Empty");

    first.reload();
    assert!(!hooks::is_installed::<Feed<1>>(ReloadEntry::ReloadData));
    assert!(!first.bs().is_visible(), "not intercepted yet");

    let installed = hooks::installed_count();
    first.bs().set_data_source(&placeholder);
    second.bs().set_data_source(&placeholder);
    first.bs().set_data_source(&placeholder);
    assert_eq!(hooks::installed_count(), installed + 1);

    let record = hooks::record_for::<Feed<1>>(ReloadEntry::ReloadData).expect("installed");
    assert_eq!(record.order, installed);
    assert!(record.type_name.contains("Feed"));
    assert_eq!(
        hooks::records()
            .iter()
            .filter(|r| r.type_name == record.type_name)
            .count(),
        1
    );

    first.reload();
    second.reload();
    assert_eq!(first.native_runs, 2, "native entry still runs");
    assert_eq!(second.native_runs, 1);
    assert!(first.bs().is_visible());
    assert!(second.bs().is_visible());

    let record = hooks::record_for::<Feed<1>>(ReloadEntry::ReloadData).expect("installed");
    assert_eq!(record.dispatch_count, 2);
}

#[test]
fn test_interception_is_per_type() {
    let _guard = setup();
    let rows = Rows::new(0);
    let mut intercepted = Feed::<2>::new(&rows);
    let mut other = Feed::<3>::new(&rows);
    let placeholder = Placeholder::titled("Empty");

    intercepted.bs().set_data_source(&placeholder);
    assert!(hooks::is_installed::<Feed<2>>(ReloadEntry::ReloadData));
    assert!(!hooks::is_installed::<Feed<3>>(ReloadEntry::ReloadData));

    // Attaching state without a data source on `other` does not install.
    other.bs().set_data_load_status(None);
    other.reload();
    assert!(!hooks::is_installed::<Feed<3>>(ReloadEntry::ReloadData));
    assert_eq!(other.native_runs, 1);
}

#[test]
#[should_panic(expected = "does not implement end_updates")]
fn test_intercepting_missing_entry_panics() {
    let _guard = setup();
    let rows = Rows::new(0);
    let mut broken = Feed::<4>::with_entries(
        &rows,
        &[ReloadEntry::ReloadData],
        &[ReloadEntry::ReloadData, ReloadEntry::EndUpdates],
    );
    let placeholder = Placeholder::titled("Empty");
    broken.bs().set_data_source(&placeholder);
}

#[test]
fn test_install_reports_unsupported_entry() {
    let _guard = setup();
    let rows = Rows::new(0);
    let feed = Feed::<5>::new(&rows);

    let err = hooks::install_if_needed(&feed, ReloadEntry::EndUpdates).unwrap_err();
    assert!(matches!(
        err,
        BlankSlateError::UnsupportedHost {
            entry: ReloadEntry::EndUpdates,
            ..
        }
    ));
    assert_eq!(hooks::install_if_needed(&feed, ReloadEntry::ReloadData).ok(), Some(true));
    assert_eq!(hooks::install_if_needed(&feed, ReloadEntry::ReloadData).ok(), Some(false));
}

#[test]
fn test_table_end_updates_reconciles() {
    let _guard = setup();
    let rows = Rows::new(2);
    let mut table = table_with(&rows);
    let placeholder = Placeholder::titled("Empty");

    table.bs().set_data_source(&placeholder);
    assert!(hooks::is_installed::<TableView>(ReloadEntry::ReloadData));
    assert!(hooks::is_installed::<TableView>(ReloadEntry::EndUpdates));

    table.reload_data();
    assert!(!table.bs().is_visible());

    table.begin_updates();
    rows.set(0);
    table.end_updates();
    assert!(!table.is_updating());
    assert!(table.bs().is_visible());
}

#[test]
fn test_collection_view_intercepts_reload_only() {
    let _guard = setup();
    let rows = Rows::new(0);
    let mut grid = CollectionView::new(Size::new(100.0, 100.0));
    grid.view_base().set_frame(Rect::new(0.0, 0.0, 300.0, 400.0));
    grid.set_item_source(Some(rows.clone() as Arc<dyn ItemSource>));
    let placeholder = Placeholder::titled("No photos");

    grid.bs().set_data_source(&placeholder);
    assert!(hooks::is_installed::<CollectionView>(ReloadEntry::ReloadData));
    assert!(!hooks::is_installed::<CollectionView>(ReloadEntry::EndUpdates));
    assert!(!grid.responds_to(ReloadEntry::EndUpdates));

    grid.reload_data();
    assert!(grid.bs().is_visible());

    rows.set(4);
    grid.reload_data();
    assert!(!grid.bs().is_visible());
}

#[test]
fn test_state_purged_when_host_destroyed() {
    let _guard = setup();
    let rows = Rows::new(0);
    let placeholder = Placeholder::titled("Empty");
    let before = tracked_host_count();

    let mut table = table_with(&rows);
    table.bs().set_data_source(&placeholder);
    table.reload_data();
    let overlay = table
        .bs()
        .with_overlay(|view| view.object_id())
        .expect("overlay shown");
    assert_eq!(tracked_host_count(), before + 1);

    drop(table);
    assert_eq!(tracked_host_count(), before);
    let registry = blankslate_core::global_registry().unwrap();
    assert!(!registry.contains(overlay));
}
