//! The host collaborator interface.

use std::fmt;
use std::sync::Arc;

use crate::view::View;

/// The item model behind a list host.
pub trait ItemSource: Send + Sync {
    /// Number of sections, or `None` for a flat list (one section).
    fn number_of_sections(&self) -> Option<usize> {
        None
    }

    /// Number of items in `section`.
    fn number_of_items(&self, section: usize) -> usize;
}

/// Native host entry points the overlay can intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReloadEntry {
    /// Reload everything.
    ReloadData,
    /// Close a batch of animated updates.
    EndUpdates,
}

impl fmt::Display for ReloadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadEntry::ReloadData => f.write_str("reload_data"),
            ReloadEntry::EndUpdates => f.write_str("end_updates"),
        }
    }
}

/// A scrollable list the overlay can attach to.
///
/// Host types route their native reload entry points through
/// [`hooks::dispatch`](super::hooks::dispatch), which runs
/// [`perform_native`](ListHost::perform_native) and then reconciles the
/// overlay when the entry has been intercepted for the host's type.
pub trait ListHost: View {
    /// The host's item model, if any. A host without one has no items.
    fn item_source(&self) -> Option<Arc<dyn ItemSource>> {
        None
    }

    /// Whether the host implements `entry`.
    fn responds_to(&self, _entry: ReloadEntry) -> bool {
        false
    }

    /// Entries to intercept when a data source is attached.
    fn intercepted_entries(&self) -> &'static [ReloadEntry] {
        &[]
    }

    /// The host's own behavior for `entry`.
    fn perform_native(&mut self, _entry: ReloadEntry) {}
}

/// Total items across the host's sections.
pub fn item_count(host: &dyn ListHost) -> usize {
    let Some(source) = host.item_source() else {
        return 0;
    };
    let sections = source.number_of_sections().unwrap_or(1);
    (0..sections).map(|section| source.number_of_items(section)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewBase;
    use blankslate_core::{Object, ViewId, init_global_registry};

    struct Sections(Vec<usize>);

    impl ItemSource for Sections {
        fn number_of_sections(&self) -> Option<usize> {
            Some(self.0.len())
        }

        fn number_of_items(&self, section: usize) -> usize {
            self.0[section]
        }
    }

    struct Flat(usize);

    impl ItemSource for Flat {
        fn number_of_items(&self, _section: usize) -> usize {
            self.0
        }
    }

    struct Bare {
        base: ViewBase,
        source: Option<Arc<dyn ItemSource>>,
    }

    impl Object for Bare {
        fn object_id(&self) -> ViewId {
            self.base.object_id()
        }
    }

    impl View for Bare {
        fn view_base(&self) -> &ViewBase {
            &self.base
        }

        fn view_base_mut(&mut self) -> &mut ViewBase {
            &mut self.base
        }
    }

    impl ListHost for Bare {
        fn item_source(&self) -> Option<Arc<dyn ItemSource>> {
            self.source.clone()
        }
    }

    fn bare(source: Option<Arc<dyn ItemSource>>) -> Bare {
        init_global_registry();
        Bare {
            base: ViewBase::new::<Bare>(),
            source,
        }
    }

    #[test]
    fn test_counts_sum_sections() {
        assert_eq!(item_count(&bare(Some(Arc::new(Sections(vec![0, 2, 3]))))), 5);
        assert_eq!(item_count(&bare(Some(Arc::new(Sections(vec![]))))), 0);
    }

    #[test]
    fn test_flat_source_is_one_section() {
        assert_eq!(item_count(&bare(Some(Arc::new(Flat(4))))), 4);
    }

    #[test]
    fn test_missing_source_is_empty() {
        let host = bare(None);
        assert_eq!(item_count(&host), 0);
        assert!(!host.responds_to(ReloadEntry::ReloadData));
    }
}
