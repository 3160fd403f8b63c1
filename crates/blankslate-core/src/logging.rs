//! Logging and debugging facilities.
//!
//! Everything is instrumented with `tracing`; the library never installs a
//! subscriber. To see what the overlay is doing, install one in the host
//! application and filter on the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("blankslate::binding=debug,blankslate::hooks=debug")
//!     .init();
//! ```
//!
//! [`ViewTreeDebug`] prints the registry hierarchy, which is the quickest way
//! to check where an overlay was inserted relative to a host's decorations.

use std::fmt::{self, Write as FmtWrite};

use crate::object::{ObjectResult, ViewId, global_registry};

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "blankslate_core";
    /// View registry.
    pub const OBJECT: &str = "blankslate_core::object";
    /// Signal emission.
    pub const SIGNAL: &str = "blankslate_core::signal";
    /// Deferred task queue.
    pub const TASK: &str = "blankslate_core::task";
    /// Show/dismiss decisions and delegate callbacks.
    pub const BINDING: &str = "blankslate::binding";
    /// Reload interception table.
    pub const HOOKS: &str = "blankslate::hooks";
    /// Overlay view population, framing and hit-testing.
    pub const OVERLAY: &str = "blankslate::overlay";
    /// Constraint resolution.
    pub const LAYOUT: &str = "blankslate::layout";
    /// Timing spans from [`super::PerfSpan`].
    pub const PERF: &str = "blankslate::perf";
}

/// Options for [`ViewTreeDebug`] output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// Print view ids.
    pub show_ids: bool,
    /// Print the short type name.
    pub show_types: bool,
    /// Print frame, hidden flag and alpha.
    pub show_state: bool,
    /// Maximum depth to descend (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            show_types: true,
            show_state: false,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Everything, including view state.
    pub fn detailed() -> Self {
        Self {
            show_state: true,
            ..Default::default()
        }
    }

    /// Names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_state: false,
            max_depth: None,
        }
    }
}

/// Renders the view hierarchy as an indented tree.
#[derive(Debug, Clone, Default)]
pub struct ViewTreeDebug {
    options: TreeFormatOptions,
}

impl ViewTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root view and its descendants.
    pub fn format_all(&self) -> ObjectResult<String> {
        let registry = global_registry()?;
        let (count, roots): (usize, Vec<ViewId>) =
            registry.with_read(|r| (r.view_count(), r.root_views().collect()));

        let mut output = String::new();
        let _ = writeln!(output, "View Tree ({count} total views):");
        if roots.is_empty() {
            output.push_str("  (empty)\n");
        }
        for root_id in roots {
            self.format_into(root_id, 0, &mut output)?;
        }
        Ok(output)
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, root: ViewId) -> ObjectResult<String> {
        let mut output = String::new();
        self.format_into(root, 0, &mut output)?;
        Ok(output)
    }

    fn format_into(&self, id: ViewId, depth: usize, output: &mut String) -> ObjectResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let registry = global_registry()?;
        let name = registry.view_name(id)?;
        let type_name = registry.type_name(id)?;
        let state = registry.view_state(id)?;
        let children = registry.children(id)?;

        for _ in 0..depth {
            output.push_str("  ");
        }
        if depth > 0 {
            output.push_str("└─ ");
        }
        output.push_str(if name.is_empty() { "(unnamed)" } else { &name });

        if self.options.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        if self.options.show_types {
            let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
            let _ = write!(output, " ({short_type})");
        }
        if self.options.show_state {
            let f = state.frame;
            let _ = write!(
                output,
                " frame=({}, {}, {}, {}) alpha={}",
                f.left(),
                f.top(),
                f.width(),
                f.height(),
                state.alpha
            );
            if state.hidden {
                output.push_str(" hidden");
            }
        }
        output.push('\n');

        for child_id in children {
            self.format_into(child_id, depth + 1, output)?;
        }
        Ok(())
    }
}

impl fmt::Display for ViewTreeDebug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format_all() {
            Ok(output) => write!(f, "{output}"),
            Err(e) => write!(f, "Error formatting view tree: {e}"),
        }
    }
}

/// Keeps a `tracing` span entered until dropped, so subscribers that record
/// span timings see how long the guarded operation took.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a span named after `operation`.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "blankslate::perf", "perf", operation);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::object::{Object, ObjectBase, init_global_registry};

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
    fn test_tree_format_all_has_header() {
        setup();
        let output = ViewTreeDebug::new().format_all().unwrap();
        assert!(output.starts_with("View Tree"));
    }

    #[test]
    fn test_tree_format_hierarchy() {
        setup();
        let registry = global_registry().unwrap();
        let host = TestView::new("table");
        let header = TestView::new("header");
        let overlay = TestView::new("overlay");
        registry.set_parent(header.object_id(), Some(host.object_id())).unwrap();
        registry.insert_child(host.object_id(), overlay.object_id(), 0).unwrap();

        let output = ViewTreeDebug::new().format_subtree(host.object_id()).unwrap();
        let overlay_line = output.find("overlay").unwrap();
        let header_line = output.find("header").unwrap();
        assert!(output.contains("TestView"));
        assert!(overlay_line < header_line);
    }

    #[test]
    fn test_tree_format_state() {
        setup();
        let registry = global_registry().unwrap();
        let view = TestView::new("framed");
        registry
            .update_view_state(view.object_id(), |s| {
                s.frame = Rect::new(0.0, 0.0, 10.0, 20.0);
                s.hidden = true;
            })
            .unwrap();

        let debug = ViewTreeDebug::with_options(TreeFormatOptions::detailed());
        let output = debug.format_subtree(view.object_id()).unwrap();
        assert!(output.contains("frame=(0, 0, 10, 20)"));
        assert!(output.contains("hidden"));
    }

    #[test]
    fn test_tree_format_minimal() {
        setup();
        let view = TestView::new("plain");
        let debug = ViewTreeDebug::with_options(TreeFormatOptions::minimal());
        let output = debug.format_subtree(view.object_id()).unwrap();
        assert_eq!(output, "plain\n");
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }
}
