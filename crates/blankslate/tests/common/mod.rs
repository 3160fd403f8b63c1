//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use blankslate::animation::ImageAnimation;
use blankslate::content::{AttributedText, Image};
use blankslate::host::{ItemSource, ListHost, TableView};
use blankslate::view::{PlainView, View};
use blankslate::{Alignment, ControlState, DataSource, Delegate, Element, ElementLayout};
use blankslate_core::{
    EdgeInsets, Rect, Size, ViewId, init_global_registry, process_pending_tasks,
};
use parking_lot::{Mutex, MutexGuard};
use tracing_subscriber::EnvFilter;

static SERIAL: Mutex<()> = Mutex::new(());

/// Initialize the registry and logging, and serialize the calling test
/// against the others in this binary. The task queue and the interception
/// table are process-wide.
pub fn setup() -> MutexGuard<'static, ()> {
    init_global_registry();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let guard = SERIAL.lock();
    process_pending_tasks();
    guard
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.01
}

pub fn assert_rect(actual: Rect, expected: Rect) {
    let close = approx(actual.origin.x, expected.origin.x)
        && approx(actual.origin.y, expected.origin.y)
        && approx(actual.size.width, expected.size.width)
        && approx(actual.size.height, expected.size.height);
    assert!(close, "expected {expected:?}, got {actual:?}");
}

// =============================================================================
// Item sources
// =============================================================================

/// A flat list whose length can change between reloads.
#[derive(Default)]
pub struct Rows(AtomicUsize);

impl Rows {
    pub fn new(count: usize) -> Arc<Self> {
        Arc::new(Self(AtomicUsize::new(count)))
    }

    pub fn set(&self, count: usize) {
        self.0.store(count, Ordering::SeqCst);
    }
}

impl ItemSource for Rows {
    fn number_of_items(&self, _section: usize) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A 320x480 table backed by `rows`.
pub fn table_with(rows: &Arc<Rows>) -> TableView {
    let mut table = TableView::new();
    table.view_base().set_frame(Rect::new(0.0, 0.0, 320.0, 480.0));
    table.set_item_source(Some(rows.clone() as Arc<dyn ItemSource>));
    table
}

// =============================================================================
// Data source
// =============================================================================

/// A data source whose answers can be changed between reconciliations.
pub struct Placeholder {
    pub title: Mutex<Option<&'static str>>,
    pub detail: Mutex<Option<&'static str>>,
    pub image: Mutex<Option<Size>>,
    pub animation: Mutex<Option<ImageAnimation>>,
    pub button_title: Mutex<Option<&'static str>>,
    pub custom_height: Mutex<Option<f32>>,
    pub layouts: Mutex<Vec<(Element, ElementLayout)>>,
    pub alignment: Mutex<Alignment>,
    pub fade: Mutex<Duration>,
    pub queries: AtomicUsize,
    /// Calls to the image, title, detail and button queries.
    pub element_queries: AtomicUsize,
}

impl Placeholder {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            title: Mutex::new(None),
            detail: Mutex::new(None),
            image: Mutex::new(None),
            animation: Mutex::new(None),
            button_title: Mutex::new(None),
            custom_height: Mutex::new(None),
            layouts: Mutex::new(Vec::new()),
            alignment: Mutex::new(Alignment::default()),
            fade: Mutex::new(Duration::ZERO),
            queries: AtomicUsize::new(0),
            element_queries: AtomicUsize::new(0),
        })
    }

    pub fn element_queries(&self) -> usize {
        self.element_queries.load(Ordering::SeqCst)
    }

    fn count_element_query(&self) {
        self.element_queries.fetch_add(1, Ordering::SeqCst);
    }

    pub fn titled(title: &'static str) -> Arc<Self> {
        let placeholder = Self::empty();
        *placeholder.title.lock() = Some(title);
        placeholder
    }
}

impl DataSource for Placeholder {
    fn image(&self, _host: &dyn ListHost) -> Option<Image> {
        self.count_element_query();
        self.image.lock().map(|size| Image::new("empty-inbox", size))
    }

    fn image_animation(&self, _host: &dyn ListHost) -> Option<ImageAnimation> {
        self.count_element_query();
        self.animation.lock().clone()
    }

    fn title(&self, _host: &dyn ListHost) -> Option<AttributedText> {
        self.count_element_query();
        self.title.lock().map(AttributedText::new)
    }

    fn detail(&self, _host: &dyn ListHost) -> Option<AttributedText> {
        self.count_element_query();
        self.detail.lock().map(AttributedText::new)
    }

    fn button_title(&self, _host: &dyn ListHost, state: ControlState) -> Option<AttributedText> {
        self.count_element_query();
        match state {
            ControlState::Normal => self.button_title.lock().map(AttributedText::new),
            ControlState::Highlighted => None,
        }
    }

    fn custom_view(&self, _host: &dyn ListHost) -> Option<Box<dyn View>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.custom_height
            .lock()
            .map(|height| Box::new(PlainView::with_height(height)) as Box<dyn View>)
    }

    fn alignment(&self, _host: &dyn ListHost) -> Alignment {
        *self.alignment.lock()
    }

    fn layout(&self, _host: &dyn ListHost, element: Element) -> ElementLayout {
        self.layouts
            .lock()
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, layout)| *layout)
            .unwrap_or_default()
    }

    fn fade_in_duration(&self, _host: &dyn ListHost) -> Duration {
        *self.fade.lock()
    }
}

// =============================================================================
// Delegate
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
    TapView(ViewId),
    TapButton(ViewId),
}

/// A delegate with adjustable policy that records every callback.
pub struct Recorder {
    pub forced: AtomicBool,
    pub display: AtomicBool,
    pub touch: AtomicBool,
    pub scroll: AtomicBool,
    pub scroll_after_dismiss: AtomicBool,
    pub insertion_index: Mutex<Option<usize>>,
    pub events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            forced: AtomicBool::new(false),
            display: AtomicBool::new(true),
            touch: AtomicBool::new(true),
            scroll: AtomicBool::new(false),
            scroll_after_dismiss: AtomicBool::new(true),
            insertion_index: Mutex::new(Some(0)),
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn take_events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    fn record(&self, event: Event) {
        self.events.lock().push(event);
    }
}

impl Delegate for Recorder {
    fn should_be_forced_to_display(&self, _host: &dyn ListHost) -> bool {
        self.forced.load(Ordering::SeqCst)
    }

    fn should_display(&self, _host: &dyn ListHost) -> bool {
        self.display.load(Ordering::SeqCst)
    }

    fn insertion_index(&self, _host: &dyn ListHost) -> Option<usize> {
        *self.insertion_index.lock()
    }

    fn should_allow_touch(&self, _host: &dyn ListHost) -> bool {
        self.touch.load(Ordering::SeqCst)
    }

    fn should_allow_scroll(&self, _host: &dyn ListHost) -> bool {
        self.scroll.load(Ordering::SeqCst)
    }

    fn should_allow_scroll_after_dismiss(&self, _host: &dyn ListHost) -> bool {
        self.scroll_after_dismiss.load(Ordering::SeqCst)
    }

    fn did_tap_view(&self, _host: &dyn ListHost, overlay: ViewId) {
        self.record(Event::TapView(overlay));
    }

    fn did_tap_button(&self, _host: &dyn ListHost, button: ViewId) {
        self.record(Event::TapButton(button));
    }

    fn will_appear(&self, _host: &dyn ListHost) {
        self.record(Event::WillAppear);
    }

    fn did_appear(&self, _host: &dyn ListHost) {
        self.record(Event::DidAppear);
    }

    fn will_disappear(&self, _host: &dyn ListHost) {
        self.record(Event::WillDisappear);
    }

    fn did_disappear(&self, _host: &dyn ListHost) {
        self.record(Event::DidDisappear);
    }
}

pub fn uniform_layout(insets: f32, height: Option<f32>) -> ElementLayout {
    ElementLayout::new(EdgeInsets::uniform(insets), height)
}
