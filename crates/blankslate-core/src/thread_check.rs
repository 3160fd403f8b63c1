//! Main-thread verification.
//!
//! Overlay reconciliation, layout and the interception table are only ever
//! touched from the UI thread. Call [`set_main_thread`] once at startup; the
//! assertion macros then panic when that contract is broken.
//!
//! ```ignore
//! use blankslate_core::debug_assert_main_thread;
//!
//! fn relayout(&mut self) {
//!     debug_assert_main_thread!();
//!     // ...
//! }
//! ```
//!
//! Until [`set_main_thread`] is called every thread counts as the main
//! thread, which keeps headless tests free of setup.

use std::sync::OnceLock;
use std::thread::ThreadId;

static MAIN_THREAD_ID: OnceLock<ThreadId> = OnceLock::new();

/// Record the calling thread as the main (UI) thread.
///
/// # Panics
///
/// Panics if a different thread was already recorded.
pub fn set_main_thread() {
    let current = std::thread::current().id();
    if MAIN_THREAD_ID.set(current).is_err() && MAIN_THREAD_ID.get() != Some(&current) {
        panic!(
            "set_main_thread() called from different thread than original. \
             The main thread ID can only be set once."
        );
    }
}

/// The recorded main thread, if any.
#[inline]
pub fn main_thread_id() -> Option<ThreadId> {
    MAIN_THREAD_ID.get().copied()
}

/// Whether the calling thread is the main thread.
///
/// Returns `true` when no main thread has been recorded yet.
#[inline]
pub fn is_main_thread() -> bool {
    match MAIN_THREAD_ID.get() {
        Some(&main_id) => std::thread::current().id() == main_id,
        None => true,
    }
}

/// Panics if the current thread is not the main thread. Active in all builds.
#[macro_export]
macro_rules! assert_main_thread {
    () => {
        $crate::assert_main_thread!("operation must be performed on the main thread")
    };
    ($msg:expr) => {
        if !$crate::thread_check::is_main_thread() {
            $crate::thread_check::panic_not_main_thread($msg, file!(), line!());
        }
    };
}

/// Debug-only variant of [`assert_main_thread!`].
#[macro_export]
macro_rules! debug_assert_main_thread {
    () => {
        #[cfg(debug_assertions)]
        $crate::assert_main_thread!()
    };
    ($msg:expr) => {
        #[cfg(debug_assertions)]
        $crate::assert_main_thread!($msg)
    };
}

#[cold]
#[inline(never)]
#[doc(hidden)]
pub fn panic_not_main_thread(msg: &str, file: &str, line: u32) -> ! {
    let current = std::thread::current();
    let current_name = current.name().unwrap_or("<unnamed>");

    let main_info = match main_thread_id() {
        Some(id) => format!("main thread ID: {id:?}"),
        None => "main thread not yet registered".to_string(),
    };

    panic!(
        "thread safety violation: {msg}\n\
         location: {file}:{line}\n\
         current thread: \"{current_name}\" (ID: {:?}), {main_info}\n\
         Post the work with blankslate_core::post_task and drive the queue \
         from the UI thread instead.",
        current.id()
    )
}
