//! The policy and notification contract.

use blankslate_core::ViewId;

use crate::gesture::GestureDelegate;
use crate::host::ListHost;

/// Decides when the overlay shows and hears about what it does.
///
/// Every method has a default. The overlay holds a weak reference to its
/// delegate; with no delegate attached the defaults apply.
pub trait Delegate: Send + Sync {
    /// Show the overlay even when the host has items.
    fn should_be_forced_to_display(&self, _host: &dyn ListHost) -> bool {
        false
    }

    /// Whether the overlay may show at all.
    fn should_display(&self, _host: &dyn ListHost) -> bool {
        true
    }

    /// Z-index for the overlay when the host already has more than one
    /// subview. `None` puts it in front of everything.
    fn insertion_index(&self, _host: &dyn ListHost) -> Option<usize> {
        Some(0)
    }

    /// Whether the overlay receives touches.
    fn should_allow_touch(&self, _host: &dyn ListHost) -> bool {
        true
    }

    /// Whether the host scrolls while the overlay is shown.
    fn should_allow_scroll(&self, _host: &dyn ListHost) -> bool {
        false
    }

    /// Whether the host scrolls after the overlay is dismissed.
    fn should_allow_scroll_after_dismiss(&self, _host: &dyn ListHost) -> bool {
        true
    }

    /// The content wrapper or custom view was tapped. `overlay` is the
    /// overlay's id.
    fn did_tap_view(&self, _host: &dyn ListHost, _overlay: ViewId) {}

    /// The button was tapped.
    fn did_tap_button(&self, _host: &dyn ListHost, _button: ViewId) {}

    fn will_appear(&self, _host: &dyn ListHost) {}

    fn did_appear(&self, _host: &dyn ListHost) {}

    fn will_disappear(&self, _host: &dyn ListHost) {}

    fn did_disappear(&self, _host: &dyn ListHost) {}

    /// Gesture arbitration for the delegate's own recognizers.
    fn as_gesture_delegate(&self) -> Option<&dyn GestureDelegate> {
        None
    }
}
