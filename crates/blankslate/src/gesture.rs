//! Gesture recognizer identities and simultaneous-recognition arbitration.
//!
//! Recognition itself belongs to the host toolkit. The overlay only needs to
//! name its own tap recognizer and answer "may these two recognizers run at
//! the same time?" when the host asks.

use std::sync::atomic::{AtomicU64, Ordering};

use blankslate_core::ViewId;

/// Kinds of gesture recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureType {
    Tap,
    DoubleTap,
    LongPress,
    Swipe,
    Pan,
    Pinch,
    Rotation,
}

/// A unique identifier for a gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureId(u64);

impl GestureId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static NEXT_GESTURE_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_GESTURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A recognizer as seen during arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureRef {
    pub id: GestureId,
    pub gesture_type: GestureType,
    /// The view the recognizer is attached to.
    pub view: Option<ViewId>,
}

impl GestureRef {
    /// Create a reference to a recognizer.
    pub fn new(id: GestureId, gesture_type: GestureType, view: Option<ViewId>) -> Self {
        Self {
            id,
            gesture_type,
            view,
        }
    }
}

/// Arbitration hook a delegate can expose through
/// [`Delegate::as_gesture_delegate`](crate::delegate::Delegate::as_gesture_delegate).
pub trait GestureDelegate: Send + Sync {
    /// Whether `gesture` may recognize at the same time as `other`.
    fn should_recognize_simultaneously(&self, gesture: &GestureRef, other: &GestureRef) -> bool {
        let _ = (gesture, other);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_ids_are_unique() {
        let a = GestureId::next();
        let b = GestureId::next();
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }
}
