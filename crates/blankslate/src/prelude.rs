//! Commonly used types, for glob import:
//!
//! ```ignore
//! use blankslate::prelude::*;
//! ```

// ============================================================================
// Binding
// ============================================================================

pub use crate::binding::{BlankSlate, BlankSlateExt};
pub use crate::data_source::DataSource;
pub use crate::delegate::Delegate;

// ============================================================================
// Hosts
// ============================================================================

pub use crate::host::{CollectionView, ItemSource, ListHost, ScrollView, TableView};

// ============================================================================
// Content and placement
// ============================================================================

pub use crate::animation::ImageAnimation;
pub use crate::content::{AttributedText, Gradient, Image};
pub use crate::model::{Alignment, ControlState, DataLoadStatus, Element, ElementLayout};

// ============================================================================
// Views
// ============================================================================

pub use crate::view::{Button, View};

// ============================================================================
// Geometry
// ============================================================================

pub use blankslate_core::{Color, EdgeInsets, Point, Rect, Size, ViewId};
