//! Views the overlay is built from.
//!
//! # Key Types
//!
//! - [`View`] - Trait implemented by every view, including custom views
//! - [`ViewBase`] - Embedded state and hierarchy operations
//! - [`PlainView`] - Empty container (content wrapper, custom views)
//! - [`ImageView`], [`Label`], [`Button`] - The built-in elements

mod base;
mod button;
mod image_view;
mod label;
mod plain;
mod traits;

pub use base::ViewBase;
pub use button::Button;
pub use image_view::ImageView;
pub use label::Label;
pub use plain::PlainView;
pub use traits::View;
