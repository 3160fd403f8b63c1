//! Animation support for the overlay.
//!
//! - [`FadeIn`] ramps the content wrapper from transparent to opaque when the
//!   overlay is attached or its host window changes
//! - [`ImageAnimation`] describes a repeating rotation or pulse on the image
//!
//! Both are advanced explicitly by the host loop through
//! [`BlankSlateView::advance_animations`](crate::overlay::BlankSlateView::advance_animations).

mod easing;
mod fade;
mod image_animation;

pub use easing::{Easing, ease, lerp_eased};
pub use fade::{FadeIn, FadeState};
pub use image_animation::{
    IMAGE_ANIMATION_KEY, ImageAnimation, ImageAnimationKind, ImageTransform, Repeat,
};
