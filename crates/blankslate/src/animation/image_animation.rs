//! Repeating animations attached to the overlay's image.
//!
//! A data source may return an [`ImageAnimation`] (a spinner while loading,
//! for instance). The image view stores it under [`IMAGE_ANIMATION_KEY`] and
//! the overlay advances it every frame.

use std::f32::consts::TAU;
use std::time::Duration;

use super::easing::{Easing, ease};

/// Key the overlay's image animation is stored under.
pub const IMAGE_ANIMATION_KEY: &str = "blankslate.image-animation";

/// What an image animation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageAnimationKind {
    /// Rotate by `radians` per cycle.
    Rotate { radians: f32 },
    /// Scale between `from` and `to` and back each cycle.
    Pulse { from: f32, to: f32 },
}

/// How many times an animation repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// A fixed number of cycles.
    Count(u32),
    /// Forever.
    Forever,
}

/// Transform applied to an image at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    /// Rotation in radians.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl ImageTransform {
    /// No rotation, unit scale.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        scale: 1.0,
    };
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A repeating image animation description.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnimation {
    pub kind: ImageAnimationKind,
    /// Length of one cycle.
    pub duration: Duration,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl ImageAnimation {
    /// One full turn per `duration`, forever.
    pub fn spin(duration: Duration) -> Self {
        Self {
            kind: ImageAnimationKind::Rotate { radians: TAU },
            duration,
            repeat: Repeat::Forever,
            easing: Easing::Linear,
        }
    }

    /// Pulse between two scales, forever.
    pub fn pulse(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            kind: ImageAnimationKind::Pulse { from, to },
            duration,
            repeat: Repeat::Forever,
            easing: Easing::EaseInOutSine,
        }
    }

    /// Builder: repeat a fixed number of cycles.
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// The transform at `elapsed` since the animation started.
    pub fn transform_at(&self, elapsed: Duration) -> ImageTransform {
        if self.duration.is_zero() || self.is_finished(elapsed) {
            return ImageTransform::IDENTITY;
        }

        let cycle = self.duration.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % cycle) / cycle;
        match self.kind {
            ImageAnimationKind::Rotate { radians } => ImageTransform {
                rotation: radians * ease(self.easing, phase),
                scale: 1.0,
            },
            ImageAnimationKind::Pulse { from, to } => {
                // Up during the first half of the cycle, back down in the second.
                let t = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
                ImageTransform {
                    rotation: 0.0,
                    scale: from + (to - from) * ease(self.easing, t),
                }
            }
        }
    }

    /// Whether all cycles have completed by `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        match self.repeat {
            Repeat::Forever => false,
            Repeat::Count(n) => elapsed >= self.duration.saturating_mul(n),
        }
    }
}
