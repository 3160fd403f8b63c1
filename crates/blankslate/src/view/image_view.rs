//! Image element view.

use std::collections::BTreeMap;
use std::time::Duration;

use blankslate_core::{Color, Object, ViewId};

use super::base::ViewBase;
use super::traits::View;
use crate::animation::{ImageAnimation, ImageTransform};
use crate::content::{Image, RenderingMode};

struct RunningAnimation {
    animation: ImageAnimation,
    elapsed: Duration,
}

/// Displays an [`Image`], optionally tinted and animated.
///
/// Image views never take part in hit-testing; touches fall through to the
/// content wrapper behind them.
pub struct ImageView {
    base: ViewBase,
    image: Option<Image>,
    tint_color: Option<Color>,
    animations: BTreeMap<&'static str, RunningAnimation>,
}

impl ImageView {
    /// Create an empty image view.
    pub fn new() -> Self {
        let base = ViewBase::new::<Self>();
        base.set_user_interaction_enabled(false);
        Self {
            base,
            image: None,
            tint_color: None,
            animations: BTreeMap::new(),
        }
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// Set the tint. A tint switches the current image to template
    /// rendering so the tint color fills its shape.
    pub fn set_tint_color(&mut self, tint: Option<Color>) {
        self.tint_color = tint;
        if tint.is_some()
            && let Some(image) = self.image.as_mut()
        {
            image.rendering_mode = RenderingMode::Template;
        }
    }

    /// Attach an animation under `key`, replacing any animation there.
    pub fn add_animation(&mut self, key: &'static str, animation: ImageAnimation) {
        self.animations.insert(
            key,
            RunningAnimation {
                animation,
                elapsed: Duration::ZERO,
            },
        );
    }

    /// Remove the animation under `key`. Returns whether one was there.
    pub fn remove_animation(&mut self, key: &str) -> bool {
        self.animations.remove(key).is_some()
    }

    /// Whether any animation is attached.
    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn animation(&self, key: &str) -> Option<&ImageAnimation> {
        self.animations.get(key).map(|running| &running.animation)
    }

    /// Advance every attached animation by `dt`, dropping finished ones.
    pub fn advance_animations(&mut self, dt: Duration) {
        self.animations.retain(|_, running| {
            running.elapsed = running.elapsed.saturating_add(dt);
            !running.animation.is_finished(running.elapsed)
        });
    }

    /// Combined transform of the attached animations at their current time.
    pub fn current_transform(&self) -> ImageTransform {
        self.animations
            .values()
            .fold(ImageTransform::IDENTITY, |acc, running| {
                let t = running.animation.transform_at(running.elapsed);
                ImageTransform {
                    rotation: acc.rotation + t.rotation,
                    scale: acc.scale * t.scale,
                }
            })
    }
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ImageView {
    fn object_id(&self) -> ViewId {
        self.base.object_id()
    }
}

impl View for ImageView {
    fn view_base(&self) -> &ViewBase {
        &self.base
    }

    fn view_base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn height_for_width(&self, width: f32) -> Option<f32> {
        self.image.as_ref().map(|image| image.fitted_height(width))
    }
}
