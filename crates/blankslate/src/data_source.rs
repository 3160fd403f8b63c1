//! The content contract.

use std::time::Duration;

use blankslate_core::Color;

use crate::animation::ImageAnimation;
use crate::content::{AttributedText, Gradient, Image};
use crate::host::ListHost;
use crate::model::{Alignment, ControlState, Element, ElementLayout};
use crate::view::{Button, View};

/// Supplies what the overlay shows.
///
/// Every method has a default, so an implementor overrides only what it
/// needs. The overlay holds a weak reference to its data source; dropping the
/// last strong reference detaches it.
///
/// Methods are queried in a fixed order on every reconciliation: the custom
/// view first (a custom view suppresses every other element query), then
/// image, title, detail, button, alignment, background, and the fade
/// duration last.
///
/// ```ignore
/// struct Inbox;
///
/// impl DataSource for Inbox {
///     fn title(&self, _host: &dyn ListHost) -> Option<AttributedText> {
///         Some("No messages".into())
///     }
/// }
/// ```
pub trait DataSource: Send + Sync {
    /// Image shown above the text.
    fn image(&self, _host: &dyn ListHost) -> Option<Image> {
        None
    }

    /// Opacity of the image, from 0.0 to 1.0.
    fn image_alpha(&self, _host: &dyn ListHost) -> f32 {
        1.0
    }

    /// Tint for the image. A tint renders the image as a template.
    fn image_tint_color(&self, _host: &dyn ListHost) -> Option<Color> {
        None
    }

    /// Repeating animation attached to the image.
    fn image_animation(&self, _host: &dyn ListHost) -> Option<ImageAnimation> {
        None
    }

    fn title(&self, _host: &dyn ListHost) -> Option<AttributedText> {
        None
    }

    fn detail(&self, _host: &dyn ListHost) -> Option<AttributedText> {
        None
    }

    /// Button title for `state`.
    fn button_title(&self, _host: &dyn ListHost, _state: ControlState) -> Option<AttributedText> {
        None
    }

    /// Button background image for `state`. Only used with titled buttons.
    fn button_background_image(&self, _host: &dyn ListHost, _state: ControlState) -> Option<Image> {
        None
    }

    /// Button image for `state`. Takes precedence over titles.
    fn button_image(&self, _host: &dyn ListHost, _state: ControlState) -> Option<Image> {
        None
    }

    /// Final styling hook, called after the button's content is set.
    fn configure_button(&self, _host: &dyn ListHost, _button: &mut Button) {}

    /// Fill color behind the content. `None` leaves the overlay clear.
    fn background_color(&self, _host: &dyn ListHost) -> Option<Color> {
        Some(Color::CLEAR)
    }

    /// Gradient painted over the background color.
    fn background_gradient(&self, _host: &dyn ListHost) -> Option<Gradient> {
        None
    }

    /// A view shown instead of the built-in elements.
    fn custom_view(&self, _host: &dyn ListHost) -> Option<Box<dyn View>> {
        None
    }

    /// Where the content sits inside the overlay.
    fn alignment(&self, _host: &dyn ListHost) -> Alignment {
        Alignment::default()
    }

    /// Spacing and height for `element`.
    fn layout(&self, _host: &dyn ListHost, _element: Element) -> ElementLayout {
        ElementLayout::default()
    }

    /// Fade-in duration when the overlay first appears. Zero disables the
    /// fade.
    fn fade_in_duration(&self, _host: &dyn ListHost) -> Duration {
        Duration::ZERO
    }
}
