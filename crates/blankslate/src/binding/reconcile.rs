//! The show/hide decision and the overlay rebuild.

use blankslate_core::{Color, Object, TreeFormatOptions, ViewTreeDebug, debug_assert_main_thread};

use super::state;
use crate::animation::IMAGE_ANIMATION_KEY;
use crate::data_source::DataSource;
use crate::delegate::Delegate;
use crate::host::{ListHost, item_count};
use crate::model::{ControlState, Element};
use crate::overlay::BlankSlateView;
use crate::view::View;

/// Decide whether `host` shows its overlay, and rebuild it if so.
///
/// With no live data source this dismisses. Otherwise the overlay is shown
/// when `(should_display && item_count == 0) || should_be_forced_to_display`,
/// and dismissed if it was visible and the condition no longer holds.
#[tracing::instrument(skip(host), target = "blankslate::binding", level = "debug", fields(host = ?host.object_id()))]
pub fn reconcile(host: &dyn ListHost) {
    debug_assert_main_thread!("overlay reconciliation must run on the main thread");
    let id = host.object_id();

    let Some(data_source) = state::data_source(id) else {
        tracing::debug!(target: "blankslate::binding", "no data source");
        dismiss(host);
        return;
    };
    let delegate = state::delegate(id);
    let delegate = delegate.as_deref();

    let forced = delegate.is_some_and(|d| d.should_be_forced_to_display(host));
    let should_display = delegate.is_none_or(|d| d.should_display(host));
    let items = item_count(host);
    let shown = (should_display && items == 0) || forced;
    tracing::debug!(target: "blankslate::binding", items, should_display, forced, shown, "display decision");

    if shown {
        show(host, data_source.as_ref(), delegate);
    } else if is_visible(host) {
        dismiss(host);
    }
}

/// Whether `host` has an attached overlay that is not hidden.
pub fn is_visible(host: &dyn ListHost) -> bool {
    state::peek_view(host.object_id(), BlankSlateView::is_visible).unwrap_or(false)
}

/// Tear down the overlay on `host`. Does nothing, and notifies no one, when
/// there is no overlay.
pub fn dismiss(host: &dyn ListHost) {
    let id = host.object_id();
    let Some(mut view) = state::take_view(id) else {
        return;
    };
    let delegate = state::delegate(id);
    let delegate = delegate.as_deref();

    if let Some(d) = delegate {
        d.will_disappear(host);
    }

    view.reset_for_reuse();
    if let Err(err) = view.view_base().remove_from_superview() {
        tracing::warn!(target: "blankslate::binding", host = ?id, %err, "overlay already detached");
    }
    drop(view);

    let allow_scroll = delegate.is_none_or(|d| d.should_allow_scroll_after_dismiss(host));
    host.view_base().set_scroll_enabled(allow_scroll);
    tracing::debug!(target: "blankslate::binding", host = ?id, "overlay dismissed");

    if let Some(d) = delegate {
        d.did_disappear(host);
    }
}

fn show(host: &dyn ListHost, data_source: &dyn DataSource, delegate: Option<&dyn Delegate>) {
    let id = host.object_id();
    if let Some(d) = delegate {
        d.will_appear(host);
    }

    let (mut view, attached) = match state::take_view(id) {
        Some(view) => (view, false),
        None => {
            let view = BlankSlateView::new();
            attach(host, &view, delegate);
            (view, true)
        }
    };
    if attached
        && let Err(err) = view.sync_frame(id)
    {
        tracing::warn!(target: "blankslate::binding", host = ?id, %err, "overlay frame sync skipped");
    }

    view.reset_for_reuse();
    populate(host, data_source, &mut view);

    view.set_alignment(data_source.alignment(host));
    view.set_background_color(data_source.background_color(host).unwrap_or(Color::CLEAR));
    view.set_background_gradient(data_source.background_gradient(host));

    let empty = view.elements().is_empty();
    view.set_hidden(empty);
    let allow_touch = delegate.is_none_or(|d| d.should_allow_touch(host));
    view.view_base().set_user_interaction_enabled(allow_touch);
    if !empty {
        view.apply_layout();
    }

    let allow_scroll = delegate.is_some_and(|d| d.should_allow_scroll(host));
    host.view_base().set_scroll_enabled(allow_scroll);

    view.set_fade_duration(data_source.fade_in_duration(host));
    if attached {
        view.begin_fade_in();
    }

    tracing::debug!(
        target: "blankslate::binding",
        host = ?id,
        attached,
        elements = ?view.elements().elements(),
        hidden = empty,
        "overlay shown"
    );
    if tracing::enabled!(target: "blankslate::overlay", tracing::Level::TRACE)
        && let Ok(tree) = ViewTreeDebug::with_options(TreeFormatOptions::minimal())
            .format_subtree(view.object_id())
    {
        tracing::trace!(target: "blankslate::overlay", "overlay tree:\n{tree}");
    }
    state::put_view(id, view);
    if attached {
        state::resync_later(id);
    }

    if let Some(d) = delegate {
        d.did_appear(host);
    }
}

/// Insert a new overlay into `host`. With more than one subview already
/// present the delegate's insertion index applies; otherwise the overlay is
/// appended.
fn attach(host: &dyn ListHost, view: &BlankSlateView, delegate: Option<&dyn Delegate>) {
    let base = host.view_base();
    let overlay = view.object_id();
    let result = if base.subview_count() > 1 {
        match delegate.map_or(Some(0), |d| d.insertion_index(host)) {
            Some(index) => base.insert_subview(overlay, index),
            None => base.add_subview(overlay),
        }
    } else {
        base.add_subview(overlay)
    };
    if let Err(err) = result {
        tracing::warn!(target: "blankslate::binding", host = ?host.object_id(), %err, "overlay not attached");
    }
}

fn populate(host: &dyn ListHost, data_source: &dyn DataSource, view: &mut BlankSlateView) {
    if let Some(custom) = data_source.custom_view(host) {
        view.set_custom_view(custom, data_source.layout(host, Element::Custom));
        return;
    }

    if let Some(image) = data_source.image(host) {
        let tint = data_source.image_tint_color(host);
        let layout = data_source.layout(host, Element::Image);
        let alpha = data_source.image_alpha(host);
        let animation = data_source.image_animation(host);

        let image_view = view.make_image_view(layout);
        image_view.set_image(Some(image));
        image_view.set_tint_color(tint);
        image_view.view_base().set_alpha(alpha);
        match animation {
            Some(animation) => image_view.add_animation(IMAGE_ANIMATION_KEY, animation),
            None => {
                image_view.remove_animation(IMAGE_ANIMATION_KEY);
            }
        }
    }

    if let Some(title) = data_source.title(host) {
        view.make_title_label(data_source.layout(host, Element::Title))
            .set_attributed_text(Some(title));
    }

    if let Some(detail) = data_source.detail(host) {
        view.make_detail_label(data_source.layout(host, Element::Detail))
            .set_attributed_text(Some(detail));
    }

    let images: Vec<_> = ControlState::ALL
        .into_iter()
        .filter_map(|state| data_source.button_image(host, state).map(|image| (state, image)))
        .collect();
    if !images.is_empty() {
        let button = view.make_button(data_source.layout(host, Element::Button));
        for (state, image) in images {
            button.set_image(Some(image), state);
        }
        data_source.configure_button(host, button);
        return;
    }

    let titles: Vec<_> = ControlState::ALL
        .into_iter()
        .filter_map(|state| data_source.button_title(host, state).map(|title| (state, title)))
        .collect();
    if !titles.is_empty() {
        let button = view.make_button(data_source.layout(host, Element::Button));
        for (state, title) in titles {
            button.set_title(Some(title), state);
        }
        for state in ControlState::ALL {
            button.set_background_image(data_source.button_background_image(host, state), state);
        }
        data_source.configure_button(host, button);
    }
}
