use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer, use_resize_observer, use_window,
    use_window_scroll, UseIntersectionObserverReturn,
};

use crate::motion::{scroll_extent, scroll_progress, RevealLatch};

/// Flips to true on the first animation frame after hydration. Stays false
/// during SSR so entrance animations start from their initial state.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || set_mounted.set(true));
    });
    mounted
}

/// Document scroll progress in `[0, 1]`.
///
/// The scrollable extent is re-measured on mount, on window resize and when
/// `content` changes size, so a scroll event never forces a layout read.
pub fn use_scroll_progress(content: NodeRef<html::Div>) -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let (extent, set_extent) = signal(0.0);

    Effect::new(move |_| set_extent.set(measure_extent()));
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        set_extent.set(measure_extent())
    });
    // late fonts and stylesheets grow the page without resizing the window
    let _ = use_resize_observer(content, move |_, _| set_extent.set(measure_extent()));

    Signal::derive(move || scroll_progress(scroll_y.get(), extent.get()))
}

fn measure_extent() -> f64 {
    document()
        .document_element()
        .map(|el| scroll_extent(f64::from(el.scroll_height()), f64::from(el.client_height())))
        .unwrap_or_default()
}

/// Viewport visibility of `target`.
///
/// With `once` the signal latches on the first intersection and the observer
/// is stopped right away. Otherwise it keeps following the viewport until the
/// owning component is dropped.
pub fn use_reveal(target: NodeRef<html::Div>, once: bool) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::new(once));

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            if let Some(entry) = entries.last() {
                let intersecting = entry.is_intersecting();
                latch.maybe_update(|l| l.observe(intersecting));
            }
        });

    Effect::new(move |_| {
        if latch.with(RevealLatch::is_settled) {
            stop();
        }
    });

    Signal::derive(move || latch.with(RevealLatch::visible))
}
