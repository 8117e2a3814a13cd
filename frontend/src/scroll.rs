use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Past this many pixels the nav bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Fraction of the scrollable range that has been scrolled, in [0, 1].
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !scroll_y.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub y: f64,
    pub progress: f64,
}

impl ScrollMetrics {
    pub fn scrolled(&self) -> bool {
        self.y > SCROLLED_THRESHOLD
    }
}

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document_height = window
        .document()?
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport);
    Some(ScrollMetrics {
        y,
        progress: scroll_progress(y, document_height, viewport),
    })
}

/// Page scroll position, re-read on every `scroll` and `resize` event while
/// the calling component is mounted.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(|| read_metrics().unwrap_or_default());

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(latest) = read_metrics() {
                        metrics.set(latest);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("could not subscribe to {} events", event);
                        }
                    }
                }

                move || {
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window
                                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    *metrics
}

/// Smooth-scroll to the element with `id`. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("no section #{} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_zero() {
        assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn bottom_of_page_is_one() {
        assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn midway() {
        assert!((scroll_progress(1100.0, 3000.0, 800.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn page_that_cannot_scroll_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(40.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-30.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn never_nan() {
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn scrolled_flag_uses_threshold() {
        assert!(!ScrollMetrics { y: 50.0, progress: 0.0 }.scrolled());
        assert!(ScrollMetrics { y: 51.0, progress: 0.0 }.scrolled());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_live_metrics() {
        let metrics = read_metrics().expect("window is available");
        assert!((0.0..=1.0).contains(&metrics.progress));
    }

    #[wasm_bindgen_test]
    fn scrolling_to_a_missing_section_is_a_no_op() {
        scroll_to_section("no-such-section");
    }
}
