//! Section visibility tracking.
//!
//! One `IntersectionObserver` watches every page section. Each batch of
//! entries is folded into a [`ViewState`]: sections that intersect are
//! flagged visible for good, and the last intersecting one becomes active.

use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::content::Section;

/// Inset of the observed viewport region. Negative values shrink it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    Percent(f64),
    Pixels(f64),
}

impl Inset {
    fn css(&self) -> String {
        match self {
            Inset::Percent(v) => format!("{}%", v),
            Inset::Pixels(v) => format!("{}px", v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl ObserverOptions {
    /// A thin band 40% from the top of the viewport; whichever section
    /// crosses it is the one the nav bar highlights.
    pub const fn navigation() -> Self {
        Self {
            top: Inset::Percent(-40.0),
            right: Inset::Pixels(0.0),
            bottom: Inset::Percent(-55.0),
            left: Inset::Pixels(0.0),
        }
    }

    /// Sections reveal once they are 100px inside the viewport on every side.
    pub const fn reveal() -> Self {
        Self {
            top: Inset::Pixels(-100.0),
            right: Inset::Pixels(-100.0),
            bottom: Inset::Pixels(-100.0),
            left: Inset::Pixels(-100.0),
        }
    }

    pub fn root_margin(&self) -> String {
        format!(
            "{} {} {} {}",
            self.top.css(),
            self.right.css(),
            self.bottom.css(),
            self.left.css()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    visible: BTreeMap<&'static str, bool>,
    active: Option<&'static str>,
}

impl ViewState {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            visible: sections.iter().map(|s| (s.id, false)).collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Record one observation. Ids outside the tracked set are ignored.
    pub fn observe(&mut self, id: &str, intersecting: bool) {
        if !intersecting {
            return;
        }
        if let Some((key, flag)) = self.visible.iter_mut().find(|(key, _)| **key == id) {
            *flag = true;
            self.active = Some(*key);
        }
    }
}

pub enum ViewAction {
    Observed(Vec<(String, bool)>),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ViewAction::Observed(entries) => {
                let mut next = (*self).clone();
                for (id, intersecting) in entries {
                    next.observe(&id, intersecting);
                }
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
        }
    }
}

struct SectionObserver {
    observer: IntersectionObserver,
    watched: usize,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// How many of the requested sections were in the document.
    fn watched(&self) -> usize {
        self.watched
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_sections(
    sections: &[Section],
    options: &ObserverOptions,
    on_batch: impl Fn(Vec<(String, bool)>) + 'static,
) -> Option<SectionObserver> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let observed: Vec<(String, bool)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| (entry.target().id(), entry.is_intersecting()))
            .collect();
        on_batch(observed);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());
    init.set_threshold(&JsValue::from_f64(0.0));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    let mut watched = 0;
    for section in sections {
        match document.get_element_by_id(section.id) {
            Some(element) => {
                observer.observe(&element);
                watched += 1;
            }
            None => log::debug!("section #{} not in the document, skipping", section.id),
        }
    }

    Some(SectionObserver { observer, watched, _callback: callback })
}

/// Track `sections` with the given viewport inset for as long as the calling
/// component is mounted. Sections are looked up again whenever `key`
/// changes, so a component that outlives page swaps (the nav bar) can pass
/// the current route and pick up sections rendered after it mounted.
/// Visibility already recorded is kept across lookups.
#[hook]
pub fn use_viewport_observer<K>(sections: &'static [Section], options: ObserverOptions, key: K) -> ViewState
where
    K: PartialEq + 'static,
{
    let state = use_reducer_eq(|| ViewState::new(sections));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = observe_sections(sections, &options, move |batch| {
                    dispatcher.dispatch(ViewAction::Observed(batch))
                });
                if let Some(observer) = &observer {
                    log::debug!("observing {} of {} sections", observer.watched(), sections.len());
                }
                move || drop(observer)
            },
            key,
        );
    }

    (*state).clone()
}

/// Whether section `id` has been revealed, according to the nearest
/// [`ViewState`] context. Without a provider everything counts as revealed.
#[hook]
pub fn use_revealed(id: &'static str) -> bool {
    use_context::<ViewState>()
        .map(|view| view.is_visible(id))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;

    #[test]
    fn root_margins_render_as_css() {
        assert_eq!(ObserverOptions::navigation().root_margin(), "-40% 0px -55% 0px");
        assert_eq!(ObserverOptions::reveal().root_margin(), "-100px -100px -100px -100px");
    }

    #[test]
    fn starts_with_nothing_visible() {
        let view = ViewState::new(SECTIONS);
        assert!(SECTIONS.iter().all(|s| !view.is_visible(s.id)));
        assert_eq!(view.active(), None);
    }

    #[test]
    fn visibility_never_resets() {
        let mut view = ViewState::new(SECTIONS);
        view.observe("about", true);
        assert!(view.is_visible("about"));

        view.observe("about", false);
        view.observe("skills", true);
        view.observe("skills", false);
        assert!(view.is_visible("about"));
        assert!(view.is_visible("skills"));
    }

    #[test]
    fn active_is_last_intersecting_section() {
        let mut view = ViewState::new(SECTIONS);
        view.observe("about", true);
        view.observe("projects", true);
        assert!(view.is_active("projects"));

        // Leaving does not clear the active section.
        view.observe("projects", false);
        assert_eq!(view.active(), Some("projects"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut view = ViewState::new(SECTIONS);
        view.observe("blog", true);
        assert_eq!(view, ViewState::new(SECTIONS));
        assert!(!view.is_visible("blog"));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let view = Rc::new(ViewState::new(SECTIONS));
        let next = view.clone().reduce(ViewAction::Observed(vec![("about".into(), false)]));
        assert!(Rc::ptr_eq(&view, &next));

        let next = view.clone().reduce(ViewAction::Observed(vec![
            ("about".into(), true),
            ("contact".into(), true),
        ]));
        assert!(next.is_visible("about"));
        assert!(next.is_active("contact"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_accepts_root_margins() {
        for options in [ObserverOptions::navigation(), ObserverOptions::reveal()] {
            let callback = Closure::wrap(
                Box::new(|_: Array, _: IntersectionObserver| {}) as Box<dyn FnMut(Array, IntersectionObserver)>
            );
            let init = IntersectionObserverInit::new();
            init.set_root_margin(&options.root_margin());
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
            assert!(observer.is_ok(), "rejected {}", options.root_margin());
        }
    }

    #[wasm_bindgen_test]
    async fn sections_rendered_later_are_picked_up_on_the_next_lookup() {
        use std::cell::RefCell;
        use gloo_timers::future::TimeoutFuture;
        use crate::content::SECTIONS;

        // Nothing rendered yet, as on the 404 page.
        let empty = observe_sections(SECTIONS, &ObserverOptions::navigation(), |_| {});
        assert_eq!(empty.map(|o| o.watched()), Some(0));

        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("about");
        section.set_attribute("style", "height: 100vh").unwrap();
        body.prepend_with_node_1(&section).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer = {
            let seen = seen.clone();
            observe_sections(SECTIONS, &ObserverOptions::navigation(), move |batch| {
                seen.borrow_mut().extend(batch)
            })
        }
        .unwrap();
        assert_eq!(observer.watched(), 1);

        TimeoutFuture::new(100).await;
        assert!(seen.borrow().contains(&("about".to_string(), true)));

        drop(observer);
        section.remove();
    }
}
