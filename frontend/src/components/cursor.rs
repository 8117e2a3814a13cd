use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::frame::FrameLoop;
use crate::pointer::{is_interactive, smooth_toward, CursorConfig, Point};

fn place(node: &NodeRef, at: Point) {
    if let Some(el) = node.cast::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("transform", &format!("translate3d({}px, {}px, 0)", at.x, at.y));
    }
}

/// Custom cursor: a dot pinned to the pointer and a ring that eases after
/// it. The ring grows over links, buttons and inputs.
#[function_component(Cursor)]
pub fn cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();
    let hovering = use_state_eq(|| false);

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(
            move |_| {
                let config = CursorConfig::default();
                let pointer = Rc::new(Cell::new(Point::default()));
                let window = web_sys::window();

                let listeners = window.map(|window| {
                    let on_move = {
                        let pointer = pointer.clone();
                        let dot_ref = dot_ref.clone();
                        EventListener::new(&window, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                let at = Point::new(event.client_x() as f64, event.client_y() as f64);
                                pointer.set(at);
                                place(&dot_ref, at);
                            }
                        })
                    };
                    let on_over = {
                        let hovering = hovering.clone();
                        EventListener::new(&window, "mouseover", move |event| {
                            if is_interactive(event.target()) {
                                hovering.set(true);
                            }
                        })
                    };
                    let on_out = {
                        let hovering = hovering.clone();
                        EventListener::new(&window, "mouseout", move |event| {
                            if is_interactive(event.target()) {
                                hovering.set(false);
                            }
                        })
                    };
                    [on_move, on_over, on_out]
                });

                let mut ring = Point::default();
                let frames = FrameLoop::start(move |_| {
                    ring = smooth_toward(ring, pointer.get(), config.ring_smoothing);
                    place(&ring_ref, ring);
                    true
                });

                move || {
                    drop(listeners);
                    drop(frames);
                }
            },
            (),
        );
    }

    html! {
        <>
            <div class="cursor-dot" ref={dot_ref}></div>
            <div class={classes!("cursor-ring", (*hovering).then(|| "hovering"))} ref={ring_ref}></div>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use crate::pointer::is_interactive;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn spans_inside_links_count_as_interactive() {
        let document = web_sys::window().unwrap().document().unwrap();
        let link = document.create_element("a").unwrap();
        let span = document.create_element("span").unwrap();
        link.append_child(&span).unwrap();
        let plain = document.create_element("p").unwrap();

        assert!(is_interactive(Some(span.unchecked_into())));
        assert!(!is_interactive(Some(plain.unchecked_into())));
        assert!(!is_interactive(None));
    }
}
