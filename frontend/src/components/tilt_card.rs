use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::prelude::*;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::frame::{frame_delta, FrameLoop};
use crate::pointer::{normalized_offset, tilt_target, Bounds, Point, Tilt, TiltConfig};
use crate::spring::{Spring, SpringConfig};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub config: TiltConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

struct TiltMotion {
    rotate_x: Spring,
    rotate_y: Spring,
    hovered: bool,
    last_frame: Option<f64>,
}

impl TiltMotion {
    fn new() -> Self {
        Self {
            rotate_x: Spring::new(0.0, SpringConfig::tilt()),
            rotate_y: Spring::new(0.0, SpringConfig::tilt()),
            hovered: false,
            last_frame: None,
        }
    }

    fn aim(&mut self, tilt: Tilt) {
        self.rotate_x.set_target(tilt.rotate_x);
        self.rotate_y.set_target(tilt.rotate_y);
    }

    fn at_rest(&self) -> bool {
        !self.hovered && self.rotate_x.is_settled() && self.rotate_y.is_settled()
    }
}

/// Card that leans toward the pointer and springs flat again when it leaves.
/// The frame loop only runs while the card is moving.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    let motion = use_mut_ref(TiltMotion::new);
    let frames = use_mut_ref(|| None::<FrameLoop>);

    let ensure_running = {
        let card_ref = card_ref.clone();
        let motion = motion.clone();
        let frames = frames.clone();
        move || {
            if frames.borrow().is_some() {
                return;
            }
            motion.borrow_mut().last_frame = None;
            let card_ref = card_ref.clone();
            let motion = motion.clone();
            let slot: Weak<RefCell<Option<FrameLoop>>> = Rc::downgrade(&frames);
            let handle = FrameLoop::start(move |timestamp| {
                let mut m = motion.borrow_mut();
                let dt = frame_delta(&mut m.last_frame, timestamp);
                let tilt = Tilt {
                    rotate_x: m.rotate_x.step(dt),
                    rotate_y: m.rotate_y.step(dt),
                };
                if let Some(card) = card_ref.cast::<HtmlElement>() {
                    let _ = card.style().set_property("transform", &tilt.css());
                }
                if m.at_rest() {
                    // Clear the handle so the next hover starts a fresh loop.
                    if let Some(slot) = slot.upgrade() {
                        if let Ok(mut slot) = slot.try_borrow_mut() {
                            slot.take();
                        }
                    }
                    return false;
                }
                true
            });
            *frames.borrow_mut() = Some(handle);
        }
    };

    let onmouseenter = {
        let motion = motion.clone();
        let ensure_running = ensure_running.clone();
        Callback::from(move |_: MouseEvent| {
            motion.borrow_mut().hovered = true;
            ensure_running();
        })
    };

    let onmousemove = {
        let motion = motion.clone();
        let card_ref = card_ref.clone();
        let config = props.config;
        let ensure_running = ensure_running.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let bounds = Bounds::from(card.get_bounding_client_rect());
            let pointer = Point::new(e.client_x() as f64, e.client_y() as f64);
            motion
                .borrow_mut()
                .aim(tilt_target(normalized_offset(pointer, bounds), config));
            ensure_running();
        })
    };

    let onmouseleave = {
        let motion = motion.clone();
        Callback::from(move |_: MouseEvent| {
            let mut m = motion.borrow_mut();
            m.hovered = false;
            m.aim(Tilt::default());
            drop(m);
            ensure_running();
        })
    };

    {
        let frames = frames.clone();
        use_effect_with_deps(move |_| move || drop(frames.borrow_mut().take()), ());
    }

    html! {
        <div
            ref={card_ref}
            class={classes!("tilt-card", props.class.clone())}
            style={props.style.clone()}
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
