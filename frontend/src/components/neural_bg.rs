use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use yew::prelude::*;
use gloo_events::EventListener;
use plotters::prelude::{Circle, Color, IntoDrawingArea, PathElement, RGBAColor, RGBColor};
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::background::{scene_angles, Camera, NeuralScene, SceneConfig, Vec3};
use crate::frame::FrameLoop;
use crate::pointer::Point;

const MAX_PIXEL_RATIO: f64 = 1.5;

const CLOUD: RGBAColor = RGBAColor(59, 130, 246, 0.6);
const LINK: RGBAColor = RGBAColor(139, 92, 246, 0.12);
const NODE: RGBAColor = RGBAColor(6, 182, 212, 0.8);
const SPHERE: [RGBColor; 3] = [RGBColor(59, 130, 246), RGBColor(139, 92, 246), RGBColor(6, 182, 212)];

fn fit_to_window(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let ratio = window.device_pixel_ratio().min(MAX_PIXEL_RATIO);
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);
}

/// Pointer in normalised device coordinates, y up.
fn to_device(event: &MouseEvent) -> Point {
    let Some(window) = web_sys::window() else {
        return Point::default();
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(1.0).max(1.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(1.0).max(1.0);
    Point::new(
        event.client_x() as f64 / width * 2.0 - 1.0,
        -(event.client_y() as f64 / height * 2.0 - 1.0),
    )
}

fn draw(
    canvas: &HtmlCanvasElement,
    scene: &NeuralScene,
    elapsed: f64,
    pointer: Point,
) -> Result<(), Box<dyn Error>> {
    let Some(backend) = CanvasBackend::with_canvas_object(canvas.clone()) else {
        return Ok(());
    };
    let root = backend.into_drawing_area();
    root.fill(&RGBColor(2, 8, 23))?;

    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
    let camera = Camera::default();
    let angles = scene_angles(elapsed, pointer.x, pointer.y);
    let project = |p: Vec3, (rx, ry): (f64, f64)| camera.project(p.rotated(rx, ry), width, height);
    let px = |v: f64| v.round() as i32;

    for node in &scene.cloud {
        if let Some(p) = project(*node, angles.cloud) {
            let radius = (0.03 * p.scale).max(1.0);
            root.draw(&Circle::new((px(p.x), px(p.y)), px(radius), CLOUD.filled()))?;
        }
    }

    let mesh: Vec<_> = scene.mesh.iter().map(|node| project(*node, angles.mesh)).collect();
    for &(a, b) in &scene.links {
        if let (Some(from), Some(to)) = (mesh[a], mesh[b]) {
            root.draw(&PathElement::new(
                vec![(px(from.x), px(from.y)), (px(to.x), px(to.y))],
                LINK.stroke_width(1),
            ))?;
        }
    }
    for p in mesh.iter().flatten() {
        let radius = (0.05 * p.scale).max(1.0);
        root.draw(&Circle::new((px(p.x), px(p.y)), px(radius), NODE.filled()))?;
    }

    for (i, sphere) in scene.spheres.iter().enumerate() {
        let bob = (elapsed * 1.5 + i as f64).sin() * 0.3;
        let centre = Vec3::new(sphere.x, sphere.y + bob, sphere.z);
        if let Some(p) = project(centre, angles.spheres) {
            let color = SPHERE[i % SPHERE.len()];
            let radius = 0.3 * p.scale;
            // Soft halo first, then the core.
            for (grow, alpha) in [(2.2, 0.05), (1.6, 0.1), (1.0, 0.6)] {
                root.draw(&Circle::new(
                    (px(p.x), px(p.y)),
                    px(radius * grow),
                    color.mix(alpha).filled(),
                ))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

/// Full-screen animated canvas behind the hero section.
#[function_component(NeuralBackground)]
pub fn neural_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let scene = NeuralScene::generate(SceneConfig::default(), Math::random);
                let pointer = Rc::new(Cell::new(Point::default()));

                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    fit_to_window(&canvas);
                }

                let listeners = web_sys::window().map(|window| {
                    let on_move = {
                        let pointer = pointer.clone();
                        EventListener::new(&window, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                pointer.set(to_device(event));
                            }
                        })
                    };
                    let on_resize = {
                        let canvas_ref = canvas_ref.clone();
                        EventListener::new(&window, "resize", move |_| {
                            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                                fit_to_window(&canvas);
                            }
                        })
                    };
                    [on_move, on_resize]
                });

                let mut started = None;
                let mut failed = false;
                let frames = FrameLoop::start(move |timestamp| {
                    let start = *started.get_or_insert(timestamp);
                    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                        return true;
                    };
                    if let Err(e) = draw(&canvas, &scene, (timestamp - start) / 1000.0, pointer.get()) {
                        // Log once; a broken context will keep failing.
                        if !failed {
                            log::warn!("neural background draw failed: {}", e);
                            failed = true;
                        }
                    }
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
        <canvas class="neural-bg" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}
