use web_sys::{DomRect, Element, EventTarget};
use wasm_bindgen::JsCast;

/// Anything the cursor ring should grow over.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [data-cursor=\"hover\"], .magnetic-btn";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    /// Share of the remaining distance the ring covers each frame.
    pub ring_smoothing: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { ring_smoothing: 0.12 }
    }
}

/// One frame of ring easing toward the pointer.
pub fn smooth_toward(current: Point, target: Point, k: f64) -> Point {
    Point {
        x: current.x + (target.x - current.x) * k,
        y: current.y + (target.y - current.y) * k,
    }
}

/// Whether the event target sits inside an interactive element.
pub fn is_interactive(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<DomRect> for Bounds {
    fn from(rect: DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Pointer position relative to the element's centre, each axis in
/// [-0.5, 0.5]. A zero-sized element reports the centre.
pub fn normalized_offset(pointer: Point, bounds: Bounds) -> Point {
    let axis = |pos: f64, start: f64, size: f64| {
        if size <= 0.0 || !size.is_finite() {
            return 0.0;
        }
        ((pos - start) / size - 0.5).clamp(-0.5, 0.5)
    };
    Point {
        x: axis(pointer.x, bounds.left, bounds.width),
        y: axis(pointer.y, bounds.top, bounds.height),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_degrees: f64,
}

impl TiltConfig {
    /// Project cards.
    pub const fn card() -> Self {
        Self { max_degrees: 15.0 }
    }

    /// Education cards.
    pub const fn subtle() -> Self {
        Self { max_degrees: 6.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn css(&self) -> String {
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Top edge tips toward the viewer, right edge tips away: y offset -0.5..0.5
/// maps to rotateX +max..-max, x offset -0.5..0.5 to rotateY -max..+max.
pub fn tilt_target(offset: Point, config: TiltConfig) -> Tilt {
    let scale = config.max_degrees * 2.0;
    Tilt {
        rotate_x: -offset.y * scale,
        rotate_y: offset.x * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn ring_covers_twelve_percent_per_frame() {
        let next = smooth_toward(Point::new(0.0, 0.0), Point::new(100.0, -50.0), CursorConfig::default().ring_smoothing);
        assert!((next.x - 12.0).abs() < 1e-9);
        assert!((next.y + 6.0).abs() < 1e-9);
    }

    #[test]
    fn ring_converges_on_still_pointer() {
        let target = Point::new(300.0, 200.0);
        let mut ring = Point::default();
        for _ in 0..200 {
            ring = smooth_toward(ring, target, 0.12);
        }
        assert!((ring.x - target.x).abs() < 1e-6);
        assert!((ring.y - target.y).abs() < 1e-6);
    }

    #[test]
    fn offset_is_centred() {
        assert_eq!(normalized_offset(Point::new(200.0, 100.0), CARD), Point::new(0.0, 0.0));
        assert_eq!(normalized_offset(Point::new(100.0, 50.0), CARD), Point::new(-0.5, -0.5));
        assert_eq!(normalized_offset(Point::new(300.0, 150.0), CARD), Point::new(0.5, 0.5));
    }

    #[test]
    fn offset_is_clamped_and_safe_on_empty_bounds() {
        assert_eq!(normalized_offset(Point::new(1000.0, -1000.0), CARD), Point::new(0.5, -0.5));
        let empty = Bounds { left: 0.0, top: 0.0, width: 0.0, height: 0.0 };
        assert_eq!(normalized_offset(Point::new(5.0, 5.0), empty), Point::new(0.0, 0.0));
    }

    #[test]
    fn tilt_maps_corners_to_max_angles() {
        let cfg = TiltConfig::card();
        let top_left = tilt_target(Point::new(-0.5, -0.5), cfg);
        assert_eq!(top_left, Tilt { rotate_x: 15.0, rotate_y: -15.0 });
        let bottom_right = tilt_target(Point::new(0.5, 0.5), cfg);
        assert_eq!(bottom_right, Tilt { rotate_x: -15.0, rotate_y: 15.0 });
    }

    #[test]
    fn centre_means_no_tilt() {
        let flat = tilt_target(Point::default(), TiltConfig::subtle());
        assert_eq!(flat.rotate_x, 0.0);
        assert_eq!(flat.rotate_y, 0.0);
    }
}
