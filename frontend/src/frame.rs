use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

type FrameSlot = RefCell<Option<AnimationFrame>>;
type FrameCallback = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// A `requestAnimationFrame` loop. The callback gets the frame timestamp in
/// milliseconds and returns whether it wants another frame. Dropping the
/// handle cancels the pending frame.
pub struct FrameLoop {
    _slot: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let slot: Rc<FrameSlot> = Rc::new(RefCell::new(None));
        let on_frame: FrameCallback = Rc::new(RefCell::new(on_frame));
        schedule(Rc::downgrade(&slot), on_frame);
        Self { _slot: slot }
    }
}

fn schedule(slot: Weak<FrameSlot>, on_frame: FrameCallback) {
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |timestamp| {
        // Slot gone means the loop was dropped between frames.
        if slot.upgrade().is_none() {
            return;
        }
        let keep_going = {
            let mut callback = on_frame.borrow_mut();
            (&mut *callback)(timestamp)
        };
        if keep_going {
            schedule(slot, on_frame);
        }
    });
    *strong.borrow_mut() = Some(handle);
}

/// Seconds between two frame timestamps, 0 on the first frame.
pub fn frame_delta(last: &mut Option<f64>, timestamp: f64) -> f64 {
    let dt = match *last {
        Some(previous) => ((timestamp - previous) / 1000.0).max(0.0),
        None => 0.0,
    };
    *last = Some(timestamp);
    dt
}

#[cfg(test)]
mod tests {
    use super::frame_delta;

    #[test]
    fn delta_starts_at_zero_and_tracks_timestamps() {
        let mut last = None;
        assert_eq!(frame_delta(&mut last, 1000.0), 0.0);
        assert!((frame_delta(&mut last, 1016.0) - 0.016).abs() < 1e-12);
        assert_eq!(frame_delta(&mut last, 900.0), 0.0);
    }
}
