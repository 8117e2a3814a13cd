//! Critically damped spring used wherever a value has to chase a moving
//! target without snapping: card tilt and the scroll progress bar.
//!
//! The step uses the closed-form solution of the critically damped
//! oscillator, so advancing by `dt` once gives the same result as advancing
//! by `dt / 2` twice. Frame drops change nothing but the sampling.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Card tilt.
    pub const fn tilt() -> Self {
        Self { stiffness: 150.0, mass: 1.0 }
    }

    /// Scroll progress bar.
    pub const fn progress() -> Self {
        Self { stiffness: 100.0, mass: 1.0 }
    }

    fn angular_frequency(&self) -> f64 {
        if self.mass <= 0.0 || self.stiffness <= 0.0 {
            return 0.0;
        }
        (self.stiffness / self.mass).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

const REST_EPSILON: f64 = 1e-3;

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self { value: initial, velocity: 0.0, target: initial, config }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let omega = self.config.angular_frequency();
        if omega == 0.0 {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let offset = self.value - self.target;
        let c2 = self.velocity + omega * offset;
        let decay = (-omega * dt).exp();
        let displacement = (offset + c2 * dt) * decay;

        self.value = self.target + displacement;
        self.velocity = (c2 - omega * (offset + c2 * dt)) * decay;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target_without_overshoot() {
        let mut spring = Spring::new(0.0, SpringConfig::tilt());
        spring.set_target(15.0);
        let mut last = 0.0;
        for _ in 0..240 {
            let v = spring.step(1.0 / 60.0);
            assert!(v <= 15.0 + 1e-9, "overshot to {v}");
            assert!(v >= last - 1e-9, "moved backwards");
            last = v;
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 15.0);
    }

    #[test]
    fn first_frame_does_not_jump() {
        let mut spring = Spring::new(0.0, SpringConfig::tilt());
        spring.set_target(15.0);
        let v = spring.step(1.0 / 60.0);
        assert!(v > 0.0 && v < 3.0, "jumped to {v}");
    }

    #[test]
    fn frame_rate_independent() {
        let mut coarse = Spring::new(0.0, SpringConfig::progress());
        let mut fine = coarse;
        coarse.set_target(1.0);
        fine.set_target(1.0);

        for _ in 0..10 {
            coarse.step(1.0 / 30.0);
            fine.step(1.0 / 60.0);
            fine.step(1.0 / 60.0);
        }
        assert!((coarse.value() - fine.value()).abs() < 1e-9);
    }

    #[test]
    fn ignores_bad_input() {
        let mut spring = Spring::new(2.0, SpringConfig::progress());
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 2.0);
        assert_eq!(spring.step(-1.0), 2.0);
        assert_eq!(spring.step(f64::INFINITY), 2.0);
    }
}
