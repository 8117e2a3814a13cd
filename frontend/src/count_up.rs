#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUpConfig {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl CountUpConfig {
    /// Stats are staggered 200ms apart, starting 500ms after the reveal.
    pub fn staggered(index: usize) -> Self {
        Self {
            delay_ms: 500.0 + 200.0 * index as f64,
            duration_ms: 2000.0,
        }
    }

    pub fn finished_at(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

/// Exponential ease-out, normalised so it lands exactly on 1.
fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
    }
}

/// Counter value `elapsed_ms` after the count was triggered.
pub fn count_up_value(target: u32, elapsed_ms: f64, config: CountUpConfig) -> u32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= config.delay_ms {
        return 0;
    }
    if config.duration_ms <= 0.0 {
        return target;
    }
    let t = ((elapsed_ms - config.delay_ms) / config.duration_ms).min(1.0);
    let value = (ease_out_expo(t) * target as f64).round();
    (value as u32).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_until_delay_passes() {
        let cfg = CountUpConfig::staggered(1);
        assert_eq!(count_up_value(95, 0.0, cfg), 0);
        assert_eq!(count_up_value(95, 700.0, cfg), 0);
    }

    #[test]
    fn lands_on_target() {
        let cfg = CountUpConfig::staggered(0);
        assert_eq!(count_up_value(95, cfg.finished_at(), cfg), 95);
        assert_eq!(count_up_value(95, cfg.finished_at() + 10_000.0, cfg), 95);
    }

    #[test]
    fn never_decreases() {
        let cfg = CountUpConfig::staggered(2);
        let mut last = 0;
        let mut t = 0.0;
        while t < cfg.finished_at() + 100.0 {
            let v = count_up_value(95, t, cfg);
            assert!(v >= last);
            last = v;
            t += 16.0;
        }
        assert_eq!(last, 95);
    }

    #[test]
    fn front_loaded() {
        let cfg = CountUpConfig { delay_ms: 0.0, duration_ms: 2000.0 };
        assert!(count_up_value(100, 500.0, cfg) > 80);
    }
}
