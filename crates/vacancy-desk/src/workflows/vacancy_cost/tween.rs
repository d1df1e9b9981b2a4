use std::time::Duration;

pub const DEFAULT_TWEEN_DURATION: Duration = Duration::from_millis(800);

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`.
pub fn ease_out_quart(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(4)
}

/// Per-frame interpolation between two already-computed figures.
///
/// Owned by whichever view renders the number; it never touches the estimate
/// it animates towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTween {
    from: f64,
    to: f64,
    duration: Duration,
}

impl NumberTween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Displayed value at `elapsed`, floored to whole units; exactly the target once finished.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        if self.is_finished(elapsed) {
            return self.to.round() as i64;
        }
        let eased = ease_out_quart(self.progress(elapsed));
        (self.from + (self.to - self.from) * eased).floor() as i64
    }

    /// Restart towards `to` from whatever is on screen at `elapsed`.
    pub fn retarget(&self, elapsed: Duration, to: f64) -> Self {
        Self::new(self.value_at(elapsed) as f64, to, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_front_loads_motion() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.9);
    }

    #[test]
    fn tween_starts_at_origin_and_settles_on_target() {
        let tween = NumberTween::new(0.0, 33_750.0, DEFAULT_TWEEN_DURATION);
        assert_eq!(tween.value_at(Duration::ZERO), 0);
        assert!(tween.value_at(Duration::from_millis(400)) > 30_000);
        assert_eq!(tween.value_at(Duration::from_millis(800)), 33_750);
        assert_eq!(tween.value_at(Duration::from_secs(5)), 33_750);
        assert!(tween.is_finished(Duration::from_millis(800)));
    }

    #[test]
    fn tween_animates_downwards() {
        let tween = NumberTween::new(20_000.0, 10_000.0, Duration::from_millis(1200));
        let midway = tween.value_at(Duration::from_millis(300));
        assert!(midway < 20_000 && midway > 10_000);
    }

    #[test]
    fn retarget_continues_from_displayed_value() {
        let tween = NumberTween::new(0.0, 10_000.0, DEFAULT_TWEEN_DURATION);
        let elapsed = Duration::from_millis(200);
        let shown = tween.value_at(elapsed);
        let next = tween.retarget(elapsed, 5_000.0);

        assert_eq!(next.value_at(Duration::ZERO), shown);
        assert_eq!(next.target(), 5_000.0);
    }

    #[test]
    fn settled_tween_is_immediately_finished() {
        let tween = NumberTween::settled(1_234.0);
        assert!(tween.is_finished(Duration::ZERO));
        assert_eq!(tween.value_at(Duration::ZERO), 1_234);
    }
}
