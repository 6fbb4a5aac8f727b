//! Eased animation of the scroll offset toward a marker.

use std::time::{Duration, Instant};

use crate::math;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SnapAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl SnapAnimation {
    pub(crate) fn new(from: f64, to: f64, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub(crate) fn target(&self) -> f64 {
        self.to
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Offset at `now`; lands exactly on the target once finished.
    pub(crate) fn offset_at(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return self.to;
        }
        math::lerp(self.from, self.to, math::ease_out_cubic(self.progress(now)))
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_from_start_to_target() {
        let t0 = Instant::now();
        let anim = SnapAnimation::new(10.0, 42.0, t0, Duration::from_millis(100));
        assert_eq!(anim.offset_at(t0), 10.0);
        let mid = anim.offset_at(t0 + Duration::from_millis(50));
        assert!(mid > 26.0 && mid < 42.0, "ease-out leads linear, got {mid}");
        assert!(!anim.is_finished(t0 + Duration::from_millis(99)));
        assert!(anim.is_finished(t0 + Duration::from_millis(100)));
        assert_eq!(anim.offset_at(t0 + Duration::from_secs(5)), 42.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let anim = SnapAnimation::new(0.0, 32.0, t0, Duration::ZERO);
        assert!(anim.is_finished(t0));
        assert_eq!(anim.offset_at(t0), 32.0);
        assert_eq!(anim.target(), 32.0);
    }
}
