//! Closed-loop frame limiter.
//!
//! Each frame sleeps until `1000 / fps - overshoot` milliseconds have passed
//! since the previous frame, then measures how far the sleep overran and
//! carries that into the next frame's target. Late frames do not sleep and
//! let the correction decay instead of dropping it.

use std::time::{Duration, Instant};

use crate::core::pacing::clock::{Clock, SystemClock};

const OVERSHOOT_DECAY: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaceOutcome {
    Slept { target_ms: f64, actual_ms: f64 },
    Late { elapsed_ms: f64 },
}

#[derive(Debug)]
pub struct FramePacer<C: Clock = SystemClock> {
    clock: C,
    last_frame: Instant,
    overshoot_ms: f64,
}

impl FramePacer<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FramePacer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FramePacer<C> {
    pub fn with_clock(clock: C) -> Self {
        let last_frame = clock.now();
        Self {
            clock,
            last_frame,
            overshoot_ms: 0.0,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn overshoot_ms(&self) -> f64 {
        self.overshoot_ms
    }

    /// Runs one pacing step. Call once per frame, right after present.
    pub fn pace(&mut self, target_fps: u32) -> PaceOutcome {
        let target_ms = 1000.0 / f64::from(target_fps.max(1)) - self.overshoot_ms;
        let now = self.clock.now();
        let elapsed_ms = millis(now.saturating_duration_since(self.last_frame));

        if elapsed_ms <= target_ms {
            let deadline = self.last_frame + Duration::from_secs_f64(target_ms.max(0.0) / 1000.0);
            self.clock.sleep_until(deadline);

            let after_sleep = self.clock.now();
            let actual_ms = millis(after_sleep.saturating_duration_since(self.last_frame));
            self.overshoot_ms = actual_ms - target_ms;
            self.last_frame = after_sleep;

            PaceOutcome::Slept {
                target_ms,
                actual_ms,
            }
        } else {
            self.last_frame = now;
            self.overshoot_ms *= OVERSHOOT_DECAY;

            PaceOutcome::Late { elapsed_ms }
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Manual clock whose sleeps overrun their deadline by a fixed amount.
    struct FakeClock {
        now: Cell<Instant>,
        oversleep: Duration,
        sleeps: Cell<u32>,
    }

    impl FakeClock {
        fn new(oversleep: Duration) -> Self {
            Self {
                now: Cell::new(Instant::now()),
                oversleep,
                sleeps: Cell::new(0),
            }
        }

        fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for &FakeClock {
        fn now(&self) -> Instant {
            self.now.get()
        }

        fn sleep_until(&self, deadline: Instant) {
            self.sleeps.set(self.sleeps.get() + 1);
            if deadline > self.now.get() {
                self.now.set(deadline + self.oversleep);
            }
        }
    }

    const SIXTY_FPS_MS: f64 = 1000.0 / 60.0;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn early_frame_sleeps_and_records_overshoot() {
        let clock = FakeClock::new(Duration::from_micros(3_333));
        let mut pacer = FramePacer::with_clock(&clock);

        let outcome = pacer.pace(60);

        assert_eq!(clock.sleeps.get(), 1);
        assert!(matches!(outcome, PaceOutcome::Slept { .. }));
        assert!(pacer.overshoot_ms() > 0.0);
        assert!(approx(pacer.overshoot_ms(), 3.333));
    }

    #[test]
    fn overshoot_shrinks_next_sleep_target() {
        let clock = FakeClock::new(Duration::from_micros(3_333));
        let mut pacer = FramePacer::with_clock(&clock);
        pacer.pace(60);

        let outcome = pacer.pace(60);

        match outcome {
            PaceOutcome::Slept {
                target_ms,
                actual_ms,
            } => {
                assert!(approx(target_ms, SIXTY_FPS_MS - 3.333));
                assert!(approx(actual_ms, SIXTY_FPS_MS));
            }
            PaceOutcome::Late { .. } => panic!("frame should not be late"),
        }
    }

    #[test]
    fn late_frame_decays_overshoot_without_sleeping() {
        let clock = FakeClock::new(Duration::from_micros(3_333));
        let mut pacer = FramePacer::with_clock(&clock);
        pacer.pace(60);
        let before = pacer.overshoot_ms();

        clock.advance(Duration::from_millis(30));
        let outcome = pacer.pace(60);

        assert!(matches!(outcome, PaceOutcome::Late { .. }));
        assert_eq!(clock.sleeps.get(), 1);
        assert!(approx(pacer.overshoot_ms(), before * 0.9));
        assert!(pacer.overshoot_ms() > 0.0);
    }

    #[test]
    fn exact_sleep_leaves_no_overshoot() {
        let clock = FakeClock::new(Duration::ZERO);
        let mut pacer = FramePacer::with_clock(&clock);

        pacer.pace(100);

        assert!(approx(pacer.overshoot_ms(), 0.0));
    }

    #[test]
    fn late_frame_restarts_timing_from_now() {
        let clock = FakeClock::new(Duration::ZERO);
        let mut pacer = FramePacer::with_clock(&clock);

        clock.advance(Duration::from_millis(50));
        pacer.pace(60);

        // The next frame is measured from the late frame, so it sleeps a full period.
        let outcome = pacer.pace(60);
        assert!(matches!(
            outcome,
            PaceOutcome::Slept { actual_ms, .. } if approx(actual_ms, SIXTY_FPS_MS)
        ));
    }
}
