use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented frames and reports the average rate about once a second.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    last_record: Instant,
    frames_since_record: u32,
}

impl FpsCounter {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_record: now,
            frames_since_record: 0,
        }
    }

    /// Counts one frame. Returns the rate when a full interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames_since_record += 1;

        let elapsed = now.saturating_duration_since(self.last_record);
        if elapsed < REPORT_INTERVAL {
            return None;
        }

        let fps = f64::from(self.frames_since_record) / elapsed.as_secs_f64();
        self.last_record = now;
        self.frames_since_record = 0;

        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_one_second() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);

        for i in 1..30 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 33)), None);
        }

        let fps = counter.tick(start + Duration::from_secs(1));
        assert_eq!(fps, Some(30.0));
    }

    #[test]
    fn resets_after_report() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        counter.tick(start + Duration::from_secs(2));

        assert_eq!(counter.tick(start + Duration::from_millis(2_500)), None);
        assert_eq!(counter.tick(start + Duration::from_secs(3)), Some(2.0));
    }
}
