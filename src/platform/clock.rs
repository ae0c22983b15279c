//! Frame pacing

use std::time::{Duration, Instant};

/// Blocks until the next frame boundary. Called exactly once per frame.
pub trait Clock {
    fn wait_for_next_frame(&mut self, frame_rate: u32);
}

/// Sleeps to hold a steady frame rate.
///
/// When a frame overruns, the schedule restarts from now instead of trying
/// to catch up.
#[derive(Debug, Default)]
pub struct FixedRateClock {
    next_frame: Option<Instant>,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FixedRateClock {
    fn wait_for_next_frame(&mut self, frame_rate: u32) {
        let budget = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));
        let now = Instant::now();
        let target = self.next_frame.unwrap_or(now + budget);

        if target > now {
            std::thread::sleep(target - now);
            self.next_frame = Some(target + budget);
        } else {
            log::trace!("Frame overran by {:?}", now - target);
            self.next_frame = Some(now + budget);
        }
    }
}

/// Never blocks; counts frames. For tests and headless runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub frames: u64,
}

impl Clock for ManualClock {
    fn wait_for_next_frame(&mut self, _frame_rate: u32) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_clock_paces_frames() {
        let mut clock = FixedRateClock::new();
        let start = Instant::now();
        for _ in 0..3 {
            clock.wait_for_next_frame(100);
        }
        // three 10ms frames
        assert!(start.elapsed() >= Duration::from_millis(25));
    }

    #[test]
    fn test_manual_clock_counts() {
        let mut clock = ManualClock::default();
        clock.wait_for_next_frame(60);
        clock.wait_for_next_frame(60);
        assert_eq!(clock.frames, 2);
    }
}
