/// Frame clock feeding elapsed time into the simulation
///
/// Fixed timestep with an accumulator: the window loop asks how many steps to
/// run this frame and hands `FIXED_TIMESTEP` to each actor update. The core
/// never measures time itself.
use std::time::{Duration, Instant};

/// Simulation step (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667);

/// Upper bound on catch-up steps after a long stall
const MAX_STEPS_PER_FRAME: u32 = 5;

pub struct FrameClock {
    accumulator: Duration,
    last_frame: Instant,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a frame using the wall clock; returns the number of steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(frame_time)
    }

    /// Feed an explicit frame duration; returns the number of steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop whatever is left after a stall instead of bursting next frame
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Frame clock fell behind by {:?}, dropping backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    pub fn timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.step_count(), 0);
        assert!((clock.timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_short_frame_runs_no_step() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_millis(5)), 0);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_accumulates_across_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(clock.step_count(), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::new();
        let steps = clock.advance(Duration::from_millis(300));
        assert_eq!(steps, MAX_STEPS_PER_FRAME);

        // Backlog was dropped, so a tiny frame yields nothing
        assert_eq!(clock.advance(Duration::from_millis(1)), 0);
    }
}
