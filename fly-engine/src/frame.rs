use std::time::Instant;

#[derive(Copy, Clone, Debug)]
/// Owns the timing state of the frame loop.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Returns the seconds elapsed since the previous tick (or since
    /// construction) and restarts the measurement.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta_seconds = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta_seconds
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::FrameClock;

    #[test]
    fn ticks_report_non_negative_elapsed_time() {
        let mut clock = FrameClock::new();

        assert!(clock.tick() >= 0.0);
        assert!(clock.tick() >= 0.0);
    }

    #[test]
    fn ticks_measure_the_time_in_between() {
        let mut clock = FrameClock::new();

        std::thread::sleep(Duration::from_millis(5));

        assert!(clock.tick() >= 0.005);
    }
}
