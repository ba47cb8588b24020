/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval in seconds
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Accumulate delta, returns true once the interval has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

/// Averages frame rate over a reporting window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    window: Throttled,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(report_interval: f32) -> Self {
        Self {
            window: Throttled::new(report_interval),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the fresh average when a window closes
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if !self.window.try_tick(delta) {
            return None;
        }

        self.fps = if self.elapsed > 0.0 {
            self.frames as f32 / self.elapsed
        } else {
            0.0
        };
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last reported average
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(0.1);

        assert!(!timer.try_tick(0.05)); // Too soon
        assert!(timer.try_tick(0.06));  // Enough time
        assert!(!timer.try_tick(0.05)); // Restarted
    }

    #[test]
    fn fps_counter_reports_per_window() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..3 {
            assert_eq!(counter.frame(0.25), None);
        }
        let fps = counter.frame(0.25).unwrap();
        assert!((fps - 4.0).abs() < 1e-4);
        assert_eq!(counter.fps(), fps);

        // next window starts empty
        assert_eq!(counter.frame(0.5), None);
    }
}
