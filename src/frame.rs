use std::time::{Duration, Instant};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Timestamp the frame is integrated at
    pub now: Instant,
    /// Seconds since the previous frame
    pub delta: f32,
}

/// Paces frames at a target rate.
///
/// Ask [`FramePacer::should_request`] whether to request a redraw, call
/// [`FramePacer::begin`] when the frame starts, and hand
/// [`FramePacer::wake_at`] to the event loop. While a requested frame has
/// not started there is no deadline to wake for.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frame_number: u64,
    last_frame: Instant,
    deadline: Instant,
    requested: bool,
}

impl FramePacer {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            frame_number: 0,
            last_frame: start,
            deadline: start + interval,
            requested: false,
        }
    }

    /// Start a frame at `now` and schedule the next deadline
    pub fn begin(&mut self, now: Instant) -> FrameInfo {
        let info = FrameInfo {
            number: self.frame_number,
            now,
            delta: now.saturating_duration_since(self.last_frame).as_secs_f32(),
        };

        self.frame_number += 1;
        self.last_frame = now;
        self.requested = false;
        // a late frame restarts the schedule instead of bursting to catch up
        let next = self.deadline + self.interval;
        self.deadline = if next > now { next } else { now + self.interval };

        info
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// True once per due frame; false again until that frame begins
    pub fn should_request(&mut self, now: Instant) -> bool {
        if self.requested || !self.is_due(now) {
            return false;
        }
        self.requested = true;
        true
    }

    /// Forget a request the platform will not serve, e.g. while occluded
    pub fn cancel_request(&mut self) {
        self.requested = false;
    }

    /// Instant to wake the event loop at, or None while a frame is pending
    pub fn wake_at(&self) -> Option<Instant> {
        if self.requested {
            None
        } else {
            Some(self.deadline)
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}
