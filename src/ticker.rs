// Owned handles for the repeating passes. Nothing re-arms itself behind
// the owner's back: whoever holds the handle decides when a task pauses,
// resumes, or stops for good.

use std::time::{Duration, Instant};

/// A repeating task handle. `tick` reports whether the task is due at the
/// given instant and re-arms it; `stop` ends it for good, `toggle` pauses
/// and resumes.
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
    running: bool,
    stopped: bool,
}

impl Ticker {
    /// Due once every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: None,
            running: true,
            stopped: false,
        }
    }

    /// Due on every call while running. Models the frame-synchronized pass.
    pub fn every_frame() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_running(&self) -> bool {
        self.running && !self.stopped
    }

    /// Pause or resume. A resumed ticker is due again after one full
    /// period, not immediately.
    pub fn toggle(&mut self) {
        if self.stopped {
            return;
        }
        self.running = !self.running;
        self.next = None;
    }

    /// Stop permanently. A stopped ticker is never due again.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// True when the task should run at `now`. The first call after
    /// construction or resume arms the schedule and fires immediately for
    /// an every-frame ticker, after one period otherwise.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.next {
            None => {
                self.next = Some(now + self.period);
                // An interval task waits out its first period; a per-frame
                // task is due right away.
                self.period.is_zero()
            }
            Some(next) if now >= next => {
                self.next = Some(now + self.period);
                true
            }
            Some(_) => false,
        }
    }
}
