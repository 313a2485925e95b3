//! One-shot dwell timers, polled from the UI thread.
//!
//! A [`DwellTimer`] never fires on its own: the event loop hands the
//! current time to [`BorderHost::tick`][1] once per frame, and every
//! pending timer is checked against it there. A timer that is stopped
//! or dropped before its deadline simply never fires.
//!
//! [1]: crate::border::BorderHost::tick

use std::time::{Duration, Instant};

/// A countdown that fires once, unless reset or stopped before it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl DwellTimer {
    /// Creates a new, stopped timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Creates a new timer and starts it immediately.
    pub fn started(interval: Duration, now: Instant) -> Self {
        let mut timer = Self::new(interval);
        timer.start(now);
        timer
    }

    /// The interval the timer counts down.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts the countdown from `now`.
    ///
    /// Starting a timer that is already pending restarts it.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Stops the countdown without firing.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Tests whether the timer is counting down.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, the first time it is called at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_timer_fires_once() {
        let t0 = Instant::now();
        let mut timer = DwellTimer::started(ms(300), t0);

        assert!(!timer.poll(t0 + ms(299)));
        assert!(timer.poll(t0 + ms(300)));
        assert!(!timer.poll(t0 + ms(600)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_timer_restart_and_stop() {
        let t0 = Instant::now();
        let mut timer = DwellTimer::started(ms(300), t0);

        timer.start(t0 + ms(200));
        assert!(!timer.poll(t0 + ms(400)));
        assert!(timer.poll(t0 + ms(500)));

        timer.start(t0 + ms(600));
        timer.stop();
        assert!(!timer.poll(t0 + ms(5000)));
    }
}
