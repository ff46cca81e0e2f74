//! Hero carousel: auto-advance on a fixed period with manual override.
//!
//! Time is always passed in, so the machine never sleeps or reads the clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Navigation is blocked until the slide transition finishes.
    Transitioning { until: Instant },
}

/// The single pending auto-advance deadline owned by a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerHandle {
    deadline: Instant,
}

impl TimerHandle {
    fn schedule(now: Instant, interval: Duration) -> Self {
        Self {
            deadline: now + interval,
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    phase: Phase,
    interval: Duration,
    transition: Duration,
    timer: Option<TimerHandle>,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, transition: Duration, now: Instant) -> Self {
        let timer = (len > 0).then(|| TimerHandle::schedule(now, interval));
        Self {
            len,
            current: 0,
            phase: Phase::Idle,
            interval,
            transition,
            timer,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_transitioning(&mut self, now: Instant) -> bool {
        self.settle(now);
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Timer callback. Advances one slide when the interval has elapsed and no
    /// transition is in flight. Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.settle(now);

        let due = match self.timer {
            Some(timer) => timer.is_due(now),
            None => return false,
        };
        if !due || self.phase != Phase::Idle {
            return false;
        }

        let next = (self.current + 1) % self.len;
        self.move_to(next, now);
        tracing::trace!(slide = self.current, "carousel auto-advanced");
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = (self.current + 1) % self.len;
        self.navigate(target, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = (self.current + self.len - 1) % self.len;
        self.navigate(target, now)
    }

    /// Jump to `index` (taken modulo the slide count).
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = index % self.len;
        if target == self.current {
            return false;
        }
        self.navigate(target, now)
    }

    /// Elapsed fraction of the current interval, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(timer) = self.timer else {
            return 0.0;
        };
        if self.interval.is_zero() {
            return 1.0;
        }
        let remaining = timer.deadline.saturating_duration_since(now);
        let elapsed = self.interval.saturating_sub(remaining);
        (elapsed.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Cancel the auto-advance timer. Later ticks do nothing; manual
    /// navigation still works while the view is alive.
    pub fn teardown(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!("carousel timer cancelled");
        }
    }

    fn navigate(&mut self, target: usize, now: Instant) -> bool {
        if self.is_transitioning(now) {
            return false;
        }
        self.move_to(target, now);
        true
    }

    fn move_to(&mut self, target: usize, now: Instant) {
        self.current = target;
        self.phase = Phase::Transitioning {
            until: now + self.transition,
        };
        if self.timer.is_some() {
            self.timer = Some(TimerHandle::schedule(now, self.interval));
        }
    }

    fn settle(&mut self, now: Instant) {
        if let Phase::Transitioning { until } = self.phase {
            if now >= until {
                self.phase = Phase::Idle;
            }
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}
