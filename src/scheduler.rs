//! Host-side "next frame" primitives.
//!
//! The clock never sleeps or spawns anything. It asks a [`TickScheduler`] for
//! one future tick at a time and the host calls back into it with a timestamp.

use std::time::{Duration, Instant};

/// Handle for a single scheduled tick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(pub u64);

pub trait TickScheduler {
    /// Request one tick. The host delivers it at its own cadence.
    fn schedule(&mut self) -> TickToken;
    /// Withdraw a request. Unknown or already-delivered tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}

impl<S: TickScheduler + ?Sized> TickScheduler for &mut S {
    fn schedule(&mut self) -> TickToken {
        (**self).schedule()
    }

    fn cancel(&mut self, token: TickToken) {
        (**self).cancel(token)
    }
}

/// Wall-clock scheduler used by the terminal front end.
///
/// Holds at most one armed request and releases it no more often than
/// `interval`. Timestamps are measured from the scheduler's creation.
#[derive(Debug)]
pub struct FrameScheduler {
    origin: Instant,
    interval: Duration,
    next_id: u64,
    armed: Option<TickToken>,
    last_fired: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self::with_origin(Instant::now(), interval)
    }

    pub fn with_origin(origin: Instant, interval: Duration) -> Self {
        Self {
            origin,
            interval,
            next_id: 0,
            armed: None,
            last_fired: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long the host may block before the armed tick is due.
    ///
    /// `None` means nothing is armed and the host can wait on input alone.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.armed?;
        Some(match self.last_fired {
            Some(last) => (last + self.interval).saturating_duration_since(now),
            None => Duration::ZERO,
        })
    }

    /// Consume the armed request if it is due, returning the tick timestamp.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if self.time_until_due(now)? > Duration::ZERO {
            return None;
        }
        self.armed = None;
        self.last_fired = Some(now);
        Some(now.saturating_duration_since(self.origin))
    }
}

impl TickScheduler for FrameScheduler {
    fn schedule(&mut self) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        self.armed = Some(token);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if self.armed == Some(token) {
            self.armed = None;
        }
    }
}

/// Scheduler for tests and scripted runs: records every request and
/// cancellation, and never fires on its own.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickToken>,
    pub requests: usize,
    pub cancelled: Vec<TickToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<TickToken> {
        self.pending
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) -> TickToken {
        self.next_id += 1;
        self.requests += 1;
        let token = TickToken(self.next_id);
        self.pending = Some(token);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
        self.cancelled.push(token);
    }
}
