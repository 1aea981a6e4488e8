//! Dual stopwatch driven by host ticks.
//!
//! Only stationary-frame time is accumulated. Moving-frame time is always
//! derived on read from whatever dilation factor is current, so changing
//! velocity mid-run changes the moving clock's rate without a jump.

use std::time::Duration;

use crate::scheduler::{TickScheduler, TickToken};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockState {
    /// Seconds on the stationary observer's clock. Never decreases while running.
    pub elapsed_stationary: f64,
    pub running: bool,
    /// Baseline for the next delta. Only set while running.
    pub last_tick: Option<Duration>,
}

/// Start/Pause/Reset/Tick state machine over [`ClockState`].
///
/// Misordered calls (start while running, pause while idle, a tick arriving
/// after pause) are ignored rather than reported.
pub struct DualClockAnimator<S: TickScheduler> {
    state: ClockState,
    scheduler: S,
    pending: Option<TickToken>,
}

impl<S: TickScheduler> DualClockAnimator<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: ClockState::default(),
            scheduler,
            pending: None,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn elapsed_stationary_seconds(&self) -> f64 {
        self.state.elapsed_stationary
    }

    /// Time shown by the moving observer's clock for the given dilation.
    pub fn moving_observer_seconds(&self, time_dilation: f64) -> f64 {
        self.state.elapsed_stationary / time_dilation
    }

    pub fn pending_tick(&self) -> Option<TickToken> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        if self.state.running {
            log::trace!("start ignored: clock already running");
            return;
        }
        self.state.running = true;
        // The first tick after start sets a fresh baseline.
        self.state.last_tick = None;
        self.request_tick();
        log::debug!(
            "clock started at {:.3}s stationary",
            self.state.elapsed_stationary
        );
    }

    pub fn pause(&mut self) {
        if !self.state.running {
            log::trace!("pause ignored: clock idle");
            return;
        }
        self.state.running = false;
        self.state.last_tick = None;
        self.cancel_pending();
        log::debug!(
            "clock paused at {:.3}s stationary",
            self.state.elapsed_stationary
        );
    }

    pub fn reset(&mut self) {
        self.state = ClockState::default();
        self.cancel_pending();
        log::debug!("clock reset");
    }

    /// Deliver a host tick stamped `now`.
    ///
    /// Deltas are applied exactly as reported, however large. A timestamp
    /// behind the baseline contributes nothing but still becomes the new
    /// baseline.
    pub fn tick(&mut self, now: Duration) {
        if !self.state.running {
            log::trace!("stray tick at {:?} ignored: clock idle", now);
            return;
        }
        // The host has consumed the request it is delivering.
        self.pending = None;

        if let Some(last) = self.state.last_tick {
            self.state.elapsed_stationary += now.saturating_sub(last).as_secs_f64();
        }
        self.state.last_tick = Some(now);
        self.request_tick();
    }

    fn request_tick(&mut self) {
        self.cancel_pending();
        self.pending = Some(self.scheduler.schedule());
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }
}

impl<S: TickScheduler> Drop for DualClockAnimator<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
