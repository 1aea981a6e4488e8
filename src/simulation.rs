//! The interface the front end talks to.
//!
//! Velocity and kinematic factors are recomputed from the control on every
//! read; nothing derived is stored.

use std::time::Duration;

use crate::clock::DualClockAnimator;
use crate::relativity::{KinematicFactors, ScaleMode, VelocityControl};
use crate::scheduler::TickScheduler;

pub struct Simulation<S: TickScheduler> {
    control: VelocityControl,
    clock: DualClockAnimator<S>,
}

impl<S: TickScheduler> Simulation<S> {
    pub fn new(mode: ScaleMode, scheduler: S) -> Self {
        Self {
            control: VelocityControl::new(mode),
            clock: DualClockAnimator::new(scheduler),
        }
    }

    pub fn set_control_input(&mut self, x: f64) {
        self.control.set_input(x);
    }

    pub fn nudge(&mut self, delta: f64) {
        self.control.step(delta);
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.control.set_mode(mode);
        log::debug!("scale set to {}", mode.as_str());
    }

    pub fn toggle_scale_mode(&mut self) {
        self.set_scale_mode(self.control.mode().toggled());
    }

    pub fn start(&mut self) {
        self.clock.start();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn reset(&mut self) {
        self.clock.reset();
    }

    pub fn toggle_running(&mut self) {
        if self.clock.is_running() {
            self.clock.pause();
        } else {
            self.clock.start();
        }
    }

    pub fn tick(&mut self, now: Duration) {
        self.clock.tick(now);
    }

    pub fn control_input(&self) -> f64 {
        self.control.input()
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.control.mode()
    }

    pub fn velocity(&self) -> f64 {
        self.control.velocity()
    }

    pub fn kinematic_factors(&self) -> KinematicFactors {
        KinematicFactors::compute(self.velocity())
    }

    pub fn elapsed_stationary_seconds(&self) -> f64 {
        self.clock.elapsed_stationary_seconds()
    }

    pub fn moving_observer_seconds(&self) -> f64 {
        self.clock
            .moving_observer_seconds(self.kinematic_factors().time_dilation)
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Length of a ruler with the given rest length, as the stationary
    /// observer measures it.
    pub fn contracted_length(&self, proper_length: f64) -> f64 {
        proper_length * self.kinematic_factors().length_contraction
    }

    pub fn clock(&self) -> &DualClockAnimator<S> {
        &self.clock
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.clock.scheduler_mut()
    }
}
