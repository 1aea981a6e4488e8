// End-to-end checks through the public facade, driven by a scripted scheduler.

use std::time::Duration;

use lorentz_lab::relativity::map;
use lorentz_lab::{KinematicFactors, ManualScheduler, ScaleMode, Simulation};

fn lab() -> Simulation<ManualScheduler> {
    Simulation::new(ScaleMode::Linear, ManualScheduler::new())
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn factors_are_reciprocal_and_identity() {
    let mut sim = lab();
    for mode in [ScaleMode::Linear, ScaleMode::Logarithmic] {
        sim.set_scale_mode(mode);
        for i in 0..=20 {
            sim.set_control_input(i as f64 / 20.0);
            let k = sim.kinematic_factors();
            assert!((k.length_contraction * k.gamma - 1.0).abs() < 1e-12);
            assert_eq!(k.time_dilation, k.gamma);
        }
    }
}

#[test]
fn factors_recomputed_on_each_read() {
    let mut sim = lab();
    sim.set_control_input(0.0);
    let slow = sim.kinematic_factors();
    sim.set_control_input(1.0);
    let fast = sim.kinematic_factors();
    assert!(fast.gamma > slow.gamma);
    assert_eq!(fast, KinematicFactors::compute(sim.velocity()));
}

#[test]
fn scale_endpoints() {
    assert!((map(0.0, ScaleMode::Linear) - 0.1).abs() < 1e-12);
    assert!((map(1.0, ScaleMode::Linear) - 0.9).abs() < 1e-12);
    assert!((map(0.5, ScaleMode::Linear) - 0.5).abs() < 1e-12);
    assert!((map(0.0, ScaleMode::Logarithmic) - 0.9).abs() < 1e-12);
    assert!((map(1.0, ScaleMode::Logarithmic) - 0.9999).abs() < 1e-12);
}

#[test]
fn switching_scale_recenters_control() {
    let mut sim = lab();
    sim.set_control_input(0.95);
    sim.set_scale_mode(ScaleMode::Logarithmic);
    assert_eq!(sim.control_input(), 0.5);
    assert_eq!(sim.velocity(), map(0.5, ScaleMode::Logarithmic));
}

#[test]
fn clock_counts_from_first_tick() {
    let mut sim = lab();
    sim.start();
    for t in 0..=3 {
        sim.tick(secs(t));
    }
    assert_eq!(sim.elapsed_stationary_seconds(), 3.0);
    assert!(sim.is_running());
}

#[test]
fn reset_zeroes_at_any_point() {
    let mut sim = lab();
    sim.reset();
    assert_eq!(sim.elapsed_stationary_seconds(), 0.0);
    assert!(!sim.is_running());

    sim.start();
    sim.tick(secs(0));
    sim.tick(secs(5));
    sim.reset();
    assert_eq!(sim.elapsed_stationary_seconds(), 0.0);
    assert!(!sim.is_running());
    assert_eq!(sim.clock().pending_tick(), None);
}

#[test]
fn moving_clock_at_point_six_c() {
    let mut sim = lab();
    // 0.1 + 0.8 * 0.625 = 0.6
    sim.set_control_input(0.625);
    sim.start();
    sim.tick(secs(0));
    sim.tick(secs(10));
    assert_eq!(sim.elapsed_stationary_seconds(), 10.0);
    assert!((sim.kinematic_factors().gamma - 1.25).abs() < 1e-9);
    assert!((sim.moving_observer_seconds() - 8.0).abs() < 1e-9);
}

#[test]
fn stray_tick_after_pause_is_ignored() {
    let mut sim = lab();
    sim.start();
    sim.tick(secs(0));
    sim.tick(secs(4));
    sim.pause();
    sim.tick(secs(9));
    assert_eq!(sim.elapsed_stationary_seconds(), 4.0);

    // resuming charges nothing for the paused gap
    sim.start();
    sim.tick(secs(20));
    sim.tick(secs(21));
    assert_eq!(sim.elapsed_stationary_seconds(), 5.0);
}

#[test]
fn start_twice_is_a_no_op() {
    let mut sim = lab();
    sim.start();
    let token = sim.clock().pending_tick();
    sim.start();
    assert_eq!(sim.clock().pending_tick(), token);
    assert_eq!(sim.clock().scheduler().requests, 1);
}
