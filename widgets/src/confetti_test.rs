#![allow(clippy::float_cmp)]

use super::*;

/// Deterministic stand-in for `Math.random`.
fn seq_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

// =============================================================
// Spawn
// =============================================================

#[test]
fn spawn_creates_exactly_one_hundred_particles() {
    let burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.5]));
    assert_eq!(burst.particles().len(), 100);
}

#[test]
fn spawn_starts_just_above_top_edge() {
    let burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.25, 0.75]));
    assert!(burst.particles().iter().all(|p| p.y == -10.0));
}

#[test]
fn spawn_ranges_from_rng_extremes() {
    // rng pinned low: x=0, vx=-1, vy=2, size=2.
    let low = Burst::spawn(300.0, 150.0, seq_rng(vec![0.0]));
    let p = low.particles()[0];
    assert_eq!(p.x, 0.0);
    assert_eq!(p.vx, -1.0);
    assert_eq!(p.vy, 2.0);
    assert_eq!(p.size, 2.0);

    // rng pinned just under 1: x<300, vx<1, vy<4, size<6.
    let high = Burst::spawn(300.0, 150.0, seq_rng(vec![0.999]));
    let p = high.particles()[0];
    assert!(p.x < 300.0);
    assert!(p.vx < 1.0);
    assert!(p.vy < 4.0);
    assert!(p.size < 6.0);
}

#[test]
fn hues_cycle_through_five_entry_list() {
    let burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.5]));
    for (i, p) in burst.particles().iter().enumerate() {
        assert_eq!(p.hue, BURST_HUES[i % 5]);
    }
}

// =============================================================
// Step
// =============================================================

#[test]
fn step_advances_position_by_velocity() {
    let mut burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.5]));
    let before = burst.particles()[0];
    burst.step();
    let after = burst.particles()[0];
    assert_eq!(after.x, before.x + before.vx);
    assert_eq!(after.y, before.y + before.vy);
}

#[test]
fn gravity_accumulates_per_frame() {
    let mut burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.5]));
    let vy0 = burst.particles()[0].vy;
    burst.step();
    burst.step();
    let vy2 = burst.particles()[0].vy;
    assert!((vy2 - (vy0 + 0.06)).abs() < 1e-12);
}

#[test]
fn burst_stops_after_exactly_120_frames() {
    let mut burst = Burst::spawn(300.0, 150.0, seq_rng(vec![0.5]));
    for frame in 1..120 {
        assert!(burst.step(), "frame {frame} should request another");
    }
    assert!(!burst.step(), "frame 120 must be the last");
    assert_eq!(burst.frames(), 120);
}

#[test]
fn particles_are_not_culled_outside_bounds() {
    let mut burst = Burst::spawn(10.0, 10.0, seq_rng(vec![0.999]));
    for _ in 0..120 {
        burst.step();
    }
    // Everything has fallen well past the 10px canvas; the set is intact.
    assert_eq!(burst.particles().len(), 100);
    assert!(burst.particles().iter().all(|p| p.y > 10.0));
}

// =============================================================
// Fill style
// =============================================================

#[test]
fn fill_style_format() {
    assert_eq!(fill_style(230), "hsl(230 90% 55%)");
    assert_eq!(fill_style(12), "hsl(12 90% 55%)");
}
