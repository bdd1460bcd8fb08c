//! Confetti burst simulation.
//!
//! A burst owns its particle set for its whole lifetime and runs for a
//! fixed number of frames. The host drives it: one [`Burst::step`] call
//! per animation frame, drawing the particles after each step, until
//! `step` returns `false`. Randomness is injected so spawns are
//! reproducible in tests.
//!
//! Particles are not culled at the canvas edges; they may leave the
//! visible area and keep integrating until the frame budget runs out.
//! Overlapping bursts are intentional — each is fully independent.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use crate::consts::{BURST_FRAME_BUDGET, GRAVITY_PER_FRAME, PARTICLE_COUNT, SPAWN_Y};

/// Hues assigned to particles in round-robin order.
///
/// Matches the accent palette hues numerically but is an independent list;
/// the burst does not follow the currently selected accent.
pub const BURST_HUES: [u16; 5] = [230, 190, 280, 150, 12];

/// One confetti square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub hue: u16,
}

/// A single burst: a fixed particle set plus a frame counter.
#[derive(Clone, Debug)]
pub struct Burst {
    particles: Vec<Particle>,
    frames: u32,
}

impl Burst {
    /// Spawn a burst sized to the given canvas dimensions.
    ///
    /// `rng` must yield values in `[0, 1)`; the host passes
    /// `Math.random`, tests pass a deterministic sequence.
    #[must_use]
    pub fn spawn(width: f64, _height: f64, mut rng: impl FnMut() -> f64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                x: rng() * width,
                y: SPAWN_Y,
                vx: (rng() - 0.5) * 2.0,
                vy: rng() * 2.0 + 2.0,
                size: rng() * 4.0 + 2.0,
                hue: BURST_HUES[i % BURST_HUES.len()],
            })
            .collect();
        Self { particles, frames: 0 }
    }

    /// Advance every particle by one frame.
    ///
    /// Returns `true` while the burst still has frames left in its budget,
    /// i.e. whether the host should schedule another frame.
    pub fn step(&mut self) -> bool {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY_PER_FRAME;
        }
        self.frames += 1;
        self.frames < BURST_FRAME_BUDGET
    }

    /// Frames stepped so far.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Canvas fill style for a particle hue.
#[must_use]
pub fn fill_style(hue: u16) -> String {
    format!("hsl({hue} 90% 55%)")
}
