//! Shared numeric constants for the widgets crate.

// ── Theme ───────────────────────────────────────────────────────

/// Lifetime of the `theme-transition` marker class, in milliseconds.
pub const THEME_TRANSITION_MS: u32 = 350;

// ── Confetti ────────────────────────────────────────────────────

/// Particles spawned per burst.
pub const PARTICLE_COUNT: usize = 100;

/// Frames a burst runs before stopping unconditionally.
pub const BURST_FRAME_BUDGET: u32 = 120;

/// Downward velocity added to every particle each frame.
pub const GRAVITY_PER_FRAME: f64 = 0.03;

/// Vertical spawn offset — just above the top edge of the canvas.
pub const SPAWN_Y: f64 = -10.0;

// ── Clock ───────────────────────────────────────────────────────

/// Live clock re-render interval, in milliseconds.
pub const CLOCK_TICK_MS: u32 = 1000;

// ── Tilt ────────────────────────────────────────────────────────

/// Rotation limit in degrees; effective range doubles around center.
pub const TILT_LIMIT_DEG: f64 = 12.0;
