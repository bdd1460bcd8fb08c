//! Pointer-fraction to card rotation mapping.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::TILT_LIMIT_DEG;

/// Transform applied when the pointer leaves the card.
pub const RESET_TRANSFORM: &str = "rotateX(0) rotateY(0)";

/// Rotation angles in degrees for the inner card element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAngles {
    pub rot_x: f64,
    pub rot_y: f64,
}

/// Map pointer position fractions (0..1 on each axis of the card's
/// bounding box) to rotation angles. The horizontal fraction drives the
/// Y-axis rotation; the vertical fraction drives an inverted X-axis
/// rotation. Both span twice the limit across the card.
#[must_use]
pub fn angles(frac_x: f64, frac_y: f64) -> TiltAngles {
    TiltAngles {
        rot_x: (0.5 - frac_y) * TILT_LIMIT_DEG * 2.0,
        rot_y: (frac_x - 0.5) * TILT_LIMIT_DEG * 2.0,
    }
}

/// CSS transform for the given angles.
#[must_use]
pub fn transform_css(angles: &TiltAngles) -> String {
    format!("rotateX({}deg) rotateY({}deg)", angles.rot_x, angles.rot_y)
}
