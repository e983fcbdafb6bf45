//! Sine helpers for pulsing brightness curves
//!
//! Phase angles are plain degrees. Callers advance the phase frame to frame
//! and read back an 8-bit brightness that follows a sine wave.

use core::f32::consts::PI;

/// Full turn in degrees
pub const FULL_TURN_DEG: f32 = 360.0;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Evaluate sine of an angle in radians
///
/// The name is kept from the firmware this engine grew out of; it is a plain
/// sine, not `sin(x) / x`.
#[inline]
pub fn sinc(radians: f32) -> f32 {
    libm::sinf(radians)
}

/// Map a sine value (-1.0..=1.0) onto the full 8-bit range
///
/// Out of range inputs saturate at the boundaries. NaN maps to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sinc_to_int8(value: f32) -> u8 {
    let scaled = libm::roundf((value + 1.0) / 2.0 * 255.0);
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

/// Brightness (0-255) of a sine wave at the given phase angle in degrees
///
/// The phase is reduced modulo 360 first, so `0` and `360` give the same
/// value exactly. Phase `0` sits at the midpoint (128), `90` at the peak and
/// `270` at the trough.
pub fn sinc_brightness(degrees: f32) -> u8 {
    let phase = libm::fmodf(degrees, FULL_TURN_DEG);
    sinc_to_int8(sinc(deg_to_rad(phase)))
}
