//! Whole-buffer pixel primitives

use crate::{color::Rgb, math8::scale8};

/// Per-frame decay factor used by [`fade`] (250/256 of the previous value)
pub const FADE_SCALE: u8 = 250;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Set every pixel to black
pub fn black_out(leds: &mut [Rgb]) {
    fill(leds, BLACK);
}

/// Set every pixel to one color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Dim every pixel by one decay step
///
/// Every lit channel loses at least one unit per call, so a buffer reaches
/// black after at most 255 calls and stays there.
pub fn fade(leds: &mut [Rgb]) {
    for led in leds {
        led.r = scale8(led.r, FADE_SCALE);
        led.g = scale8(led.g, FADE_SCALE);
        led.b = scale8(led.b, FADE_SCALE);
    }
}
