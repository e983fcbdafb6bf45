//! Sine pulse effect
//!
//! The whole strip breathes along a sine curve. Without an explicit color
//! the hue follows the phase around the color wheel.

use super::Effect;
use crate::{
    buffer::fill,
    color::{Hsv, Rgb, hsv2rgb, scale_color},
    wave::sinc_brightness,
};

/// Phase advance per frame in degrees
const PHASE_STEP_DEG: u16 = 2;

const FULL_TURN_DEG: u16 = 360;

/// Sine brightness pulse
#[derive(Debug, Clone)]
pub struct SinePulseEffect {
    /// Phase angle in degrees (0..360)
    phase: u16,
    /// Explicit tint, or `None` to follow the phase around the wheel
    color: Option<Rgb>,
}

impl Default for SinePulseEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SinePulseEffect {
    /// Pulse with a hue derived from the phase
    pub const fn new() -> Self {
        Self {
            phase: 0,
            color: None,
        }
    }

    /// Pulse in one fixed color
    pub const fn with_color(color: Rgb) -> Self {
        Self {
            phase: 0,
            color: Some(color),
        }
    }

    /// Current phase angle in degrees
    pub const fn phase(&self) -> u16 {
        self.phase
    }

    /// Color every pixel takes in the current frame
    #[allow(clippy::cast_possible_truncation)]
    pub fn color(&self) -> Rgb {
        let brightness = sinc_brightness(f32::from(self.phase));
        match self.color {
            Some(color) => scale_color(color, brightness),
            None => hsv2rgb(Hsv {
                hue: (u32::from(self.phase) * 256 / u32::from(FULL_TURN_DEG)) as u8,
                sat: 255,
                val: brightness,
            }),
        }
    }
}

impl Effect for SinePulseEffect {
    fn paint(&self, leds: &mut [Rgb]) {
        fill(leds, self.color());
    }

    fn advance(&mut self, _len: usize) {
        self.phase = (self.phase + PHASE_STEP_DEG) % FULL_TURN_DEG;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
