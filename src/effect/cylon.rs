//! Cylon sweep effects
//!
//! A single lit pixel runs back and forth along the strip. Every frame the
//! whole strip fades a little first, which leaves a comet tail behind it.

use super::{Effect, sweep::Bounce};
use crate::{
    buffer::fade,
    color::{Rgb, wheel},
};

const DEFAULT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Hue advance per frame for the rainbow variant
const HUE_STEP: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CylonColor {
    Fixed(Rgb),
    Rainbow { hue: u8 },
}

/// Cylon sweep effect
#[derive(Debug, Clone)]
pub struct CylonEffect {
    bounce: Bounce,
    color: CylonColor,
}

impl Default for CylonEffect {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl CylonEffect {
    /// Sweep in one fixed color
    pub const fn new(color: Rgb) -> Self {
        Self {
            bounce: Bounce::new(1),
            color: CylonColor::Fixed(color),
        }
    }

    /// Sweep with a pixel that walks around the color wheel
    pub const fn rainbow() -> Self {
        Self {
            bounce: Bounce::new(1),
            color: CylonColor::Rainbow { hue: 0 },
        }
    }

    /// Index of the lit pixel
    pub const fn position(&self) -> usize {
        self.bounce.position()
    }

    /// Color of the lit pixel for the current frame
    pub fn color(&self) -> Rgb {
        match self.color {
            CylonColor::Fixed(color) => color,
            CylonColor::Rainbow { hue } => wheel(hue),
        }
    }
}

impl Effect for CylonEffect {
    fn paint(&self, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade(leds);
        leds[self.bounce.position_in(leds.len())] = self.color();
    }

    fn advance(&mut self, len: usize) {
        self.bounce.advance(len);
        if let CylonColor::Rainbow { hue } = &mut self.color {
            *hue = hue.wrapping_add(HUE_STEP);
        }
    }

    fn reset(&mut self) {
        self.bounce.reset();
        if let CylonColor::Rainbow { hue } = &mut self.color {
            *hue = 0;
        }
    }
}
