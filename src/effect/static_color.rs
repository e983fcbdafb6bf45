//! Static color fill effect
//!
//! Fills all LEDs with a single solid color.

use super::Effect;
use crate::{buffer::fill, color::Rgb};

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn paint(&self, leds: &mut [Rgb]) {
        fill(leds, self.color);
    }

    fn advance(&mut self, _len: usize) {}
}
