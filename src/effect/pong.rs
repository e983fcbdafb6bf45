//! Ping-pong effects
//!
//! A short lit segment bounces between the strip ends, trailing a fade.

use super::{Effect, sweep::Bounce};
use crate::{
    buffer::fade,
    color::{Rgb, wheel},
};

/// Lit segment width in pixels
const DEFAULT_WIDTH: usize = 3;

/// Positions moved per frame by the fast variant
const FAST_STEP: usize = 2;

/// Hue advance per frame for the default variant
const HUE_STEP: u8 = 1;

/// Hue jump at every wall hit for the fast variant
const BOUNCE_HUE_STEP: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PongColor {
    /// Hue moves a little every frame
    Cycling { hue: u8 },
    /// Hue jumps whenever the segment hits an end
    BounceCycling { hue: u8 },
    Fixed(Rgb),
}

/// Ping-pong effect
#[derive(Debug, Clone)]
pub struct PongEffect {
    bounce: Bounce,
    width: usize,
    color: PongColor,
}

impl Default for PongEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl PongEffect {
    /// Segment with a slowly cycling hue
    pub const fn new() -> Self {
        Self {
            bounce: Bounce::new(1),
            width: DEFAULT_WIDTH,
            color: PongColor::Cycling { hue: 0 },
        }
    }

    /// Segment in one fixed color
    pub const fn with_color(color: Rgb) -> Self {
        Self {
            bounce: Bounce::new(1),
            width: DEFAULT_WIDTH,
            color: PongColor::Fixed(color),
        }
    }

    /// Faster segment that changes hue on every bounce
    pub const fn fast() -> Self {
        Self {
            bounce: Bounce::new(FAST_STEP),
            width: DEFAULT_WIDTH,
            color: PongColor::BounceCycling { hue: 0 },
        }
    }

    /// Set the segment width (at least one pixel)
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = if width == 0 { 1 } else { width };
        self
    }

    /// Index of the first lit pixel
    pub const fn position(&self) -> usize {
        self.bounce.position()
    }

    /// Color of the segment for the current frame
    pub fn color(&self) -> Rgb {
        match self.color {
            PongColor::Cycling { hue } | PongColor::BounceCycling { hue } => wheel(hue),
            PongColor::Fixed(color) => color,
        }
    }

    /// Segment width and number of start positions on a strip of `len`
    const fn span(&self, len: usize) -> (usize, usize) {
        let width = if self.width < len { self.width } else { len };
        (width, len - width + 1)
    }
}

impl Effect for PongEffect {
    fn paint(&self, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade(leds);

        let (width, span) = self.span(leds.len());
        let start = self.bounce.position_in(span);
        let color = self.color();
        for led in &mut leds[start..start + width] {
            *led = color;
        }
    }

    fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let (_, span) = self.span(len);
        let bounced = self.bounce.advance(span);
        match &mut self.color {
            PongColor::Cycling { hue } => *hue = hue.wrapping_add(HUE_STEP),
            PongColor::BounceCycling { hue } if bounced => {
                *hue = hue.wrapping_add(BOUNCE_HUE_STEP);
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.bounce.reset();
        match &mut self.color {
            PongColor::Cycling { hue } | PongColor::BounceCycling { hue } => *hue = 0,
            PongColor::Fixed(_) => {}
        }
    }
}
