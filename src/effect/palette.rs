//! Scrolling palette effect

use super::Effect;
use crate::color::{BlendMode, PaletteId, Rgb, color_from_palette};

/// Palette index distance between neighbouring LEDs
const INDEX_SPACING: u8 = 3;

/// Renders a named palette along the strip and scrolls it one index per frame
#[derive(Debug, Clone)]
pub struct PaletteEffect {
    palette: PaletteId,
    blend: BlendMode,
    brightness: u8,
    start_index: u8,
}

impl Default for PaletteEffect {
    fn default() -> Self {
        Self::new(PaletteId::Rainbow, BlendMode::LinearBlend)
    }
}

impl PaletteEffect {
    pub const fn new(palette: PaletteId, blend: BlendMode) -> Self {
        Self {
            palette,
            blend,
            brightness: 255,
            start_index: 0,
        }
    }

    /// Set the output brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn palette(&self) -> PaletteId {
        self.palette
    }

    pub const fn blend(&self) -> BlendMode {
        self.blend
    }

    /// Palette index of the first LED in the current frame
    pub const fn start_index(&self) -> u8 {
        self.start_index
    }
}

impl Effect for PaletteEffect {
    fn paint(&self, leds: &mut [Rgb]) {
        let colors = self.palette.colors();
        let mut index = self.start_index;
        for led in leds {
            *led = color_from_palette(colors, index, self.brightness, self.blend);
            index = index.wrapping_add(INDEX_SPACING);
        }
    }

    fn advance(&mut self, _len: usize) {
        self.start_index = self.start_index.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.start_index = 0;
    }
}
