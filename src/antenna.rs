//! Antenna set: the fixed group of strips rendered as one target

use crate::{
    buffer::{black_out, fill},
    color::Rgb,
    effect::Effect,
};

/// Number of antennae on the reference hardware
pub const DEFAULT_ANTENNAE: usize = 4;

/// Number of LEDs per antenna on the reference hardware
pub const DEFAULT_LEDS: usize = 200;

/// A fixed number of equally long LED strips
///
/// The buffers are owned and sized at compile time, so every strip always
/// has exactly `LEDS` pixels.
#[derive(Debug, Clone)]
pub struct AntennaSet<const STRIPS: usize, const LEDS: usize> {
    strips: [[Rgb; LEDS]; STRIPS],
}

impl<const STRIPS: usize, const LEDS: usize> Default for AntennaSet<STRIPS, LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const STRIPS: usize, const LEDS: usize> AntennaSet<STRIPS, LEDS> {
    /// Create a set with every strip blacked out
    pub fn new() -> Self {
        let mut set = Self {
            strips: [[Rgb::default(); LEDS]; STRIPS],
        };
        set.black_out();
        set
    }

    /// Number of strips in the set
    pub const fn strip_count(&self) -> usize {
        STRIPS
    }

    /// Number of LEDs on every strip
    pub const fn strip_len(&self) -> usize {
        LEDS
    }

    /// Get one strip, if it exists
    pub fn strip(&self, index: usize) -> Option<&[Rgb]> {
        self.strips.get(index).map(<[Rgb; LEDS]>::as_slice)
    }

    /// Get one strip mutably, if it exists
    pub fn strip_mut(&mut self, index: usize) -> Option<&mut [Rgb]> {
        self.strips.get_mut(index).map(<[Rgb; LEDS]>::as_mut_slice)
    }

    /// Iterate over the strips in order
    pub fn iter(&self) -> impl Iterator<Item = &[Rgb]> {
        self.strips.iter().map(<[Rgb; LEDS]>::as_slice)
    }

    /// Iterate mutably over the strips in order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut [Rgb]> {
        self.strips.iter_mut().map(<[Rgb; LEDS]>::as_mut_slice)
    }

    /// Set every pixel of every strip to black
    pub fn black_out(&mut self) {
        for strip in self.iter_mut() {
            black_out(strip);
        }
    }

    /// Render one frame of an effect on every strip
    ///
    /// All strips are painted from the same animation state, then the effect
    /// advances once, so the antennae stay in phase.
    pub fn render<E: Effect + ?Sized>(&mut self, effect: &mut E) {
        for strip in self.iter_mut() {
            effect.paint(strip);
        }
        effect.advance(LEDS);
    }
}

/// Set every pixel of every antenna to one color
pub fn set_full_antennae_color<const STRIPS: usize, const LEDS: usize>(
    antennae: &mut AntennaSet<STRIPS, LEDS>,
    color: Rgb,
) {
    for strip in antennae.iter_mut() {
        fill(strip, color);
    }
}
