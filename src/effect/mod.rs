//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and renders exactly one frame
//! per call; animation progress lives inside the effect value.

mod cylon;
mod palette;
mod pong;
mod pulse;
mod static_color;
pub mod sweep;

pub use cylon::CylonEffect;
pub use palette::PaletteEffect;
pub use pong::PongEffect;
pub use pulse::SinePulseEffect;
pub use static_color::StaticColorEffect;

use crate::{color::Rgb, pattern::PatternParams};

const EFFECT_NAME_PALETTE_CYCLE: &str = "palette_cycle";
const EFFECT_NAME_CYLON: &str = "cylon";
const EFFECT_NAME_RAINBOW_CYLON: &str = "rainbow_cylon";
const EFFECT_NAME_SINE_PULSE: &str = "sine_pulse";
const EFFECT_NAME_SOLID_FILL: &str = "solid_fill";
const EFFECT_NAME_PONG: &str = "pong";
const EFFECT_NAME_PONG_COLOR: &str = "pong_color";
const EFFECT_NAME_PONG_FAST: &str = "pong_fast";

const EFFECT_ID_PALETTE_CYCLE: u8 = 0;
const EFFECT_ID_CYLON: u8 = 1;
const EFFECT_ID_RAINBOW_CYLON: u8 = 2;
const EFFECT_ID_SINE_PULSE: u8 = 3;
const EFFECT_ID_SOLID_FILL: u8 = 4;
const EFFECT_ID_PONG: u8 = 5;
const EFFECT_ID_PONG_COLOR: u8 = 6;
const EFFECT_ID_PONG_FAST: u8 = 7;

const DEFAULT_FILL_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

pub trait Effect {
    /// Paint the current frame onto a strip
    ///
    /// Painting does not move the animation, so several strips can be
    /// painted from the same state.
    fn paint(&self, leds: &mut [Rgb]);

    /// Advance the animation by one frame for strips of `len` LEDs
    fn advance(&mut self, len: usize);

    /// Reset effect state
    fn reset(&mut self) {}

    /// Render a single frame on one strip
    fn render(&mut self, leds: &mut [Rgb]) {
        self.paint(leds);
        self.advance(leds.len());
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Scrolling named palette
    PaletteCycle(PaletteEffect),
    /// Single color cylon sweep
    Cylon(CylonEffect),
    /// Cylon sweep walking the color wheel
    RainbowCylon(CylonEffect),
    /// Whole-strip sine brightness pulse
    SinePulse(SinePulseEffect),
    /// Static single color
    SolidFill(StaticColorEffect),
    /// Ping-pong with a cycling hue
    Pong(PongEffect),
    /// Ping-pong in a fixed color
    PongColor(PongEffect),
    /// Fast ping-pong, hue changes on every bounce
    PongFast(PongEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    PaletteCycle = EFFECT_ID_PALETTE_CYCLE,
    Cylon = EFFECT_ID_CYLON,
    RainbowCylon = EFFECT_ID_RAINBOW_CYLON,
    SinePulse = EFFECT_ID_SINE_PULSE,
    SolidFill = EFFECT_ID_SOLID_FILL,
    Pong = EFFECT_ID_PONG,
    PongColor = EFFECT_ID_PONG_COLOR,
    PongFast = EFFECT_ID_PONG_FAST,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::PaletteCycle(PaletteEffect::default())
    }
}

impl EffectId {
    /// Build a fresh effect for this id
    ///
    /// Parameters that do not apply to the effect are ignored; missing ones
    /// fall back to the effect's defaults.
    pub fn to_slot(self, params: PatternParams) -> EffectSlot {
        match self {
            Self::PaletteCycle => {
                let effect = match params {
                    PatternParams::Palette { palette, blend } => PaletteEffect::new(palette, blend),
                    _ => PaletteEffect::default(),
                };
                EffectSlot::PaletteCycle(effect)
            }
            Self::Cylon => {
                let effect = match params {
                    PatternParams::Color(color) => CylonEffect::new(color),
                    _ => CylonEffect::default(),
                };
                EffectSlot::Cylon(effect)
            }
            Self::RainbowCylon => EffectSlot::RainbowCylon(CylonEffect::rainbow()),
            Self::SinePulse => {
                let effect = match params {
                    PatternParams::Color(color) => SinePulseEffect::with_color(color),
                    _ => SinePulseEffect::new(),
                };
                EffectSlot::SinePulse(effect)
            }
            Self::SolidFill => {
                let color = match params {
                    PatternParams::Color(color) => color,
                    _ => DEFAULT_FILL_COLOR,
                };
                EffectSlot::SolidFill(StaticColorEffect::new(color))
            }
            Self::Pong => EffectSlot::Pong(PongEffect::new()),
            Self::PongColor => {
                let color = match params {
                    PatternParams::Color(color) => color,
                    _ => DEFAULT_FILL_COLOR,
                };
                EffectSlot::PongColor(PongEffect::with_color(color))
            }
            Self::PongFast => EffectSlot::PongFast(PongEffect::fast()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaletteCycle => EFFECT_NAME_PALETTE_CYCLE,
            Self::Cylon => EFFECT_NAME_CYLON,
            Self::RainbowCylon => EFFECT_NAME_RAINBOW_CYLON,
            Self::SinePulse => EFFECT_NAME_SINE_PULSE,
            Self::SolidFill => EFFECT_NAME_SOLID_FILL,
            Self::Pong => EFFECT_NAME_PONG,
            Self::PongColor => EFFECT_NAME_PONG_COLOR,
            Self::PongFast => EFFECT_NAME_PONG_FAST,
        }
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::PaletteCycle(_) => EffectId::PaletteCycle,
            Self::Cylon(_) => EffectId::Cylon,
            Self::RainbowCylon(_) => EffectId::RainbowCylon,
            Self::SinePulse(_) => EffectId::SinePulse,
            Self::SolidFill(_) => EffectId::SolidFill,
            Self::Pong(_) => EffectId::Pong,
            Self::PongColor(_) => EffectId::PongColor,
            Self::PongFast(_) => EffectId::PongFast,
        }
    }
}

impl Effect for EffectSlot {
    fn paint(&self, leds: &mut [Rgb]) {
        match self {
            Self::PaletteCycle(effect) => effect.paint(leds),
            Self::Cylon(effect) | Self::RainbowCylon(effect) => effect.paint(leds),
            Self::SinePulse(effect) => effect.paint(leds),
            Self::SolidFill(effect) => effect.paint(leds),
            Self::Pong(effect) | Self::PongColor(effect) | Self::PongFast(effect) => {
                effect.paint(leds);
            }
        }
    }

    fn advance(&mut self, len: usize) {
        match self {
            Self::PaletteCycle(effect) => effect.advance(len),
            Self::Cylon(effect) | Self::RainbowCylon(effect) => effect.advance(len),
            Self::SinePulse(effect) => effect.advance(len),
            Self::SolidFill(effect) => effect.advance(len),
            Self::Pong(effect) | Self::PongColor(effect) | Self::PongFast(effect) => {
                effect.advance(len);
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Self::PaletteCycle(effect) => Effect::reset(effect),
            Self::Cylon(effect) | Self::RainbowCylon(effect) => Effect::reset(effect),
            Self::SinePulse(effect) => Effect::reset(effect),
            Self::SolidFill(effect) => Effect::reset(effect),
            Self::Pong(effect) | Self::PongColor(effect) | Self::PongFast(effect) => {
                Effect::reset(effect);
            }
        }
    }
}
