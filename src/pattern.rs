use embassy_time::Duration;
use heapless::Vec;

use crate::{
    color::{BlendMode, PaletteId, Rgb},
    effect::{EffectId, EffectSlot},
};

/// Maximum number of patterns in a rotation
pub const MAX_PATTERNS: usize = 16;

/// Time each pattern stays active in the default rotation
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(60_000);

/// Ordered list of patterns the scheduler cycles through
pub type Rotation = Vec<Pattern, MAX_PATTERNS>;

/// Extra parameters a pattern passes to its effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternParams {
    /// Effect defaults
    #[default]
    None,
    /// Named palette and blend mode
    Palette { palette: PaletteId, blend: BlendMode },
    /// Explicit solid color
    Color(Rgb),
}

/// One entry of a rotation: an effect plus its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub effect: EffectId,
    pub params: PatternParams,
}

impl Pattern {
    /// Pattern using the effect defaults
    pub const fn new(effect: EffectId) -> Self {
        Self {
            effect,
            params: PatternParams::None,
        }
    }

    /// Palette cycling pattern
    pub const fn palette(palette: PaletteId, blend: BlendMode) -> Self {
        Self {
            effect: EffectId::PaletteCycle,
            params: PatternParams::Palette { palette, blend },
        }
    }

    /// Pattern with an explicit color
    pub const fn with_color(effect: EffectId, color: Rgb) -> Self {
        Self {
            effect,
            params: PatternParams::Color(color),
        }
    }

    /// Build the effect with fresh animation state
    pub fn to_slot(self) -> EffectSlot {
        self.effect.to_slot(self.params)
    }
}

/// Pattern shown from startup until the first rotation
const DEFAULT_INITIAL: Pattern = Pattern::palette(PaletteId::Rainbow, BlendMode::LinearBlend);

/// Rotation of the reference antennae
///
/// Startup shows [`DEFAULT_INITIAL`] under choice 0, so the first rotation
/// lands on choice 1. Fast pong first appears at the fifth rotation (minute
/// 5), when the rotation wraps back to choice 0.
const DEFAULT_ROTATION: [Pattern; 5] = [
    Pattern::new(EffectId::PongFast),
    Pattern::palette(PaletteId::Rainbow, BlendMode::LinearBlend),
    Pattern::palette(PaletteId::RainbowStripe, BlendMode::LinearBlend),
    Pattern::palette(PaletteId::Party, BlendMode::LinearBlend),
    Pattern::new(EffectId::RainbowCylon),
];

const _: () = assert!(DEFAULT_ROTATION.len() <= MAX_PATTERNS);

/// Configuration for the pattern scheduler
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Time between rotations
    pub interval: Duration,
    /// Pattern active before the first rotation
    pub initial: Pattern,
    /// Patterns to cycle through
    pub rotation: Rotation,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let mut rotation = Rotation::new();
        for pattern in DEFAULT_ROTATION {
            // Cannot fail: DEFAULT_ROTATION fits in MAX_PATTERNS (const assert above)
            let _ = rotation.push(pattern);
        }
        Self {
            interval: DEFAULT_ROTATION_INTERVAL,
            initial: DEFAULT_INITIAL,
            rotation,
        }
    }
}

impl ScheduleConfig {
    /// Create a config with an empty rotation
    pub const fn new(interval: Duration, initial: Pattern) -> Self {
        Self {
            interval,
            initial,
            rotation: Rotation::new(),
        }
    }

    /// Append a pattern to the rotation
    ///
    /// Returns the pattern if the rotation is full
    pub fn push(&mut self, pattern: Pattern) -> Result<(), Pattern> {
        self.rotation.push(pattern)
    }

    /// Number of patterns in the rotation
    pub fn choices(&self) -> usize {
        self.rotation.len()
    }
}
