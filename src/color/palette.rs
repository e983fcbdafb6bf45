//! Named 16-entry color palettes
//!
//! A palette maps an 8-bit index onto a color: the high nibble picks one of
//! sixteen entries and, with [`BlendMode::LinearBlend`], the low nibble mixes
//! towards the following entry. The last entry blends back into the first,
//! so scrolling the index wraps around the palette seamlessly.

use crate::color::{Rgb, blend_colors, rgb_from_u32, scale_color};

/// Number of entries in a palette
pub const PALETTE_SIZE: usize = 16;

/// Palette entries
pub type Palette = [Rgb; PALETTE_SIZE];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
const RAINBOW: Palette = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

// Every other entry of the rainbow with black between them
#[allow(clippy::unreadable_literal)]
const RAINBOW_STRIPE: Palette = hex_palette![
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000,
    0x00AB55, 0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
];

// Purple, red and orange, no greens
#[allow(clippy::unreadable_literal)]
const PARTY: Palette = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

#[allow(clippy::unreadable_literal)]
const CLOUD: Palette = hex_palette![
    0x0000FF, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B,
    0x0000FF, 0x00008B, 0x87CEEB, 0x87CEEB, 0xADD8E6, 0xFFFFFF, 0xADD8E6, 0x87CEEB,
];

#[allow(clippy::unreadable_literal)]
const LAVA: Palette = hex_palette![
    0x000000, 0x800000, 0x000000, 0x800000, 0x8B0000, 0x8B0000, 0x800000, 0x8B0000,
    0x8B0000, 0x8B0000, 0xFF0000, 0xFFA500, 0xFFFFFF, 0xFFA500, 0xFF0000, 0x8B0000,
];

#[allow(clippy::unreadable_literal)]
const OCEAN: Palette = hex_palette![
    0x191970, 0x00008B, 0x191970, 0x000080, 0x00008B, 0x0000CD, 0x2E8B57, 0x008080,
    0x5F9EA0, 0x0000FF, 0x008B8B, 0x6495ED, 0x7FFFD4, 0x2E8B57, 0x00FFFF, 0x87CEFA,
];

#[allow(clippy::unreadable_literal)]
const FOREST: Palette = hex_palette![
    0x006400, 0x006400, 0x556B2F, 0x006400, 0x008000, 0x228B22, 0x6B8E23, 0x008000,
    0x2E8B57, 0x66CDAA, 0x32CD32, 0x9ACD32, 0x90EE90, 0x7CFC00, 0x66CDAA, 0x228B22,
];

const PALETTE_NAME_RAINBOW: &str = "rainbow";
const PALETTE_NAME_RAINBOW_STRIPE: &str = "rainbow_stripe";
const PALETTE_NAME_PARTY: &str = "party";
const PALETTE_NAME_CLOUD: &str = "cloud";
const PALETTE_NAME_LAVA: &str = "lava";
const PALETTE_NAME_OCEAN: &str = "ocean";
const PALETTE_NAME_FOREST: &str = "forest";

/// How palette lookups treat the low nibble of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Snap to the entry selected by the high nibble
    NoBlend,
    /// Interpolate between neighbouring entries
    #[default]
    LinearBlend,
}

/// Known palettes that patterns can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PaletteId {
    #[default]
    Rainbow = 0,
    RainbowStripe = 1,
    Party = 2,
    Cloud = 3,
    Lava = 4,
    Ocean = 5,
    Forest = 6,
}

impl PaletteId {
    /// Palette entries
    pub const fn colors(self) -> &'static Palette {
        match self {
            Self::Rainbow => &RAINBOW,
            Self::RainbowStripe => &RAINBOW_STRIPE,
            Self::Party => &PARTY,
            Self::Cloud => &CLOUD,
            Self::Lava => &LAVA,
            Self::Ocean => &OCEAN,
            Self::Forest => &FOREST,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PALETTE_NAME_RAINBOW,
            Self::RainbowStripe => PALETTE_NAME_RAINBOW_STRIPE,
            Self::Party => PALETTE_NAME_PARTY,
            Self::Cloud => PALETTE_NAME_CLOUD,
            Self::Lava => PALETTE_NAME_LAVA,
            Self::Ocean => PALETTE_NAME_OCEAN,
            Self::Forest => PALETTE_NAME_FOREST,
        }
    }
}

/// Look up a color in a palette
///
/// # Arguments
/// * `palette` - Palette entries
/// * `index` - Position in the palette (0-255 spans all sixteen entries)
/// * `brightness` - Output scale (255 = unchanged)
/// * `blend` - Whether to interpolate between entries
pub fn color_from_palette(palette: &Palette, index: u8, brightness: u8, blend: BlendMode) -> Rgb {
    let entry = usize::from(index >> 4);
    let offset = index & 0x0F;

    let mut color = palette[entry];
    if blend == BlendMode::LinearBlend && offset != 0 {
        let next = palette[(entry + 1) % PALETTE_SIZE];
        color = blend_colors(color, next, offset << 4);
    }

    if brightness == 255 {
        return color;
    }
    scale_color(color, brightness)
}
