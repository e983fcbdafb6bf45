mod palette;
mod utils;

pub use palette::{BlendMode, PALETTE_SIZE, Palette, PaletteId, color_from_palette};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_colors, hsv2rgb, rgb_from_u32, scale_color, wheel};

pub type Rgb = RGB8;
pub type Hsv = HSV;
