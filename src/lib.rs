#![no_std]

pub mod antenna;
pub mod buffer;
pub mod color;
pub mod effect;
pub mod frame_scheduler;
pub mod math8;
pub mod pattern;
pub mod scheduler;
pub mod wave;

pub use antenna::{AntennaSet, DEFAULT_ANTENNAE, DEFAULT_LEDS, set_full_antennae_color};
pub use buffer::{black_out, fade, fill};
pub use effect::{
    CylonEffect, Effect, EffectId, EffectSlot, PaletteEffect, PongEffect, SinePulseEffect,
    StaticColorEffect,
};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use pattern::{Pattern, PatternParams, Rotation, ScheduleConfig};
pub use scheduler::{EmptyRotationError, PatternScheduler};
pub use wave::{deg_to_rad, sinc, sinc_brightness, sinc_to_int8};

pub use color::{BlendMode, Hsv, PaletteId, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors of one antenna
    fn write(&mut self, strip: usize, colors: &[Rgb]);

    /// Push everything written since the last flush to the LEDs
    fn flush(&mut self) {}
}
