//! Pattern rotation and per-tick dispatch

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::antenna::AntennaSet;
use crate::effect::EffectSlot;
use crate::pattern::{Pattern, Rotation, ScheduleConfig};

/// Error returned when the scheduler is given nothing to rotate through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRotationError;

/// Milliseconds elapsed between two clock readings
///
/// Uses wrapping subtraction so a clock that overflows between the readings
/// still yields the right distance.
pub const fn elapsed_millis(now: u64, since: u64) -> u64 {
    now.wrapping_sub(since)
}

/// Pattern scheduler - owns the antennae and the active animation
///
/// Call [`PatternScheduler::tick`] once per frame. Every tick first checks
/// whether the rotation interval has passed and switches pattern if so, then
/// renders exactly one frame of the active pattern on all antennae.
pub struct PatternScheduler<const STRIPS: usize, const LEDS: usize> {
    // Configuration
    interval: Duration,
    rotation: Rotation,

    // Internal state
    choice: usize,
    last_rotation: Instant,
    active: Pattern,
    effect: EffectSlot,
    antennae: AntennaSet<STRIPS, LEDS>,
}

impl<const STRIPS: usize, const LEDS: usize> PatternScheduler<STRIPS, LEDS> {
    /// Create a new scheduler
    ///
    /// Antennae start blacked out, choice 0 is current and the configured
    /// initial pattern is active until the first rotation.
    pub fn new(config: ScheduleConfig, now: Instant) -> Result<Self, EmptyRotationError> {
        if config.rotation.is_empty() {
            return Err(EmptyRotationError);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternScheduler.new] {} patterns, starting with {}",
            config.rotation.len(),
            config.initial.effect.as_str()
        );

        Ok(Self {
            interval: config.interval,
            rotation: config.rotation,
            choice: 0,
            last_rotation: now,
            active: config.initial,
            effect: config.initial.to_slot(),
            antennae: AntennaSet::new(),
        })
    }

    /// Process one frame
    ///
    /// This is the main loop step. Call this continuously.
    pub fn tick(&mut self, now: Instant) -> &AntennaSet<STRIPS, LEDS> {
        let elapsed = elapsed_millis(now.as_millis(), self.last_rotation.as_millis());
        if elapsed >= self.interval.as_millis() {
            self.rotate(now);
        }

        self.antennae.render(&mut self.effect);
        &self.antennae
    }

    /// Switch to the next pattern right away
    ///
    /// The rotation timer restarts from `now`.
    pub fn skip(&mut self, now: Instant) {
        self.rotate(now);
    }

    /// Index of the current choice in the rotation
    pub const fn choice(&self) -> usize {
        self.choice
    }

    /// Number of patterns in the rotation
    pub fn choices(&self) -> usize {
        self.rotation.len()
    }

    /// Pattern currently rendered
    pub const fn active(&self) -> Pattern {
        self.active
    }

    /// Effect currently rendered, including its animation progress
    pub const fn effect(&self) -> &EffectSlot {
        &self.effect
    }

    /// Time of the last rotation (or of startup)
    pub const fn last_rotation(&self) -> Instant {
        self.last_rotation
    }

    /// Rendered antennae
    pub const fn antennae(&self) -> &AntennaSet<STRIPS, LEDS> {
        &self.antennae
    }

    /// Advance to the next choice and load its pattern with fresh state
    fn rotate(&mut self, now: Instant) {
        self.choice = (self.choice + 1) % self.rotation.len();
        self.last_rotation = now;
        // `new` guarantees a non-empty rotation
        if let Some(pattern) = self.rotation.get(self.choice) {
            self.active = *pattern;
        }
        self.effect = self.active.to_slot();

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternScheduler.rotate] choice {} -> {}",
            self.choice,
            self.active.effect.as_str()
        );
    }
}
