//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, PatternScheduler};

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Ticks the pattern scheduler and pushes every antenna to the driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let patterns = PatternScheduler::new(ScheduleConfig::default(), Instant::from_millis(0))?;
/// let mut frames = FrameScheduler::new(patterns, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = frames.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const STRIPS: usize, const LEDS: usize> {
    output: O,
    patterns: PatternScheduler<STRIPS, LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const STRIPS: usize, const LEDS: usize> FrameScheduler<O, STRIPS, LEDS> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (90 FPS) for frame timing.
    pub fn new(patterns: PatternScheduler<STRIPS, LEDS>, driver: O) -> Self {
        Self::with_frame_duration(patterns, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        patterns: PatternScheduler<STRIPS, LEDS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            patterns,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Ticks the pattern scheduler, which renders the frame
    /// 3. Writes every antenna to the output driver and flushes it once
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let antennae = self.patterns.tick(now);
        for (index, strip) in antennae.iter().enumerate() {
            self.output.write(index, strip);
        }
        self.output.flush();

        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the pattern scheduler.
    pub fn patterns(&self) -> &PatternScheduler<STRIPS, LEDS> {
        &self.patterns
    }

    /// Get a mutable reference to the pattern scheduler.
    pub fn patterns_mut(&mut self) -> &mut PatternScheduler<STRIPS, LEDS> {
        &mut self.patterns
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
