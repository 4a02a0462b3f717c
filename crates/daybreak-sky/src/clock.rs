//! Host-owned day clock.
//!
//! Holds the time of day every evaluator reads. The committed day/night
//! phase is per evaluator, so one clock can drive any number of presets.

use daybreak_core::constants::DEFAULT_DAY_LENGTH_SECONDS;

#[derive(Debug, Clone, PartialEq)]
pub struct DayClock {
    /// Current time in day (0.0 = midnight, 0.5 = noon).
    day_fraction: f32,
    /// Real seconds since the clock was created. Drives cloud scrolling.
    elapsed_seconds: f32,
    /// Real seconds per full day.
    day_length_seconds: f32,
    /// Day number (starts at 1).
    day_number: u32,
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new(DEFAULT_DAY_LENGTH_SECONDS)
    }
}

impl DayClock {
    /// Clock at midnight of day 1. `day_length_seconds` must be positive.
    pub fn new(day_length_seconds: f32) -> Self {
        Self {
            day_fraction: 0.0,
            elapsed_seconds: 0.0,
            day_length_seconds: day_length_seconds.max(f32::EPSILON),
            day_number: 1,
        }
    }

    /// Clock frozen at `day_fraction`.
    pub fn at(day_fraction: f32) -> Self {
        let mut clock = Self::default();
        clock.set_day_fraction(day_fraction);
        clock
    }

    /// Advance by `delta_seconds` of real time. Negative deltas rewind and
    /// wrap back across midnight; the day number never drops below 1.
    /// Returns true if a new day started.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        self.elapsed_seconds += delta_seconds;
        let fraction = self.day_fraction + delta_seconds / self.day_length_seconds;

        let whole = fraction.floor();
        self.day_fraction = fraction.rem_euclid(1.0).min(1.0);
        if whole >= 1.0 {
            self.day_number = self.day_number.saturating_add(whole as u32);
            true
        } else {
            if whole < 0.0 {
                self.day_number = self.day_number.saturating_sub(-whole as u32).max(1);
            }
            false
        }
    }

    pub fn day_fraction(&self) -> f32 {
        self.day_fraction
    }

    /// Jump to a time of day, clamped to [0, 1]. Elapsed time is unchanged.
    pub fn set_day_fraction(&mut self, day_fraction: f32) {
        self.day_fraction = day_fraction.clamp(0.0, 1.0);
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    pub fn set_elapsed_seconds(&mut self, elapsed_seconds: f32) {
        self.elapsed_seconds = elapsed_seconds;
    }

    pub fn day_length_seconds(&self) -> f32 {
        self.day_length_seconds
    }

    pub fn day(&self) -> u32 {
        self.day_number
    }

    /// Formatted time of day (HH:MM).
    pub fn time_string(&self) -> String {
        let minutes_total = (self.day_fraction * 24.0 * 60.0) as u32;
        format!("{:02}:{:02}", (minutes_total / 60) % 24, minutes_total % 60)
    }
}
