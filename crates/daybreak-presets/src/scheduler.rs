use daybreak_core::preset::WeatherPreset;

use crate::rng::{hash_to_range, weather_hash};

/// A switch from one weather preset to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherChange {
    /// Index of the preset being replaced. `None` on the first selection.
    pub from: Option<usize>,
    /// Index of the newly selected preset.
    pub to: usize,
    /// Number of days the new preset will last.
    pub days: u32,
}

/// Picks which weather preset is active and for how many days.
///
/// Each preset lasts a number of whole days rolled in
/// `[duration_min, duration_max]`. When it runs out the next preset is
/// drawn uniformly, never repeating the current one back-to-back unless
/// it is the only preset.
#[derive(Debug, Clone)]
pub struct WeatherScheduler {
    presets: Vec<WeatherPreset>,
    seed: u32,
    draws: u32,
    current: Option<usize>,
    days_remaining: u32,
}

impl WeatherScheduler {
    pub fn new(presets: Vec<WeatherPreset>, seed: u32) -> Self {
        Self {
            presets,
            seed,
            draws: 0,
            current: None,
            days_remaining: 0,
        }
    }

    /// Select the initial preset. Returns `None` when there are no presets.
    pub fn start(&mut self) -> Option<WeatherChange> {
        if self.presets.is_empty() {
            log::warn!("Weather scheduler started with no presets");
            return None;
        }
        Some(self.select_next())
    }

    /// Advance by one day. Returns the change when the current weather expires.
    pub fn on_new_day(&mut self) -> Option<WeatherChange> {
        if self.current.is_none() {
            return self.start();
        }
        self.days_remaining = self.days_remaining.saturating_sub(1);
        if self.days_remaining > 0 {
            return None;
        }
        Some(self.select_next())
    }

    pub fn current(&self) -> Option<&WeatherPreset> {
        self.current.and_then(|i| self.presets.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    pub fn presets(&self) -> &[WeatherPreset] {
        &self.presets
    }

    fn next_hash(&mut self) -> u32 {
        let h = weather_hash(self.seed, self.draws);
        self.draws = self.draws.wrapping_add(1);
        h
    }

    fn select_next(&mut self) -> WeatherChange {
        let count = self.presets.len() as u32;
        let to = match self.current {
            _ if count <= 1 => 0,
            Some(cur) => {
                // Draw among the others, then skip over the current slot
                let pick = hash_to_range(self.next_hash(), 0, count - 2) as usize;
                if pick >= cur {
                    pick + 1
                } else {
                    pick
                }
            }
            None => hash_to_range(self.next_hash(), 0, count - 1) as usize,
        };

        let preset = &self.presets[to];
        let (min, max) = (preset.duration_min, preset.duration_max);
        let days = hash_to_range(self.next_hash(), min, max).max(1);

        let change = WeatherChange {
            from: self.current,
            to,
            days,
        };
        log::info!(
            "Weather now '{}' for {} day(s)",
            self.presets[to].name,
            days
        );
        self.current = Some(to);
        self.days_remaining = days;
        change
    }
}
