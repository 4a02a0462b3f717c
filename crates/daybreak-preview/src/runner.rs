use daybreak_core::preset::WeatherPreset;
use daybreak_presets::WeatherScheduler;
use daybreak_sky::{
    DayClock, SceneLayout, SceneState, SkyError, TimeOfDayEvaluator, TransitionTrigger,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PreviewError {
    #[error(transparent)]
    Sky(#[from] SkyError),
    #[error("{frames_per_day} frames/day over {days} days exceeds {max} total frames")]
    TooManyFrames {
        frames_per_day: u32,
        days: u32,
        max: u32,
    },
}

/// How many transitions of each kind fired during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionCounts {
    pub band: u32,
    pub snap_day: u32,
    pub snap_night: u32,
}

impl TransitionCounts {
    fn record(&mut self, trigger: TransitionTrigger) {
        match trigger {
            TransitionTrigger::Band => self.band += 1,
            TransitionTrigger::SnapDay => self.snap_day += 1,
            TransitionTrigger::SnapNight => self.snap_night += 1,
        }
    }
}

/// Applied scene values at one sample point.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSample {
    pub day: u32,
    pub time: String,
    pub day_fraction: f32,
    pub sun_color: [f32; 4],
    pub fog_color: [f32; 4],
    pub fog_density: f32,
    pub sun_direction: [f32; 3],
}

/// Result of previewing one preset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewResult {
    pub preset_name: String,
    pub frame_count: u32,
    pub transitions: TransitionCounts,
    pub samples: Vec<FrameSample>,
}

/// One scheduled weather day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ForecastDay {
    pub day: u32,
    pub preset_name: String,
    pub changed: bool,
}

/// Drives evaluators through simulated days at a fixed frame rate.
pub struct PreviewRunner {
    frames_per_day: u32,
    days: u32,
    cloud_layers: usize,
    samples_per_day: u32,
}

impl PreviewRunner {
    pub fn new(frames_per_day: u32, days: u32, cloud_layers: usize) -> Self {
        Self {
            frames_per_day: frames_per_day.max(1),
            days: days.max(1),
            cloud_layers,
            samples_per_day: 8,
        }
    }

    /// Simulate `days` full days of one preset and sample the applied scene.
    pub fn run_preset(&self, preset: &WeatherPreset) -> Result<PreviewResult, PreviewError> {
        let total = self.total_frames()?;
        let mut evaluator = TimeOfDayEvaluator::new(preset.clone());
        evaluator.start(SceneLayout {
            cloud_layers: self.cloud_layers,
        })?;

        // One real second per frame keeps elapsed time readable in reports
        let mut clock = DayClock::new(self.frames_per_day as f32);
        let mut scene = SceneState::new(self.cloud_layers);
        let mut transitions = TransitionCounts::default();
        let mut samples = Vec::new();
        let sample_every = (self.frames_per_day / self.samples_per_day).max(1);

        for frame_index in 0..total {
            let frame = evaluator.update(&clock)?;
            if let Some(trigger) = frame.transition_trigger() {
                transitions.record(trigger);
            }
            frame.apply(&mut scene);

            if frame_index % sample_every == 0 {
                let uniform = scene.uniform();
                samples.push(FrameSample {
                    day: clock.day(),
                    time: clock.time_string(),
                    day_fraction: clock.day_fraction(),
                    sun_color: uniform.sun_color,
                    fog_color: uniform.fog_color,
                    fog_density: uniform.fog_density,
                    sun_direction: uniform.sun_direction,
                });
            }
            clock.advance(1.0);
        }

        log::info!(
            "Previewed '{}': {} frames, {} band / {} day / {} night transitions",
            preset.name,
            total,
            transitions.band,
            transitions.snap_day,
            transitions.snap_night
        );

        Ok(PreviewResult {
            preset_name: preset.name.clone(),
            frame_count: total,
            transitions,
            samples,
        })
    }

    /// Frames simulated per preset.
    pub fn total_frames(&self) -> Result<u32, PreviewError> {
        self.frames_per_day
            .checked_mul(self.days)
            .ok_or(PreviewError::TooManyFrames {
                frames_per_day: self.frames_per_day,
                days: self.days,
                max: u32::MAX,
            })
    }

    /// Roll a weather forecast over `days` days.
    pub fn forecast(&self, presets: Vec<WeatherPreset>, seed: u32) -> Vec<ForecastDay> {
        let mut scheduler = WeatherScheduler::new(presets, seed);
        let mut out = Vec::new();
        if scheduler.start().is_none() {
            return out;
        }

        for day in 1..=self.days {
            let changed = if day == 1 {
                true
            } else {
                scheduler.on_new_day().is_some()
            };
            if let Some(preset) = scheduler.current() {
                out.push(ForecastDay {
                    day,
                    preset_name: preset.name.clone(),
                    changed,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_default_preset() {
        let runner = PreviewRunner::new(240, 2, 0);
        let result = runner
            .run_preset(&WeatherPreset::default())
            .expect("default preset runs");
        assert_eq!(result.frame_count, 480);
        assert_eq!(result.samples.len(), 16);
        // Starts at midnight with no committed phase, snaps to night, then
        // flips to day and back once per day
        assert_eq!(result.transitions.snap_day, 2);
        assert_eq!(result.transitions.snap_night, 2);
        assert!(result.transitions.band > 0);
    }

    #[test]
    fn test_cloudy_preset_needs_layers() {
        let preset = WeatherPreset {
            has_clouds: true,
            ..WeatherPreset::default()
        };
        let runner = PreviewRunner::new(100, 1, 0);
        assert!(matches!(
            runner.run_preset(&preset),
            Err(PreviewError::Sky(SkyError::NoCloudLayers(_)))
        ));
    }

    #[test]
    fn test_frame_count_overflow_is_an_error() {
        let runner = PreviewRunner::new(u32::MAX / 2, 3, 0);
        let err = runner
            .run_preset(&WeatherPreset::default())
            .expect_err("frame count overflows u32");
        assert_eq!(
            err,
            PreviewError::TooManyFrames {
                frames_per_day: u32::MAX / 2,
                days: 3,
                max: u32::MAX,
            }
        );
        assert_eq!(PreviewRunner::new(1440, 3, 0).total_frames(), Ok(4320));
    }

    #[test]
    fn test_forecast_covers_every_day() {
        let presets = daybreak_presets::builtin_presets().expect("valid built-ins");
        let runner = PreviewRunner::new(10, 12, 0);
        let days = runner.forecast(presets, 4);
        assert_eq!(days.len(), 12);
        assert!(days[0].changed);
        assert_eq!(days.last().map(|d| d.day), Some(12));
    }

    #[test]
    fn test_forecast_empty() {
        let runner = PreviewRunner::new(10, 3, 0);
        assert!(runner.forecast(Vec::new(), 1).is_empty());
    }
}
