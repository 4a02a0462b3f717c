use daybreak_core::preset::WeatherPreset;

use crate::clock::DayClock;
use crate::error::SkyError;
use crate::frame::FrameOutput;
use crate::kernel;
use crate::phase::{classify, DayPhase, TransitionTrigger};

/// Scene objects an evaluator is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    /// Number of cloud layer objects, lowest first.
    pub cloud_layers: usize,
}

/// Per-frame day/night evaluator for one weather preset.
///
/// Created from a validated preset, bound to a scene layout with
/// [`start`](Self::start), then ticked once per rendered frame with
/// [`update`](Self::update). Each evaluator keeps its own committed
/// day/night phase, so swapping evaluators on a shared [`DayClock`] makes
/// the incoming preset snap to its own full-day or full-night values.
#[derive(Debug, Clone)]
pub struct TimeOfDayEvaluator {
    preset: WeatherPreset,
    layout: Option<SceneLayout>,
    /// Last committed phase. `None` until the first snap.
    phase: Option<DayPhase>,
}

impl TimeOfDayEvaluator {
    pub fn new(preset: WeatherPreset) -> Self {
        Self {
            preset,
            layout: None,
            phase: None,
        }
    }

    pub fn preset(&self) -> &WeatherPreset {
        &self.preset
    }

    pub fn layout(&self) -> Option<SceneLayout> {
        self.layout
    }

    pub fn is_started(&self) -> bool {
        self.layout.is_some()
    }

    pub fn phase(&self) -> Option<DayPhase> {
        self.phase
    }

    /// Restore a committed phase, e.g. from a save.
    pub fn set_phase(&mut self, phase: Option<DayPhase>) {
        self.phase = phase;
    }

    /// Forget the committed phase so the next frame outside the band snaps.
    pub fn invalidate_phase(&mut self) {
        self.phase = None;
    }

    /// Bind the scene layout. Must be called once before any `update`.
    pub fn start(&mut self, layout: SceneLayout) -> Result<(), SkyError> {
        if self.preset.transition_start >= self.preset.transition_end {
            return Err(SkyError::InvalidPreset {
                name: self.preset.name.clone(),
                reason: format!(
                    "transition_start {} must be below transition_end {}",
                    self.preset.transition_start, self.preset.transition_end
                ),
            });
        }
        if self.preset.has_clouds && layout.cloud_layers == 0 {
            return Err(SkyError::NoCloudLayers(self.preset.name.clone()));
        }

        log::info!(
            "Weather '{}' started with {} cloud layer(s)",
            self.preset.name,
            layout.cloud_layers
        );
        self.layout = Some(layout);
        Ok(())
    }

    /// Evaluate one frame at the clock's current day fraction.
    ///
    /// Sun/fog colors and surfaces update every frame. The transition runs
    /// every frame inside the band and once per phase flip outside it.
    /// Wind runs every frame when the preset has clouds.
    pub fn update(&mut self, clock: &DayClock) -> Result<FrameOutput, SkyError> {
        let layout = self
            .layout
            .ok_or_else(|| SkyError::NotStarted(self.preset.name.clone()))?;
        let t = clock.day_fraction();

        let (sun_color, fog_color) = kernel::evaluate_environment(&self.preset, t);
        let surfaces = kernel::evaluate_surfaces(&self.preset, t);

        let step = classify(
            t,
            self.preset.transition_start,
            self.preset.transition_end,
            self.phase,
        );
        let transition = step.trigger.map(|trigger| {
            match trigger {
                TransitionTrigger::Band => log::trace!("Transition band at t={t:.4}"),
                _ => log::debug!(
                    "Weather '{}' {:?} at t={t:.4}",
                    self.preset.name,
                    trigger
                ),
            }
            kernel::evaluate_transition(&self.preset, trigger, t, layout.cloud_layers, sun_color)
        });
        self.phase = step.phase;

        let wind = if self.preset.has_clouds {
            kernel::evaluate_wind(&self.preset, t, clock.elapsed_seconds(), layout.cloud_layers)
        } else {
            Vec::new()
        };

        Ok(FrameOutput {
            day_fraction: t,
            sun_color,
            fog_color,
            surfaces,
            transition,
            wind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::CloudShading;
    use crate::scene::SceneState;
    use daybreak_core::color::Color;
    use daybreak_core::gradient::Gradient;
    use glam::{Vec2, Vec3};

    fn preset(has_clouds: bool) -> WeatherPreset {
        WeatherPreset {
            name: "Test".into(),
            has_clouds,
            clouds_low: Gradient::solid(Color::BLACK),
            clouds_high: Gradient::solid(Color::WHITE),
            cloud_density_day: 0.5,
            cloud_density_night: 1.0,
            wind_direction: Vec3::new(1.0, 0.5, 0.0),
            day_euler: Vec3::new(60.0, 0.0, 0.0),
            night_euler: Vec3::new(-60.0, 0.0, 0.0),
            fog_density_day: 0.002,
            fog_density_night: 0.004,
            ..WeatherPreset::default()
        }
    }

    fn started(has_clouds: bool, layers: usize) -> TimeOfDayEvaluator {
        let mut eval = TimeOfDayEvaluator::new(preset(has_clouds));
        eval.start(SceneLayout {
            cloud_layers: layers,
        })
        .expect("valid layout");
        eval
    }

    fn started_in(has_clouds: bool, layers: usize, phase: DayPhase) -> TimeOfDayEvaluator {
        let mut eval = started(has_clouds, layers);
        eval.set_phase(Some(phase));
        eval
    }

    #[test]
    fn test_update_before_start_fails() {
        let mut eval = TimeOfDayEvaluator::new(preset(false));
        let clock = DayClock::at(0.3);
        assert_eq!(
            eval.update(&clock),
            Err(SkyError::NotStarted("Test".into()))
        );
    }

    #[test]
    fn test_start_requires_cloud_layers() {
        let mut eval = TimeOfDayEvaluator::new(preset(true));
        let result = eval.start(SceneLayout { cloud_layers: 0 });
        assert_eq!(result, Err(SkyError::NoCloudLayers("Test".into())));
        assert!(!eval.is_started());
    }

    #[test]
    fn test_start_rejects_inverted_band() {
        let mut p = preset(false);
        p.transition_start = 0.6;
        p.transition_end = 0.4;
        let mut eval = TimeOfDayEvaluator::new(p);
        assert!(matches!(
            eval.start(SceneLayout { cloud_layers: 0 }),
            Err(SkyError::InvalidPreset { .. })
        ));
    }

    #[test]
    fn test_steady_night_only_updates_colors() {
        let mut eval = started_in(true, 3, DayPhase::Night);
        let clock = DayClock::at(0.3);
        let frame = eval.update(&clock).expect("started");

        assert!(frame.transition.is_none());
        assert_eq!(frame.sun_color, eval.preset().sunlight.evaluate(0.3));
        assert_eq!(frame.fog_color, eval.preset().fog.evaluate(0.3));
        assert_eq!(eval.phase(), Some(DayPhase::Night));
        assert_eq!(frame.wind.len(), 3);
    }

    #[test]
    fn test_band_midpoint_scenario() {
        let mut eval = started_in(true, 3, DayPhase::Night);
        let clock = DayClock::at(0.50);
        let frame = eval.update(&clock).expect("started");

        let tr = frame.transition.expect("inside band");
        assert_eq!(tr.trigger, TransitionTrigger::Band);
        assert!((tr.range - 0.5).abs() < 1e-3);
        assert!(tr.sun_euler.length() < 0.1, "midpoint of ±60 is 0, got {}", tr.sun_euler);
        assert!((tr.fog_density - 0.003).abs() < 1e-5);
        assert_eq!(eval.phase(), Some(DayPhase::Night), "band keeps the phase");
    }

    #[test]
    fn test_crossing_noon_snaps_day_exactly_once() {
        let mut eval = started_in(false, 2, DayPhase::Night);
        let mut clock = DayClock::at(0.40);

        let mut triggers = Vec::new();
        for i in 0..=40 {
            clock.set_day_fraction(0.40 + i as f32 * 0.005);
            let frame = eval.update(&clock).expect("started");
            if let Some(trigger) = frame.transition_trigger() {
                triggers.push(trigger);
            }
        }

        let snaps_day = triggers
            .iter()
            .filter(|t| **t == TransitionTrigger::SnapDay)
            .count();
        let snaps_night = triggers
            .iter()
            .filter(|t| **t == TransitionTrigger::SnapNight)
            .count();
        assert_eq!(snaps_day, 1);
        assert_eq!(snaps_night, 0);
        assert_eq!(eval.phase(), Some(DayPhase::Day));
        assert_eq!(triggers.last(), Some(&TransitionTrigger::SnapDay));
    }

    #[test]
    fn test_wrap_to_midnight_snaps_night() {
        let mut eval = started_in(false, 0, DayPhase::Day);
        let mut clock = DayClock::at(0.9);
        assert!(eval.update(&clock).expect("started").transition.is_none());

        clock.set_day_fraction(0.02);
        let frame = eval.update(&clock).expect("started");
        let tr = frame.transition.expect("flip to night");
        assert_eq!(tr.trigger, TransitionTrigger::SnapNight);
        assert_eq!(tr.range, 0.0);
        assert_eq!(tr.fog_density, 0.004);
        assert_eq!(eval.phase(), Some(DayPhase::Night));
    }

    #[test]
    fn test_swapped_evaluator_snaps_to_its_own_values() {
        let mut clear = started(false, 0);
        let mut clock = DayClock::at(0.7);
        clear.update(&clock).expect("started");
        assert_eq!(clear.phase(), Some(DayPhase::Day));

        let mut foggy = TimeOfDayEvaluator::new(WeatherPreset {
            name: "Foggy".into(),
            fog_density_day: 0.9,
            ..preset(false)
        });
        foggy
            .start(SceneLayout { cloud_layers: 0 })
            .expect("valid layout");

        let mut transitions = Vec::new();
        for i in 0..50 {
            clock.set_day_fraction(0.70 + i as f32 * 0.005);
            let frame = foggy.update(&clock).expect("started");
            transitions.extend(frame.transition);
        }
        assert_eq!(transitions.len(), 1, "one snap after the swap");
        assert_eq!(transitions[0].trigger, TransitionTrigger::SnapDay);
        assert!((transitions[0].fog_density - 0.9).abs() < 1e-6);
        assert_eq!(foggy.phase(), Some(DayPhase::Day));

        // Swapping back leaves the first evaluator's committed phase intact
        assert_eq!(clear.phase(), Some(DayPhase::Day));
        assert!(clear.update(&clock).expect("started").transition.is_none());
    }

    #[test]
    fn test_invalidate_phase_forces_snap() {
        let mut eval = started_in(false, 0, DayPhase::Day);
        let clock = DayClock::at(0.8);
        assert!(eval.update(&clock).expect("started").transition.is_none());

        eval.invalidate_phase();
        assert_eq!(eval.phase(), None);
        let frame = eval.update(&clock).expect("started");
        assert_eq!(frame.transition_trigger(), Some(TransitionTrigger::SnapDay));
    }

    #[test]
    fn test_no_clouds_hides_layers_and_skips_wind() {
        let mut eval = started(false, 4);
        let clock = DayClock::at(0.7);
        let frame = eval.update(&clock).expect("started");

        assert!(frame.wind.is_empty());
        let tr = frame.transition.as_ref().expect("first frame snaps");
        assert_eq!(tr.clouds, CloudShading::Hidden { layer_count: 4 });

        let mut scene = SceneState::new(4);
        frame.apply(&mut scene);
        for cloud in &scene.clouds {
            assert_eq!(cloud.tint, Color::CLEAR);
        }
        // Only the tint property is touched
        assert_eq!(scene.clouds[0].color, Color::WHITE);
    }

    #[test]
    fn test_no_clouds_hides_layers_on_band_frames() {
        let mut eval = started_in(false, 3, DayPhase::Night);
        let clock = DayClock::at(0.50);
        let frame = eval.update(&clock).expect("started");

        let tr = frame.transition.as_ref().expect("inside band");
        assert_eq!(tr.trigger, TransitionTrigger::Band);
        assert_eq!(tr.clouds, CloudShading::Hidden { layer_count: 3 });
        assert!(frame.wind.is_empty());

        let mut scene = SceneState::new(3);
        frame.apply(&mut scene);
        for cloud in &scene.clouds {
            assert_eq!(cloud.tint, Color::rgba(0.0, 0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_wind_scrolls_with_elapsed_time() {
        let mut eval = started(true, 2);
        let mut clock = DayClock::new(100.0);
        clock.advance(10.0);
        let frame = eval.update(&clock).expect("started");
        assert_eq!(frame.wind[0].offset, Vec2::new(10.0, 5.0));
        assert_eq!(frame.wind[1].offset, frame.wind[0].offset);
    }

    #[test]
    fn test_apply_full_frame_to_scene() {
        let mut eval = started(true, 3);
        let mut clock = DayClock::at(0.8);
        clock.set_elapsed_seconds(2.0);
        let frame = eval.update(&clock).expect("started");

        let mut scene = SceneState::new(3);
        frame.apply(&mut scene);

        assert_eq!(scene.sun_color, frame.sun_color);
        assert_eq!(scene.fog_color, frame.fog_color);
        assert!((scene.fog_density - 0.002).abs() < 1e-7);
        assert_eq!(scene.surfaces, frame.surfaces);
        // Day density 0.5 with 3 layers: strata 0, 0.25, 0.5
        assert_eq!(scene.clouds[2].color.a, 0.5);
        assert_eq!(scene.clouds[1].sun, frame.sun_color);
        assert_eq!(scene.clouds[0].main_tex_offset, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_builtin_presets_run_full_day() {
        let presets = daybreak_presets::builtin_presets().expect("valid built-ins");
        for preset in presets {
            let mut eval = TimeOfDayEvaluator::new(preset);
            eval.start(SceneLayout { cloud_layers: 4 })
                .expect("built-ins start");
            let mut clock = DayClock::new(60.0);
            let mut scene = SceneState::new(4);
            for _ in 0..3600 {
                clock.advance(1.0 / 60.0);
                let frame = eval.update(&clock).expect("started");
                frame.apply(&mut scene);
            }
            assert!(scene.fog_density > 0.0);
            assert!(scene.uniform().sun_direction.iter().all(|c| c.is_finite()));
        }
    }
}
