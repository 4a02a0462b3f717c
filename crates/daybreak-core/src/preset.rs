use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{DEFAULT_TRANSITION_END, DEFAULT_TRANSITION_START};
use crate::curve::Curve;
use crate::gradient::Gradient;

/// One weather state: every ramp and scalar that drives the sky over a day.
/// Loaded from RON data, read-only once an evaluator owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherPreset {
    /// Human-readable name for logs and the scheduler.
    pub name: String,

    // Environment
    /// Sun color over the day.
    pub sunlight: Gradient,
    /// Fog color over the day.
    pub fog: Gradient,
    pub has_clouds: bool,
    /// Color of the highest cloud layer across the transition.
    pub clouds_high: Gradient,
    /// Color of the lowest cloud layer across the transition.
    pub clouds_low: Gradient,
    /// Cloud density at full day, in (0, 1].
    pub cloud_density_day: f32,
    /// Cloud density at full night, in (0, 1].
    pub cloud_density_night: f32,
    /// Spacing factor between cloud layers.
    pub cloud_stratification: f32,
    /// Texture scroll direction; only x and y reach the texture offset.
    pub wind_direction: Vec3,
    /// Fog density at full day, in (0, 1].
    pub fog_density_day: f32,
    /// Fog density at full night, in (0, 1].
    pub fog_density_night: f32,

    // Sun orientation (degrees)
    pub day_euler: Vec3,
    pub night_euler: Vec3,

    // Transition band, in day fractions
    pub transition_start: f32,
    pub transition_end: f32,

    // City surfaces
    pub city_diffuse: Gradient,
    pub city_metallic: Curve,
    pub city_smoothness: Curve,
    pub city_light_range: Curve,

    // Water surfaces
    pub water_diffuse: Gradient,
    pub water_smoothness: Curve,

    /// Minimum number of days the scheduler keeps this weather.
    pub duration_min: u32,
    /// Maximum number of days the scheduler keeps this weather.
    pub duration_max: u32,
}

impl Default for WeatherPreset {
    fn default() -> Self {
        Self {
            name: "System".into(),
            sunlight: Gradient::two_stop(Color::rgb(0.1, 0.12, 0.25), Color::rgb(1.0, 0.95, 0.85)),
            fog: Gradient::two_stop(Color::rgb(0.02, 0.03, 0.08), Color::rgb(0.6, 0.7, 0.8)),
            has_clouds: false,
            clouds_high: Gradient::solid(Color::WHITE),
            clouds_low: Gradient::solid(Color::WHITE),
            cloud_density_day: 0.01,
            cloud_density_night: 0.1,
            cloud_stratification: 1.0,
            wind_direction: Vec3::X,
            fog_density_day: 0.0005,
            fog_density_night: 0.001,
            day_euler: Vec3::new(50.0, -30.0, 0.0),
            night_euler: Vec3::new(-50.0, -30.0, 0.0),
            transition_start: DEFAULT_TRANSITION_START,
            transition_end: DEFAULT_TRANSITION_END,
            city_diffuse: Gradient::solid(Color::WHITE),
            city_metallic: Curve::constant(0.0),
            city_smoothness: Curve::constant(0.5),
            city_light_range: Curve::constant(0.0),
            water_diffuse: Gradient::solid(Color::WHITE),
            water_smoothness: Curve::constant(0.9),
            duration_min: 1,
            duration_max: 10,
        }
    }
}
