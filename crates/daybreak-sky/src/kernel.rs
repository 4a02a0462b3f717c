//! Pure per-frame formulas. Everything here maps a day fraction plus a
//! preset to output values; nothing touches the clock or the scene.

use daybreak_core::color::Color;
use daybreak_core::math::{band_fraction, euler_degrees_to_quat, lerp, lerp_vec3};
use daybreak_core::preset::WeatherPreset;
use glam::Vec2;

use crate::frame::{CloudLayerShade, CloudScroll, CloudShading, SurfaceState, TransitionOutput};
use crate::phase::TransitionTrigger;

/// Sun color and fog color at `t`.
pub fn evaluate_environment(preset: &WeatherPreset, t: f32) -> (Color, Color) {
    (preset.sunlight.evaluate(t), preset.fog.evaluate(t))
}

/// City and water material parameters at `t`.
pub fn evaluate_surfaces(preset: &WeatherPreset, t: f32) -> SurfaceState {
    SurfaceState {
        city_diffuse: preset.city_diffuse.evaluate(t),
        city_metallic: preset.city_metallic.evaluate(t),
        city_smoothness: preset.city_smoothness.evaluate(t),
        city_light_range: preset.city_light_range.evaluate(t),
        water_diffuse: preset.water_diffuse.evaluate(t),
        water_smoothness: preset.water_smoothness.evaluate(t),
    }
}

/// Blend position for a transition: the band fraction for band frames,
/// exactly 0 or 1 for snaps.
pub fn transition_range(preset: &WeatherPreset, trigger: TransitionTrigger, t: f32) -> f32 {
    match trigger {
        TransitionTrigger::Band => band_fraction(t, preset.transition_start, preset.transition_end),
        TransitionTrigger::SnapNight => 0.0,
        TransitionTrigger::SnapDay => 1.0,
    }
}

/// Cloud density blended between night and day by `factor`.
pub fn cloud_density(preset: &WeatherPreset, factor: f32) -> f32 {
    lerp(preset.cloud_density_night, preset.cloud_density_day, factor)
}

/// Height fraction of cloud layer `layer` out of `layer_count`:
/// `(layer * stratification) / ((layer_count - 1) / density)`.
///
/// A single layer sits at 0. Denser clouds pack the layers lower.
pub fn cloud_strata(layer: usize, layer_count: usize, stratification: f32, density: f32) -> f32 {
    if layer_count <= 1 {
        return 0.0;
    }
    (layer as f32 * stratification) / ((layer_count - 1) as f32 / density)
}

/// Sun rotation, fog density and cloud shading for one transition.
pub fn evaluate_transition(
    preset: &WeatherPreset,
    trigger: TransitionTrigger,
    t: f32,
    layer_count: usize,
    sun_color: Color,
) -> TransitionOutput {
    let range = transition_range(preset, trigger, t);

    let sun_euler = lerp_vec3(preset.night_euler, preset.day_euler, range);
    let fog_density = lerp(preset.fog_density_night, preset.fog_density_day, range);

    let clouds = if preset.has_clouds {
        let high = preset.clouds_high.evaluate(range);
        let low = preset.clouds_low.evaluate(range);
        let density = cloud_density(preset, range);

        let layers = (0..layer_count)
            .map(|i| {
                let strata = cloud_strata(i, layer_count, preset.cloud_stratification, density);
                // Alpha carries the height falloff, not the gradients' alpha
                let color = low.lerp(high, strata).with_alpha(strata.clamp(0.0, 1.0));
                CloudLayerShade {
                    strata,
                    color,
                    sun_color,
                }
            })
            .collect();
        CloudShading::Layers(layers)
    } else {
        CloudShading::Hidden { layer_count }
    };

    TransitionOutput {
        trigger,
        range,
        sun_euler,
        sun_rotation: euler_degrees_to_quat(sun_euler),
        fog_density,
        clouds,
    }
}

/// Cloud texture scroll for every layer. Offset is `wind.xy * elapsed`.
pub fn evaluate_wind(
    preset: &WeatherPreset,
    t: f32,
    elapsed_seconds: f32,
    layer_count: usize,
) -> Vec<CloudScroll> {
    let density = cloud_density(preset, t);
    let offset = Vec2::new(preset.wind_direction.x, preset.wind_direction.y) * elapsed_seconds;

    (0..layer_count)
        .map(|layer| CloudScroll {
            layer,
            strata: cloud_strata(layer, layer_count, preset.cloud_stratification, density),
            offset,
        })
        .collect()
}
