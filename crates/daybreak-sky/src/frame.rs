use daybreak_core::color::Color;
use daybreak_core::constants::{PROP_COLOR, PROP_MAIN_TEX, PROP_SUN, PROP_TINT_COLOR};
use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::phase::TransitionTrigger;
use crate::scene::SceneSink;

/// Everything the evaluator produced for one frame.
///
/// Values the evaluator did not recompute this frame are absent, and the
/// host keeps whatever it applied last (see [`crate::scene::SceneState`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Day fraction this frame was evaluated at.
    pub day_fraction: f32,
    pub sun_color: Color,
    pub fog_color: Color,
    /// City and water material parameters for an external material system.
    pub surfaces: SurfaceState,
    /// Present only on frames that ran a transition.
    pub transition: Option<TransitionOutput>,
    /// Per-layer cloud scroll. Empty when the preset has no clouds.
    pub wind: Vec<CloudScroll>,
}

/// Result of one transition evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionOutput {
    pub trigger: TransitionTrigger,
    /// Blend position: 0 = full night, 1 = full day.
    pub range: f32,
    /// Interpolated sun Euler angles, degrees.
    pub sun_euler: Vec3,
    pub sun_rotation: Quat,
    pub fog_density: f32,
    pub clouds: CloudShading,
}

/// Cloud material updates issued by a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CloudShading {
    /// One entry per cloud layer, lowest first.
    Layers(Vec<CloudLayerShade>),
    /// Clouds disabled: every layer's tint is cleared.
    Hidden { layer_count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudLayerShade {
    /// Height fraction of the layer; also its alpha.
    pub strata: f32,
    pub color: Color,
    /// Sun color at the time of the transition.
    pub sun_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudScroll {
    pub layer: usize,
    /// Layer height fraction at the current day fraction. Reported only;
    /// it does not scale the offset.
    pub strata: f32,
    pub offset: Vec2,
}

/// City and water material parameters at the current day fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceState {
    pub city_diffuse: Color,
    pub city_metallic: f32,
    pub city_smoothness: f32,
    pub city_light_range: f32,
    pub water_diffuse: Color,
    pub water_smoothness: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            city_diffuse: Color::WHITE,
            city_metallic: 0.0,
            city_smoothness: 0.0,
            city_light_range: 0.0,
            water_diffuse: Color::WHITE,
            water_smoothness: 0.0,
        }
    }
}

impl FrameOutput {
    /// Push this frame's values to the scene collaborators.
    pub fn apply<S: SceneSink + ?Sized>(&self, sink: &mut S) {
        sink.set_sun_color(self.sun_color);
        sink.set_fog_color(self.fog_color);
        sink.set_surfaces(&self.surfaces);

        if let Some(transition) = &self.transition {
            sink.set_sun_rotation(transition.sun_rotation);
            sink.set_fog_density(transition.fog_density);
            match &transition.clouds {
                CloudShading::Layers(layers) => {
                    for (i, layer) in layers.iter().enumerate() {
                        sink.set_cloud_color(i, PROP_COLOR, layer.color);
                        sink.set_cloud_color(i, PROP_SUN, layer.sun_color);
                    }
                }
                CloudShading::Hidden { layer_count } => {
                    for i in 0..*layer_count {
                        sink.set_cloud_color(i, PROP_TINT_COLOR, Color::CLEAR);
                    }
                }
            }
        }

        for scroll in &self.wind {
            sink.set_cloud_texture_offset(scroll.layer, PROP_MAIN_TEX, scroll.offset);
        }
    }

    pub fn transition_trigger(&self) -> Option<TransitionTrigger> {
        self.transition.as_ref().map(|t| t.trigger)
    }
}
