use daybreak_core::color::Color;
use daybreak_core::constants::{PROP_COLOR, PROP_MAIN_TEX, PROP_SUN, PROP_TINT_COLOR};
use glam::{Quat, Vec2};

use crate::frame::SurfaceState;

/// Scene collaborators the evaluator writes into: the sun light, the
/// global fog settings and the ordered cloud layer materials.
pub trait SceneSink {
    fn set_sun_color(&mut self, color: Color);
    fn set_sun_rotation(&mut self, rotation: Quat);
    fn set_fog_color(&mut self, color: Color);
    fn set_fog_density(&mut self, density: f32);
    /// Set a named color property on cloud layer `layer`.
    fn set_cloud_color(&mut self, layer: usize, property: &str, color: Color);
    /// Set a named texture offset on cloud layer `layer`.
    fn set_cloud_texture_offset(&mut self, layer: usize, property: &str, offset: Vec2);
    /// City/water parameters. Hosts without those materials can ignore them.
    fn set_surfaces(&mut self, _surfaces: &SurfaceState) {}
}

/// Material properties of one cloud layer as last applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudMaterial {
    /// `_Color`
    pub color: Color,
    /// `_Sun`
    pub sun: Color,
    /// `_TintColor`
    pub tint: Color,
    /// `_MainTex` offset
    pub main_tex_offset: Vec2,
}

impl Default for CloudMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            sun: Color::WHITE,
            tint: Color::WHITE,
            main_tex_offset: Vec2::ZERO,
        }
    }
}

/// In-memory scene that keeps the last value written to every property.
///
/// Frames only carry what changed, so the host folds each
/// [`crate::FrameOutput`] into a `SceneState` to get the complete picture
/// (e.g. for GPU upload via [`SceneState::uniform`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub sun_color: Color,
    pub sun_rotation: Quat,
    pub fog_color: Color,
    pub fog_density: f32,
    pub surfaces: SurfaceState,
    pub clouds: Vec<CloudMaterial>,
}

impl SceneState {
    pub fn new(cloud_layers: usize) -> Self {
        Self {
            sun_color: Color::WHITE,
            sun_rotation: Quat::IDENTITY,
            fog_color: Color::BLACK,
            fog_density: 0.0,
            surfaces: SurfaceState::default(),
            clouds: vec![CloudMaterial::default(); cloud_layers],
        }
    }

    fn cloud_mut(&mut self, layer: usize) -> Option<&mut CloudMaterial> {
        let count = self.clouds.len();
        let cloud = self.clouds.get_mut(layer);
        if cloud.is_none() {
            log::warn!("Cloud layer {layer} out of range ({count} layers)");
        }
        cloud
    }
}

impl SceneSink for SceneState {
    fn set_sun_color(&mut self, color: Color) {
        self.sun_color = color;
    }

    fn set_sun_rotation(&mut self, rotation: Quat) {
        self.sun_rotation = rotation;
    }

    fn set_fog_color(&mut self, color: Color) {
        self.fog_color = color;
    }

    fn set_fog_density(&mut self, density: f32) {
        self.fog_density = density;
    }

    fn set_cloud_color(&mut self, layer: usize, property: &str, color: Color) {
        let Some(cloud) = self.cloud_mut(layer) else {
            return;
        };
        match property {
            PROP_COLOR => cloud.color = color,
            PROP_SUN => cloud.sun = color,
            PROP_TINT_COLOR => cloud.tint = color,
            other => log::warn!("Unknown cloud color property '{other}'"),
        }
    }

    fn set_cloud_texture_offset(&mut self, layer: usize, property: &str, offset: Vec2) {
        let Some(cloud) = self.cloud_mut(layer) else {
            return;
        };
        if property == PROP_MAIN_TEX {
            cloud.main_tex_offset = offset;
        } else {
            log::warn!("Unknown cloud texture property '{property}'");
        }
    }

    fn set_surfaces(&mut self, surfaces: &SurfaceState) {
        self.surfaces = *surfaces;
    }
}
