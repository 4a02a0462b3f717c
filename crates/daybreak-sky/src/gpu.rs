use glam::Vec3;

use crate::scene::{CloudMaterial, SceneState};

/// Sky uniform (48 bytes, matches WGSL SkyUniform).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyUniform {
    pub sun_color: [f32; 4],
    pub fog_color: [f32; 4],
    /// Direction the sun light travels (light forward, +Z rotated).
    pub sun_direction: [f32; 3],
    pub fog_density: f32,
}

/// Per-layer cloud material data (64 bytes, matches WGSL GpuCloudLayer).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCloudLayer {
    pub color: [f32; 4],
    pub sun: [f32; 4],
    pub tint: [f32; 4],
    pub main_tex_offset: [f32; 2],
    pub _padding: [f32; 2],
}

impl From<&CloudMaterial> for GpuCloudLayer {
    fn from(cloud: &CloudMaterial) -> Self {
        Self {
            color: cloud.color.to_array(),
            sun: cloud.sun.to_array(),
            tint: cloud.tint.to_array(),
            main_tex_offset: cloud.main_tex_offset.to_array(),
            _padding: [0.0; 2],
        }
    }
}

impl SceneState {
    /// Pack the global sky values for upload.
    pub fn uniform(&self) -> SkyUniform {
        let direction = self.sun_rotation * Vec3::Z;
        SkyUniform {
            sun_color: self.sun_color.to_array(),
            fog_color: self.fog_color.to_array(),
            sun_direction: direction.to_array(),
            fog_density: self.fog_density,
        }
    }

    /// Pack every cloud layer for upload, lowest layer first.
    pub fn cloud_layers(&self) -> Vec<GpuCloudLayer> {
        self.clouds.iter().map(GpuCloudLayer::from).collect()
    }
}
