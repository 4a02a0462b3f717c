use glam::{EulerRot, Quat, Vec3};

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation with `t` clamped to [0, 1].
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a.lerp(b, t.clamp(0.0, 1.0))
}

/// Position of `t` inside `[start, end]`, unclamped: 0 at `start`, 1 at `end`.
/// Callers guarantee `start < end`.
pub fn band_fraction(t: f32, start: f32, end: f32) -> f32 {
    (t - start) / (end - start)
}

/// Convert Euler angles in degrees to a rotation.
///
/// Rotations apply around Z first, then X, then Y, so a sun authored as
/// (pitch, yaw, roll) keeps its yaw independent of pitch.
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}
