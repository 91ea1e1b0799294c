//! View-ray construction: pixel -> camera-space direction -> rotated world ray.

use glam::{Vec2, Vec3};

use crate::{StarfieldParams, ViewAngles};

/// Rotate a 2D vector by `angle` radians with the `[cos, -sin; sin, cos]` matrix.
#[inline]
pub fn rotate2(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Centered, aspect-corrected screen coordinate.
///
/// Both axes are divided by the resolution height, so horizontal extent grows
/// with the aspect ratio instead of stretching.
pub fn screen_uv(pixel: Vec2, resolution: Vec2, params: &StarfieldParams) -> Vec2 {
    params.fov_scale * (pixel * 2.0 - resolution) / resolution.y
}

/// Unrotated, unnormalized camera-space direction through `pixel`.
pub fn camera_direction(pixel: Vec2, resolution: Vec2, params: &StarfieldParams) -> Vec3 {
    screen_uv(pixel, resolution, params).extend(params.forward)
}

/// Apply the camera orientation: the (y, z) plane by `-pitch`, then the (x, z)
/// plane by `-yaw`.
pub fn rotate_view(dir: Vec3, angles: ViewAngles) -> Vec3 {
    let yz = rotate2(Vec2::new(dir.y, dir.z), -angles.pitch);
    let dir = Vec3::new(dir.x, yz.x, yz.y);
    let xz = rotate2(Vec2::new(dir.x, dir.z), -angles.yaw);
    Vec3::new(xz.x, dir.y, xz.y)
}

/// Unit world-space view ray through `pixel`.
pub fn build_ray(
    pixel: Vec2,
    resolution: Vec2,
    angles: ViewAngles,
    params: &StarfieldParams,
) -> Vec3 {
    rotate_view(camera_direction(pixel, resolution, params), angles).normalize()
}
