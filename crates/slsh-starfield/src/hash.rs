//! Cheap 3D -> 3D spatial hash used as the only source of randomness in the field.
//!
//! Fractional-part folding followed by a cross-axis mixing term. No trigonometry
//! and no loops, so it can run once per layer per pixel every frame.

use glam::Vec3;

const FOLD: Vec3 = Vec3::new(0.1031, 0.1030, 0.0973);
const MIX: f32 = 33.33;

/// Largest `f32` strictly below 1.0.
const ONE_BELOW: f32 = 0.999_999_94;

/// `v - floor(v)`, kept strictly below 1.0 even when rounding would land on it.
pub(crate) fn fract(v: Vec3) -> Vec3 {
    (v - v.floor()).min(Vec3::splat(ONE_BELOW))
}

/// Hash a grid cell coordinate into a pseudo-random vector in `[0, 1)^3`.
///
/// Pure: the same cell always yields the same vector. Adjacent cells produce
/// uncorrelated outputs.
#[inline]
pub fn hash33(cell: Vec3) -> Vec3 {
    let mut p = fract(cell * FOLD);
    let yxz = Vec3::new(p.y, p.x, p.z);
    p += Vec3::splat(p.dot(yxz + Vec3::splat(MIX)));

    let xxy = Vec3::new(p.x, p.x, p.y);
    let yxx = Vec3::new(p.y, p.x, p.x);
    let zyx = Vec3::new(p.z, p.y, p.x);
    fract((xxy + yxx) * zyx)
}
