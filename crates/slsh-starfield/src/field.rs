//! Layered cellular star placement and radial falloff accumulation.
//!
//! The scaled view ray is partitioned into unit cells. Each cell of each layer
//! holds at most one candidate star whose center and radius come from
//! [`hash33`] of the cell coordinate. Layers use grids offset from each other so
//! that stars of different layers do not line up.

use glam::Vec3;

use crate::StarfieldParams;
use crate::hash::{fract, hash33};

/// A star candidate derived from the hash of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarCandidate {
    /// Star center relative to the middle of its cell.
    pub center: Vec3,
    /// Effective radius in cell units. Zero means the cell renders nothing.
    pub radius: f32,
}

impl StarCandidate {
    /// Build a candidate from a hash vector in `[0, 1)^3`.
    ///
    /// The hash is remapped to `[-spread, spread]^3`. Only centers close to the
    /// middle of the cell get a positive radius, proportional to that closeness.
    pub fn from_hash(hash: Vec3, params: &StarfieldParams) -> Self {
        let center = (hash * 2.0 - Vec3::ONE) * params.center_spread;
        let magnitude = 1.0 - center.length();
        let radius = (magnitude - params.radius_threshold).clamp(0.0, 1.0);
        Self { center, radius }
    }

    /// Squared, clamped radial falloff at `local`, a position relative to the
    /// middle of the cell.
    pub fn falloff(&self, local: Vec3) -> f32 {
        let d = local.distance(self.center);
        // A zero radius counts as an infinitely small star.
        let ratio = if self.radius > 0.0 {
            d / self.radius
        } else {
            f32::INFINITY
        };
        let f = (1.0 - ratio).clamp(0.0, 1.0);
        f * f
    }
}

/// Scaled ray shifted into the grid of `layer`.
#[inline]
pub fn layer_point(scaled: Vec3, layer: u32, params: &StarfieldParams) -> Vec3 {
    scaled + Vec3::splat(layer as f32 * params.layer_offset)
}

/// Integer-valued grid cell containing `ray` in the given layer.
pub fn layer_cell(ray: Vec3, layer: u32, params: &StarfieldParams) -> Vec3 {
    layer_point(ray * params.density, layer, params).floor()
}

/// Brightness contribution of a single layer.
pub fn layer_brightness(scaled: Vec3, layer: u32, params: &StarfieldParams) -> f32 {
    let p = layer_point(scaled, layer, params);
    let star = StarCandidate::from_hash(hash33(p.floor()), params);
    let local = fract(p) - Vec3::splat(0.5);
    star.falloff(local)
}

/// Total star brightness seen along `ray`.
///
/// Non-negative and finite for every finite ray. With the default parameters
/// the result lies in `[0, layer_count]`.
pub fn star_field(ray: Vec3, params: &StarfieldParams) -> f32 {
    let scaled = ray * params.density;
    let brightness = (0..params.layer_count)
        .map(|layer| layer_brightness(scaled, layer, params))
        .sum::<f32>();
    debug_assert!(brightness.is_finite() && brightness >= 0.0);
    brightness
}
