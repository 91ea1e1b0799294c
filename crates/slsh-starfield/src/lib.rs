//! Procedural star field: a pure function from (pixel, resolution, view angles)
//! to brightness, with no stored star data.
//!
//! Stars are placed by hashing grid cells of the scaled view ray over several
//! offset layers. Everything is regenerated on every evaluation, so pixels can
//! be shaded in any order and on any number of threads.

pub mod field;
pub mod hash;
pub mod params;
pub mod pixel;
pub mod ray;

pub use field::{StarCandidate, layer_brightness, layer_cell, star_field};
pub use hash::hash33;
pub use params::{
    DEFAULT_CENTER_SPREAD, DEFAULT_DENSITY, DEFAULT_FORWARD, DEFAULT_FOV_SCALE,
    DEFAULT_LAYER_COUNT, DEFAULT_LAYER_OFFSET, DEFAULT_RADIUS_THRESHOLD, FrameInputs,
    StarfieldParams, ViewAngles,
};
pub use pixel::{pixel_brightness, shade_pixel};
pub use ray::{build_ray, camera_direction, rotate2, rotate_view, screen_uv};
