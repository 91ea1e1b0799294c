//! Per-pixel driver combining ray construction and star accumulation.

use glam::Vec2;

use crate::field::star_field;
use crate::ray::build_ray;
use crate::{FrameInputs, StarfieldParams};

/// Star brightness at `pixel` for the given frame.
pub fn pixel_brightness(pixel: Vec2, frame: &FrameInputs, params: &StarfieldParams) -> f32 {
    let ray = build_ray(pixel, frame.resolution, frame.view_angles, params);
    star_field(ray, params)
}

/// RGBA color at `pixel`: brightness on every color channel, opaque alpha.
/// Values are not clamped; the frame buffer owner decides how to quantize.
pub fn shade_pixel(pixel: Vec2, frame: &FrameInputs, params: &StarfieldParams) -> [f32; 4] {
    let b = pixel_brightness(pixel, frame, params);
    [b, b, b, 1.0]
}
