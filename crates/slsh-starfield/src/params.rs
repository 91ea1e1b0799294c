//! Tunable constants that shape the look of the star field, plus the per-frame inputs
//! shared read-only by every pixel invocation.

use glam::Vec2;

/// Grid scale applied to the view ray. Larger values produce a denser field.
pub const DEFAULT_DENSITY: f32 = 150.0;
/// Number of independently offset star layers summed per pixel.
pub const DEFAULT_LAYER_COUNT: u32 = 4;
/// Per-layer offset (times layer index) added on all axes before flooring.
pub const DEFAULT_LAYER_OFFSET: f32 = 1199.0;
/// Maximum distance of a star center from the middle of its cell, per axis.
pub const DEFAULT_CENTER_SPREAD: f32 = 0.8;
/// Hash magnitude below which a cell stays empty.
pub const DEFAULT_RADIUS_THRESHOLD: f32 = 0.5;
/// Field-of-view factor applied to the centered pixel coordinate.
pub const DEFAULT_FOV_SCALE: f32 = 1.4;
/// Forward (z) component of the unrotated view direction.
pub const DEFAULT_FORWARD: f32 = 2.0;

/// Parameters of the procedural star field.
///
/// Every field defaults to the value the renderer was tuned with; changing them
/// changes the look but never the purity of the per-pixel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldParams {
    /// Scale from unit view direction into grid space.
    pub density: f32,
    /// Number of layers accumulated per pixel.
    pub layer_count: u32,
    /// Offset multiplier separating the grids of consecutive layers.
    pub layer_offset: f32,
    /// Scale of the hash-derived star center within its cell.
    pub center_spread: f32,
    /// Hash magnitude subtracted before clamping to get the star radius.
    pub radius_threshold: f32,
    /// Field-of-view factor of the view-ray constructor.
    pub fov_scale: f32,
    /// Forward component of the pre-rotation view direction.
    pub forward: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            layer_count: DEFAULT_LAYER_COUNT,
            layer_offset: DEFAULT_LAYER_OFFSET,
            center_spread: DEFAULT_CENTER_SPREAD,
            radius_threshold: DEFAULT_RADIUS_THRESHOLD,
            fov_scale: DEFAULT_FOV_SCALE,
            forward: DEFAULT_FORWARD,
        }
    }
}

/// Camera orientation in radians. No wrapping is applied; any finite value works.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewAngles {
    /// Rotation of the (x, z) plane, applied last.
    pub yaw: f32,
    /// Rotation of the (y, z) plane, applied first.
    pub pitch: f32,
}

impl ViewAngles {
    pub const ZERO: Self = Self { yaw: 0.0, pitch: 0.0 };

    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}

/// Frame-level inputs, constant for every pixel of one frame.
///
/// `Copy` so that each worker receives its own value rather than a shared
/// mutable reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    /// Output size in pixels. Both components must be positive.
    pub resolution: Vec2,
    pub view_angles: ViewAngles,
}

impl FrameInputs {
    pub fn new(width: f32, height: f32, view_angles: ViewAngles) -> Self {
        Self {
            resolution: Vec2::new(width, height),
            view_angles,
        }
    }
}
