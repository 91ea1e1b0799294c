//! First-person look camera: mouse deltas in, view angles out.

use std::f32::consts::FRAC_PI_2;

use slsh_starfield::ViewAngles;

/// Yaw/pitch camera driven by relative mouse motion.
///
/// Angles grow with the mouse delta (positive x turns yaw, positive y turns
/// pitch). Pitch is clamped just short of straight up/down, yaw is left
/// unbounded since the ray constructor accepts any angle.
#[derive(Clone, Debug, PartialEq)]
pub struct LookCamera {
    /// Horizontal angle in radians.
    pub yaw: f32,
    /// Vertical angle in radians, within `±pitch_limit()`.
    pub pitch: f32,
    /// Overall mouse sensitivity multiplier.
    pub sensitivity: f32,
    /// Degrees of yaw per mouse count at sensitivity 1.
    pub yaw_scale: f32,
    /// Degrees of pitch per mouse count at sensitivity 1.
    pub pitch_scale: f32,
    /// Distance in radians kept from `±π/2`.
    pub pitch_margin: f32,
}

impl Default for LookCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 2.2,
            yaw_scale: 0.022,
            pitch_scale: 0.022,
            pitch_margin: 0.001,
        }
    }
}

impl LookCamera {
    /// Camera looking along the given angles. Pitch is clamped immediately.
    pub fn with_angles(yaw: f32, pitch: f32) -> Self {
        let mut cam = Self {
            yaw,
            ..Default::default()
        };
        cam.pitch = pitch.clamp(-cam.pitch_limit(), cam.pitch_limit());
        cam
    }

    /// Largest allowed absolute pitch. Never negative, so clamping to
    /// `±pitch_limit()` cannot panic whatever the margin.
    pub fn pitch_limit(&self) -> f32 {
        (FRAC_PI_2 - self.pitch_margin).max(0.0)
    }

    /// Apply one update's worth of mouse motion, in mouse counts.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        let to_rads = std::f32::consts::PI / 180.0;

        self.pitch += dy * self.pitch_scale * self.sensitivity * to_rads;
        self.pitch = self.pitch.clamp(-self.pitch_limit(), self.pitch_limit());

        self.yaw += dx * self.yaw_scale * self.sensitivity * to_rads;
    }

    /// Current orientation as consumed by the star field.
    #[must_use]
    pub fn view_angles(&self) -> ViewAngles {
        ViewAngles::new(self.yaw, self.pitch)
    }
}
