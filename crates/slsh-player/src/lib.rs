//! Host-side camera control: tracks mouse motion and turns it into the view
//! angles the star field is rendered with.

pub mod look_camera;
pub mod mouse;

pub use look_camera::LookCamera;
pub use mouse::MouseTracker;

/// Feed one cursor sample through `mouse` into `cam`.
pub fn mouse_look_system(mouse: &mut MouseTracker, cam: &mut LookCamera, position: glam::Vec2) {
    let delta = mouse.handle_position(position);
    cam.apply_mouse_delta(delta.x, delta.y);
}
