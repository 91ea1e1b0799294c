//! Still and sequence rendering driven by the loaded configuration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use glam::Vec2;
use slsh_config::{CameraConfig, Config, StarfieldConfig};
use slsh_player::{LookCamera, MouseTracker, mouse_look_system};
use slsh_render::{CpuRenderer, RenderError, RenderOptions};
use slsh_starfield::StarfieldParams;
use tracing::{debug, info, instrument};

/// Core parameters from the `starfield` config section.
pub fn starfield_params(config: &StarfieldConfig) -> StarfieldParams {
    StarfieldParams {
        density: config.density,
        layer_count: config.layer_count,
        layer_offset: config.layer_offset,
        center_spread: config.center_spread,
        radius_threshold: config.radius_threshold,
        fov_scale: config.fov_scale,
        forward: config.forward,
    }
}

/// Look camera from the `camera` config section, pitch clamped to its limit.
pub fn look_camera(config: &CameraConfig) -> LookCamera {
    let mut cam = LookCamera {
        yaw: config.yaw,
        pitch: 0.0,
        sensitivity: config.sensitivity,
        yaw_scale: config.yaw_scale,
        pitch_scale: config.pitch_scale,
        pitch_margin: config.pitch_margin,
    };
    cam.pitch = config.pitch.clamp(-cam.pitch_limit(), cam.pitch_limit());
    cam
}

/// Output path of frame `index`. A single frame is written to `base` as is,
/// sequences get `<stem>_0000.<ext>` style names next to it.
pub fn frame_path(base: &Path, index: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let ext = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    base.with_file_name(format!("{stem}_{index:04}.{ext}"))
}

/// Render every configured frame to PNG and return the written paths.
///
/// Before each frame after the first the cursor moves by
/// `(output.mouse_dx, output.mouse_dy)`, which turns the camera like a steady
/// mouse drag.
#[instrument(skip_all, fields(frames = config.output.frames))]
pub fn render_sequence(config: &Config) -> Result<Vec<PathBuf>, RenderError> {
    let renderer = CpuRenderer::new(
        starfield_params(&config.starfield),
        RenderOptions {
            threads: config.output.threads,
            band_rows: config.output.band_rows,
        },
    )?;

    let mut camera = look_camera(&config.camera);
    let mut cursor = Vec2::ZERO;
    let mut mouse = MouseTracker::starting_at(cursor);
    let drag = Vec2::new(config.output.mouse_dx, config.output.mouse_dy);

    let (width, height) = (config.window.width, config.window.height);
    let mut written = Vec::with_capacity(config.output.frames as usize);

    for index in 0..config.output.frames {
        if index > 0 {
            cursor += drag;
            mouse_look_system(&mut mouse, &mut camera, cursor);
        }
        let angles = camera.view_angles();
        debug!(index, yaw = angles.yaw, pitch = angles.pitch, "Rendering frame");

        let start = Instant::now();
        let frame = renderer.render(width, height, angles)?;
        let draw_ms = start.elapsed().as_secs_f64() * 1000.0;

        let path = frame_path(&config.output.path, index, config.output.frames);
        frame.write_png(&path)?;
        info!(
            "{} frame {}/{}: {:.2} ms draw, {:.1}% lit",
            config.window.title,
            index + 1,
            config.output.frames,
            draw_ms,
            frame.lit_fraction() * 100.0
        );
        written.push(path);
    }

    Ok(written)
}
