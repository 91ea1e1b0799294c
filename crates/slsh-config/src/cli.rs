//! Command-line argument parsing for slsh.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// slsh command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "slsh", about = "Procedural star field renderer")]
pub struct CliArgs {
    /// Output width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Camera yaw in radians.
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: Option<f32>,

    /// Camera pitch in radians.
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: Option<f32>,

    /// Star grid density.
    #[arg(long)]
    pub density: Option<f32>,

    /// Number of star layers.
    #[arg(long)]
    pub layers: Option<u32>,

    /// Output PNG path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Mouse counts applied to yaw between frames.
    #[arg(long, allow_hyphen_values = true)]
    pub mouse_dx: Option<f32>,

    /// Mouse counts applied to pitch between frames.
    #[arg(long, allow_hyphen_values = true)]
    pub mouse_dy: Option<f32>,

    /// Worker threads (0 = one per core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(yaw) = args.yaw {
            self.camera.yaw = yaw;
        }
        if let Some(pitch) = args.pitch {
            self.camera.pitch = pitch;
        }
        if let Some(density) = args.density {
            self.starfield.density = density;
        }
        if let Some(layers) = args.layers {
            self.starfield.layer_count = layers;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(frames) = args.frames {
            self.output.frames = frames;
        }
        if let Some(dx) = args.mouse_dx {
            self.output.mouse_dx = dx;
        }
        if let Some(dy) = args.mouse_dy {
            self.output.mouse_dy = dy;
        }
        if let Some(threads) = args.threads {
            self.output.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
