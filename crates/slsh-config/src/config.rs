//! Configuration structs with sensible defaults and RON persistence.

use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on star layers; each layer costs one hash per pixel.
pub const MAX_LAYERS: u32 = 16;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output image settings.
    pub window: WindowConfig,
    /// Star field look.
    pub starfield: StarfieldConfig,
    /// Camera orientation and mouse-look tuning.
    pub camera: CameraConfig,
    /// Where and how frames are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Title used in log output.
    pub title: String,
}

/// Star field parameters. See `slsh_starfield::StarfieldParams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Grid scale of the view ray (higher = denser field).
    pub density: f32,
    /// Number of offset layers summed per pixel.
    pub layer_count: u32,
    /// Offset multiplier between layer grids.
    pub layer_offset: f32,
    /// Maximum star center displacement within a cell.
    pub center_spread: f32,
    /// Hash magnitude threshold below which cells stay empty.
    pub radius_threshold: f32,
    /// Field-of-view factor.
    pub fov_scale: f32,
    /// Forward component of the camera-space direction.
    pub forward: f32,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial yaw in radians.
    pub yaw: f32,
    /// Initial pitch in radians.
    pub pitch: f32,
    /// Mouse sensitivity multiplier.
    pub sensitivity: f32,
    /// Degrees of yaw per mouse count.
    pub yaw_scale: f32,
    /// Degrees of pitch per mouse count.
    pub pitch_scale: f32,
    /// Radians kept away from looking straight up or down.
    pub pitch_margin: f32,
}

/// Frame output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG path. Sequences get a `_NNNN` suffix before the extension.
    pub path: PathBuf,
    /// Number of frames to render.
    pub frames: u32,
    /// Simulated horizontal mouse motion applied between frames.
    pub mouse_dx: f32,
    /// Simulated vertical mouse motion applied between frames.
    pub mouse_dy: f32,
    /// Worker threads (0 = one per core).
    pub threads: usize,
    /// Rows per parallel work item.
    pub band_rows: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "slsh".to_string(),
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density: 150.0,
            layer_count: 4,
            layer_offset: 1199.0,
            center_spread: 0.8,
            radius_threshold: 0.5,
            fov_scale: 1.4,
            forward: 2.0,
        }
    }
}

impl Default for CameraConfig {
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

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("starfield.png"),
            frames: 1,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            threads: 0,
            band_rows: 16,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Validation ---

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not finite")))
    }
}

impl Config {
    /// Check every value the renderer depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 {
            return Err(invalid("window.width", "must be greater than zero"));
        }
        if self.window.height == 0 {
            return Err(invalid("window.height", "must be greater than zero"));
        }

        let sf = &self.starfield;
        finite("starfield.density", sf.density)?;
        if sf.density <= 0.0 {
            return Err(invalid("starfield.density", "must be positive"));
        }
        if !(1..=MAX_LAYERS).contains(&sf.layer_count) {
            return Err(invalid(
                "starfield.layer_count",
                format!("must be in 1..={MAX_LAYERS}"),
            ));
        }
        finite("starfield.layer_offset", sf.layer_offset)?;
        finite("starfield.center_spread", sf.center_spread)?;
        finite("starfield.radius_threshold", sf.radius_threshold)?;
        finite("starfield.fov_scale", sf.fov_scale)?;
        finite("starfield.forward", sf.forward)?;
        if sf.forward <= 0.0 {
            return Err(invalid("starfield.forward", "must be positive"));
        }

        finite("camera.yaw", self.camera.yaw)?;
        finite("camera.pitch", self.camera.pitch)?;
        finite("camera.sensitivity", self.camera.sensitivity)?;
        finite("camera.yaw_scale", self.camera.yaw_scale)?;
        finite("camera.pitch_scale", self.camera.pitch_scale)?;
        finite("camera.pitch_margin", self.camera.pitch_margin)?;
        if !(0.0..FRAC_PI_2).contains(&self.camera.pitch_margin) {
            return Err(invalid("camera.pitch_margin", "must be in [0, pi/2)"));
        }

        finite("output.mouse_dx", self.output.mouse_dx)?;
        finite("output.mouse_dy", self.output.mouse_dy)?;

        if self.output.frames == 0 {
            return Err(invalid("output.frames", "must render at least one frame"));
        }
        if self.output.band_rows == 0 {
            return Err(invalid("output.band_rows", "must be at least one row"));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
