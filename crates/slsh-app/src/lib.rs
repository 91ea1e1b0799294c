//! The `slsh` application: resolves directories, loads and validates the
//! configuration, sets up logging and renders star field frames to PNG.

pub mod platform;
pub mod sequence;

use std::fmt;
use std::path::PathBuf;

use slsh_config::{CliArgs, Config, ConfigError};
use slsh_render::RenderError;

pub use platform::{PlatformDirs, PlatformError};
pub use sequence::{frame_path, look_camera, render_sequence, starfield_params};

/// Anything that stops the application.
#[derive(Debug)]
pub enum AppError {
    Platform(PlatformError),
    Config(ConfigError),
    Render(RenderError),
}

impl AppError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Render(_) => 1,
            Self::Config(_) => 2,
            Self::Platform(_) => 3,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "platform setup failed: {e}"),
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Render(e) => write!(f, "rendering failed: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<PlatformError> for AppError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// Load `config.ron` (creating it on first run), apply CLI overrides and
/// validate the result.
pub fn load_config(dirs: &PlatformDirs, args: &CliArgs) -> Result<Config, AppError> {
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok(config)
}

/// Render with an already prepared configuration. Logging must be set up by
/// the caller.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, AppError> {
    tracing::info!(
        "Rendering {}x{} star field, {} frame(s), {} layers at density {}",
        config.window.width,
        config.window.height,
        config.output.frames,
        config.starfield.layer_count,
        config.starfield.density
    );
    Ok(render_sequence(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero_and_distinct() {
        let errors = [
            AppError::Platform(PlatformError::NoConfigDir),
            AppError::Config(ConfigError::Invalid {
                field: "window.width",
                reason: "must be greater than zero".to_string(),
            }),
            AppError::Render(RenderError::InvalidResolution {
                width: 0,
                height: 1,
            }),
        ];
        let codes: Vec<i32> = errors.iter().map(AppError::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        assert_eq!(codes, vec![3, 2, 1]);
    }

    #[test]
    fn test_display_names_the_stage() {
        let err = AppError::from(PlatformError::NoConfigDir);
        assert!(err.to_string().starts_with("platform setup failed"));
    }

    #[test]
    fn test_load_config_creates_default_and_applies_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_and_create(Some(tmp.path())).unwrap();
        let args = CliArgs {
            width: Some(320),
            layers: Some(2),
            ..Default::default()
        };
        let config = load_config(&dirs, &args).unwrap();
        assert!(tmp.path().join("config.ron").exists());
        assert_eq!(config.window.width, 320);
        assert_eq!(config.starfield.layer_count, 2);

        // Overrides are not written back.
        let on_disk = Config::load_or_create(&dirs.config_dir).unwrap();
        assert_eq!(on_disk.window.width, 1024);
    }

    #[test]
    fn test_load_config_rejects_invalid_override() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_and_create(Some(tmp.path())).unwrap();
        let args = CliArgs {
            frames: Some(0),
            ..Default::default()
        };
        let err = load_config(&dirs, &args).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { .. })));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_finite_drag_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_and_create(Some(tmp.path())).unwrap();
        let args = CliArgs {
            frames: Some(2),
            mouse_dx: Some(f32::NAN),
            ..Default::default()
        };
        let err = load_config(&dirs, &args).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid {
                field: "output.mouse_dx",
                ..
            })
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_oversized_pitch_margin_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_and_create(Some(tmp.path())).unwrap();
        let mut on_disk = Config::default();
        on_disk.camera.pitch_margin = 2.0;
        on_disk.save(&dirs.config_dir).unwrap();

        let err = load_config(&dirs, &CliArgs::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_run_writes_frames() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 32;
        config.window.height = 32;
        config.output.path = tmp.path().join("out.png");
        let written = run(&config).unwrap();
        assert_eq!(written, vec![tmp.path().join("out.png")]);
    }
}
