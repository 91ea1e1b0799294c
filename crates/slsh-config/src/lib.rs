//! Configuration system for slsh.
//!
//! Settings persist to disk as RON files, can be overridden from the command
//! line via clap, and are validated before any frame is rendered.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, MAX_LAYERS, OutputConfig, StarfieldConfig, WindowConfig,
};
pub use error::ConfigError;
