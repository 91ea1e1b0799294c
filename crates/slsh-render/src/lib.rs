//! Star field renderers: a rayon-parallel CPU path producing PNG frames and a
//! wgpu fullscreen pass evaluating the same field per fragment.

pub mod cpu;
pub mod error;
pub mod frame;
pub mod gpu;

pub use cpu::{CpuRenderer, RenderOptions};
pub use error::RenderError;
pub use frame::Frame;
pub use gpu::{GpuStarfieldRenderer, STARFIELD_SHADER_SOURCE, StarfieldUniform};
