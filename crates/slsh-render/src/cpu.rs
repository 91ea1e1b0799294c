//! Multi-threaded CPU renderer.
//!
//! The frame is split into bands of rows and every band is shaded on the rayon
//! pool. Each pixel is an independent pure evaluation, so the result does not
//! depend on the thread count or band size.

use std::time::Instant;

use glam::Vec2;
use rayon::prelude::*;
use slsh_starfield::{FrameInputs, StarfieldParams, ViewAngles, shade_pixel};

use crate::{Frame, RenderError};

/// Parallelism knobs of the CPU renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Worker threads. 0 lets rayon pick one per core.
    pub threads: usize,
    /// Rows per work item.
    pub band_rows: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            threads: 0,
            band_rows: 16,
        }
    }
}

/// Renders full star field frames on a dedicated thread pool.
pub struct CpuRenderer {
    params: StarfieldParams,
    band_rows: usize,
    pool: rayon::ThreadPool,
}

impl CpuRenderer {
    pub fn new(params: StarfieldParams, options: RenderOptions) -> Result<Self, RenderError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .thread_name(|i| format!("slsh-render-{i}"))
            .build()?;

        log::info!(
            "CPU renderer initialized: {} threads, {} rows per band",
            pool.current_num_threads(),
            options.band_rows.max(1)
        );

        Ok(Self {
            params,
            band_rows: options.band_rows.max(1) as usize,
            pool,
        })
    }

    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Shade every pixel center of a `width` x `height` frame.
    pub fn render(
        &self,
        width: u32,
        height: u32,
        view_angles: ViewAngles,
    ) -> Result<Frame, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidResolution { width, height });
        }

        let start = Instant::now();
        let inputs = FrameInputs::new(width as f32, height as f32, view_angles);
        let params = self.params;
        let row_len = width as usize;
        let band_rows = self.band_rows;

        let mut pixels = vec![[0.0, 0.0, 0.0, 1.0]; row_len * height as usize];
        self.pool.install(|| {
            pixels
                .par_chunks_mut(row_len * band_rows)
                .enumerate()
                .for_each(|(band, chunk)| {
                    let first_row = band * band_rows;
                    for (i, out) in chunk.iter_mut().enumerate() {
                        let x = i % row_len;
                        let y = first_row + i / row_len;
                        let pixel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                        *out = shade_pixel(pixel, &inputs, &params);
                    }
                });
        });

        log::debug!(
            "Rendered {}x{} frame in {:.2} ms",
            width,
            height,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Frame {
            width,
            height,
            pixels,
        })
    }
}
