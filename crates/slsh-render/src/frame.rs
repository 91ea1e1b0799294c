//! CPU-side frame buffer and PNG output.

use std::path::Path;

use crate::RenderError;

/// A rendered frame, row-major from the top-left pixel, RGBA f32 per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// `width * height` pixels. Color channels are unclamped brightness.
    pub pixels: Vec<[f32; 4]>,
}

impl Frame {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Share of pixels with any star light.
    pub fn lit_fraction(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let lit = self.pixels.iter().filter(|p| p[0] > 0.0).count();
        lit as f32 / self.pixels.len() as f32
    }

    /// Quantize to RGBA8, clamping each channel to `[0, 1]`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            for channel in pixel {
                bytes.push((channel.clamp(0.0, 1.0) * 255.0) as u8);
            }
        }
        bytes
    }

    /// Encode the frame as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let pixels = self.to_rgba8();
        let mut png_buf = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(std::io::Cursor::new(&mut png_buf), self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&pixels)?;
            writer.finish()?;
        }
        Ok(png_buf)
    }

    /// Encode and write the frame to `path`, creating parent directories.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        log::info!(
            "Wrote {}x{} frame to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}
