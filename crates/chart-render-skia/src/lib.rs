// File: crates/chart-render-skia/src/lib.rs
// Summary: In-memory RGB565 panel usable as an embedded-graphics DrawTarget, with PNG export via Skia.

use std::convert::Infallible;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::color::to_rgb888;
use chart_core::DrawTargetDevice;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics_core::Pixel;
use skia_safe as skia;

/// A panel device that writes into a [`SkiaPanel`].
pub type PanelDevice = DrawTargetDevice<SkiaPanel>;

/// Simulated display: a row-major RGB565 frame that starts out black.
///
/// Off-panel pixels are dropped, like a real controller clipping to its
/// address window.
#[derive(Clone, Debug)]
pub struct SkiaPanel {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
    /// Integer upscale applied on export so small panels stay legible.
    scale: u32,
}

impl SkiaPanel {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            scale: 1,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn into_device(self) -> PanelDevice {
        DrawTargetDevice::new(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, at: Point) -> Option<Rgb565> {
        self.index(at).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    fn index(&self, at: Point) -> Option<usize> {
        if at.x < 0 || at.y < 0 || at.x >= self.width as i32 || at.y >= self.height as i32 {
            return None;
        }
        Some(at.y as usize * self.width as usize + at.x as usize)
    }

    /// Opaque RGBA8888 bytes, channels widened by bit replication.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            let (r, g, b) = to_rgb888(*c);
            out.extend_from_slice(&[r, g, b, 255]);
        }
        out
    }

    /// Encode the frame as PNG, upscaled by the panel's scale factor.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let data = skia::Data::new_copy(&self.to_rgba8());
        let frame = skia::images::raster_from_data(&info, data, self.width as usize * 4)
            .ok_or_else(|| anyhow::anyhow!("failed to wrap panel pixels"))?;

        let (w, h) = ((self.width * self.scale) as i32, (self.height * self.scale) as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::BLACK);
        canvas.scale((self.scale as f32, self.scale as f32));
        // default sampling is nearest, so upscaled pixels stay square
        canvas.draw_image(&frame, (0.0, 0.0), None);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let png = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(png.as_bytes().to_vec())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write PNG '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), w = self.width, h = self.height, "panel saved");
        Ok(())
    }
}

impl DrawTarget for SkiaPanel {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(at, color) in pixels {
            if let Some(i) = self.index(at) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for SkiaPanel {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
