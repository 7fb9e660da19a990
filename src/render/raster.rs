use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{BlobError, BlobResult};

/// Avoid pathological allocations when callers pass user-supplied sizes.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Rasterized frame: premultiplied RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Premultiplied pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight (non-premultiplied) RGBA8 copy, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> BlobResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Parse an SVG document and render it stretched to exactly `width x height` pixels.
#[tracing::instrument(skip(svg))]
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> BlobResult<FrameRgba> {
    if width == 0 || height == 0 {
        return Err(BlobError::render("raster width/height must be > 0"));
    }
    if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(BlobError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| BlobError::render(format!("parse svg tree: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BlobError::render("failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(FrameRgba {
        width,
        height,
        data: pixmap.take(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
