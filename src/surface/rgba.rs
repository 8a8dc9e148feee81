use std::borrow::Cow;

use image::{RgbaImage, imageops};

use crate::foundation::{
    core::PixelRect,
    error::{SkinError, SkinResult},
};

use super::{Surface, TextureSource, settings::SurfaceSettings};

/// In-memory [`Surface`] backed by an [`image::RgbaImage`].
#[derive(Clone, Debug)]
pub struct RgbaSurface {
    settings: SurfaceSettings,
    image: RgbaImage,
}

/// Half-open pixel span of a rect after clipping to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Clipped {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl RgbaSurface {
    /// Empty `0x0` surface.
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            settings,
            image: RgbaImage::new(0, 0),
        }
    }

    /// Wrap existing pixels.
    pub fn from_image(image: RgbaImage, settings: SurfaceSettings) -> Self {
        Self { settings, image }
    }

    /// Settings the surface was created with.
    pub fn settings(&self) -> SurfaceSettings {
        self.settings
    }

    /// Current pixels.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixels out of the surface.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn clip(&self, rect: PixelRect) -> Option<Clipped> {
        let x1 = rect.x.saturating_add(rect.w).min(self.image.width());
        let y1 = rect.y.saturating_add(rect.h).min(self.image.height());
        if rect.x >= x1 || rect.y >= y1 {
            return None;
        }
        Some(Clipped {
            x0: rect.x,
            y0: rect.y,
            x1,
            y1,
        })
    }

    fn row_span(&self, x0: u32, x1: u32, y: u32) -> std::ops::Range<usize> {
        let stride = self.image.width() as usize * 4;
        let start = y as usize * stride + x0 as usize * 4;
        start..start + (x1 - x0) as usize * 4
    }
}

impl Default for RgbaSurface {
    fn default() -> Self {
        Self::new(SurfaceSettings::default())
    }
}

impl Surface for RgbaSurface {
    fn resize(&mut self, width: u32, height: u32) -> SkinResult<()> {
        if PixelRect::sized(width, height).rgba_len().is_none() {
            return Err(SkinError::validation(format!(
                "surface size overflow: {width}x{height}"
            )));
        }
        if (self.image.width(), self.image.height()) != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
        Ok(())
    }

    fn clear(&mut self, rect: PixelRect) {
        let Some(c) = self.clip(rect) else {
            return;
        };
        for y in c.y0..c.y1 {
            let span = self.row_span(c.x0, c.x1, y);
            let data: &mut [u8] = &mut self.image;
            data[span].fill(0);
        }
    }

    fn draw_image<S: TextureSource + ?Sized>(
        &mut self,
        source: &S,
        src: PixelRect,
        dst: PixelRect,
    ) -> SkinResult<()> {
        if src.x.saturating_add(src.w) > source.width()
            || src.y.saturating_add(src.h) > source.height()
        {
            return Err(SkinError::validation(format!(
                "draw source rect {src:?} exceeds source {}x{}",
                source.width(),
                source.height()
            )));
        }
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }

        let pixels = source.to_rgba8();
        let whole = src == PixelRect::sized(pixels.width(), pixels.height());
        let cropped: Cow<'_, RgbaImage> = if whole {
            pixels
        } else {
            Cow::Owned(imageops::crop_imm(&*pixels, src.x, src.y, src.w, src.h).to_image())
        };
        let patch: Cow<'_, RgbaImage> = if (src.w, src.h) == (dst.w, dst.h) {
            cropped
        } else {
            Cow::Owned(imageops::resize(
                &*cropped,
                dst.w,
                dst.h,
                self.settings.filter.into(),
            ))
        };

        let (w, h) = (self.image.width(), self.image.height());
        for (px, py, p) in patch.enumerate_pixels() {
            let (Some(x), Some(y)) = (dst.x.checked_add(px), dst.y.checked_add(py)) else {
                continue;
            };
            if x >= w || y >= h {
                continue;
            }
            let d = self.image.get_pixel_mut(x, y);
            d.0 = over(d.0, p.0);
        }
        Ok(())
    }

    fn get_region(&self, rect: PixelRect) -> SkinResult<Vec<u8>> {
        let len = rect
            .rgba_len()
            .ok_or_else(|| SkinError::validation(format!("region size overflow: {rect:?}")))?;
        let mut out = vec![0u8; len];
        let Some(c) = self.clip(rect) else {
            return Ok(out);
        };

        let data: &[u8] = &self.image;
        let out_stride = rect.w as usize * 4;
        let run = (c.x1 - c.x0) as usize * 4;
        for y in c.y0..c.y1 {
            let at = (y - rect.y) as usize * out_stride;
            out[at..at + run].copy_from_slice(&data[self.row_span(c.x0, c.x1, y)]);
        }
        Ok(out)
    }

    fn put_region(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> SkinResult<()> {
        let rect = PixelRect::new(x, y, width, height);
        if rect.rgba_len() != Some(data.len()) {
            return Err(SkinError::validation(format!(
                "put_region expects {width}x{height} rgba8 buffer, got {} bytes",
                data.len()
            )));
        }
        let Some(c) = self.clip(rect) else {
            return Ok(());
        };

        let in_stride = width as usize * 4;
        let run = (c.x1 - c.x0) as usize * 4;
        for row in c.y0..c.y1 {
            let at = (row - y) as usize * in_stride;
            let span = self.row_span(c.x0, c.x1, row);
            let dst: &mut [u8] = &mut self.image;
            dst[span].copy_from_slice(&data[at..at + run]);
        }
        Ok(())
    }
}

/// Straight-alpha source-over.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match (src[3], dst[3]) {
        (0, _) => return dst,
        (255, _) | (_, 0) => return src,
        _ => {}
    }

    let sa = u32::from(src[3]);
    // Destination weight and output alpha, both scaled by 255.
    let dw = u32::from(dst[3]) * (255 - sa);
    let out_a = sa * 255 + dw;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * dw;
        out[i] = ((c + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = ((out_a + 127) / 255).min(255) as u8;
    out
}

impl TextureSource for RgbaSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn to_rgba8(&self) -> Cow<'_, RgbaImage> {
        Cow::Borrowed(&self.image)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/rgba.rs"]
mod tests;
