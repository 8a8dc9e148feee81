use std::borrow::Cow;

use image::RgbaImage;

use crate::foundation::{core::PixelRect, error::SkinResult};

pub(crate) mod rgba;
pub(crate) mod settings;

/// Mutable 2D RGBA8 (straight alpha) pixel grid the loaders draw into.
///
/// Region transfers never resample. Reads outside the surface yield `(0,0,0,0)` and writes or
/// clears outside it are clipped. A surface is itself drawable, so its size comes from
/// [`TextureSource`].
pub trait Surface: TextureSource {
    /// Reallocate backing storage. Contents are unspecified until `clear` or a draw.
    fn resize(&mut self, width: u32, height: u32) -> SkinResult<()>;

    /// Set every pixel of `rect` to `(0,0,0,0)`.
    fn clear(&mut self, rect: PixelRect);

    /// Draw the `src` rect of `source` into `dst`, resampling when the sizes differ.
    /// Composites source-over.
    fn draw_image<S: TextureSource + ?Sized>(
        &mut self,
        source: &S,
        src: PixelRect,
        dst: PixelRect,
    ) -> SkinResult<()>;

    /// Draw the whole `source` into `dst`.
    fn draw_image_to<S: TextureSource + ?Sized>(
        &mut self,
        source: &S,
        dst: PixelRect,
    ) -> SkinResult<()> {
        let src = PixelRect::sized(source.width(), source.height());
        self.draw_image(source, src, dst)
    }

    /// Row-major RGBA8 copy of `rect`, `rect.w * rect.h * 4` bytes.
    fn get_region(&self, rect: PixelRect) -> SkinResult<Vec<u8>>;

    /// Write a `width x height` RGBA8 buffer with its top-left corner at `(x, y)`.
    fn put_region(&mut self, data: &[u8], width: u32, height: u32, x: u32, y: u32)
    -> SkinResult<()>;
}

/// Decoded texture that can be drawn onto a [`Surface`].
pub trait TextureSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Straight-alpha RGBA8 pixels.
    fn to_rgba8(&self) -> Cow<'_, RgbaImage>;
}

impl TextureSource for RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn to_rgba8(&self) -> Cow<'_, RgbaImage> {
        Cow::Borrowed(self)
    }
}

impl TextureSource for image::DynamicImage {
    fn width(&self) -> u32 {
        image::GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        image::GenericImageView::height(self)
    }

    fn to_rgba8(&self) -> Cow<'_, RgbaImage> {
        match self.as_rgba8() {
            Some(rgba) => Cow::Borrowed(rgba),
            None => Cow::Owned(image::DynamicImage::to_rgba8(self)),
        }
    }
}
