use crate::{
    foundation::{
        core::{PixelRect, Scale, SkinLayout},
        error::{SkinError, SkinResult},
    },
    geometry::scale::{CapeGrid, cape_scale},
    skin::legacy::convert_legacy_skin,
    surface::{Surface, TextureSource},
};

/// What [`load_cape`] resolved for a source.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CapeLoad {
    /// Convention the source matched.
    pub grid: CapeGrid,
    /// Grid-to-pixel factor derived from it.
    pub scale: Scale,
    /// Final surface width.
    pub width: u32,
    /// Final surface height.
    pub height: u32,
}

/// Draw a skin onto `surface` in the modern square layout.
///
/// Square sources are copied 1:1. 2:1 legacy sources are drawn into the top half of a square
/// surface and upgraded. Any other shape fails before the surface is touched.
#[tracing::instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn load_skin<S, T>(surface: &mut S, image: &T) -> SkinResult<SkinLayout>
where
    S: Surface + ?Sized,
    T: TextureSource + ?Sized,
{
    let (width, height) = (image.width(), image.height());
    let layout = if width == height {
        SkinLayout::Modern
    } else if u64::from(width) == 2 * u64::from(height) {
        SkinLayout::Legacy
    } else {
        return Err(SkinError::invalid_dimensions(width, height));
    };
    tracing::debug!(%layout, "skin layout");

    match layout {
        SkinLayout::Modern => {
            surface.resize(width, height)?;
            surface.clear(PixelRect::sized(width, height));
            surface.draw_image_to(image, PixelRect::sized(width, height))?;
        }
        SkinLayout::Legacy => {
            let side = width;
            surface.resize(side, side)?;
            surface.clear(PixelRect::sized(side, side));
            surface.draw_image_to(image, PixelRect::sized(side, side / 2))?;
            convert_legacy_skin(surface)?;
        }
    }
    Ok(layout)
}

/// Draw a cape onto a `64x32`-grid surface sized for the source's resolution.
///
/// Never fails on shape: unknown ratios use the fallback scale.
#[tracing::instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn load_cape<S, T>(surface: &mut S, image: &T) -> SkinResult<CapeLoad>
where
    S: Surface + ?Sized,
    T: TextureSource + ?Sized,
{
    let (grid, scale) = cape_scale(image.width(), image.height());
    let (width, height) = (scale.px(64), scale.px(32));
    tracing::debug!(?grid, scale = scale.as_f64(), width, height, "cape grid");

    surface.resize(width, height)?;
    surface.clear(PixelRect::sized(width, height));
    surface.draw_image_to(image, PixelRect::sized(image.width(), image.height()))?;

    Ok(CapeLoad {
        grid,
        scale,
        width,
        height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/load/loader.rs"]
mod tests;
