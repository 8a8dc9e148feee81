use crate::{
    foundation::{
        core::PixelRect,
        error::{SkinError, SkinResult},
    },
    surface::{Surface, TextureSource},
};

/// Redraw `source` onto `surface` at `width` pixels wide, keeping its aspect ratio.
///
/// The height is `floor(width * source.height / source.width)`. Scaling goes through
/// [`Surface::draw_image`], so the surface's resampling filter decides how texels are blended.
/// Returns the final surface size.
#[tracing::instrument(skip_all, fields(from_width = source.width(), from_height = source.height(), width = width))]
pub fn resample_to_width<S, T>(surface: &mut S, source: &T, width: u32) -> SkinResult<(u32, u32)>
where
    S: Surface + ?Sized,
    T: TextureSource + ?Sized,
{
    let (src_w, src_h) = (source.width(), source.height());
    if src_w == 0 || width == 0 {
        return Err(SkinError::validation(format!(
            "cannot resample {src_w}x{src_h} texture to width {width}"
        )));
    }
    let height = u32::try_from(u64::from(width) * u64::from(src_h) / u64::from(src_w))
        .map_err(|_| SkinError::validation(format!("resampled height overflows at width {width}")))?;
    tracing::debug!(height, "resample target");

    surface.resize(width, height)?;
    surface.clear(PixelRect::sized(width, height));
    surface.draw_image_to(source, PixelRect::sized(width, height))?;
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/load/resample.rs"]
mod tests;
