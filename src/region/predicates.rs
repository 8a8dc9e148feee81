//! Per-pixel tests over a rectangular surface region.
//!
//! Both predicates fetch through [`Surface::get_region`], the same path the copy engine uses,
//! so a rect scaled from grid space covers identical pixels everywhere.

use crate::{
    foundation::{core::PixelRect, error::SkinResult},
    surface::Surface,
};

const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

/// True iff any pixel in `rect` has alpha other than 255.
pub fn has_transparency<S: Surface + ?Sized>(surface: &S, rect: PixelRect) -> SkinResult<bool> {
    let rgba = surface.get_region(rect)?;
    Ok(any_transparent(&rgba))
}

/// True iff every pixel in `rect` is exactly `(0,0,0,255)`. Vacuously true for empty rects.
pub fn is_area_black<S: Surface + ?Sized>(surface: &S, rect: PixelRect) -> SkinResult<bool> {
    let rgba = surface.get_region(rect)?;
    Ok(all_opaque_black(&rgba))
}

pub(crate) fn any_transparent(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).any(|px| px[3] != 255)
}

pub(crate) fn all_opaque_black(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).all(|px| px == OPAQUE_BLACK)
}

#[cfg(test)]
#[path = "../../tests/unit/region/predicates.rs"]
mod tests;
