use crate::{
    foundation::{
        core::PixelRect,
        error::{SkinError, SkinResult},
    },
    surface::Surface,
};

/// Mirror each row of a row-major RGBA8 buffer in place.
///
/// Only the left half of every row is walked so each pixel pair is swapped exactly once; an odd
/// centre column stays put.
pub fn flip_rows_in_place(rgba: &mut [u8], width: u32) {
    let w = width as usize;
    if w < 2 {
        return;
    }
    for row in rgba.chunks_exact_mut(w * 4) {
        for x in 0..w / 2 {
            let (a, b) = (x * 4, (w - 1 - x) * 4);
            for c in 0..4 {
                row.swap(a + c, b + c);
            }
        }
    }
}

/// Copy `src` to `dst` on the same surface, optionally mirrored horizontally.
///
/// No resampling: `dst` must have the same extent as `src`. Overlapping rects see the source as
/// it was before the write.
pub fn copy_region<S: Surface + ?Sized>(
    surface: &mut S,
    src: PixelRect,
    dst: PixelRect,
    mirror: bool,
) -> SkinResult<()> {
    if (src.w, src.h) != (dst.w, dst.h) {
        return Err(SkinError::validation(format!(
            "copy_region extent mismatch: {}x{} -> {}x{}",
            src.w, src.h, dst.w, dst.h
        )));
    }

    let mut rgba = surface.get_region(src)?;
    if mirror {
        flip_rows_in_place(&mut rgba, src.w);
    }
    surface.put_region(&rgba, src.w, src.h, dst.x, dst.y)
}

#[cfg(test)]
#[path = "../../tests/unit/region/copy.rs"]
mod tests;
