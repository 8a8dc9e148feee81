use crate::foundation::core::Scale;

use super::facts::GRID_WIDTH;

/// Cape grid convention recognized from the source dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapeGrid {
    /// 64x32 and its multiples.
    Grid64x32,
    /// 22x17 and its multiples.
    Grid22x17,
    /// 46x22 and its multiples.
    Grid46x22,
    /// Anything else; scaled by `width / 21.25`.
    Fallback,
}

impl CapeGrid {
    /// Pick the convention for a source. Ratio tests are integer cross-multiplications and run
    /// in priority order.
    pub fn detect(width: u32, height: u32) -> Self {
        let (w, h) = (u64::from(width), u64::from(height));
        if w == 2 * h {
            Self::Grid64x32
        } else if w * 17 == h * 22 {
            Self::Grid22x17
        } else if w * 11 == h * 23 {
            Self::Grid46x22
        } else {
            Self::Fallback
        }
    }

    /// Grid width the source width is divided by.
    pub fn divisor(self) -> f64 {
        match self {
            Self::Grid64x32 => 64.0,
            Self::Grid22x17 => 22.0,
            Self::Grid46x22 => 46.0,
            Self::Fallback => 21.25,
        }
    }
}

/// Skin scale; callers must already have checked the surface is square or 2:1.
pub fn skin_scale(width: u32) -> Scale {
    Scale(f64::from(width) / f64::from(GRID_WIDTH))
}

/// Cape scale together with the convention that produced it.
pub fn cape_scale(width: u32, height: u32) -> (CapeGrid, Scale) {
    let grid = CapeGrid::detect(width, height);
    (grid, Scale(f64::from(width) / grid.divisor()))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
