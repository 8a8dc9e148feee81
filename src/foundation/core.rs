use std::fmt;

/// Uniform grid-to-pixel multiplier (`pixels = floor(grid * scale)`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale(pub f64);

impl Scale {
    /// Identity scale (a 64-wide skin or a 64x32 cape).
    pub const ONE: Self = Self(1.0);

    /// Raw factor.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Convert one grid-space coordinate or extent to pixels.
    pub fn px(self, grid: u32) -> u32 {
        // `as` saturates, so NaN/negative land on 0 and overflow on u32::MAX.
        (f64::from(grid) * self.0).floor() as u32
    }
}

/// Rectangle in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl PixelRect {
    /// Rect with its top-left corner at `(x, y)`.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect anchored at the origin.
    pub const fn sized(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// True when the rect covers no pixel.
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Number of bytes an RGBA8 buffer of this rect occupies, `None` on overflow.
    pub fn rgba_len(self) -> Option<usize> {
        (self.w as usize)
            .checked_mul(self.h as usize)
            .and_then(|v| v.checked_mul(4))
    }
}

/// Rectangle in 64-unit grid space; converted to pixels only at surface access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridRect {
    /// Left edge, grid units.
    pub x: u32,
    /// Top edge, grid units.
    pub y: u32,
    /// Width, grid units.
    pub w: u32,
    /// Height, grid units.
    pub h: u32,
}

impl GridRect {
    /// Grid rect with its top-left corner at `(x, y)`.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Each component is scaled and floored independently.
    pub fn to_pixels(self, scale: Scale) -> PixelRect {
        PixelRect {
            x: scale.px(self.x),
            y: scale.px(self.y),
            w: scale.px(self.w),
            h: scale.px(self.h),
        }
    }
}

/// Limb geometry of a skin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// 4px-wide arms.
    Default,
    /// 3px-wide arms.
    Slim,
}

impl ModelType {
    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Slim => "slim",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid convention a skin source was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinLayout {
    /// Square source, already in the modern layout.
    Modern,
    /// 2:1 source, upgraded in place.
    Legacy,
}

impl fmt::Display for SkinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
