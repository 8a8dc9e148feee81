//! Fixed skin regions, all in 64-unit grid space.

use crate::foundation::core::GridRect;

/// Width of the canonical skin and cape grids.
pub const GRID_WIDTH: u32 = 64;

/// Head, helmet and body band of a legacy skin (its whole top half).
pub const HEAD_BAND: GridRect = GridRect::new(0, 0, 64, 32);

/// Helmet (second head layer) faces cleared on fully opaque legacy skins.
pub const HELMET_FACES: [GridRect; 6] = [
    GridRect::new(40, 0, 8, 8),  // top
    GridRect::new(48, 0, 8, 8),  // bottom
    GridRect::new(32, 8, 8, 8),  // right
    GridRect::new(40, 8, 8, 8),  // front
    GridRect::new(48, 8, 8, 8),  // left
    GridRect::new(56, 8, 8, 8),  // back
];

/// One legacy-to-modern relocation: `src` is copied mirrored to `(dst_x, dst_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimbCopy {
    /// Face label, used in logs and test output.
    pub name: &'static str,
    /// Legacy face.
    pub src: GridRect,
    /// Left edge of the modern slot.
    pub dst_x: u32,
    /// Top edge of the modern slot.
    pub dst_y: u32,
}

impl LimbCopy {
    const fn new(name: &'static str, src: GridRect, dst_x: u32, dst_y: u32) -> Self {
        Self {
            name,
            src,
            dst_x,
            dst_y,
        }
    }

    /// Destination rect, same extent as the source.
    pub fn dst(self) -> GridRect {
        GridRect::new(self.dst_x, self.dst_y, self.src.w, self.src.h)
    }
}

/// Right leg/arm faces of the legacy grid mirrored into the modern left leg/arm slots.
pub const LEGACY_LIMB_COPIES: [LimbCopy; 12] = [
    LimbCopy::new("leg top", GridRect::new(4, 16, 4, 4), 20, 48),
    LimbCopy::new("leg bottom", GridRect::new(8, 16, 4, 4), 24, 48),
    LimbCopy::new("leg outer", GridRect::new(0, 20, 4, 12), 24, 52),
    LimbCopy::new("leg front", GridRect::new(4, 20, 4, 12), 20, 52),
    LimbCopy::new("leg inner", GridRect::new(8, 20, 4, 12), 16, 52),
    LimbCopy::new("leg back", GridRect::new(12, 20, 4, 12), 28, 52),
    LimbCopy::new("arm top", GridRect::new(44, 16, 4, 4), 36, 48),
    LimbCopy::new("arm bottom", GridRect::new(48, 16, 4, 4), 40, 48),
    LimbCopy::new("arm outer", GridRect::new(40, 20, 4, 12), 40, 52),
    LimbCopy::new("arm front", GridRect::new(44, 20, 4, 12), 36, 52),
    LimbCopy::new("arm inner", GridRect::new(48, 20, 4, 12), 32, 52),
    LimbCopy::new("arm back", GridRect::new(52, 20, 4, 12), 44, 52),
];

/// Strips that only exist unused in the slim layout.
///
/// A slim arm is one pixel narrower on its top/bottom and front/back faces, which leaves a
/// 2-unit strip at the end of each face row unused:
///
/// ```text
/// right arm, slim       (44,16)->*------*------*-*
///                                |top   |bottom| |<- (50,16,2,4)
///                        *-------*------*------***-----*-*
///                        |right  |front |left   |back  | |<- (54,20,2,12)
///                        *-------*------*-------*------*-*
/// ```
///
/// The left arm repeats the pattern at `(36,48)`/`(32,52)`.
pub const SLIM_PROBES: [GridRect; 4] = [
    GridRect::new(50, 16, 2, 4),  // right arm, top/bottom row
    GridRect::new(54, 20, 2, 12), // right arm, side row
    GridRect::new(42, 48, 2, 4),  // left arm, top/bottom row
    GridRect::new(46, 52, 2, 12), // left arm, side row
];

#[cfg(test)]
#[path = "../../tests/unit/geometry/facts.rs"]
mod tests;
