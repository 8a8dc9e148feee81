//! skintex normalizes block-avatar skin and cape textures into one canonical layout.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: encoded bytes -> `RgbaImage` ([`decode_texture`])
//! 2. **Load**: draw the texture onto a [`Surface`], upgrading 2:1 legacy skins to the square
//!    modern layout ([`load_skin`]) or sizing a cape for its grid ([`load_cape`])
//! 3. **Classify** (optional): [`infer_model_type`] tells slim from default arms
//! 4. **Resample** (optional): [`resample_to_width`] redraws a loaded texture at another
//!    resolution through the surface's [`ResampleFilter`]
//!
//! All fixed regions are stored in 64-unit grid space and scaled to pixels only when the
//! surface is read or written, so every resolution multiple goes through the same tables.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod geometry;
mod load;
mod region;
mod skin;
mod surface;

pub use assets::decode::{decode_texture, encode_png, load_texture_file, save_png_file};
pub use foundation::core::{GridRect, ModelType, PixelRect, Scale, SkinLayout};
pub use foundation::error::{SkinError, SkinResult};
pub use geometry::facts::{
    GRID_WIDTH, HEAD_BAND, HELMET_FACES, LEGACY_LIMB_COPIES, LimbCopy, SLIM_PROBES,
};
pub use geometry::scale::{CapeGrid, cape_scale, skin_scale};
pub use load::loader::{CapeLoad, load_cape, load_skin};
pub use load::resample::resample_to_width;
pub use region::copy::{copy_region, flip_rows_in_place};
pub use region::predicates::{has_transparency, is_area_black};
pub use skin::legacy::{convert_legacy_skin, fix_opaque_skin};
pub use skin::model::infer_model_type;
pub use surface::rgba::RgbaSurface;
pub use surface::settings::{ResampleFilter, SurfaceSettings};
pub use surface::{Surface, TextureSource};
