use crate::{
    foundation::{core::Scale, error::SkinResult},
    geometry::{
        facts::{HEAD_BAND, HELMET_FACES, LEGACY_LIMB_COPIES},
        scale::skin_scale,
    },
    region::{copy::copy_region, predicates::has_transparency},
    surface::Surface,
};

/// Clear the helmet layer of a legacy skin that has no transparent pixel in its head band.
///
/// Old skins never encoded helmet transparency, so a fully opaque head band would otherwise
/// render a solid helmet. Returns whether the faces were cleared.
pub fn fix_opaque_skin<S: Surface + ?Sized>(surface: &mut S, scale: Scale) -> SkinResult<bool> {
    if has_transparency(&*surface, HEAD_BAND.to_pixels(scale))? {
        return Ok(false);
    }

    tracing::debug!("opaque legacy skin, clearing helmet layer");
    for face in HELMET_FACES {
        surface.clear(face.to_pixels(scale));
    }
    Ok(true)
}

/// Upgrade a square surface holding a legacy skin in its top half to the modern layout.
///
/// The opaque-skin fix runs first, on the untouched top half, then the legacy right leg and
/// arm faces are mirrored into the modern left leg and arm slots.
pub fn convert_legacy_skin<S: Surface + ?Sized>(surface: &mut S) -> SkinResult<()> {
    let scale = skin_scale(surface.width());
    fix_opaque_skin(surface, scale)?;

    for limb in LEGACY_LIMB_COPIES {
        copy_region(
            surface,
            limb.src.to_pixels(scale),
            limb.dst().to_pixels(scale),
            true,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/skin/legacy.rs"]
mod tests;
