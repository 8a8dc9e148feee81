use crate::{
    foundation::{core::ModelType, error::SkinResult},
    geometry::{facts::SLIM_PROBES, scale::skin_scale},
    region::predicates::{has_transparency, is_area_black},
    surface::Surface,
};

/// Guess the arm model of a modern-layout skin.
///
/// The probes only cover pixels a slim skin leaves unused. A default skin has first-layer
/// content there, which is never transparent; slim skins leave the strips either transparent
/// or solid black depending on the authoring tool.
pub fn infer_model_type<S: Surface + ?Sized>(surface: &S) -> SkinResult<ModelType> {
    let scale = skin_scale(surface.width());

    let mut transparent = false;
    for probe in SLIM_PROBES {
        if has_transparency(surface, probe.to_pixels(scale))? {
            transparent = true;
            break;
        }
    }

    let mut black = !transparent;
    if black {
        for probe in SLIM_PROBES {
            if !is_area_black(surface, probe.to_pixels(scale))? {
                black = false;
                break;
            }
        }
    }

    let model = if transparent || black {
        ModelType::Slim
    } else {
        ModelType::Default
    };
    tracing::debug!(transparent, black, %model, "inferred model type");
    Ok(model)
}

#[cfg(test)]
#[path = "../../tests/unit/skin/model.rs"]
mod tests;
