use std::path::Path;

use anyhow::Context;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder};

use crate::foundation::error::SkinResult;

/// Decode encoded image bytes to straight-alpha RGBA8.
pub fn decode_texture(bytes: &[u8]) -> SkinResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode texture from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode a texture file.
pub fn load_texture_file(path: &Path) -> SkinResult<RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read texture '{}'", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode texture '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// PNG-encode RGBA8 pixels.
pub fn encode_png(image: &RgbaImage) -> SkinResult<Vec<u8>> {
    let mut out = Vec::<u8>::new();
    PngEncoder::new(&mut out)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}

/// Write RGBA8 pixels as PNG, creating parent directories as needed.
pub fn save_png_file(path: &Path, image: &RgbaImage) -> SkinResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = encode_png(image)?;
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
