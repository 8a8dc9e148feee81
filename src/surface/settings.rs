use anyhow::Context;
use image::imageops::FilterType;

use crate::foundation::error::SkinResult;

/// Resampling filter used when a draw scales its source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    /// Keeps texel edges sharp; the natural choice for pixel-art skins.
    #[default]
    Nearest,
    /// Linear.
    Triangle,
    /// Cubic.
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(f: ResampleFilter) -> Self {
        match f {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Settings for [`crate::RgbaSurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceSettings {
    /// Filter for draws whose source and destination sizes differ.
    pub filter: ResampleFilter,
}

impl SurfaceSettings {
    /// Parse settings from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> SkinResult<Self> {
        let settings = serde_json::from_str(json).context("parse surface settings JSON")?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/settings.rs"]
mod tests;
