//! Error type for the fallible parts of the crate: configuration loading and
//! SVG/PNG export. Painting and pointer handling never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundPlotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("cannot rasterise a {width}x{height} scene")]
    Raster { width: u32, height: u32 },
    #[error("unsupported file extension: {0:?}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, RoundPlotError>;
