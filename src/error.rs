//! Errors

use thiserror::Error;

/// Failures at the edges of the crate: files, images and fonts
///
/// Rasterization itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("FreeType error: {0}")]
    FreeType(#[from] freetype::Error),

    /// No installed font matches the requested family
    #[error("font not found: {0}")]
    FontNotFound(String),

    #[error("glyph {0:?} has no outline")]
    MissingOutline(char),

    /// Cubic segments cannot be expressed as quadratic curves
    #[error("glyph {0:?} contains cubic curves")]
    UnsupportedCurve(char),
}

pub type Result<T> = std::result::Result<T, Error>;
