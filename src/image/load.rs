//! Image loading utilities.

use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load the source image from disk.
///
/// The format is detected from the file contents, so a logo with a wrong or
/// missing extension still loads. The image is returned untouched, so callers
/// can still inspect its original color type.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if nothing exists at `path`, and
/// [`Error::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_error(path, ImageError::IoError(err)))?;

    reader.decode().map_err(|source| load_error(path, source))
}

fn load_error(path: &Path, source: ImageError) -> Error {
    match source {
        ImageError::IoError(err) if err.kind() == ErrorKind::NotFound => Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        source => Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Convert an image to 8-bit RGBA.
///
/// Sources without an alpha channel become fully opaque; color data is kept.
#[must_use]
pub fn normalize_rgba(img: &DynamicImage) -> RgbaImage {
    if !img.color().has_alpha() {
        tracing::info!("Converting {:?} source to RGBA for transparency support", img.color());
    }
    img.to_rgba8()
}
