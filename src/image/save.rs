//! Image saving utilities.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ImageError, RgbaImage};

use crate::error::{Error, Result};

/// Encode an RGBA image as PNG with maximum lossless compression.
///
/// # Errors
///
/// Returns an error if the encoder rejects the image.
pub fn encode_png(img: &RgbaImage) -> std::result::Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}

/// Save an RGBA image as a PNG file, creating missing parent directories.
///
/// Existing files are overwritten. Returns the size of the written file in
/// bytes, read back from the filesystem.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] if the parent directory cannot be created and
/// [`Error::ImageSave`] if encoding or writing fails.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<u64> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            tracing::info!("Created output directory: {}", parent.display());
        }
    }

    let data = encode_png(img).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, &data).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source: ImageError::IoError(source),
    })?;

    Ok(fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{ColorType, Rgba};

    #[test]
    fn test_encode_png_magic() {
        let data = encode_png(&RgbaImage::new(10, 10)).unwrap();
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("icon.png");
        let img = RgbaImage::from_pixel(3, 3, Rgba([9, 8, 7, 6]));

        let bytes = save_png(&img, &path).unwrap();
        assert_eq!(bytes, std::fs::metadata(&path).unwrap().len());

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.color(), ColorType::Rgba8);
        assert_eq!(reloaded.to_rgba8(), img);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"stale").unwrap();

        save_png(&RgbaImage::new(2, 2), &path).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 2);
    }

    #[test]
    fn test_save_parent_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("images");
        std::fs::write(&blocker, b"").unwrap();

        let result = save_png(&RgbaImage::new(2, 2), blocker.join("icon.png"));
        assert!(matches!(result, Err(Error::CreateDir { .. })));
    }
}
