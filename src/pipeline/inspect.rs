//! Advisory checks on the source image.
//!
//! None of these findings block generation; they are logged as warnings and
//! returned so callers can show them.

use std::fmt;

use image::{ColorType, DynamicImage, GenericImageView};

/// Smallest source edge that still yields a sharp 128 px icon.
pub const RECOMMENDED_MIN_EDGE: u32 = 128;

/// A non-blocking finding about the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The source is not square and will be stretched.
    NotSquare { width: u32, height: u32 },

    /// The shorter source edge is below the recommended minimum.
    LowResolution { min_edge: u32, recommended: u32 },

    /// The source has no alpha channel and will be made fully opaque.
    NoAlpha { color: ColorType },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { width, height } => write!(
                f,
                "source image is not square ({width}x{height}); icons will be stretched, \
                 consider cropping to a square aspect ratio"
            ),
            Self::LowResolution {
                min_edge,
                recommended,
            } => write!(
                f,
                "source image is small ({min_edge}px); use at least \
                 {recommended}x{recommended} pixels for best quality"
            ),
            Self::NoAlpha { color } => write!(
                f,
                "source image has no transparency ({color:?}); it will be converted to RGBA"
            ),
        }
    }
}

/// General advice for preparing a source logo.
#[must_use]
pub fn source_tips(min_edge: u32) -> [String; 4] {
    [
        "Use a square logo with a transparent background".to_string(),
        format!("Make the logo at least {min_edge}x{min_edge} pixels"),
        "Simple, bold designs work best for small icons".to_string(),
        "Check that the 16px icon is still recognizable".to_string(),
    ]
}

/// Inspect the source image and collect advisories.
///
/// `min_edge` is the shorter-edge length below which [`Advisory::LowResolution`]
/// is raised.
#[must_use]
pub fn inspect_source(img: &DynamicImage, min_edge: u32) -> Vec<Advisory> {
    let (width, height) = img.dimensions();
    let mut advisories = Vec::new();

    if width != height {
        advisories.push(Advisory::NotSquare { width, height });
    }

    let shorter = width.min(height);
    if shorter < min_edge {
        advisories.push(Advisory::LowResolution {
            min_edge: shorter,
            recommended: min_edge,
        });
    }

    if img.color().has_alpha() {
        tracing::debug!("Source image has transparency support");
    } else {
        advisories.push(Advisory::NoAlpha { color: img.color() });
    }

    for advisory in &advisories {
        tracing::warn!("{advisory}");
    }

    advisories
}
