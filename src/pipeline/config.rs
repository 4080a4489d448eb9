//! Icon set configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::image::UnsharpMask;

use super::inspect::RECOMMENDED_MIN_EDGE;

/// Source image used when none is given.
pub const DEFAULT_SOURCE: &str = "logomain.png";

/// Directory the icons are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Filter applied to an icon after resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostFilter {
    /// Restore edge contrast lost to aggressive downscaling.
    UnsharpMask(UnsharpMask),
}

impl PostFilter {
    /// Apply the filter, producing a new image.
    #[must_use]
    pub fn apply(&self, img: &RgbaImage) -> RgbaImage {
        match self {
            Self::UnsharpMask(mask) => mask.apply(img),
        }
    }
}

/// One entry of the icon table: an edge length and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct IconTarget {
    /// Edge length in pixels.
    pub size: u32,

    /// File name relative to the output directory.
    pub file_name: String,

    /// Optional filter run after resampling.
    pub post_filter: Option<PostFilter>,
}

impl IconTarget {
    /// Create a target named `icon{size}.png` without post filter.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            file_name: format!("icon{size}.png"),
            post_filter: None,
        }
    }

    /// Attach a post filter.
    #[must_use]
    pub fn with_post_filter(mut self, filter: PostFilter) -> Self {
        self.post_filter = Some(filter);
        self
    }

    /// Full output path inside `output_dir`.
    #[must_use]
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }
}

/// The browser-extension icon set: 16, 48 and 128 pixels, with the 16 px
/// icon sharpened.
#[must_use]
pub fn default_targets() -> Vec<IconTarget> {
    vec![
        IconTarget::new(16).with_post_filter(PostFilter::UnsharpMask(UnsharpMask::default())),
        IconTarget::new(48),
        IconTarget::new(128),
    ]
}

/// Configuration for an icon generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source image path.
    pub source: PathBuf,

    /// Directory the icons are written to.
    pub output_dir: PathBuf,

    /// Icons to generate, in order.
    pub targets: Vec<IconTarget>,

    /// Shorter source edge below which a low-resolution advisory is raised.
    pub min_source_edge: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            targets: default_targets(),
            min_source_edge: RECOMMENDED_MIN_EDGE,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the target table is empty, an edge length is zero,
    /// a file name is empty, duplicated or not a `.png`, or a filter parameter
    /// is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(invalid("targets", "at least one icon size is required"));
        }

        let mut seen = HashSet::new();
        for target in &self.targets {
            if target.size == 0 {
                return Err(invalid("size", "must be greater than 0"));
            }

            if target.file_name.is_empty() {
                return Err(invalid("file_name", "must not be empty"));
            }

            let is_png = Path::new(&target.file_name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                return Err(invalid(
                    "file_name",
                    &format!("{} must have a .png extension", target.file_name),
                ));
            }

            if !seen.insert(target.file_name.as_str()) {
                return Err(invalid(
                    "file_name",
                    &format!("{} is used by more than one size", target.file_name),
                ));
            }

            if let Some(PostFilter::UnsharpMask(mask)) = target.post_filter {
                if !(mask.radius.is_finite() && mask.radius > 0.0) {
                    return Err(invalid("radius", "must be a positive number"));
                }
            }
        }

        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
