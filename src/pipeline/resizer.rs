//! Multi-size icon generation.

use std::path::PathBuf;

use ::image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::image::{self, RESAMPLE_FILTER};

use super::config::{Config, IconTarget};
use super::inspect::{inspect_source, Advisory};

/// A single icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Edge length in pixels.
    pub size: u32,

    /// Where the icon was written.
    pub path: PathBuf,

    /// File size in bytes as reported by the filesystem.
    pub bytes: u64,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct IconReport {
    /// Source dimensions before normalization.
    pub source_dimensions: (u32, u32),

    /// Advisories raised while inspecting the source.
    pub advisories: Vec<Advisory>,

    /// Written icons, in target order.
    pub icons: Vec<GeneratedIcon>,
}

/// Resample an RGBA image to a square icon and run the target's post filter.
///
/// The aspect ratio is not preserved: the result is always `size` x `size`.
#[must_use]
pub fn resize_icon(source: &RgbaImage, target: &IconTarget) -> RgbaImage {
    let resized = imageops::resize(source, target.size, target.size, RESAMPLE_FILTER);

    match &target.post_filter {
        Some(filter) => {
            tracing::info!("Applying {filter:?} to {}px icon", target.size);
            filter.apply(&resized)
        }
        None => resized,
    }
}

/// Generates an icon set from one source image.
///
/// The run aborts on the first error. A missing or unreadable source fails
/// before anything is written; a failed save leaves icons written for earlier
/// targets in place.
pub struct IconResizer {
    config: Config,
}

impl IconResizer {
    /// Create a new resizer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Initializing icon resizer with config: {config:?}");
        Ok(Self { config })
    }

    /// Load the source, inspect it, and write every configured icon.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or any icon cannot be
    /// saved.
    pub fn run(&self) -> Result<IconReport> {
        let source_path = &self.config.source;

        tracing::info!("Opening source image: {}", source_path.display());
        let source = image::load_image(source_path)?;

        self.generate(&source)
    }

    /// Write every configured icon from an already decoded source.
    ///
    /// # Errors
    ///
    /// Returns an error if any icon cannot be saved.
    pub fn generate(&self, source: &DynamicImage) -> Result<IconReport> {
        let source_dimensions = source.dimensions();
        tracing::info!(
            "Source image loaded: {}x{} pixels",
            source_dimensions.0,
            source_dimensions.1
        );

        let advisories = inspect_source(source, self.config.min_source_edge);
        let rgba = image::normalize_rgba(source);

        let pb = ProgressBar::new(self.config.targets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} Icons [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );

        let mut icons = Vec::with_capacity(self.config.targets.len());
        for target in &self.config.targets {
            pb.set_message(target.file_name.clone());
            match self.write_icon(&rgba, target) {
                Ok(icon) => icons.push(icon),
                Err(err) => {
                    pb.abandon_with_message(format!("failed at {}", target.file_name));
                    return Err(err);
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("done");
        tracing::info!("Icon generation complete: {} icons", icons.len());

        Ok(IconReport {
            source_dimensions,
            advisories,
            icons,
        })
    }

    fn write_icon(&self, rgba: &RgbaImage, target: &IconTarget) -> Result<GeneratedIcon> {
        tracing::info!("Generating {} ({1}x{1})", target.file_name, target.size);
        let resized = resize_icon(rgba, target);

        let path = target.output_path(&self.config.output_dir);
        let bytes = image::save_png(&resized, &path)?;
        tracing::info!("Saved: {} ({bytes} bytes)", path.display());

        Ok(GeneratedIcon {
            size: target.size,
            path,
            bytes,
        })
    }
}
