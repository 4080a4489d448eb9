//! Image loading, filtering, and saving utilities.

mod load;
mod save;
mod sharpen;

pub use load::{load_image, normalize_rgba};
pub use save::{encode_png, save_png};
pub use sharpen::UnsharpMask;

use image::imageops::FilterType;

/// Resampling filter used for every icon size.
///
/// Lanczos3 keeps aliasing low when downscaling, which is the common case for icons.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;
