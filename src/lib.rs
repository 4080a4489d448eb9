//! # exticon
//!
//! Generate the icon set a browser extension needs (16, 48 and 128 pixel PNGs)
//! from a single source logo.
//!
//! Every icon is resampled with Lanczos3 to an exact square, normalized to RGBA
//! and written as a maximally compressed PNG. Small icons can carry a post
//! filter; by default the 16 px icon is sharpened with an unsharp mask.
//!
//! ## Example
//!
//! ```no_run
//! use exticon::{Config, IconResizer};
//!
//! # fn main() -> exticon::Result<()> {
//! let config = Config {
//!     source: "logo.png".into(),
//!     ..Config::default()
//! };
//! let resizer = IconResizer::new(config)?;
//!
//! let report = resizer.run()?;
//! for icon in &report.icons {
//!     println!("{} ({} bytes)", icon.path.display(), icon.bytes);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use crate::image::UnsharpMask;
pub use pipeline::{
    resize_icon, Advisory, Config, GeneratedIcon, IconReport, IconResizer, IconTarget, PostFilter,
};
