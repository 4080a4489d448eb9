//! Icon generation pipeline.

mod config;
mod inspect;
mod resizer;

pub use config::{
    default_targets, Config, IconTarget, PostFilter, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE,
};
pub use inspect::{inspect_source, source_tips, Advisory, RECOMMENDED_MIN_EDGE};
pub use resizer::{resize_icon, GeneratedIcon, IconReport, IconResizer};
