//! Lane and road mask extraction for driving-scene photos
//!
//! This library converts color-coded driving photos into per-class mask
//! images: pixels are selected by an HSV range, cleaned with morphological
//! open/close, and painted as a solid color on black.

pub mod color;
pub mod config;
pub mod io;
pub mod mask;
pub mod pipeline;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use color::{rgb_to_hsv, rgb_to_hsv_image, ColorRange};
pub use config::{Args, MaskClass, SegmentationConfig};
pub use io::{collect_images, setup_output_directories};
pub use mask::{build_mask, clean_mask, paint_mask, threshold_in_range};
pub use pipeline::{process_image, process_images_in_parallel, run_batch, ImageOutcome};
pub use types::{OutputDirs, ProcessingStats};
