use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::ColorRange;

/// Command-line arguments for the lane/road mask extraction batch.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the source photos
    #[arg(short = 'i', long = "input_dir", default_value = "input")]
    pub input_dir: String,

    /// Directory that will receive the lanes/ and roads/ mask folders
    #[arg(short = 'o', long = "output_dir", default_value = "output")]
    pub output_dir: String,

    /// File extension of the source photos
    #[arg(long = "ext", default_value = "jpg")]
    pub extension: String,

    /// Optional JSON file with calibrated HSV thresholds and paint colors
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,
}

/// One mask class: the HSV box that selects it and the solid color its
/// output image is painted with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaskClass {
    pub range: ColorRange,
    pub color: [u8; 3],
}

/// Immutable configuration for one batch run. Passed explicitly into the
/// pipeline entry points; there is no ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    pub lane: MaskClass,
    pub road: MaskClass,
    /// L1 (diamond) structuring-element radius; 1 is the 3x3 kernel.
    pub morph_radius: u8,
    pub morph_iterations: u8,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        // HSV bounds use OpenCV scaling: H in [0,179], S and V in [0,255].
        // The numbers are the contract; tune per dataset via --config.
        Self {
            lane: MaskClass {
                range: ColorRange::new([20, 40, 120], [35, 255, 255]),
                color: [255, 255, 255],
            },
            road: MaskClass {
                range: ColorRange::new([125, 40, 120], [160, 255, 255]),
                color: [128, 128, 128],
            },
            morph_radius: 1,
            morph_iterations: 1,
        }
    }
}

impl SegmentationConfig {
    /// Load calibrated thresholds from a JSON file. A missing or malformed
    /// file is an error; unlike a bad input image, a bad calibration would
    /// silently corrupt every mask in the batch.
    pub fn from_json_file(path: &Path) -> std::io::Result<Self> {
        let file = fs::File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
