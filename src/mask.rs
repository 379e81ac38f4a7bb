use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

use crate::color::ColorRange;

/// Raw 0/255 mask: a pixel is on iff its HSV sample falls inside the range.
pub fn threshold_in_range(hsv: &RgbImage, range: &ColorRange) -> GrayImage {
    let mut mask = GrayImage::new(hsv.width(), hsv.height());
    for (src, dst) in hsv.pixels().zip(mask.pixels_mut()) {
        if range.contains(src.0) {
            *dst = Luma([255]);
        }
    }
    mask
}

/// Morphological opening then closing with an L1 (diamond) structuring
/// element. Radius 1 gives the 3x3 kernel; opening removes speckles smaller
/// than the element, closing fills holes of the same scale.
pub fn clean_mask(mask: &GrayImage, radius: u8, iterations: u8) -> GrayImage {
    let mut cleaned = mask.clone();
    for _ in 0..iterations {
        cleaned = morphology::open(&cleaned, Norm::L1, radius);
    }
    for _ in 0..iterations {
        cleaned = morphology::close(&cleaned, Norm::L1, radius);
    }
    cleaned
}

/// Threshold an HSV image against a color range and clean the result.
pub fn build_mask(hsv: &RgbImage, range: &ColorRange, radius: u8, iterations: u8) -> GrayImage {
    let raw = threshold_in_range(hsv, range);
    clean_mask(&raw, radius, iterations)
}

/// Paint a mask as a solid-color image: on-pixels become exactly `color`,
/// off-pixels exactly black. Dimensions match the mask.
pub fn paint_mask(mask: &GrayImage, color: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.get_pixel(x, y)[0] > 0 {
            Rgb(color)
        } else {
            Rgb([0, 0, 0])
        }
    })
}
