use image::RgbImage;
use serde::{Deserialize, Serialize};

/// A closed box in HSV space. A pixel belongs to the range iff every
/// channel lies within its `[lower, upper]` bound, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, px: [u8; 3]) -> bool {
        px.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(&c, (&lo, &hi))| c >= lo && c <= hi)
    }
}

/// Convert one RGB sample to 8-bit HSV with OpenCV scaling:
/// H in [0, 179] (half degrees), S and V in [0, 255].
///
/// Threshold constants in this crate are calibrated against this scale,
/// so it must not drift toward the 255/360 hue convention.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };
    let h_byte = ((h / 2.0).round() as u16 % 180) as u8;

    let s_byte = if max == 0.0 {
        0
    } else {
        (delta / max * 255.0).round() as u8
    };
    let v_byte = (max * 255.0).round() as u8;

    [h_byte, s_byte, v_byte]
}

/// Convert a whole image to HSV, one fresh buffer, source untouched.
/// The result reuses the 3-channel `RgbImage` container with channels
/// reinterpreted as (H, S, V).
pub fn rgb_to_hsv_image(img: &RgbImage) -> RgbImage {
    let mut hsv = RgbImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(hsv.pixels_mut()) {
        let [r, g, b] = src.0;
        dst.0 = rgb_to_hsv(r, g, b);
    }
    hsv
}
