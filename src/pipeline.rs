use indicatif::ProgressBar;
use log::{error, info, warn};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::color::rgb_to_hsv_image;
use crate::config::SegmentationConfig;
use crate::io::{collect_images, setup_output_directories};
use crate::mask::{build_mask, paint_mask};
use crate::types::{OutputDirs, ProcessingStats};
use crate::utils::create_progress_bar;

/// Outcome of one image: masks written, or the file was skipped because it
/// could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    MasksWritten,
    SkippedUnreadable,
}

/// Process a single photo: decode, convert to HSV once, then run the lane
/// and road passes and write one painted mask image each, under the same
/// base filename as the source.
///
/// An undecodable file is the one recognized per-item failure: it is logged
/// and skipped without aborting the batch. Write errors propagate.
pub fn process_image(
    image_path: &Path,
    config: &SegmentationConfig,
    dirs: &OutputDirs,
) -> io::Result<ImageOutcome> {
    let img = match image::open(image_path) {
        Ok(img) => img.to_rgb8(),
        Err(e) => {
            warn!("Could not read image {}: {}", image_path.display(), e);
            return Ok(ImageOutcome::SkippedUnreadable);
        }
    };

    let hsv = rgb_to_hsv_image(&img);

    // Paths came from the directory glob, so a file name is always present.
    let file_name = image_path
        .file_name()
        .expect("globbed image path has no file name");

    let lane_mask = build_mask(
        &hsv,
        &config.lane.range,
        config.morph_radius,
        config.morph_iterations,
    );
    let lane_out = paint_mask(&lane_mask, config.lane.color);
    save_image(&lane_out, &dirs.lanes_dir.join(file_name))?;

    let road_mask = build_mask(
        &hsv,
        &config.road.range,
        config.morph_radius,
        config.morph_iterations,
    );
    let road_out = paint_mask(&road_mask, config.road.color);
    save_image(&road_out, &dirs.roads_dir.join(file_name))?;

    Ok(ImageOutcome::MasksWritten)
}

fn save_image(img: &image::RgbImage, path: &Path) -> io::Result<()> {
    img.save(path)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Process a batch of photos in parallel
pub fn process_images_in_parallel(
    images: &[PathBuf],
    config: &SegmentationConfig,
    dirs: &OutputDirs,
    pb: &ProgressBar,
) -> ProcessingStats {
    let stats = Mutex::new(ProcessingStats::new());

    images.par_iter().for_each(|image_path| {
        let outcome = process_image(image_path, config, dirs);

        let mut stats_guard = stats.lock().unwrap();
        stats_guard.increment_total();
        match outcome {
            Ok(ImageOutcome::MasksWritten) => stats_guard.increment_successful(),
            Ok(ImageOutcome::SkippedUnreadable) => stats_guard.increment_skipped_unreadable(),
            Err(e) => {
                error!("Failed to write masks for {}: {}", image_path.display(), e);
                stats_guard.increment_failed_writes();
            }
        }
        drop(stats_guard);

        pb.inc(1);
    });

    stats.into_inner().unwrap()
}

/// Run the whole batch: discover photos, set up the output directories and
/// map the per-image pipeline over every file, continuing past per-image
/// failures.
///
/// Returns `Err` only when the input directory itself is missing (no files
/// are processed in that case) or the output directories cannot be created.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    extension: &str,
    config: &SegmentationConfig,
) -> io::Result<ProcessingStats> {
    let images = collect_images(input_dir, extension)?;
    let dirs = setup_output_directories(output_dir)?;

    if images.is_empty() {
        info!(
            "No .{} images found in {}",
            extension,
            input_dir.display()
        );
        return Ok(ProcessingStats::new());
    }

    let pb = create_progress_bar(images.len() as u64, "Masks");
    let stats = process_images_in_parallel(&images, config, &dirs, &pb);
    pb.finish_with_message("Mask extraction complete");

    info!(
        "Done. Wrote lanes to '{}' and roads to '{}'.",
        dirs.lanes_dir.display(),
        dirs.roads_dir.display()
    );

    Ok(stats)
}
