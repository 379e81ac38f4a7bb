use glob::glob;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::OutputDirs;
use crate::utils::create_output_directory;

/// Collect every `*.{extension}` file directly inside `input_dir`, sorted
/// lexicographically by path. No recursion into subdirectories.
///
/// A missing input directory is the batch-level fatal error.
pub fn collect_images(input_dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Input directory not found: {}", input_dir.display()),
        ));
    }

    let pattern = format!("{}/*.{}", input_dir.display(), extension);
    let mut images: Vec<PathBuf> = glob(&pattern)
        .expect("Failed to read image glob pattern")
        .filter_map(|entry| entry.ok())
        .collect();
    images.sort();

    Ok(images)
}

/// Set up the lanes/ and roads/ directories under the output root.
pub fn setup_output_directories(output_dir: &Path) -> io::Result<OutputDirs> {
    let lanes_dir = create_output_directory(&output_dir.join("lanes"))?;
    let roads_dir = create_output_directory(&output_dir.join("roads"))?;

    Ok(OutputDirs {
        lanes_dir,
        roads_dir,
    })
}
