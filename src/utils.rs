use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb
}

/// Create an output directory if it does not exist yet. Idempotent: an
/// existing directory (and any masks already in it) is left untouched.
pub fn create_output_directory(path: &Path) -> std::io::Result<std::path::PathBuf> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}
