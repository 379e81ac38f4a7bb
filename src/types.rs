use std::path::PathBuf;

// Struct to hold the paths to the lanes/roads mask output directories
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub lanes_dir: PathBuf,
    pub roads_dir: PathBuf,
}

// Struct to hold batch processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub total_images: usize,
    pub successful_images: usize,
    pub skipped_unreadable: usize,
    pub failed_writes: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_images += 1;
    }

    pub fn increment_successful(&mut self) {
        self.successful_images += 1;
    }

    pub fn increment_skipped_unreadable(&mut self) {
        self.skipped_unreadable += 1;
    }

    pub fn increment_failed_writes(&mut self) {
        self.failed_writes += 1;
    }

    /// Number of mask files written: one lane and one road image per
    /// successfully processed photo.
    pub fn masks_written(&self) -> usize {
        self.successful_images * 2
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total images discovered: {}", self.total_images);
        log::info!("Successfully processed: {}", self.successful_images);
        log::info!("Mask files written: {}", self.masks_written());
        log::info!("Skipped (unreadable image): {}", self.skipped_unreadable);
        log::info!("Failed (write error): {}", self.failed_writes);

        if self.skipped_unreadable + self.failed_writes > 0 {
            log::warn!(
                "{} of {} images produced no masks (unreadable: {}, write error: {})",
                self.skipped_unreadable + self.failed_writes,
                self.total_images,
                self.skipped_unreadable,
                self.failed_writes
            );
        }
    }
}
