use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};
use std::process;

use rgb2mask::config::{Args, SegmentationConfig};
use rgb2mask::pipeline::run_batch;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match SegmentationConfig::from_json_file(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => SegmentationConfig::default(),
    };

    let input_dir = PathBuf::from(&args.input_dir);
    let output_dir = PathBuf::from(&args.output_dir);

    match run_batch(&input_dir, &output_dir, &args.extension, &config) {
        Ok(stats) => stats.print_summary(),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
