use clap::Parser;
use std::path::PathBuf;

use thumbframe::ResampleFilter;

/// Every option is optional: with no arguments the built-in batch
/// (`images/paper`, `.github/scripts/paper_thumbnail/template_box.png`,
/// max size 980) runs once.
#[derive(Parser, Debug)]
#[command(name = "thumbframe", version, about = "Fit *_unboxed images onto a template")]
pub struct CliArgs {
    /// JSON file with batch parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory scanned (non-recursively) for *_unboxed images
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Template/background image the resized content is centered on
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory receiving the PNG composites (created if missing)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Bounding box side in pixels
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Resampling filter (nearest, bilinear, catmull-rom, mitchell, lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Keep going after a file fails instead of aborting the batch
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false, conflicts_with = "quiet")]
    pub log: bool,

    /// Only log warnings and errors
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
