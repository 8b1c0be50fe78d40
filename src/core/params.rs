use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub const DEFAULT_SOURCE_DIR: &str = "images/paper";
pub const DEFAULT_TEMPLATE_PATH: &str = ".github/scripts/paper_thumbnail/template_box.png";
pub const DEFAULT_MAX_SIZE: u32 = 980;

/// Batch parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeParams {
    pub source_directory: PathBuf,
    pub template_path: PathBuf,
    pub output_directory: PathBuf,
    /// Bounding box side in pixels; the longer side of every resized image equals this
    pub max_size: u32,
    pub filter: ResampleFilter,
    /// If true, per-file failures are counted in the report instead of aborting the batch
    pub continue_on_error: bool,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIR),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_directory: PathBuf::from(DEFAULT_SOURCE_DIR),
            max_size: DEFAULT_MAX_SIZE,
            filter: ResampleFilter::Lanczos3,
            continue_on_error: false,
        }
    }
}

impl ComposeParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: ComposeParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::ZeroSize {
                size: self.max_size,
            });
        }
        Ok(())
    }
}
