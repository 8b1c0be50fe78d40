use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::Result;

/// Decode the image at `path`, detecting the format from its content rather than the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
