use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::PngEncoder;

use crate::error::Result;

/// Encode `image` as PNG at `output`, replacing any existing file.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    image.write_with_encoder(PngEncoder::new(&mut writer))?;
    writer.flush()?;
    Ok(())
}
