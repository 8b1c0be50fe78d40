//! High-level library API: the single-image resize-and-center transform and the
//! batch composer over a directory. Prefer these entrypoints over the low-level
//! processing modules when integrating thumbframe.
use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::ComposeParams;
use crate::core::processing::composite::{ResizedImage, compose_onto_template};
use crate::core::processing::naming::derive_output_name;
use crate::core::processing::resize::{
    calculate_fit_dimensions, resize_rgb_image, resize_rgba_image,
};
use crate::error::{Error, Result};
use crate::io::{load_image, write_png};
use crate::types::ResampleFilter;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Resize a decoded image so it fits a `max_size` square, keeping its aspect ratio.
pub fn fit_image(
    image: &DynamicImage,
    path: &Path,
    max_size: u32,
    filter: ResampleFilter,
) -> Result<ResizedImage> {
    if max_size == 0 {
        return Err(Error::ZeroSize { size: max_size });
    }
    let (width, height) = (image.width(), image.height());
    let Some((new_width, new_height)) = calculate_fit_dimensions(width, height, max_size) else {
        return Err(Error::ZeroDimension {
            path: path.to_path_buf(),
            width,
            height,
        });
    };
    info!(
        "Original size: {}x{}, New size: {}x{}",
        width, height, new_width, new_height
    );

    if image.color().has_alpha() {
        let pixels = resize_rgba_image(image.to_rgba8(), new_width, new_height, filter)?;
        Ok(ResizedImage {
            pixels,
            has_alpha: true,
        })
    } else {
        let rgb = resize_rgb_image(image.to_rgb8(), new_width, new_height, filter)?;
        Ok(ResizedImage {
            pixels: DynamicImage::ImageRgb8(rgb).to_rgba8(),
            has_alpha: false,
        })
    }
}

/// Produce one composite: fit `image_path` into `max_size`, center it on a copy of
/// `template_path` and write the result as PNG to `output_path`.
pub fn resize_and_center_image(
    image_path: &Path,
    template_path: &Path,
    output_path: &Path,
    max_size: u32,
    filter: ResampleFilter,
) -> Result<()> {
    let resized = {
        let source = load_image(image_path)?;
        fit_image(&source, image_path, max_size, filter)?
    };

    let template = load_image(template_path)?;
    let composite = compose_onto_template(&template, &resized);
    write_png(output_path, &composite)
}

/// Return the regular files directly inside `directory` (no recursion).
///
/// The listing is collected up front so outputs written into the same directory are
/// never picked up by the pass that produced them.
pub fn iterate_candidate_files(directory: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        files.push(entry.path());
    }
    Ok(files.into_iter())
}

/// Compose every `*_unboxed` image of `params.source_directory` into
/// `params.output_directory`, deleting each source after its composite is written.
///
/// Without `continue_on_error` the first failure is returned and the remaining files
/// are left untouched; with it, failures are counted and their sources kept.
pub fn process_images(params: &ComposeParams) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(&params.output_directory)?;

    info!(
        "Starting batch from {:?} into {:?} (template {:?}, max size {})",
        params.source_directory, params.output_directory, params.template_path, params.max_size
    );

    let mut report = BatchReport::default();

    for path in iterate_candidate_files(&params.source_directory)? {
        let output_name = match path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|_| path.is_file())
            .and_then(derive_output_name)
        {
            Some(name) => name,
            None => {
                debug!("Skipping {:?}", path);
                report.skipped += 1;
                continue;
            }
        };
        let output_path = params.output_directory.join(&output_name);

        info!("Processing: {:?} -> {:?}", path, output_path);

        match compose_and_remove(&path, &output_path, params) {
            Ok(()) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !params.continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
            }
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

fn compose_and_remove(source: &Path, output: &Path, params: &ComposeParams) -> Result<()> {
    resize_and_center_image(
        source,
        &params.template_path,
        output,
        params.max_size,
        params.filter,
    )?;

    // A source already named `<stem>.png` in the output directory was just overwritten
    if is_same_file(source, output) {
        info!("Replaced {:?} in place", source);
        return Ok(());
    }

    std::fs::remove_file(source)?;
    info!("Removed original: {:?}", source);
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
