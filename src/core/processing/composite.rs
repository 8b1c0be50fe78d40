use image::{DynamicImage, RgbaImage, imageops};
use tracing::info;

/// Resampled content ready to be pasted, remembering whether the source carried alpha.
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub pixels: RgbaImage,
    pub has_alpha: bool,
}

impl ResizedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Floor-centered paste offset of `content` inside `template`.
///
/// Negative when the content is larger than the template along that axis.
pub fn center_offsets(template: (u32, u32), content: (u32, u32)) -> (i64, i64) {
    let x = (template.0 as i64 - content.0 as i64).div_euclid(2);
    let y = (template.1 as i64 - content.1 as i64).div_euclid(2);
    (x, y)
}

/// Paste `resized` centered onto a working copy of `template`.
///
/// The result keeps the template's dimensions and its alpha-ness: an opaque template
/// yields an RGB composite. Content with alpha is blended through its mask, opaque
/// content overwrites the covered region. Both clip at the template bounds.
pub fn compose_onto_template(template: &DynamicImage, resized: &ResizedImage) -> DynamicImage {
    let mut canvas = template.to_rgba8();
    let (x_offset, y_offset) = center_offsets(canvas.dimensions(), resized.dimensions());

    info!(
        "Pasting {}x{} onto {}x{} template at ({}, {})",
        resized.pixels.width(),
        resized.pixels.height(),
        canvas.width(),
        canvas.height(),
        x_offset,
        y_offset
    );

    if resized.has_alpha {
        imageops::overlay(&mut canvas, &resized.pixels, x_offset, y_offset);
    } else {
        imageops::replace(&mut canvas, &resized.pixels, x_offset, y_offset);
    }

    if template.color().has_alpha() {
        DynamicImage::ImageRgba8(canvas)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8())
    }
}
