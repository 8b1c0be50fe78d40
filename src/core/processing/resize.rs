use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::{RgbImage, RgbaImage};
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::ResampleFilter;

/// Largest uniform fit of `(original_cols, original_rows)` inside a `max_size` square.
///
/// Equivalent to `floor(side * min(max/w, max/h))` evaluated exactly, so the longer
/// side always lands on `max_size`. Small images are enlarged, there is no clamp at 1.0.
/// Returns `None` when any input is zero.
pub fn calculate_fit_dimensions(
    original_cols: u32,
    original_rows: u32,
    max_size: u32,
) -> Option<(u32, u32)> {
    if original_cols == 0 || original_rows == 0 || max_size == 0 {
        return None;
    }
    let long_side = original_cols.max(original_rows) as u64;
    let max_size = max_size as u64;

    let new_cols = original_cols as u64 * max_size / long_side;
    let new_rows = original_rows as u64 * max_size / long_side;

    if new_cols == 0 || new_rows == 0 {
        warn!(
            "Fit of {}x{} into {} truncates to {}x{}; clamping to 1px",
            original_cols, original_rows, max_size, new_cols, new_rows
        );
    }

    Some((new_cols.max(1) as u32, new_rows.max(1) as u32))
}

pub fn resize_rgba_image(
    src: RgbaImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (cols, rows) = src.dimensions();
    let data = resize_interleaved(
        src.into_raw(),
        cols,
        rows,
        target_cols,
        target_rows,
        PixelType::U8x4,
        filter,
    )?;
    RgbaImage::from_raw(target_cols, target_rows, data).ok_or_else(|| {
        crate::Error::Processing(format!(
            "resized RGBA buffer does not fit {}x{}",
            target_cols, target_rows
        ))
    })
}

pub fn resize_rgb_image(
    src: RgbImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    let (cols, rows) = src.dimensions();
    let data = resize_interleaved(
        src.into_raw(),
        cols,
        rows,
        target_cols,
        target_rows,
        PixelType::U8x3,
        filter,
    )?;
    RgbImage::from_raw(target_cols, target_rows, data).ok_or_else(|| {
        crate::Error::Processing(format!(
            "resized RGB buffer does not fit {}x{}",
            target_cols, target_rows
        ))
    })
}

fn resize_interleaved(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    pixel_type: PixelType,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    debug!(
        "Resizing {:?} {}x{} -> {}x{} with {}",
        pixel_type, original_cols, original_rows, target_cols, target_rows, filter
    );

    // U8x4 sources are convolved with premultiplied alpha (the resizer default)
    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, pixel_type)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn landscape_4_3_fits_980_box() {
        assert_eq!(calculate_fit_dimensions(1600, 1200, 980), Some((980, 735)));
    }

    #[test]
    fn portrait_and_square_hit_the_box_edge() {
        assert_eq!(calculate_fit_dimensions(1200, 1600, 980), Some((735, 980)));
        assert_eq!(calculate_fit_dimensions(500, 500, 980), Some((980, 980)));
    }

    #[test]
    fn small_images_are_enlarged() {
        assert_eq!(calculate_fit_dimensions(100, 50, 980), Some((980, 490)));
    }

    #[test]
    fn fit_properties_hold_over_a_grid() {
        for w in [1u32, 3, 7, 99, 640, 1001, 4096] {
            for h in [1u32, 2, 9, 480, 1000, 3000] {
                for max in [1u32, 17, 256, 980] {
                    let (nw, nh) = calculate_fit_dimensions(w, h, max).unwrap();
                    assert!(nw <= max && nh <= max, "{w}x{h} in {max} -> {nw}x{nh}");
                    assert!(nw == max || nh == max, "{w}x{h} in {max} -> {nw}x{nh}");
                    // aspect preserved within one pixel of truncation
                    let exact_h = h as f64 * nw as f64 / w as f64;
                    if w >= h {
                        assert!((exact_h - nh as f64).abs() <= 1.0);
                    }
                    assert_eq!(calculate_fit_dimensions(w, h, max), Some((nw, nh)));
                }
            }
        }
    }

    #[test]
    fn degenerate_side_is_clamped_to_one_pixel() {
        assert_eq!(calculate_fit_dimensions(1, 1000, 980), Some((1, 980)));
    }

    #[test]
    fn zero_inputs_have_no_fit() {
        assert_eq!(calculate_fit_dimensions(0, 0, 980), None);
        assert_eq!(calculate_fit_dimensions(0, 10, 980), None);
        assert_eq!(calculate_fit_dimensions(10, 0, 980), None);
        assert_eq!(calculate_fit_dimensions(10, 10, 0), None);
    }

    #[test]
    fn rgb_resize_produces_target_dimensions() {
        let src = RgbImage::from_pixel(40, 30, Rgb([200, 10, 10]));
        let out = resize_rgb_image(src, 20, 15, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (20, 15));
        // flat colour survives resampling
        let p = out.get_pixel(10, 7);
        assert!(p[0] >= 198 && p[1] <= 12 && p[2] <= 12);
    }

    #[test]
    fn rgba_resize_keeps_transparency() {
        let src = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        let out = resize_rgba_image(src, 64, 64, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (64, 64));
        assert!(out.pixels().all(|p| p[3] == 0));
    }
}
