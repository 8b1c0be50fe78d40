//! Shared types used across thumbframe: the resampling filter selection.
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    /// Resize algorithm handed to `fast_image_resize`.
    pub fn resize_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Nearest => "Nearest",
            ResampleFilter::Bilinear => "Bilinear",
            ResampleFilter::CatmullRom => "CatmullRom",
            ResampleFilter::Mitchell => "Mitchell",
            ResampleFilter::Lanczos3 => "Lanczos3",
        };
        write!(f, "{}", s)
    }
}
