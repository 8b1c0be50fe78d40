#![doc = r#"
thumbframe — batch composer for `*_unboxed` images.

Scans a directory for images whose file stem ends in `_unboxed` (case-insensitive),
fits each one inside a square box with Lanczos3 resampling while keeping its aspect
ratio, centers it on a template background and writes `<stem>.png` to an output
directory. The original is deleted once its composite is on disk.

Quick start: one batch pass
---------------------------
```rust,no_run
use std::path::PathBuf;
use thumbframe::{process_images, ComposeParams, ResampleFilter};

fn main() -> thumbframe::Result<()> {
    let params = ComposeParams {
        source_directory: PathBuf::from("images/paper"),
        template_path: PathBuf::from(".github/scripts/paper_thumbnail/template_box.png"),
        output_directory: PathBuf::from("images/paper"),
        max_size: 980,
        filter: ResampleFilter::Lanczos3,
        continue_on_error: false,
    };

    let report = process_images(&params)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Single image
------------
```rust,no_run
use std::path::Path;
use thumbframe::{resize_and_center_image, ResampleFilter};

fn main() -> thumbframe::Result<()> {
    resize_and_center_image(
        Path::new("scan_unboxed.jpg"),
        Path::new("template_box.png"),
        Path::new("out/scan_unboxed.png"),
        980,
        ResampleFilter::Lanczos3,
    )
}
```

Geometry helpers
----------------
```rust
use thumbframe::{calculate_fit_dimensions, center_offsets, derive_output_name};

assert_eq!(calculate_fit_dimensions(1600, 1200, 980), Some((980, 735)));
assert_eq!(center_offsets((1000, 1000), (980, 735)), (10, 132));
assert_eq!(derive_output_name("Foo_Unboxed.JPG").as_deref(), Some("foo_unboxed.png"));
assert_eq!(derive_output_name("bar.jpg"), None);
```

Error handling
--------------
All public functions return `thumbframe::Result<T>`; match on `thumbframe::Error` to
handle specific cases, e.g. decode failures versus filesystem errors.

Useful modules
--------------
- [`api`] — batch and single-image entry points.
- [`core`] — parameters, fit/resize, centering/compositing and naming primitives.
- [`io`] — image decoding and the PNG writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::ComposeParams;
pub use core::processing::composite::{ResizedImage, center_offsets, compose_onto_template};
pub use core::processing::naming::{UNBOXED_SUFFIX, derive_output_name};
pub use core::processing::resize::calculate_fit_dimensions;
pub use error::{Error, Result};
pub use types::ResampleFilter;

pub use api::{
    BatchReport, fit_image, iterate_candidate_files, process_images, resize_and_center_image,
};
