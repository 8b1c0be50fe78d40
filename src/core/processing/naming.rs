/// Marker a lower-cased file stem must end with to be picked up by the batch.
pub const UNBOXED_SUFFIX: &str = "_unboxed";

pub const OUTPUT_EXTENSION: &str = "png";

/// Output file name for `file_name`, or `None` when the file is not eligible.
///
/// The name is lower-cased and everything from its last dot on is stripped, even when
/// that dot is the first character; the remaining stem must end with [`UNBOXED_SUFFIX`].
pub fn derive_output_name(file_name: &str) -> Option<String> {
    let lowered = file_name.to_lowercase();
    let stem = lowered
        .rsplit_once('.')
        .map_or(lowered.as_str(), |(stem, _)| stem);

    if stem.ends_with(UNBOXED_SUFFIX) {
        Some(format!("{}.{}", stem, OUTPUT_EXTENSION))
    } else {
        None
    }
}
