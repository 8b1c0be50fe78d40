//! I/O layer: decoding source and template images, and the PNG writer for composites.
pub mod reader;
pub use reader::load_image;

pub mod writers;
pub use writers::png::write_png;
