//! Core building blocks: batch parameters, fit-to-box resizing, centering and
//! compositing, and the output naming rule. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
