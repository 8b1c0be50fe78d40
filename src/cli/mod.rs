//! Command Line Interface (CLI) layer for thumbframe.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolving the batch parameters
//! from defaults, an optional config file and flags, then running one pass.
//!
//! If you are embedding thumbframe into another application, prefer using
//! the high-level `thumbframe::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
