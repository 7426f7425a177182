//! cibuild-lib: two-target CI build orchestration
//!
//! This crate provides the pieces behind a CI build invocation:
//! - `args`: engine-style flag parsing with secret redaction
//! - `options`: ordered validation of required flags and defaults
//! - `settings`: version metadata passed to the engine
//! - `scenes`: the project's enabled scene list
//! - `engine`: the build engine boundary and its process-backed implementation
//! - `build`: the server-then-client sequence
//! - `report` / `exit`: result summaries and the final exit code

pub mod args;
pub mod build;
pub mod consts;
pub mod engine;
pub mod error;
pub mod exit;
pub mod options;
pub mod report;
pub mod scenes;
pub mod settings;
pub mod util;

pub use error::CiBuildError;
