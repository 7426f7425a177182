//! Build engine boundary.
//!
//! The engine compiles and packages a player; this crate only describes what to
//! build and reads back the verdict. [`CommandEngine`] drives an external engine
//! process; tests substitute their own [`BuildEngine`].

mod command;
mod types;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::settings::PlayerSettings;

pub use command::CommandEngine;
pub use types::{BuildOption, BuildOptions, BuildOutcome, BuildResult, BuildSummary, BuildTargetSpec};

/// The engine could not be asked to build, or did not say how the build went.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("failed to start build engine {}: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to prepare build request: {0}")]
  Request(#[source] io::Error),

  #[error("failed to encode build request: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("build engine exited with code {code:?} without writing a report to {}", .path.display())]
  MissingReport {
    path: PathBuf,
    code: Option<i32>,
    #[source]
    source: io::Error,
  },

  #[error("failed to decode build report {}: {source}", .path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Produces one player per call. Blocks until the build has finished.
pub trait BuildEngine {
  fn build(&mut self, spec: &BuildTargetSpec, settings: &PlayerSettings) -> Result<BuildOutcome, EngineError>;
}
