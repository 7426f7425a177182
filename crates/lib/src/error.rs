//! Top-level error for a build invocation.

use std::io;

use thiserror::Error;

use crate::build::Stage;
use crate::consts::exit_codes;
use crate::engine::{BuildResult, EngineError};
use crate::options::ValidationError;
use crate::scenes::SceneError;
use crate::settings::SettingsError;

/// Every way an invocation can end other than success.
///
/// The `Display` output is the line written just before the process exits.
#[derive(Debug, Error)]
pub enum CiBuildError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Settings(#[from] SettingsError),

  #[error(transparent)]
  Scenes(#[from] SceneError),

  #[error(transparent)]
  Engine(#[from] EngineError),

  /// The engine finished a build with a result other than `Succeeded`.
  #[error("{}", .result.message())]
  Build { stage: Stage, result: BuildResult },

  #[error("failed to write diagnostics: {0}")]
  Io(#[from] io::Error),
}

impl CiBuildError {
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::Validation(e) => e.exit_code(),
      Self::Settings(e) => e.exit_code(),
      Self::Scenes(_) => exit_codes::SCENES_UNAVAILABLE,
      Self::Engine(_) => exit_codes::ENGINE_UNAVAILABLE,
      Self::Build { result, .. } => result.exit_code(),
      Self::Io(_) => exit_codes::GENERAL,
    }
  }
}
