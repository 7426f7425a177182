//! Validation of parsed build flags.
//!
//! Checks run in a fixed order and the first failure wins; each failure maps to
//! its own exit code so CI can tell them apart.

mod target;

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::args::ParsedOptions;
use crate::consts::{DEFAULT_BUILD_NAME, exit_codes, flags};
use crate::error::CiBuildError;

pub use target::{BuildTarget, StandaloneBuildSubtarget, UnknownBuildTarget};

/// A required flag is missing or holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Missing argument -projectPath")]
  MissingProjectPath,

  #[error("Missing argument -buildTarget")]
  MissingBuildTarget,

  #[error(transparent)]
  InvalidBuildTarget(#[from] UnknownBuildTarget),

  #[error("Missing argument -customBuildPath")]
  MissingCustomBuildPath,
}

impl ValidationError {
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::MissingProjectPath => exit_codes::MISSING_PROJECT_PATH,
      Self::MissingBuildTarget => exit_codes::MISSING_BUILD_TARGET,
      Self::InvalidBuildTarget(_) => exit_codes::INVALID_BUILD_TARGET,
      Self::MissingCustomBuildPath => exit_codes::MISSING_CUSTOM_BUILD_PATH,
    }
  }
}

/// Options that passed validation, with defaults applied.
///
/// The typed fields mirror entries that are guaranteed to be present in
/// [`options`](Self::options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
  options: ParsedOptions,
  project_path: PathBuf,
  build_target: BuildTarget,
  custom_build_path: PathBuf,
  custom_build_name: String,
}

impl ValidatedOptions {
  pub fn options(&self) -> &ParsedOptions {
    &self.options
  }

  pub fn project_path(&self) -> &Path {
    &self.project_path
  }

  pub fn build_target(&self) -> BuildTarget {
    self.build_target
  }

  pub fn custom_build_path(&self) -> &Path {
    &self.custom_build_path
  }

  pub fn custom_build_name(&self) -> &str {
    &self.custom_build_name
  }
}

/// Validate `options` and apply defaults.
///
/// Order: `projectPath` (110), `buildTarget` presence (120) and value (121),
/// `customBuildPath` (130). A missing or empty `customBuildName` is set to
/// `TestBuild` with a warning line written to `out`.
pub fn validate_options<W: Write>(mut options: ParsedOptions, out: &mut W) -> Result<ValidatedOptions, CiBuildError> {
  let project_path = options
    .get(flags::PROJECT_PATH)
    .map(PathBuf::from)
    .ok_or(ValidationError::MissingProjectPath)?;

  let build_target = options
    .get(flags::BUILD_TARGET)
    .ok_or(ValidationError::MissingBuildTarget)?
    .parse::<BuildTarget>()
    .map_err(ValidationError::from)?;

  let custom_build_path = options
    .get(flags::CUSTOM_BUILD_PATH)
    .map(PathBuf::from)
    .ok_or(ValidationError::MissingCustomBuildPath)?;

  let notice = match options.get(flags::CUSTOM_BUILD_NAME) {
    None => Some("Missing"),
    Some("") => Some("Invalid"),
    Some(_) => None,
  };
  if let Some(notice) = notice {
    writeln!(
      out,
      "{} argument -{}, defaulting to {}.",
      notice,
      flags::CUSTOM_BUILD_NAME,
      DEFAULT_BUILD_NAME
    )?;
    warn!(flag = flags::CUSTOM_BUILD_NAME, default = DEFAULT_BUILD_NAME, "applied default");
    options.set(flags::CUSTOM_BUILD_NAME, DEFAULT_BUILD_NAME);
  }
  let custom_build_name = options.get(flags::CUSTOM_BUILD_NAME).unwrap_or(DEFAULT_BUILD_NAME).to_string();

  info!(
    project = %project_path.display(),
    target = %build_target,
    path = %custom_build_path.display(),
    name = %custom_build_name,
    "options validated"
  );

  Ok(ValidatedOptions {
    options,
    project_path,
    build_target,
    custom_build_path,
    custom_build_name,
  })
}
