//! Version metadata handed to the build engine with every build request.

use serde::Serialize;
use thiserror::Error;

use crate::args::ParsedOptions;
use crate::consts::{exit_codes, flags};
use crate::options::StandaloneBuildSubtarget;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
  #[error("Missing argument -buildVersion")]
  MissingBuildVersion,

  #[error("Missing argument -androidVersionCode")]
  MissingVersionCode,

  #[error("Invalid argument -androidVersionCode: \"{value}\" is not an integer")]
  InvalidVersionCode { value: String },
}

impl SettingsError {
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::MissingBuildVersion => exit_codes::MISSING_BUILD_VERSION,
      Self::MissingVersionCode | Self::InvalidVersionCode { .. } => exit_codes::INVALID_VERSION_CODE,
    }
  }
}

/// Player-wide settings written once before the first build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSettings {
  pub bundle_version: String,
  /// macOS build number; mirrors `bundle_version`.
  pub build_number: String,
  pub android_version_code: i32,
  /// Subtarget requested through `-standaloneBuildSubtarget`.
  pub standalone_subtarget: StandaloneBuildSubtarget,
}

impl PlayerSettings {
  pub fn from_options(options: &ParsedOptions) -> Result<Self, SettingsError> {
    let version = options
      .get(flags::BUILD_VERSION)
      .ok_or(SettingsError::MissingBuildVersion)?;

    let code = options
      .get(flags::ANDROID_VERSION_CODE)
      .ok_or(SettingsError::MissingVersionCode)?;
    let android_version_code = code
      .trim()
      .parse::<i32>()
      .map_err(|_| SettingsError::InvalidVersionCode { value: code.to_string() })?;

    Ok(Self {
      bundle_version: version.to_string(),
      build_number: version.to_string(),
      android_version_code,
      standalone_subtarget: StandaloneBuildSubtarget::resolve(options.get(flags::STANDALONE_SUBTARGET)),
    })
  }
}
