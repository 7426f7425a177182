//! Build request and outcome types exchanged with the build engine.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::exit_codes;
use crate::options::{BuildTarget, StandaloneBuildSubtarget};

/// Engine flag applied to a single build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BuildOption {
  ShowBuiltPlayer,
  Development,
  /// Forces scene post-processing to run on every build.
  CleanBuildCache,
  AutoRunPlayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildOptions(BTreeSet<BuildOption>);

impl BuildOptions {
  pub fn contains(&self, option: BuildOption) -> bool {
    self.0.contains(&option)
  }

  pub fn iter(&self) -> impl Iterator<Item = BuildOption> + '_ {
    self.0.iter().copied()
  }
}

impl FromIterator<BuildOption> for BuildOptions {
  fn from_iter<T: IntoIterator<Item = BuildOption>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}

/// Everything the engine needs to produce one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTargetSpec {
  pub location: PathBuf,
  pub scenes: Vec<String>,
  pub target: BuildTarget,
  pub subtarget: StandaloneBuildSubtarget,
  pub options: BuildOptions,
}

/// Engine verdict for one build.
///
/// Any name the engine reports that is not listed here decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum BuildResult {
  Succeeded,
  Failed,
  Cancelled,
  Unknown,
}

impl From<String> for BuildResult {
  fn from(value: String) -> Self {
    match value.as_str() {
      "Succeeded" => Self::Succeeded,
      "Failed" => Self::Failed,
      "Cancelled" => Self::Cancelled,
      _ => Self::Unknown,
    }
  }
}

impl BuildResult {
  pub fn is_success(self) -> bool {
    self == Self::Succeeded
  }

  pub fn exit_code(self) -> u8 {
    match self {
      Self::Succeeded => exit_codes::SUCCESS,
      Self::Failed => exit_codes::BUILD_FAILED,
      Self::Cancelled => exit_codes::BUILD_CANCELLED,
      Self::Unknown => exit_codes::BUILD_UNKNOWN,
    }
  }

  /// The line written when the invocation ends with this result.
  pub fn message(self) -> &'static str {
    match self {
      Self::Succeeded => "Build succeeded!",
      Self::Failed => "Build failed!",
      Self::Cancelled => "Build cancelled!",
      Self::Unknown => "Build result is unknown!",
    }
  }
}

impl fmt::Display for BuildResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Succeeded => "Succeeded",
      Self::Failed => "Failed",
      Self::Cancelled => "Cancelled",
      Self::Unknown => "Unknown",
    };
    write!(f, "{}", name)
  }
}

/// Metrics reported for one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
  pub total_time: Duration,
  pub total_warnings: u32,
  pub total_errors: u32,
  /// Output size in bytes.
  pub total_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
  pub result: BuildResult,
  pub summary: BuildSummary,
}
