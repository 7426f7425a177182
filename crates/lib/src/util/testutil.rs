//! Test utilities for cibuild-lib.
//!
//! In-memory stand-ins for the build engine and scene configuration, plus a
//! helper for writing executable engine scripts on Unix.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::{BuildEngine, BuildOutcome, BuildResult, BuildSummary, BuildTargetSpec, EngineError};
use crate::options::StandaloneBuildSubtarget;
use crate::scenes::{SceneEntry, SceneError, SceneSource};
use crate::settings::PlayerSettings;

/// Scene source returning a fixed list regardless of project.
pub struct StaticScenes(pub Vec<SceneEntry>);

impl SceneSource for StaticScenes {
  fn scenes(&self, _project_path: &Path) -> Result<Vec<SceneEntry>, SceneError> {
    Ok(self.0.clone())
  }
}

/// Engine that records every request and answers from a queue of results.
///
/// Once the queue is empty every further build succeeds.
pub struct RecordingEngine {
  results: VecDeque<BuildResult>,
  unavailable: bool,
  pub requests: Vec<(BuildTargetSpec, PlayerSettings)>,
}

impl RecordingEngine {
  pub fn new(results: impl IntoIterator<Item = BuildResult>) -> Self {
    Self {
      results: results.into_iter().collect(),
      unavailable: false,
      requests: Vec::new(),
    }
  }

  pub fn succeeding() -> Self {
    Self::new([])
  }

  /// Engine whose executable cannot be started.
  pub fn unavailable() -> Self {
    Self {
      unavailable: true,
      ..Self::succeeding()
    }
  }
}

impl BuildEngine for RecordingEngine {
  fn build(&mut self, spec: &BuildTargetSpec, settings: &PlayerSettings) -> Result<BuildOutcome, EngineError> {
    if self.unavailable {
      return Err(EngineError::Spawn {
        program: PathBuf::from("engine"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
      });
    }

    self.requests.push((spec.clone(), settings.clone()));
    let result = self.results.pop_front().unwrap_or(BuildResult::Succeeded);

    Ok(BuildOutcome {
      result,
      summary: BuildSummary {
        total_time: Duration::from_secs(42),
        total_warnings: 3,
        total_errors: u32::from(!result.is_success()),
        total_size: 1_048_576,
      },
    })
  }
}

pub fn sample_settings() -> PlayerSettings {
  PlayerSettings {
    bundle_version: "1.0.0".to_string(),
    build_number: "1.0.0".to_string(),
    android_version_code: 7,
    standalone_subtarget: StandaloneBuildSubtarget::Default,
  }
}

/// Write an executable `/bin/sh` script into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}
