//! Build engine driven as an external process.
//!
//! Each build runs `<program> [args..] --request <file> --report <file>`. The
//! request file holds the [`BuildTargetSpec`] and [`PlayerSettings`] as JSON;
//! the engine writes its verdict to the report file before exiting. Engine
//! stdout and stderr are inherited so its log lands in the same CI output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{BuildEngine, BuildOutcome, BuildResult, BuildSummary, BuildTargetSpec, EngineError};
use crate::settings::PlayerSettings;

const REQUEST_FILENAME: &str = "request.json";
const REPORT_FILENAME: &str = "report.json";

#[derive(Serialize)]
struct EngineRequest<'a> {
  build: &'a BuildTargetSpec,
  settings: &'a PlayerSettings,
}

#[derive(Deserialize)]
struct EngineReport {
  result: BuildResult,
  #[serde(default)]
  total_time_ms: u64,
  #[serde(default)]
  total_warnings: u32,
  #[serde(default)]
  total_errors: u32,
  #[serde(default)]
  total_size: u64,
}

impl From<EngineReport> for BuildOutcome {
  fn from(report: EngineReport) -> Self {
    Self {
      result: report.result,
      summary: BuildSummary {
        total_time: Duration::from_millis(report.total_time_ms),
        total_warnings: report.total_warnings,
        total_errors: report.total_errors,
        total_size: report.total_size,
      },
    }
  }
}

#[derive(Debug, Clone)]
pub struct CommandEngine {
  program: PathBuf,
  args: Vec<String>,
}

impl CommandEngine {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  /// Arguments placed before `--request`, e.g. `-batchmode -quit`.
  pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  fn write_request(&self, path: &Path, spec: &BuildTargetSpec, settings: &PlayerSettings) -> Result<(), EngineError> {
    let request = serde_json::to_vec_pretty(&EngineRequest { build: spec, settings }).map_err(EngineError::Encode)?;
    fs::write(path, request).map_err(EngineError::Request)
  }
}

impl BuildEngine for CommandEngine {
  fn build(&mut self, spec: &BuildTargetSpec, settings: &PlayerSettings) -> Result<BuildOutcome, EngineError> {
    let scratch = tempfile::tempdir().map_err(EngineError::Request)?;
    let request_path = scratch.path().join(REQUEST_FILENAME);
    let report_path = scratch.path().join(REPORT_FILENAME);

    self.write_request(&request_path, spec, settings)?;

    info!(
      program = %self.program.display(),
      location = %spec.location.display(),
      subtarget = %spec.subtarget,
      "invoking build engine"
    );

    let status = Command::new(&self.program)
      .args(&self.args)
      .arg("--request")
      .arg(&request_path)
      .arg("--report")
      .arg(&report_path)
      .status()
      .map_err(|source| EngineError::Spawn {
        program: self.program.clone(),
        source,
      })?;

    if !status.success() {
      warn!(code = ?status.code(), "build engine exited unsuccessfully");
    }

    let report = fs::read(&report_path).map_err(|source| EngineError::MissingReport {
      path: report_path.clone(),
      code: status.code(),
      source,
    })?;
    let report: EngineReport = serde_json::from_slice(&report).map_err(|source| EngineError::Decode {
      path: report_path.clone(),
      source,
    })?;

    debug!(result = %report.result, "build report received");
    Ok(report.into())
  }
}
