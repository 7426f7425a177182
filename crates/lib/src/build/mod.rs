//! Server and client build sequence.
//!
//! One invocation parses and validates the flags, settles the player settings,
//! collects the enabled scenes and then builds the server followed by the
//! client. The first build that does not succeed ends the invocation; the
//! client is never started after a failed server build.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::args::parse_arguments;
use crate::consts::{CLIENT_DIR, SERVER_DIR};
use crate::engine::{BuildEngine, BuildOption, BuildOptions, BuildTargetSpec};
use crate::error::CiBuildError;
use crate::options::{StandaloneBuildSubtarget, ValidatedOptions, validate_options};
use crate::report::write_summary;
use crate::scenes::{SceneSource, enabled_scenes};
use crate::settings::PlayerSettings;

/// Which of the two players is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
  Server,
  Client,
}

impl Stage {
  pub const ORDER: [Stage; 2] = [Stage::Server, Stage::Client];

  /// Directory inserted between the output directory and the file name.
  pub fn dir_name(self) -> &'static str {
    match self {
      Stage::Server => SERVER_DIR,
      Stage::Client => CLIENT_DIR,
    }
  }

  pub fn options(self) -> BuildOptions {
    let common = [
      BuildOption::ShowBuiltPlayer,
      BuildOption::Development,
      BuildOption::CleanBuildCache,
    ];
    match self {
      Stage::Server => common.into_iter().chain([BuildOption::AutoRunPlayer]).collect(),
      Stage::Client => common.into_iter().collect(),
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.dir_name().to_lowercase())
  }
}

/// `<dir>/<Stage>/<file>` for a requested output path `<dir>/<file>`.
pub fn stage_location(custom_build_path: &Path, stage: Stage) -> PathBuf {
  let dir = custom_build_path.parent().unwrap_or_else(|| Path::new(""));
  let file_name = custom_build_path.file_name().unwrap_or_default();
  dir.join(stage.dir_name()).join(file_name)
}

/// Knobs that change how the two builds are requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildPlan {
  /// Build the server with the `Server` (headless) subtarget. Off by default:
  /// the server currently ships as a regular player.
  pub headless_server: bool,
}

impl BuildPlan {
  /// Subtarget requested for `stage`. The `standaloneBuildSubtarget` override
  /// only travels in [`PlayerSettings`]; it never changes what is built.
  pub fn subtarget(&self, stage: Stage) -> StandaloneBuildSubtarget {
    match stage {
      Stage::Server if self.headless_server => StandaloneBuildSubtarget::Server,
      Stage::Server => StandaloneBuildSubtarget::Default,
      Stage::Client => StandaloneBuildSubtarget::Player,
    }
  }

  pub fn target_spec(&self, stage: Stage, options: &ValidatedOptions, scenes: &[String]) -> BuildTargetSpec {
    BuildTargetSpec {
      location: stage_location(options.custom_build_path(), stage),
      scenes: scenes.to_vec(),
      target: options.build_target(),
      subtarget: self.subtarget(stage),
      options: stage.options(),
    }
  }

  /// Run a whole invocation against `engine`.
  ///
  /// Diagnostics go to `out`. Returns `Ok` only when both builds succeeded; the
  /// error carries the exit code for every other ending. Nothing is built unless
  /// validation passes.
  pub fn execute<I, S, W>(
    &self,
    args: I,
    scenes: &dyn SceneSource,
    engine: &mut dyn BuildEngine,
    out: &mut W,
  ) -> Result<(), CiBuildError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
  {
    let parsed = parse_arguments(args, out)?;
    let options = validate_options(parsed, out)?;

    let settings = PlayerSettings::from_options(options.options())?;
    info!(
      version = %settings.bundle_version,
      version_code = settings.android_version_code,
      subtarget = %settings.standalone_subtarget,
      "player settings"
    );

    let scenes = enabled_scenes(scenes, options.project_path())?;
    if scenes.is_empty() {
      warn!("no enabled scenes configured");
    }

    for stage in Stage::ORDER {
      let spec = self.target_spec(stage, &options, &scenes);
      info!(%stage, location = %spec.location.display(), "starting build");

      // The engine shares our stdout.
      out.flush()?;
      let outcome = engine.build(&spec, &settings)?;

      write_summary(out, &outcome.summary)?;
      info!(%stage, result = %outcome.result, "build finished");

      if !outcome.result.is_success() {
        return Err(CiBuildError::Build {
          stage,
          result: outcome.result,
        });
      }
    }

    Ok(())
  }
}
