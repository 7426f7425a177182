//! Implementation of the `cibuild build` command.
//!
//! Parses the engine-style flags given after `--`, then builds the server and
//! client players through the configured engine executable. The process exit
//! code tells CI how the invocation ended.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing::debug;

use cibuild_lib::build::BuildPlan;
use cibuild_lib::engine::CommandEngine;
use cibuild_lib::exit::conclude;
use cibuild_lib::scenes::EditorBuildSettings;

#[derive(Args, Debug)]
pub struct BuildArgs {
  /// Build engine executable, invoked once per player
  #[arg(long, env = "CIBUILD_ENGINE", value_name = "PATH")]
  engine: PathBuf,

  /// Argument passed to the engine ahead of the request (repeatable)
  #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
  engine_args: Vec<String>,

  /// Scene configuration (default: <projectPath>/ProjectSettings/EditorBuildSettings.asset)
  #[arg(long, env = "CIBUILD_SCENES", value_name = "PATH")]
  scenes: Option<PathBuf>,

  /// Build the server with the headless Server subtarget
  #[arg(long)]
  headless_server: bool,

  /// Engine-style build flags, e.g. -projectPath . -buildTarget StandaloneWindows64
  #[arg(last = true, allow_hyphen_values = true, value_name = "FLAGS")]
  flags: Vec<String>,
}

/// Execute the build command.
///
/// All diagnostics go to stdout, which the engine process shares. Returns the
/// exit code of the invocation: 0 when both players were built.
pub fn cmd_build(args: BuildArgs) -> ExitCode {
  debug!(engine = %args.engine.display(), headless_server = args.headless_server, "build command");

  let plan = BuildPlan {
    headless_server: args.headless_server,
  };
  let scenes = EditorBuildSettings::new(args.scenes);
  let mut engine = CommandEngine::new(args.engine).with_args(args.engine_args);

  let stdout = io::stdout();
  let mut out = stdout.lock();

  let result = plan.execute(&args.flags, &scenes, &mut engine, &mut out);
  ExitCode::from(conclude(&result, &mut out))
}
