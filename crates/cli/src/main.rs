mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{BuildArgs, cmd_build, cmd_scenes, cmd_targets};

/// cibuild - server and client player builds for CI
#[derive(Parser)]
#[command(name = "cibuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the server player, then the client player
  Build(BuildArgs),

  /// List the platform targets accepted by -buildTarget
  Targets,

  /// Show the enabled scenes of a scene configuration in build order
  Scenes {
    /// Path to the EditorBuildSettings asset
    path: PathBuf,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if cli.verbose {
      EnvFilter::new("debug")
    } else {
      EnvFilter::new("error")
    }
  });
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let result = match cli.command {
    Commands::Build(args) => return cmd_build(args),
    Commands::Targets => cmd_targets(),
    Commands::Scenes { path } => cmd_scenes(&path, cli.verbose),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      output::print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
