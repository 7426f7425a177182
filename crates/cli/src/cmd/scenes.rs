//! Implementation of the `cibuild scenes` command.
//!
//! Shows which scenes a build would include, in the order they are passed to
//! the engine.

use std::path::Path;

use anyhow::{Context, Result};

use cibuild_lib::scenes::{EditorBuildSettings, SceneSource};

use crate::output::{print_disabled, print_info, print_stat, print_success};

pub fn cmd_scenes(path: &Path, verbose: bool) -> Result<()> {
  let source = EditorBuildSettings::new(Some(path.to_path_buf()));
  let scenes = source
    .scenes(Path::new(""))
    .with_context(|| format!("Failed to load scenes from {}", path.display()))?;

  let enabled = scenes.iter().filter(|scene| scene.enabled).count();
  print_success(&format!("Scene configuration: {}", path.display()));
  print_stat("Enabled", &enabled.to_string());
  print_stat("Disabled", &(scenes.len() - enabled).to_string());
  println!();

  for scene in &scenes {
    if scene.enabled {
      print_info(&scene.path);
    } else if verbose {
      print_disabled(&scene.path);
    }
  }

  Ok(())
}
