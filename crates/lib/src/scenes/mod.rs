//! Scene configuration.
//!
//! The scene list lives with the project and is owned by the editor; this module
//! only reads it and picks the enabled entries in their configured order.

mod editor;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use editor::EditorBuildSettings;

#[derive(Debug, Error)]
pub enum SceneError {
  #[error("failed to read scene configuration {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse scene configuration {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
}

/// One scene in the configured build list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntry {
  pub path: String,
  pub enabled: bool,
}

impl SceneEntry {
  pub fn new(path: impl Into<String>, enabled: bool) -> Self {
    Self {
      path: path.into(),
      enabled,
    }
  }
}

/// Source of the configured scene list for a project.
pub trait SceneSource {
  /// All configured scenes for the project at `project_path`, in build order.
  fn scenes(&self, project_path: &Path) -> Result<Vec<SceneEntry>, SceneError>;
}

/// Paths of the enabled scenes, preserving configured order.
pub fn enabled_scenes(source: &dyn SceneSource, project_path: &Path) -> Result<Vec<String>, SceneError> {
  let scenes = source.scenes(project_path)?;
  let total = scenes.len();

  let enabled: Vec<String> = scenes
    .into_iter()
    .filter(|scene| scene.enabled)
    .map(|scene| scene.path)
    .collect();

  debug!(total, enabled = enabled.len(), "collected scenes");
  Ok(enabled)
}
