//! Scene list stored in the editor's `EditorBuildSettings.asset`.
//!
//! The asset is YAML preceded by `%YAML`/`%TAG` directives and a tagged
//! document marker (`--- !u!1045 &1`), which are skipped before parsing:
//!
//! ```yaml
//! EditorBuildSettings:
//!   m_Scenes:
//!   - enabled: 1
//!     path: Assets/Scenes/Main.unity
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{SceneEntry, SceneError, SceneSource};
use crate::consts::EDITOR_BUILD_SETTINGS;

/// Reads the scene list from a project's build settings asset.
#[derive(Debug, Clone, Default)]
pub struct EditorBuildSettings {
  path: Option<PathBuf>,
}

#[derive(Deserialize)]
struct Asset {
  #[serde(rename = "EditorBuildSettings")]
  settings: Body,
}

#[derive(Deserialize)]
struct Body {
  #[serde(rename = "m_Scenes", default)]
  scenes: Vec<RawScene>,
}

#[derive(Deserialize)]
struct RawScene {
  enabled: Toggle,
  path: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Toggle {
  Int(u8),
  Bool(bool),
}

impl Toggle {
  fn is_on(&self) -> bool {
    match self {
      Toggle::Int(n) => *n != 0,
      Toggle::Bool(b) => *b,
    }
  }
}

impl EditorBuildSettings {
  /// Read from `path` when given, otherwise from the project's own asset.
  pub fn new(path: Option<PathBuf>) -> Self {
    Self { path }
  }

  pub fn location(&self, project_path: &Path) -> PathBuf {
    match &self.path {
      Some(path) => path.clone(),
      None => project_path.join(EDITOR_BUILD_SETTINGS),
    }
  }

  pub fn parse(content: &str) -> Result<Vec<SceneEntry>, serde_yaml::Error> {
    let asset: Asset = serde_yaml::from_str(&document_body(content))?;
    Ok(
      asset
        .settings
        .scenes
        .into_iter()
        .map(|raw| SceneEntry::new(raw.path, raw.enabled.is_on()))
        .collect(),
    )
  }
}

/// Strip YAML directives and the document start marker.
fn document_body(content: &str) -> String {
  let lines: Vec<&str> = content.lines().collect();
  let start = lines.iter().position(|line| line.starts_with("---")).map_or(0, |i| i + 1);

  lines[start..]
    .iter()
    .filter(|line| !line.starts_with('%'))
    .copied()
    .collect::<Vec<_>>()
    .join("\n")
}

impl SceneSource for EditorBuildSettings {
  fn scenes(&self, project_path: &Path) -> Result<Vec<SceneEntry>, SceneError> {
    let path = self.location(project_path);
    debug!(path = %path.display(), "reading scene configuration");

    let content = fs::read_to_string(&path).map_err(|source| SceneError::Read {
      path: path.clone(),
      source,
    })?;

    Self::parse(&content).map_err(|source| SceneError::Parse { path, source })
  }
}
