//! Platform targets and standalone subtargets understood by the build engine.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Platform target, named exactly as the engine names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
  StandaloneOsx,
  StandaloneWindows,
  Ios,
  Android,
  StandaloneWindows64,
  WebGl,
  WsaPlayer,
  StandaloneLinux64,
  Ps4,
  XboxOne,
  TvOs,
  Switch,
  LinuxHeadlessSimulation,
  GameCoreXboxSeries,
  GameCoreXboxOne,
  Ps5,
  EmbeddedLinux,
  Qnx,
  VisionOs,
  Lumin,
  Stadia,
  NoTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a defined BuildTarget")]
pub struct UnknownBuildTarget(pub String);

impl BuildTarget {
  pub const ALL: [BuildTarget; 22] = [
    Self::StandaloneOsx,
    Self::StandaloneWindows,
    Self::Ios,
    Self::Android,
    Self::StandaloneWindows64,
    Self::WebGl,
    Self::WsaPlayer,
    Self::StandaloneLinux64,
    Self::Ps4,
    Self::XboxOne,
    Self::TvOs,
    Self::Switch,
    Self::LinuxHeadlessSimulation,
    Self::GameCoreXboxSeries,
    Self::GameCoreXboxOne,
    Self::Ps5,
    Self::EmbeddedLinux,
    Self::Qnx,
    Self::VisionOs,
    Self::Lumin,
    Self::Stadia,
    Self::NoTarget,
  ];

  /// Obsolete names the engine still accepts, and the target each now means.
  pub const ALIASES: [(&'static str, BuildTarget); 5] = [
    ("iPhone", Self::Ios),
    ("StandaloneOSXUniversal", Self::StandaloneOsx),
    ("StandaloneOSXIntel", Self::StandaloneOsx),
    ("StandaloneOSXIntel64", Self::StandaloneOsx),
    ("CloudRendering", Self::LinuxHeadlessSimulation),
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::StandaloneOsx => "StandaloneOSX",
      Self::StandaloneWindows => "StandaloneWindows",
      Self::Ios => "iOS",
      Self::Android => "Android",
      Self::StandaloneWindows64 => "StandaloneWindows64",
      Self::WebGl => "WebGL",
      Self::WsaPlayer => "WSAPlayer",
      Self::StandaloneLinux64 => "StandaloneLinux64",
      Self::Ps4 => "PS4",
      Self::XboxOne => "XboxOne",
      Self::TvOs => "tvOS",
      Self::Switch => "Switch",
      Self::LinuxHeadlessSimulation => "LinuxHeadlessSimulation",
      Self::GameCoreXboxSeries => "GameCoreXboxSeries",
      Self::GameCoreXboxOne => "GameCoreXboxOne",
      Self::Ps5 => "PS5",
      Self::EmbeddedLinux => "EmbeddedLinux",
      Self::Qnx => "QNX",
      Self::VisionOs => "VisionOS",
      Self::Lumin => "Lumin",
      Self::Stadia => "Stadia",
      Self::NoTarget => "NoTarget",
    }
  }
}

impl FromStr for BuildTarget {
  type Err = UnknownBuildTarget;

  /// Case-sensitive, like the engine's own lookup. Obsolete names resolve to
  /// their current target.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|target| target.as_str() == s)
      .or_else(|| Self::ALIASES.into_iter().find(|(alias, _)| *alias == s).map(|(_, target)| target))
      .ok_or_else(|| UnknownBuildTarget(s.to_string()))
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Serialize for BuildTarget {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// Variant of a standalone player build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum StandaloneBuildSubtarget {
  #[default]
  Default,
  Server,
  Player,
}

impl StandaloneBuildSubtarget {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Default => "Default",
      Self::Server => "Server",
      Self::Player => "Player",
    }
  }

  /// Parse a name or numeric discriminant (`Server` or `1`).
  pub fn parse(value: &str) -> Option<Self> {
    match value.trim() {
      "Default" | "0" => Some(Self::Default),
      "Server" | "1" => Some(Self::Server),
      "Player" | "2" => Some(Self::Player),
      _ => None,
    }
  }

  /// The requested subtarget, or [`Default`](Self::Default) when absent or unrecognized.
  pub fn resolve(value: Option<&str>) -> Self {
    value.and_then(Self::parse).unwrap_or_default()
  }
}

impl fmt::Display for StandaloneBuildSubtarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
