/// Leading character that marks an engine-style flag (`-buildTarget`).
pub const FLAG_MARKER: char = '-';

/// Flags whose values are replaced by [`REDACTED`] wherever they are echoed.
pub const SECRET_FLAGS: [&str; 3] = ["androidKeystorePass", "androidKeyaliasName", "androidKeyaliasPass"];

pub const REDACTED: &str = "*HIDDEN*";

pub const DEFAULT_BUILD_NAME: &str = "TestBuild";

/// Scene list location relative to the project root.
pub const EDITOR_BUILD_SETTINGS: &str = "ProjectSettings/EditorBuildSettings.asset";

pub const SERVER_DIR: &str = "Server";
pub const CLIENT_DIR: &str = "Client";

pub mod flags {
  pub const PROJECT_PATH: &str = "projectPath";
  pub const BUILD_TARGET: &str = "buildTarget";
  pub const CUSTOM_BUILD_PATH: &str = "customBuildPath";
  pub const CUSTOM_BUILD_NAME: &str = "customBuildName";
  pub const BUILD_VERSION: &str = "buildVersion";
  pub const ANDROID_VERSION_CODE: &str = "androidVersionCode";
  pub const STANDALONE_SUBTARGET: &str = "standaloneBuildSubtarget";
}

pub mod exit_codes {
  pub const SUCCESS: u8 = 0;
  pub const GENERAL: u8 = 1;
  pub const BUILD_FAILED: u8 = 101;
  pub const BUILD_CANCELLED: u8 = 102;
  pub const BUILD_UNKNOWN: u8 = 103;
  pub const MISSING_PROJECT_PATH: u8 = 110;
  pub const MISSING_BUILD_TARGET: u8 = 120;
  pub const INVALID_BUILD_TARGET: u8 = 121;
  pub const MISSING_CUSTOM_BUILD_PATH: u8 = 130;
  pub const MISSING_BUILD_VERSION: u8 = 140;
  pub const INVALID_VERSION_CODE: u8 = 141;
  pub const SCENES_UNAVAILABLE: u8 = 150;
  pub const ENGINE_UNAVAILABLE: u8 = 160;
}
