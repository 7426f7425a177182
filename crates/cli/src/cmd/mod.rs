mod build;
mod scenes;
mod targets;

pub use build::{BuildArgs, cmd_build};
pub use scenes::cmd_scenes;
pub use targets::cmd_targets;
