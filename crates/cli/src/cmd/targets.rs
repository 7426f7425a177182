use anyhow::Result;

use cibuild_lib::options::BuildTarget;

pub fn cmd_targets() -> Result<()> {
  println!("Build targets:");
  for target in BuildTarget::ALL {
    println!("  {}", target);
  }
  Ok(())
}
