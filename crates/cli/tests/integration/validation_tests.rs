//! Flag validation integration tests.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

/// Complete flags with `flag` and its value removed.
fn without(env: &TestEnv, flag: &str) -> Vec<String> {
  let flags = env.complete_flags();
  let mut kept = Vec::new();
  let mut iter = flags.into_iter();
  while let Some(token) = iter.next() {
    if token == flag {
      iter.next();
    } else {
      kept.push(token);
    }
  }
  kept
}

#[test]
#[serial]
fn missing_project_path_exits_110() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--")
    .args(["-buildTarget", "StandaloneWindows64", "-customBuildPath", "/out/Game.exe"])
    .assert()
    .code(110)
    .stdout(predicate::str::contains("Missing argument -projectPath"));

  assert!(env.engine_calls().is_empty());
}

#[test]
#[serial]
fn missing_build_target_exits_120() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--")
    .args(without(&env, "-buildTarget"))
    .assert()
    .code(120)
    .stdout(predicate::str::contains("Missing argument -buildTarget"));
}

#[test]
#[serial]
fn undefined_build_target_exits_121() {
  let env = TestEnv::new();
  let mut flags = env.complete_flags();
  flags.extend(["-buildTarget".to_string(), "Amiga500".to_string()]);

  env
    .build_cmd()
    .arg("--")
    .args(flags)
    .assert()
    .code(121)
    .stdout(predicate::str::contains("Amiga500 is not a defined BuildTarget"));
}

#[test]
#[serial]
fn missing_custom_build_path_exits_130() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--")
    .args(without(&env, "-customBuildPath"))
    .assert()
    .code(130);
}

#[test]
#[serial]
fn empty_build_name_defaults() {
  let env = TestEnv::new();
  let mut flags = without(&env, "-customBuildName");
  flags.push("-customBuildName".to_string());

  env
    .build_cmd()
    .arg("--")
    .args(flags)
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Invalid argument -customBuildName, defaulting to TestBuild."));
}

#[test]
#[serial]
fn malformed_version_code_exits_141() {
  let env = TestEnv::new();
  let mut flags = env.complete_flags();
  flags.extend(["-androidVersionCode".to_string(), "twelve".to_string()]);

  env
    .build_cmd()
    .arg("--")
    .args(flags)
    .assert()
    .code(141);

  assert!(env.engine_calls().is_empty());
}
