//! Build sequence integration tests.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

#[test]
#[serial]
fn both_builds_succeed() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Found flag \"buildTarget\" with value \"StandaloneLinux64\"."))
    .stdout(predicate::str::contains("engine: building server"))
    .stdout(predicate::str::contains("engine: building client"))
    .stdout(predicate::str::contains("Size: 2048 bytes"))
    .stdout(predicate::str::ends_with("Build succeeded!\n"));

  assert_eq!(env.engine_calls(), vec!["server", "client"]);

  let requests = env.engine_requests();
  let out_dir = env.build_path().parent().unwrap().to_path_buf();
  assert!(requests.contains(&out_dir.join("Server").join("Game.x86_64").display().to_string()));
  assert!(requests.contains(&out_dir.join("Client").join("Game.x86_64").display().to_string()));
  assert!(requests.contains("Assets/Scenes/Arena.unity"));
  assert!(!requests.contains("Assets/Scenes/Sandbox.unity"));
}

#[test]
#[serial]
fn failed_server_stops_before_client() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .env("FAKE_SERVER_RESULT", "Failed")
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(101)
    .stdout(predicate::str::contains("Build results"))
    .stdout(predicate::str::contains("Build failed!"))
    .stdout(predicate::str::contains("engine: building client").not());

  assert_eq!(env.engine_calls(), vec!["server"]);
}

#[test]
#[serial]
fn cancelled_client() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .env("FAKE_CLIENT_RESULT", "Cancelled")
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(102)
    .stdout(predicate::str::contains("Build cancelled!"));

  assert_eq!(env.engine_calls(), vec!["server", "client"]);
}

#[test]
#[serial]
fn unrecognized_result_is_unknown() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .env("FAKE_SERVER_RESULT", "Exploded")
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(103)
    .stdout(predicate::str::contains("Build result is unknown!"));
}

#[test]
#[serial]
fn headless_server_flag_requests_server_subtarget() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--headless-server")
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(0);

  assert!(env.engine_requests().contains("\"subtarget\": \"Server\""));
}

#[test]
#[serial]
fn secrets_never_reach_output() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--")
    .args(env.complete_flags())
    .args(["-androidKeystorePass", "hunter2", "-androidKeyaliasPass", "s3cret"])
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Found flag \"androidKeystorePass\" with value *HIDDEN*."))
    .stdout(predicate::str::contains("hunter2").not())
    .stdout(predicate::str::contains("s3cret").not());

  assert!(!env.engine_requests().contains("hunter2"));
}

#[test]
#[serial]
fn verbose_logs_redact_secrets() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--verbose")
    .arg("--")
    .args(env.complete_flags())
    .args(["-androidKeystorePass", "hunter2", "-androidKeyaliasPass", "s3cret"])
    .assert()
    .code(0)
    .stdout(predicate::str::contains("found flag"))
    .stdout(predicate::str::contains("hunter2").not())
    .stdout(predicate::str::contains("s3cret").not())
    .stderr(predicate::str::contains("hunter2").not());
}

#[test]
#[serial]
fn missing_engine_exits_160() {
  let env = TestEnv::new();

  let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cibuild");
  cmd
    .arg("build")
    .arg("--engine")
    .arg(env.project_path().join("no-such-engine"))
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(160)
    .stdout(predicate::str::contains("failed to start build engine"));
}

#[test]
#[serial]
fn missing_scene_configuration_exits_150() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--scenes")
    .arg(env.project_path().join("missing.asset"))
    .arg("--")
    .args(env.complete_flags())
    .assert()
    .code(150);

  assert!(env.engine_calls().is_empty());
}
