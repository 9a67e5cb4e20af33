//! End-to-end `check-updates` runs against a local mock upstream

mod common;

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use starter_test::fixtures::{
    commit_document, packagist_document, sources_json, COMMIT_SHA, OLD_COMMIT_SHA,
};
use starter_test::TestEnvironment;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;

const COMMIT_PATH: &str = "/repos/mortenebak/tallstarter/commits/main";
const PACKAGE_PATH: &str = "/packages/laravel/framework.json";

async fn mount_upstreams(server: &MockServer, versions: &[&str]) {
    Mock::given(method("GET"))
        .and(path(COMMIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(commit_document(COMMIT_SHA)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(PACKAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(packagist_document(versions)))
        .mount(server)
        .await;
}

#[test]
fn test_missing_sources_exits_before_network() {
    let env = TestEnvironment::new().unwrap();
    // Port 1 would refuse; the command must not get that far
    write_server_settings(&env, "http://127.0.0.1:1").unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.arg("check-updates");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"))
        .stdout(predicate::str::contains("TALL Starter").not());
}

#[test]
fn test_malformed_sources_is_configuration_error() {
    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, "http://127.0.0.1:1").unwrap();
    env.write_sources("{ not json").unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.args(["check-updates", "--json"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse upstream sources"));
}

#[test]
fn test_empty_php_encodings_still_run_the_check() {
    let env = TestEnvironment::new().unwrap();
    // Nothing listens on port 1, so both lookups fail fast
    write_server_settings(&env, "http://127.0.0.1:1").unwrap();
    env.write_sources(r#"{ "sources": { "tall_starter": null, "laravel_official_livewire": [] } }"#)
        .unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.args(["check-updates", "--json"]);
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tall_starter"]["current"], "unknown");
    assert_eq!(report["laravel_official"]["current"], "unknown");
    assert_eq!(report["tall_starter"]["has_update"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_reports_both_sources() {
    let server = MockServer::start().await;
    mount_upstreams(&server, &["11.0.0", "11.2.0", "v11.10.1", "12.x-dev", "11.3.0-beta1"]).await;

    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, &server.uri()).unwrap();
    env.write_sources(&sources_json(OLD_COMMIT_SHA, "11.2.0")).unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.args(["check-updates", "--json"]);
    let output = blocking(move || cmd.output().unwrap()).await;

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        report["tall_starter"],
        json!({
            "has_update": true,
            "current": OLD_COMMIT_SHA,
            "latest": COMMIT_SHA,
            "repository": "https://github.com/mortenebak/tallstarter",
            "error": null
        })
    );
    assert_eq!(report["laravel_official"]["latest"], "v11.10.1");
    assert_eq!(report["laravel_official"]["has_update"], true);
    assert_eq!(report["laravel_official"]["error"], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_table_output_truncates_commits() {
    let server = MockServer::start().await;
    mount_upstreams(&server, &["11.0.0", "10.48.2"]).await;

    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, &server.uri()).unwrap();
    env.write_sources(&sources_json(OLD_COMMIT_SHA, "11.0.0")).unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.arg("check-updates");
    let output = blocking(move || cmd.output().unwrap()).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains(&OLD_COMMIT_SHA[..8]))
        .stdout(predicate::str::contains(&COMMIT_SHA[..8]))
        .stdout(predicate::str::contains(COMMIT_SHA).not())
        .stdout(predicate::str::contains("Update Available"))
        .stdout(predicate::str::contains("Up to Date"))
        .stdout(predicate::str::contains("./bin/merge-starters.sh"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_main_sentinel_and_current_release_are_up_to_date() {
    let server = MockServer::start().await;
    mount_upstreams(&server, &["11.0.0", "11.1.0"]).await;

    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, &server.uri()).unwrap();
    env.write_sources(&sources_json("main", "v11.1.0")).unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.arg("check-updates");
    let output = blocking(move || cmd.output().unwrap()).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("All sources are up to date!"))
        .stdout(predicate::str::contains("Update Available").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_one_failing_source_still_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMMIT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PACKAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(packagist_document(&["11.5.0"])))
        .mount(&server)
        .await;

    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, &server.uri()).unwrap();
    env.write_sources(&sources_json(OLD_COMMIT_SHA, "11.0.0")).unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.args(["check-updates", "--json"]);
    let output = blocking(move || cmd.output().unwrap()).await;

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    let tall = &report["tall_starter"];
    assert_eq!(tall["has_update"], false);
    assert_eq!(tall["latest"], Value::Null);
    assert_eq!(tall["current"], OLD_COMMIT_SHA);
    assert!(tall["error"]
        .as_str()
        .unwrap()
        .contains("Failed to fetch latest commit"));

    assert_eq!(report["laravel_official"]["latest"], "11.5.0");
    assert_eq!(report["laravel_official"]["has_update"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sources_flag_overrides_default_location() {
    let server = MockServer::start().await;
    mount_upstreams(&server, &["11.0.0"]).await;

    let env = TestEnvironment::new().unwrap();
    write_server_settings(&env, &server.uri()).unwrap();
    let custom = env.root().join("elsewhere.json");
    std::fs::write(&custom, sources_json(COMMIT_SHA, "11.0.0")).unwrap();

    let mut cmd = starter_cmd_in(&env);
    cmd.args(["check-updates", "--json", "--sources"]).arg(&custom);
    let output = blocking(move || cmd.output().unwrap()).await;

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tall_starter"]["has_update"], false);
    assert_eq!(report["laravel_official"]["has_update"], false);
}
