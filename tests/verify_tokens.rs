use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

use project_tools::tokens::{check_token, TokenCheck};

#[tokio::test]
#[serial]
async fn check_token_reports_a_missing_environment_variable_without_any_network_call() {
    std::env::remove_var("TUSHARE_TOKEN");
    let client = reqwest::Client::new();

    match check_token(&client, "TUSHARE_TOKEN").await {
        TokenCheck::Invalid { env_key, message } => {
            assert_eq!(env_key, "TUSHARE_TOKEN");
            assert!(message.contains("TUSHARE_TOKEN is not set"));
        }
        TokenCheck::Valid { .. } => panic!("missing variable must not verify"),
    }
}

#[tokio::test]
#[serial]
async fn check_token_treats_an_empty_variable_as_missing() {
    std::env::set_var("TUSHARE_TOKEN_2", "");
    let client = reqwest::Client::new();

    match check_token(&client, "TUSHARE_TOKEN_2").await {
        TokenCheck::Invalid { message, .. } => {
            assert!(message.contains("is not set"));
        }
        TokenCheck::Valid { .. } => panic!("empty variable must not verify"),
    }
    std::env::remove_var("TUSHARE_TOKEN_2");
}

#[test]
#[serial]
fn verify_tokens_cli_fails_clearly_when_no_token_variable_is_set() {
    // Run from an empty directory so no stray .env file is picked up.
    let tmp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("verify-tokens").expect("Binary exists");
    cmd.current_dir(tmp.path())
        .env_remove("TUSHARE_TOKEN")
        .env_remove("TUSHARE_TOKEN_2");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Environment variable: TUSHARE_TOKEN"))
        .stdout(predicate::str::contains("Environment variable: TUSHARE_TOKEN_2"))
        .stdout(predicate::str::contains("Check failed:"))
        .stderr(predicate::str::contains("No valid TuShare token detected."));
}
