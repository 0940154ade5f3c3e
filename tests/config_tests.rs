use eventhost::config::Config;
use eventhost::render::OutputFormat;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

mod common;
use common::ehost;

fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("eventhost_cfg_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn test_missing_or_empty_config_uses_defaults() {
    let dir = temp_dir("defaults");
    let path = dir.join("eventhost.conf");

    assert_eq!(Config::load_from(&path).expect("missing"), Config::default());

    fs::write(&path, "  \n").expect("write");
    let cfg = Config::load_from(&path).expect("empty");
    assert_eq!(cfg.api_base_url, "http://localhost:8080/api");
    assert_eq!(cfg.banner_ttl(), Duration::from_secs(5));
    assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(cfg.output, OutputFormat::Text);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let dir = temp_dir("partial");
    let path = dir.join("eventhost.conf");
    fs::write(
        &path,
        "api_base_url: https://events.example.com/api\noutput: html\nsession_file: /tmp/s.json\n",
    )
    .expect("write");

    let cfg = Config::load_from(&path).expect("partial");
    assert_eq!(cfg.api_base_url, "https://events.example.com/api");
    assert_eq!(cfg.output, OutputFormat::Html);
    assert_eq!(cfg.session_path(), PathBuf::from("/tmp/s.json"));
    assert_eq!(cfg.banner_auto_hide_secs, 5);
}

#[test]
fn test_zero_request_timeout_means_no_timeout() {
    let dir = temp_dir("zero_timeout");
    let path = dir.join("eventhost.conf");
    fs::write(&path, "request_timeout_secs: 0\n").expect("write");

    let cfg = Config::load_from(&path).expect("zero timeout");
    assert_eq!(cfg.request_timeout(), None);
}

#[test]
fn test_zero_request_timeout_still_reaches_backend() {
    let dir = temp_dir("zero_timeout_cli");
    fs::write(dir.join("eventhost.conf"), "request_timeout_secs: 0\n").expect("write");

    let mut server = mockito::Server::new();
    let session = common::setup_session("zero_timeout");
    common::login_as(&session, 1, "a@b.com");
    let hosted = server
        .mock("GET", "/api/events/hosted/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create();

    ehost()
        .env("EVENTHOST_CONFIG_DIR", &dir)
        .args(["--api-url", &common::api_url(&server), "--session", &session])
        .args(["list", "--hosted"])
        .assert()
        .success()
        .stdout(contains("You haven't created any events yet."));

    hosted.assert();
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = temp_dir("malformed");
    let path = dir.join("eventhost.conf");
    fs::write(&path, "banner_auto_hide_secs: [not, a, number]\n").expect("write");

    let err = Config::load_from(&path).expect_err("malformed");
    assert!(err.to_string().contains("eventhost.conf"));
}

#[test]
fn test_init_writes_default_config_once() {
    let dir = temp_dir("init");

    ehost()
        .env("EVENTHOST_CONFIG_DIR", &dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let cfg = Config::load_from(&dir.join("eventhost.conf")).expect("written config");
    assert_eq!(cfg, Config::default());

    ehost()
        .env("EVENTHOST_CONFIG_DIR", &dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let dir = temp_dir("init_test_mode");

    ehost()
        .env("EVENTHOST_CONFIG_DIR", &dir)
        .args(["init", "--test"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!dir.join("eventhost.conf").exists());
}

#[test]
fn test_config_print_shows_effective_settings() {
    let dir = temp_dir("print");
    fs::write(dir.join("eventhost.conf"), "banner_auto_hide_secs: 9\n").expect("write");

    ehost()
        .env("EVENTHOST_CONFIG_DIR", &dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("banner_auto_hide_secs: 9"))
        .stdout(contains("http://localhost:8080/api"));
}
