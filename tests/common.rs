#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ehost() -> Command {
    cargo_bin_cmd!("eventhost")
}

/// Unique session file path inside the system temp dir, removed if present
pub fn setup_session(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventhost_session.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Store a logged-in identity the way a successful login would
pub fn login_as(session: &str, id: i64, email: &str) {
    fs::write(session, json!({ "id": id, "email": email }).to_string()).expect("write session");
}

pub fn api_url(server: &ServerGuard) -> String {
    format!("{}/api", server.url())
}

/// The binary wired to a mock backend, a per-test session file and an
/// empty configuration directory.
pub fn ehost_at(server: &ServerGuard, session: &str) -> Command {
    let mut cfg_dir: PathBuf = env::temp_dir();
    cfg_dir.push("eventhost_tests_no_config");

    let mut cmd = ehost();
    cmd.env("EVENTHOST_CONFIG_DIR", cfg_dir)
        .env_remove("RUST_LOG")
        .args(["--api-url", &api_url(server), "--session", session]);
    cmd
}

pub fn event_json(id: i64, code: &str, title: &str) -> Value {
    json!({
        "id": id,
        "eventCode": code,
        "title": title,
        "description": "Bring snacks",
        "eventDateTime": "2025-06-01T18:30:00",
        "isOnline": false,
        "location": "Room 4",
        "createdAt": "2025-05-20T09:15:42.123456"
    })
}

pub fn mock_json(server: &mut ServerGuard, method: &str, path: &str, status: usize, body: Value) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// A mock that must receive exactly `hits` requests
pub fn expect_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    body: Value,
    hits: usize,
) -> Mock {
    server
        .mock(method, path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create()
}

/// A POST mock that only matches the exact JSON body
pub fn expect_post(server: &mut ServerGuard, path: &str, request: Value, response: Value) -> Mock {
    server
        .mock("POST", path)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(request))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .expect(1)
        .create()
}
