use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::Path;

mod common;
use common::{ehost_at, expect_json, login_as, mock_json, setup_session};

#[test]
fn test_login_blank_email_makes_no_request() {
    let mut server = mockito::Server::new();
    let session = setup_session("login_blank");

    let login = expect_json(&mut server, "POST", "/api/users/login", json!({"id": 1}), 0);

    ehost_at(&server, &session)
        .args(["login", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter your email address"));

    login.assert();
    assert!(!Path::new(&session).exists());
}

#[test]
fn test_login_stores_response_verbatim_and_opens_dashboard() {
    let mut server = mockito::Server::new();
    let session = setup_session("login_ok");

    let body = r#"{"id":1,"email":"a@b.com","name":null,"createdAt":"2025-05-01T08:00:00"}"#;
    let login = server
        .mock("POST", "/api/users/login")
        .match_body(mockito::Matcher::Json(json!({"email": "a@b.com"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create();
    let hosted = expect_json(&mut server, "GET", "/api/events/hosted/1", json!([]), 1);
    let attending = expect_json(&mut server, "GET", "/api/events/attending/1", json!([]), 1);

    ehost_at(&server, &session)
        .args(["login", "  a@b.com "])
        .assert()
        .success()
        .stdout(contains("Logged in as a@b.com"))
        .stdout(contains("You haven't created any events yet."))
        .stdout(contains("You haven't registered for any events yet."));

    login.assert();
    hosted.assert();
    attending.assert();

    let stored = fs::read_to_string(&session).expect("session file written");
    assert_eq!(stored, body);
}

#[test]
fn test_login_failure_shows_server_error_and_stays() {
    let mut server = mockito::Server::new();
    let session = setup_session("login_rejected");

    let _login = mock_json(
        &mut server,
        "POST",
        "/api/users/login",
        400,
        json!({"error": "Email is required"}),
    );
    let hosted = expect_json(&mut server, "GET", "/api/events/hosted/1", json!([]), 0);

    ehost_at(&server, &session)
        .args(["login", "a@b.com"])
        .assert()
        .failure()
        .stderr(contains("Email is required"))
        .stdout(contains("Logged in").not());

    hosted.assert();
    assert!(!Path::new(&session).exists());
}

#[test]
fn test_login_failure_without_message_uses_fallback() {
    let mut server = mockito::Server::new();
    let session = setup_session("login_fallback");

    let _login = server
        .mock("POST", "/api/users/login")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create();

    ehost_at(&server, &session)
        .args(["login", "a@b.com"])
        .assert()
        .failure()
        .stderr(contains("Login failed"));

    assert!(!Path::new(&session).exists());
}

#[test]
fn test_login_failure_keeps_previous_session() {
    let mut server = mockito::Server::new();
    let session = setup_session("login_keeps_previous");
    login_as(&session, 3, "old@b.com");

    let _login = mock_json(
        &mut server,
        "POST",
        "/api/users/login",
        400,
        json!({"error": "Login failed: database unavailable"}),
    );

    ehost_at(&server, &session)
        .args(["login", "new@b.com"])
        .assert()
        .failure()
        .stderr(contains("Login failed: database unavailable"));

    let stored = fs::read_to_string(&session).expect("session still there");
    assert!(stored.contains("old@b.com"));
}

#[test]
fn test_logout_clears_session_without_backend_call() {
    let mut server = mockito::Server::new();
    let session = setup_session("logout");
    login_as(&session, 1, "a@b.com");

    let any = server.mock("GET", mockito::Matcher::Any).expect(0).create();

    ehost_at(&server, &session)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("Logged out (a@b.com)."));

    any.assert();
    assert!(!Path::new(&session).exists());
}

#[test]
fn test_logout_without_session_is_harmless() {
    let server = mockito::Server::new();
    let session = setup_session("logout_none");

    ehost_at(&server, &session)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("No active session."));
}
