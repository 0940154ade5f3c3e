use eventhost::models::SessionIdentity;
use eventhost::session::SessionStore;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;

fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("eventhost_session_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn test_save_then_load_round_trip_through_file() {
    let dir = temp_dir("save_load");
    let store = SessionStore::new(dir.join("nested").join("session.json"));

    store
        .save_verbatim(r#"{"id":7,"email":"s@t.io","extra":true}"#)
        .expect("save");

    assert_eq!(
        store.load(),
        Some(SessionIdentity {
            id: 7,
            email: "s@t.io".into(),
            name: None,
        })
    );
    let leftovers: Vec<_> = fs::read_dir(dir.join("nested"))
        .expect("read dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("session.json")]);
}

#[cfg(unix)]
#[test]
fn test_save_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir("mode");
    let path = dir.join("session.json");
    fs::write(&path, "old").expect("seed");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

    SessionStore::new(&path)
        .save_verbatim(r#"{"id":1,"email":"a@b.com"}"#)
        .expect("save");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn test_save_replaces_symlink_instead_of_writing_through_it() {
    let dir = temp_dir("symlink");
    let target = dir.join("victim.rc");
    let path = dir.join("session.json");
    fs::write(&target, "export SAFE=1\n").expect("seed target");
    std::os::unix::fs::symlink(&target, &path).expect("symlink");

    let body = r#"{"id":1,"email":"a@b.com"}"#;
    SessionStore::new(&path).save_verbatim(body).expect("save");

    assert_eq!(fs::read_to_string(&target).expect("target"), "export SAFE=1\n");
    let meta = fs::symlink_metadata(&path).expect("session metadata");
    assert!(meta.file_type().is_file());
    assert_eq!(fs::read_to_string(&path).expect("session"), body);
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_session_path_without_runtime_dir_is_per_user() {
    let cache = temp_dir("cache_home");
    let cfg = temp_dir("cache_home_cfg");

    let expected = cache.join("eventhost").join("eventhost-session.json");

    common::ehost()
        .env_remove("XDG_RUNTIME_DIR")
        .env("XDG_CACHE_HOME", &cache)
        .env("EVENTHOST_CONFIG_DIR", &cfg)
        .args(["init", "--test"])
        .assert()
        .success()
        .stdout(predicates::str::contains(expected.to_string_lossy().to_string()));
}
