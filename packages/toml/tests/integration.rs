use std::fs;
use std::io::Write;

use dotconf_toml::{Error, Kind, TomlConfig};

const BASE: &str = r#"
[server]
port = 8080
host = "x"

[server.tls]
enabled = false
"#;

const OVERRIDE: &str = r#"
[server]
port = 9090

[server.tls]
enabled = true
"#;

#[test]
fn layered_loads_scalars_win_tables_merge() {
    let mut config = TomlConfig::from_reader(BASE.as_bytes()).unwrap();
    config.load_reader(OVERRIDE.as_bytes(), "").unwrap();

    assert_eq!(*config.get::<i64>("server.port").unwrap(), 9090);
    assert_eq!(*config.get::<String>("server.host").unwrap(), "x");
    assert!(*config.get::<bool>("server.tls.enabled").unwrap());
}

#[test]
fn layered_load_kind_conflict_aborts_cleanly() {
    let mut config = TomlConfig::from_reader(BASE.as_bytes()).unwrap();

    let err = config
        .load_reader("[server]\nport = \"not a number\"".as_bytes(), "")
        .unwrap_err();
    match err {
        Error::TypeMismatch {
            key,
            expected,
            found,
        } => {
            assert_eq!(key.to_string(), "server.port");
            assert_eq!(expected, Kind::Integer);
            assert_eq!(found, Kind::String);
        }
        other => panic!("unexpected error: {other}"),
    }

    // The failed load must not have touched the store.
    assert_eq!(*config.get::<i64>("server.port").unwrap(), 8080);
}

#[test]
fn load_from_files_with_nested_root() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("base.toml");
    let override_path = dir.path().join("override.toml");
    fs::File::create(&base_path)
        .unwrap()
        .write_all(BASE.as_bytes())
        .unwrap();
    fs::File::create(&override_path)
        .unwrap()
        .write_all(b"port = 7070\n")
        .unwrap();

    let mut config = TomlConfig::from_file(&base_path).unwrap();
    config.load_file(&override_path, "server").unwrap();

    assert_eq!(*config.get::<i64>("server.port").unwrap(), 7070);
    assert_eq!(*config.get::<String>("server.host").unwrap(), "x");
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TomlConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_file_surfaces_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[unclosed\n").unwrap();

    let err = TomlConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn loading_at_value_root_is_a_mismatch() {
    let mut config = TomlConfig::new();
    *config.get_mut::<String>("profile").unwrap() = "dev".to_string();

    let err = config
        .load_reader("debug = true".as_bytes(), "profile")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            found: Kind::String,
            ..
        }
    ));
}

#[test]
fn reads_and_probes_after_load() {
    let config = TomlConfig::from_reader(BASE.as_bytes()).unwrap();

    assert!(config.has_key("server"));
    assert!(config.has_key("server.tls.enabled"));
    assert!(!config.has_key("server.tls.cert"));
    assert!(!config.has_key("server..tls"));

    // Tables are not readable as scalars, and kinds never coerce.
    assert!(matches!(
        config.get::<i64>("server.tls"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        config.get::<String>("server.tls.enabled"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        config.get::<i64>("server.workers"),
        Err(Error::KeyNotFound { .. })
    ));
}
