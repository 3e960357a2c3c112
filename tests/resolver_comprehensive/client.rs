//! The `Client` facade over a snapshot store.

use std::io::Write;

use psclient::{Client, Error};
use tempfile::NamedTempFile;

fn snapshot() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "parameters": [
                {{ "name": "/app/prod/DB_HOST", "values": ["db1", "db2"] }},
                {{ "name": "/app/prod/DB_PASS", "type": "SecureString", "values": ["p1", "p2"] }},
                {{ "name": "/app/dev/DB_HOST", "values": ["dev"] }}
            ]
        }}"#
    )
    .unwrap();
    file
}

#[test]
fn snapshot_client_resolves_keys_and_paths() {
    let file = snapshot();
    let client = Client::builder().snapshot(file.path()).build().unwrap();

    let host = client.get("/app/prod/DB_HOST", Some("1")).unwrap();
    assert_eq!(host.value, "db1");

    let prod = client.get_path("/app/prod/", true, None).unwrap();
    assert_eq!(prod.names(), vec!["/app/prod/DB_HOST", "/app/prod/DB_PASS"]);
    assert_eq!(prod.get("/app/prod/DB_PASS").unwrap().kind, "SecureString");

    let all = client.get_path("/app/", true, Some("1")).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn resolved_set_serializes_as_a_list_of_parameters() {
    let file = snapshot();
    let client = Client::builder().snapshot(file.path()).build().unwrap();

    let prod = client.get_path("/app/prod/", true, Some("1")).unwrap();
    let value = serde_json::to_value(&prod).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "name": "/app/prod/DB_HOST", "type": "String", "value": "db1", "version": 1 },
            { "name": "/app/prod/DB_PASS", "type": "SecureString", "value": "p1", "version": 1 }
        ])
    );
}

#[test]
fn snapshot_client_reports_typed_errors() {
    let file = snapshot();
    let client = Client::builder().snapshot(file.path()).build().unwrap();

    let err = client.get_path("/app/", true, Some("2")).unwrap_err();
    assert!(err.is_version_not_found());
    assert!(err.to_string().contains("/app/dev/DB_HOST"));

    let err = client.get("/app/prod/DB_HOST", Some("two")).unwrap_err();
    assert!(err.is_usage_error());
}

#[test]
fn missing_snapshot_file_is_a_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Client::builder()
        .snapshot(dir.path().join("absent.json"))
        .build()
        .err()
        .unwrap();

    assert!(matches!(err, Error::Store(_)));
}
