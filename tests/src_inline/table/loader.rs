use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::catalog::builtin_traits;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("traitscore_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn test_load_valid_table() {
    let dir = make_temp_dir();
    let path = dir.join("scoring_system.json");
    write_file(
        &path,
        r#"{
            "question1": {
                "a": { "Logical Thinking": 4, "Teamwork": 2 },
                "b": { "Empathy": 3 }
            },
            "question2": {
                "a": { "Leadership": 5 }
            }
        }"#,
    );

    let table = load_scoring_table(&path, &builtin_traits()).unwrap();
    assert_eq!(table.n_questions(), 2);
    assert_eq!(table.n_choices(), 3);
    assert!(table.question("question1").is_some());
    assert!(table.question("question9").is_none());
}

#[test]
fn test_load_missing_file() {
    let dir = make_temp_dir();
    let err = load_scoring_table(&dir.join("absent.json"), &builtin_traits()).unwrap_err();
    match err {
        ConfigError::Missing(path) => assert!(path.ends_with("absent.json")),
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
fn test_load_malformed_json() {
    let dir = make_temp_dir();
    let path = dir.join("scoring_system.json");
    write_file(&path, "{ not json ");

    let err = load_scoring_table(&path, &builtin_traits()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_load_rejects_non_integer_weights() {
    let dir = make_temp_dir();
    let path = dir.join("scoring_system.json");
    write_file(&path, r#"{ "q1": { "a": { "Empathy": "high" } } }"#);

    let err = load_scoring_table(&path, &builtin_traits()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_validation_collects_every_undefined_trait() {
    let table: ScoringTable = serde_json::from_value(serde_json::json!({
        "q1": { "a": { "Zz Unknown": 1, "Empathy": 2 } },
        "q2": { "b": { "Aa Unknown": 3 }, "c": { "Zz Unknown": 4 } }
    }))
    .unwrap();

    let err = validate_traits(&table, &builtin_traits()).unwrap_err();
    match err {
        ConfigError::UndefinedTraits(names) => {
            assert_eq!(
                names,
                vec!["Aa Unknown".to_string(), "Zz Unknown".to_string()]
            );
        }
        other => panic!("expected UndefinedTraits, got {other:?}"),
    }
}

#[test]
fn test_validation_accepts_catalog_only_table() {
    let table: ScoringTable = serde_json::from_value(serde_json::json!({
        "q1": { "a": { "Empathy": 2, "Teamwork": 1 } }
    }))
    .unwrap();
    assert!(validate_traits(&table, &builtin_traits()).is_ok());
}
