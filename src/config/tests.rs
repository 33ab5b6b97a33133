//! Tests for config module.

use super::*;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn from_json(value: serde_json::Value) -> JsonConfig {
    JsonConfig::from_json(value).unwrap()
}

fn sample_config() -> JsonConfig {
    from_json(json!({
        "logging": { "level": "warning" },
        "db": { "host": "x", "port": 5432 },
        "app": {
            "name": "platform",
            "debug": true,
            "ratio": 0.75,
            "limits": { "max_conn": 10, "timeout": 2.9 }
        },
        "tags": ["a", "b"],
        "unset": null
    }))
}

// ==================== Path resolution tests ====================

#[test]
fn test_get_top_level_section() {
    let cfg = sample_config();
    let value = cfg.get("db").unwrap();
    assert_eq!(value.kind(), "section");
}

#[test]
fn test_get_nested_leaf() {
    let cfg = sample_config();
    assert_eq!(cfg.get("db:host"), Some(&ConfigValue::String("x".into())));
    assert_eq!(cfg.get("app:limits:max_conn"), Some(&ConfigValue::Number(10.0)));
}

#[test]
fn test_get_missing_segment() {
    let cfg = sample_config();
    assert!(cfg.get("db:missing").is_none());
    assert!(cfg.get("nope:host").is_none());
    assert!(cfg.get("app:limits:missing:deeper").is_none());
}

#[test]
fn test_get_stops_at_leaf() {
    let cfg = sample_config();
    // "db:host" is a string; remaining segments are ignored.
    assert_eq!(cfg.get_string("db:host:extra"), Some("x".to_string()));
    assert_eq!(cfg.get_int("db:port:a:b"), Some(5432));
    assert!(cfg.get_section("db:host:extra").is_none());
    // A missing segment before the leaf still fails.
    assert!(cfg.get("db:nope:extra").is_none());
}

#[test]
fn test_get_is_case_sensitive() {
    let cfg = sample_config();
    assert!(cfg.get("DB:host").is_none());
    assert!(cfg.get("db:Host").is_none());
}

#[test]
fn test_get_empty_and_trailing_segments() {
    let cfg = sample_config();
    assert!(cfg.get("").is_none());
    assert!(cfg.get("db:").is_none());
    assert!(cfg.get(":db").is_none());

    // An empty key is still an exact-match key.
    let cfg = from_json(json!({ "": { "x": 1 }, "a": { "": "empty" } }));
    assert_eq!(cfg.get_int(":x"), Some(1));
    assert_eq!(cfg.get_string("a:"), Some("empty".to_string()));
}

#[test]
fn test_null_values_are_absent() {
    let cfg = sample_config();
    assert!(cfg.get("unset").is_none());
    assert_eq!(cfg.get_string_default("unset", "fallback"), "fallback");
}

#[test]
fn test_list_values_kept_without_nulls() {
    let cfg = from_json(json!({ "items": [1, null, "two"] }));
    assert_eq!(
        cfg.get("items"),
        Some(&ConfigValue::List(vec![
            ConfigValue::Number(1.0),
            ConfigValue::String("two".into()),
        ]))
    );
}

// ==================== Typed accessor tests ====================

#[test]
fn test_typed_accessors() {
    let cfg = sample_config();
    assert_eq!(cfg.get_string("app:name"), Some("platform".to_string()));
    assert_eq!(cfg.get_int("db:port"), Some(5432));
    assert_eq!(cfg.get_bool("app:debug"), Some(true));
    assert_eq!(cfg.get_float("app:ratio"), Some(0.75));
}

#[test]
fn test_typed_accessors_missing() {
    let cfg = sample_config();
    assert_eq!(cfg.get_string("db:missing"), None);
    assert_eq!(cfg.get_int("db:missing"), None);
    assert_eq!(cfg.get_bool("db:missing"), None);
    assert_eq!(cfg.get_float("db:missing"), None);
}

#[test]
fn test_typed_accessors_type_mismatch_is_not_found() {
    let cfg = sample_config();
    assert_eq!(cfg.get_int("db:host"), None);
    assert_eq!(cfg.get_string("db:port"), None);
    assert_eq!(cfg.get_bool("app:ratio"), None);
    assert_eq!(cfg.get_float("app:debug"), None);
    assert_eq!(cfg.get_string("db"), None);
    assert_eq!(cfg.get_string("tags"), None);
}

#[test]
fn test_int_truncates_toward_zero() {
    let cfg = from_json(json!({ "pos": 2.9, "neg": -2.9, "huge": 1e300 }));
    assert_eq!(cfg.get_int("pos"), Some(2));
    assert_eq!(cfg.get_int("neg"), Some(-2));
    assert_eq!(cfg.get_int("huge"), Some(i64::MAX));
}

#[test]
fn test_float_reads_integers() {
    let cfg = sample_config();
    assert_eq!(cfg.get_float("db:port"), Some(5432.0));
}

// ==================== Default accessor tests ====================

#[test]
fn test_defaults_when_found() {
    let cfg = sample_config();
    assert_eq!(cfg.get_string_default("db:host", "localhost"), "x");
    assert_eq!(cfg.get_int_default("db:port", 0), 5432);
    assert!(cfg.get_bool_default("app:debug", false));
    assert_eq!(cfg.get_float_default("app:ratio", 1.0), 0.75);
}

#[test]
fn test_defaults_when_missing() {
    let cfg = sample_config();
    assert_eq!(cfg.get_string_default("db:user", "admin"), "admin");
    assert_eq!(cfg.get_int_default("db:pool", 8), 8);
    assert!(!cfg.get_bool_default("app:verbose", false));
    assert_eq!(cfg.get_float_default("app:scale", 1.5), 1.5);
}

#[test]
fn test_defaults_on_type_mismatch() {
    let cfg = sample_config();
    assert_eq!(cfg.get_int_default("db:host", 7), 7);
}

// ==================== Require accessor tests ====================

#[test]
fn test_require_found() {
    let cfg = sample_config();
    assert_eq!(cfg.require_string("db:host").unwrap(), "x");
    assert_eq!(cfg.require_int("db:port").unwrap(), 5432);
    assert!(cfg.require_bool("app:debug").unwrap());
    assert_eq!(cfg.require_float("app:ratio").unwrap(), 0.75);
}

#[test]
fn test_require_missing() {
    let cfg = sample_config();
    let err = cfg.require_string("db:user").unwrap_err();
    assert!(matches!(err, ConfigError::Missing(ref p) if p == "db:user"));
    assert_eq!(err.to_string(), "config key not found: db:user");
}

#[test]
fn test_require_type_mismatch() {
    let cfg = sample_config();
    let err = cfg.require_int("db:host").unwrap_err();
    match err {
        ConfigError::TypeMismatch {
            path,
            expected,
            found,
        } => {
            assert_eq!(path, "db:host");
            assert_eq!(expected, "number");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ==================== Section tests ====================

#[test]
fn test_get_section() {
    let cfg = sample_config();
    let limits = cfg.get_section("app:limits").unwrap();
    assert_eq!(limits.get_int("max_conn"), Some(10));
    assert_eq!(limits.get_float("timeout"), Some(2.9));
    assert!(limits.get("name").is_none());
}

#[test]
fn test_get_section_nested_lookup_matches_document() {
    let cfg = from_json(json!({ "a": { "b": { "c": "deep" } } }));
    let section = cfg.get_section("a:b").unwrap();
    assert_eq!(section.get_string("c"), Some("deep".to_string()));
    assert_eq!(section.get_string("c"), cfg.get_string("a:b:c"));
}

#[test]
fn test_get_section_not_a_section() {
    let cfg = sample_config();
    assert!(cfg.get_section("db:host").is_none());
    assert!(cfg.get_section("tags").is_none());
    assert!(cfg.get_section("missing").is_none());
}

#[test]
fn test_get_section_shares_tree() {
    let cfg = sample_config();
    let db = cfg.get_section("db").unwrap();
    let again = cfg.get_section("db").unwrap();
    assert!(Arc::ptr_eq(db.root(), again.root()));

    let stored = cfg.get("db").and_then(ConfigValue::as_section).unwrap();
    assert!(Arc::ptr_eq(db.root(), stored));
}

#[test]
fn test_keys_sorted() {
    let cfg = sample_config();
    let keys: Vec<&str> = cfg.keys().collect();
    assert_eq!(keys, vec!["app", "db", "logging", "tags"]);
    assert!(!cfg.is_empty());
    assert!(JsonConfig::default().is_empty());
}

// ==================== Loading tests ====================

#[test]
fn test_from_str() {
    let cfg: JsonConfig = r#"{"server": {"port": 8080}}"#.parse().unwrap();
    assert_eq!(cfg.get_int("server:port"), Some(8080));
}

#[test]
fn test_from_str_malformed() {
    let result = "{not json".parse::<JsonConfig>();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_from_json_requires_object() {
    let err = JsonConfig::from_json(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, ConfigError::NotAnObject("array")));
    assert_eq!(
        err.to_string(),
        "config document must be a JSON object, got array"
    );
}

#[test]
fn test_load_from_file() {
    let document = r#"{"logging":{"level":"warning"},"db":{"host":"x","port":5432}}"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(document.as_bytes()).unwrap();

    let cfg = load(file.path()).unwrap();

    assert_eq!(cfg.get_int_default("db:port", 0), 5432);
    assert_eq!(cfg.get_string("logging:level"), Some("warning".to_string()));
    assert_eq!(cfg.get_string("db:missing"), None);
}

#[test]
fn test_load_round_trips_leaves() {
    let document = json!({
        "name": "svc",
        "enabled": false,
        "workers": 12,
        "ratio": 0.125,
        "nested": { "flag": true, "label": "inner", "count": -3 }
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(document.to_string().as_bytes()).unwrap();

    let cfg = load(file.path()).unwrap();

    assert_eq!(cfg.get_string("name"), Some("svc".to_string()));
    assert_eq!(cfg.get_bool("enabled"), Some(false));
    assert_eq!(cfg.get_int("workers"), Some(12));
    assert_eq!(cfg.get_float("ratio"), Some(0.125));
    assert_eq!(cfg.get_bool("nested:flag"), Some(true));
    assert_eq!(cfg.get_string("nested:label"), Some("inner".to_string()));
    assert_eq!(cfg.get_int("nested:count"), Some(-3));
}

#[test]
fn test_load_file_not_found() {
    let result = load("nonexistent_config.json");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("failed to read config file"));
}

#[test]
fn test_load_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"db\": {\"port\": }").unwrap();

    let err = load(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_load_non_object_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"just a string\"").unwrap();

    assert!(matches!(
        load(file.path()),
        Err(ConfigError::NotAnObject("string"))
    ));
}
