#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let c = GeometryConfig::default();
    assert_eq!(c.resize.min_size, 1.0);
    assert_eq!(c.resize.rotation_epsilon_deg, 0.1);
    assert_eq!(c.snap.threshold_ratio, 0.3);
    assert_eq!(c.snap.rotation_epsilon_deg, 0.1);
    assert_eq!(c.snap.min_size, 1.0);
    assert!(c.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    let c = GeometryConfig::from_json("{}").unwrap();
    assert_eq!(c, GeometryConfig::default());
}

#[test]
fn from_json_partial_override() {
    let c = GeometryConfig::from_json(r#"{ "snap": { "threshold_ratio": 0.5 } }"#).unwrap();
    assert_eq!(c.snap.threshold_ratio, 0.5);
    assert_eq!(c.snap.rotation_epsilon_deg, 0.1);
    assert_eq!(c.resize, ResizeConfig::default());
}

#[test]
fn from_json_malformed_is_parse_error() {
    let err = GeometryConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_zero_min_size() {
    let err = GeometryConfig::from_json(r#"{ "resize": { "min_size": 0.0 } }"#).unwrap_err();
    match err {
        ConfigError::Invalid { field, value, .. } => {
            assert_eq!(field, "resize.min_size");
            assert_eq!(value, 0.0);
        }
        ConfigError::Parse(e) => panic!("expected Invalid, got Parse({e})"),
    }
}

#[test]
fn validate_rejects_negative_threshold() {
    let mut c = GeometryConfig::default();
    c.snap.threshold_ratio = -0.1;
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("snap.threshold_ratio"));
}

#[test]
fn validate_rejects_nan() {
    let mut c = GeometryConfig::default();
    c.resize.rotation_epsilon_deg = f64::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn env_parse_unset_key_keeps_default() {
    assert_eq!(env_parse("FRAMEGEOM_TEST_KEY_THAT_IS_NEVER_SET", 2.5), 2.5);
}

#[test]
fn env_parse_set_key_overrides_default() {
    // SAFETY: the key is unique to this test; nothing else reads it.
    unsafe { std::env::set_var("FRAMEGEOM_TEST_VALID_OVERRIDE", " 4.5 ") };
    assert_eq!(env_parse("FRAMEGEOM_TEST_VALID_OVERRIDE", 2.5), 4.5);
}

#[test]
fn env_parse_unparsable_value_keeps_default() {
    // SAFETY: the key is unique to this test; nothing else reads it.
    unsafe { std::env::set_var("FRAMEGEOM_TEST_GARBAGE_OVERRIDE", "abc") };
    assert_eq!(env_parse("FRAMEGEOM_TEST_GARBAGE_OVERRIDE", 2.5), 2.5);
}

#[test]
fn from_env_rejects_zero_min_size() {
    // SAFETY: no other test reads the real override keys.
    unsafe { std::env::set_var(ENV_MIN_SIZE, "0") };
    let result = GeometryConfig::from_env();
    unsafe { std::env::remove_var(ENV_MIN_SIZE) };
    match result {
        Err(ConfigError::Invalid { field, value, .. }) => {
            assert_eq!(field, "resize.min_size");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn serializes_nested_sections() {
    let json = serde_json::to_value(GeometryConfig::default()).unwrap();
    assert_eq!(json["resize"]["min_size"], 1.0);
    assert_eq!(json["snap"]["threshold_ratio"], 0.3);
}
