#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let config = Config::default();
    assert_eq!(config.storage_key, "likenet_likes_v1");
    assert!((config.mobile_breakpoint_px - 800.0).abs() < f64::EPSILON);
    assert_eq!(config.level(), log::Level::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{"storage_key":"blog_likes"}"#).unwrap();
    assert_eq!(config.storage_key, "blog_likes");
    assert_eq!(config.mobile_breakpoint_px, Config::default().mobile_breakpoint_px);
    assert_eq!(config.log_level, "info");
}

#[test]
fn log_level_is_case_insensitive() {
    let config = Config::from_json(r#"{"log_level":"DEBUG"}"#).unwrap();
    assert_eq!(config.level(), log::Level::Debug);
    let config = Config::from_json(r#"{"log_level":"warn"}"#).unwrap();
    assert_eq!(config.level(), log::Level::Warn);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "loud"));
}

#[test]
fn non_positive_breakpoint_is_rejected() {
    for raw in [r#"{"mobile_breakpoint_px":0}"#, r#"{"mobile_breakpoint_px":-10.5}"#] {
        let err = Config::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBreakpoint(_)), "{raw}");
    }
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(Config::from_json("{").unwrap_err(), ConfigError::Json(_)));
    assert!(matches!(Config::from_json(r#"{"mobile_breakpoint_px":"wide"}"#).unwrap_err(), ConfigError::Json(_)));
}

#[test]
fn level_falls_back_to_info() {
    let config = Config { log_level: "nonsense".into(), ..Config::default() };
    assert_eq!(config.level(), log::Level::Info);
}
