use super::*;

#[test]
fn builtin_scene_validates() {
    let config = SceneConfig::vintage_1959();
    assert!(config.validate().is_ok());
    assert_eq!(config.traffic.len(), 24);
    assert!(config.curve.control_points.len() >= 4);
    assert!(!config.population.regions.is_empty());
}

#[test]
fn json_round_trip_preserves_the_scene() {
    let config = SceneConfig::vintage_1959();
    let json = config.to_json_string().unwrap();
    let parsed = SceneConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = SceneConfig::from_json_str(r#"{ "ride_height": 0.25 }"#).unwrap();
    assert!((parsed.ride_height - 0.25).abs() < 1e-6);
    assert_eq!(parsed.traffic.len(), 24);
    assert_eq!(parsed.road, SceneConfig::vintage_1959().road);
}

#[test]
fn invalid_traffic_rows_are_rejected() {
    let mut config = SceneConfig::vintage_1959();
    config.traffic[0].start_t = 1.5;
    assert!(config.validate().is_err());

    let mut config = SceneConfig::vintage_1959();
    config.traffic[3].lane_offset = -2.0;
    assert!(config.validate().is_err());

    let mut config = SceneConfig::vintage_1959();
    config.traffic[5].speed = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn short_curves_and_bad_rates_are_rejected() {
    let mut config = SceneConfig::vintage_1959();
    config.curve.control_points.truncate(3);
    assert!(config.validate().is_err());

    let mut config = SceneConfig::vintage_1959();
    config.progress_rate = 0.0;
    assert!(config.validate().is_err());

    let mut config = SceneConfig::vintage_1959();
    config.palette.facades.clear();
    assert!(config.validate().is_err());
}

#[test]
fn traffic_speeds_rise_toward_the_horizon() {
    let config = SceneConfig::vintage_1959();
    let first = &config.traffic[0];
    let last = &config.traffic[config.traffic.len() - 1];
    assert!(first.start_t > last.start_t);
    assert!(first.speed < last.speed);
}

#[test]
fn bad_json_reports_a_validation_error() {
    let err = SceneConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("validation error"));
}
