use natal_wheel::{load_chart_data_from_json, ChartDataError};

const SAMPLE_CHART: &str = include_str!("fixtures/sample_chart.json");

#[test]
fn test_load_sample_chart() {
    let data = load_chart_data_from_json(SAMPLE_CHART).unwrap();
    assert_eq!(data.planets.len(), 8);
    assert_eq!(data.houses.len(), 12);
    assert_eq!(data.aspects.len(), 6);

    let sun = data.body("Sun").unwrap();
    assert_eq!(sun.longitude, 295.5);
    assert_eq!(sun.sign, "Capricorn");
    assert_eq!(sun.house, 10);
    assert!(!sun.retrograde);
    assert!(data.body("Mercury").unwrap().retrograde);
}

#[test]
fn test_minimal_chart_defaults_optional_fields() {
    let json = r#"{"planets": [{"name": "Moon", "longitude": -15.0}]}"#;
    let data = load_chart_data_from_json(json).unwrap();
    let moon = &data.planets[0];
    assert_eq!(moon.sign, "");
    assert_eq!(moon.house, 0);
    assert!(!moon.retrograde);
    assert!(data.houses.is_empty());
    assert!(data.aspects.is_empty());
}

#[test]
fn test_invalid_json() {
    let result = load_chart_data_from_json("{ not json");
    assert!(matches!(result, Err(ChartDataError::InvalidJson(_))));
}

#[test]
fn test_missing_planets() {
    let result = load_chart_data_from_json(r#"{"houses": {}}"#);
    assert!(matches!(result, Err(ChartDataError::MissingField(f)) if f == "planets"));
}

#[test]
fn test_planets_must_be_array() {
    let result = load_chart_data_from_json(r#"{"planets": {"Sun": 10}}"#);
    assert!(matches!(result, Err(ChartDataError::InvalidFieldValue(_))));
}

#[test]
fn test_planet_name_required() {
    let result = load_chart_data_from_json(r#"{"planets": [{"longitude": 10}]}"#);
    assert!(matches!(result, Err(ChartDataError::MissingField(f)) if f == "planets[0].name"));

    let result = load_chart_data_from_json(r#"{"planets": [{"name": "", "longitude": 10}]}"#);
    assert!(matches!(result, Err(ChartDataError::InvalidFieldValue(_))));
}

#[test]
fn test_planet_longitude_must_be_numeric() {
    let json = r#"{"planets": [{"name": "Sun", "longitude": 1}, {"name": "Mars", "longitude": "12"}]}"#;
    let err = load_chart_data_from_json(json).unwrap_err();
    assert!(matches!(err, ChartDataError::InvalidFieldValue(_)));
    assert!(err.to_string().contains("planets[1].longitude"));
}

#[test]
fn test_aspect_fields_checked() {
    let json = r#"{"planets": [], "aspects": [{"planet1": "Sun", "aspect": "trine"}]}"#;
    let result = load_chart_data_from_json(json);
    assert!(matches!(result, Err(ChartDataError::MissingField(f)) if f == "aspects[0].planet2"));
}

#[test]
fn test_unknown_aspect_bodies_still_load() {
    let json = r#"{
        "planets": [{"name": "Sun", "longitude": 10}],
        "aspects": [{"planet1": "Sun", "planet2": "Vulcan", "aspect": "square"}]
    }"#;
    let data = load_chart_data_from_json(json).unwrap();
    assert_eq!(data.aspects.len(), 1);
    assert_eq!(data.aspects[0].orb, 0.0);
}

#[test]
fn test_house_cusp_requires_longitude() {
    let json = r#"{"planets": [], "houses": {"1": {"cusp": 0}}}"#;
    let result = load_chart_data_from_json(json);
    assert!(matches!(result, Err(ChartDataError::MissingField(_))));
}
