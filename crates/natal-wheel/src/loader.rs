use crate::chart::ChartData;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading chart data
#[derive(Error, Debug)]
pub enum ChartDataError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Load a chart snapshot from a JSON string.
///
/// Only the structure needed to place things on the wheel is checked here.
/// Missing houses or aspects, or aspects naming unknown bodies, load fine and
/// are dropped at render time.
pub fn load_chart_data_from_json(json: &str) -> Result<ChartData, ChartDataError> {
    let mut parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;

    validate_chart_data(&parsed)?;

    // Explicit nulls for the optional sections mean "absent"
    if let Some(obj) = parsed.as_object_mut() {
        obj.retain(|key, value| !(value.is_null() && (key == "houses" || key == "aspects")));
    }

    let data: ChartData = serde_json::from_value(parsed)
        .map_err(|e| ChartDataError::ValidationError(e.to_string()))?;
    log::debug!(
        "Loaded chart: {} bodies, {} cusps, {} aspects",
        data.planets.len(),
        data.houses.len(),
        data.aspects.len()
    );
    Ok(data)
}

fn validate_chart_data(chart: &Value) -> Result<(), ChartDataError> {
    let obj = chart.as_object().ok_or_else(|| {
        ChartDataError::ValidationError("Chart data must be an object".to_string())
    })?;

    let planets = obj
        .get("planets")
        .ok_or_else(|| ChartDataError::MissingField("planets".to_string()))?;
    let planets = planets.as_array().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("planets must be an array".to_string())
    })?;
    for (index, planet) in planets.iter().enumerate() {
        validate_planet(planet, index)?;
    }

    if let Some(houses) = obj.get("houses") {
        validate_houses(houses)?;
    }

    if let Some(aspects) = obj.get("aspects") {
        if !aspects.is_null() {
            let aspects = aspects.as_array().ok_or_else(|| {
                ChartDataError::InvalidFieldValue("aspects must be an array".to_string())
            })?;
            for (index, aspect) in aspects.iter().enumerate() {
                validate_aspect(aspect, index)?;
            }
        }
    }

    Ok(())
}

fn validate_planet(planet: &Value, index: usize) -> Result<(), ChartDataError> {
    let obj = planet.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue(format!("planets[{}] must be an object", index))
    })?;

    match obj.get("name") {
        None => {
            return Err(ChartDataError::MissingField(format!("planets[{}].name", index)));
        }
        Some(name) if name.as_str().map_or(true, str::is_empty) => {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "planets[{}].name must be a non-empty string",
                index
            )));
        }
        Some(_) => {}
    }

    let longitude = obj
        .get("longitude")
        .ok_or_else(|| ChartDataError::MissingField(format!("planets[{}].longitude", index)))?;
    if !longitude.as_f64().is_some_and(f64::is_finite) {
        return Err(ChartDataError::InvalidFieldValue(format!(
            "planets[{}].longitude must be a number, got: {}",
            index, longitude
        )));
    }

    if let Some(house) = obj.get("house") {
        if !house.as_u64().is_some_and(|h| h <= 12) {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "planets[{}].house must be an integer from 0 to 12, got: {}",
                index, house
            )));
        }
    }

    if let Some(retrograde) = obj.get("retrograde") {
        if !retrograde.is_boolean() {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "planets[{}].retrograde must be a boolean",
                index
            )));
        }
    }

    Ok(())
}

fn validate_houses(houses: &Value) -> Result<(), ChartDataError> {
    if houses.is_null() {
        return Ok(());
    }
    let obj: &Map<String, Value> = houses.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("houses must be an object".to_string())
    })?;
    for (key, cusp) in obj {
        let longitude = cusp
            .get("longitude")
            .ok_or_else(|| ChartDataError::MissingField(format!("houses.{}.longitude", key)))?;
        if !longitude.as_f64().is_some_and(f64::is_finite) {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "houses.{}.longitude must be a number",
                key
            )));
        }
    }
    Ok(())
}

fn validate_aspect(aspect: &Value, index: usize) -> Result<(), ChartDataError> {
    let obj = aspect.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue(format!("aspects[{}] must be an object", index))
    })?;
    for field in ["planet1", "planet2", "aspect"] {
        match obj.get(field) {
            None => {
                return Err(ChartDataError::MissingField(format!(
                    "aspects[{}].{}",
                    index, field
                )))
            }
            Some(value) if !value.is_string() => {
                return Err(ChartDataError::InvalidFieldValue(format!(
                    "aspects[{}].{} must be a string",
                    index, field
                )))
            }
            Some(_) => {}
        }
    }
    if let Some(orb) = obj.get("orb") {
        if !orb.is_number() {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "aspects[{}].orb must be a number",
                index
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_object_root() {
        let err = load_chart_data_from_json("[]").unwrap_err();
        assert!(matches!(err, ChartDataError::ValidationError(_)));
    }

    #[test]
    fn test_house_number_range_checked() {
        let json = r#"{"planets": [{"name": "Sun", "longitude": 10, "house": 13}]}"#;
        let err = load_chart_data_from_json(json).unwrap_err();
        assert!(matches!(err, ChartDataError::InvalidFieldValue(_)));
    }

    #[test]
    fn test_null_sections_treated_as_absent() {
        let json = r#"{"planets": [], "houses": null, "aspects": null}"#;
        let data = load_chart_data_from_json(json).unwrap();
        assert!(data.is_empty());
        assert!(data.houses.is_empty());
        assert!(data.aspects.is_empty());
    }
}
