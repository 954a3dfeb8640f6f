//! # City Records
//!
//! Row types for the `cities` table.

use serde::{Deserialize, Serialize};

/// A full city weather record.
///
/// Measurement columns are nullable in the schema, so they are optional
/// here; the HTTP surface always supplies all three on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub wind_speed: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub temperature: Option<f64>,
}

/// List entry: id and name only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityListItem {
    pub id: i64,
    pub name: String,
}

/// The three measurement fields, always written together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub wind_speed: f64,
    pub precipitation_mm: f64,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_city_serializes_all_fields() {
        let city = City {
            id: 1,
            name: "Bratislava".to_string(),
            wind_speed: Some(5.5),
            precipitation_mm: Some(2.0),
            temperature: Some(15.0),
        };

        let value = serde_json::to_value(&city).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Bratislava",
                "wind_speed": 5.5,
                "precipitation_mm": 2.0,
                "temperature": 15.0
            })
        );
    }

    #[test]
    fn test_city_null_measurements() {
        let city = City {
            id: 2,
            name: "Kosice".to_string(),
            wind_speed: None,
            precipitation_mm: None,
            temperature: None,
        };

        let value = serde_json::to_value(&city).unwrap();
        assert_eq!(value["wind_speed"], serde_json::Value::Null);
        assert_eq!(value["name"], "Kosice");
    }
}
