use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{QuakeMapError, Result};

// GeoJSON wire structures, as published by earthquake feeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub properties: Properties,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    pub time: Option<i64>,
    pub url: Option<String>,
    pub status: Option<String>,
    // Feeds send 0/1, some tools send booleans
    #[serde(default)]
    pub tsunami: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn point_type() -> String {
    "Point".to_string()
}

/// One earthquake, flattened out of its GeoJSON feature.
///
/// Coordinates are stored `[lon, lat, depth]` on the wire; `lat_lng()` gives
/// the `(lat, lon)` order Leaflet places markers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    pub id: String,
    pub magnitude: f64,
    pub depth_km: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub place: String,
    pub time: i64,
    pub status: String,
    pub tsunami: bool,
    pub url: String,
}

impl EarthquakeRecord {
    pub fn lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl TryFrom<&Feature> for EarthquakeRecord {
    type Error = QuakeMapError;

    fn try_from(feature: &Feature) -> Result<Self> {
        let id = feature.id.clone().unwrap_or_default();
        let props = &feature.properties;

        let magnitude = props
            .mag
            .ok_or_else(|| QuakeMapError::invalid_record(&id, "missing magnitude"))?;
        let time = props
            .time
            .ok_or_else(|| QuakeMapError::invalid_record(&id, "missing time"))?;

        let coords = &feature.geometry.coordinates;
        if coords.len() < 3 {
            return Err(QuakeMapError::invalid_record(
                &id,
                format!("expected [lon, lat, depth], got {} coordinate(s)", coords.len()),
            ));
        }
        let (longitude, latitude, depth_km) = (coords[0], coords[1], coords[2]);

        if ![magnitude, longitude, latitude, depth_km]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(QuakeMapError::invalid_record(&id, "non-finite number"));
        }

        Ok(EarthquakeRecord {
            magnitude,
            depth_km,
            longitude,
            latitude,
            place: props.place.clone().unwrap_or_default(),
            time,
            status: props.status.clone().unwrap_or_default(),
            tsunami: is_truthy(&props.tsunami),
            url: props.url.clone().unwrap_or_default(),
            id,
        })
    }
}

/// Converts every feature, failing on the first malformed one.
pub fn records_from_collection(collection: &FeatureCollection) -> Result<Vec<EarthquakeRecord>> {
    collection
        .features
        .iter()
        .map(EarthquakeRecord::try_from)
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn swaps_stored_lon_lat_for_placement() {
        let f = feature(json!({
            "type": "Feature",
            "properties": {"mag": 4.2, "place": "Somewhere", "time": 1, "url": "u", "status": "automatic", "tsunami": 0},
            "geometry": {"type": "Point", "coordinates": [-120.5, 35.25, 7.1]},
            "id": "x1"
        }));
        let record = EarthquakeRecord::try_from(&f).unwrap();
        assert_eq!(record.lat_lng(), [35.25, -120.5]);
        assert_eq!(record.depth_km, 7.1);
        assert!(!record.tsunami);
    }

    #[test]
    fn tsunami_truthiness_follows_json_values() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn absent_tsunami_is_false() {
        let f = feature(json!({
            "properties": {"mag": 1.0, "time": 5},
            "geometry": {"coordinates": [0.0, 0.0, 0.0]}
        }));
        let record = EarthquakeRecord::try_from(&f).unwrap();
        assert!(!record.tsunami);
        assert_eq!(record.id, "");
        assert_eq!(record.place, "");
    }

    #[test]
    fn rejects_missing_magnitude() {
        let f = feature(json!({
            "properties": {"time": 5},
            "geometry": {"coordinates": [0.0, 0.0, 0.0]},
            "id": "nomag"
        }));
        let err = EarthquakeRecord::try_from(&f).unwrap_err();
        assert!(matches!(err, QuakeMapError::InvalidRecord { ref id, .. } if id == "nomag"));
    }

    #[test]
    fn rejects_two_element_coordinates() {
        let f = feature(json!({
            "properties": {"mag": 3.0, "time": 5},
            "geometry": {"coordinates": [10.0, 20.0]}
        }));
        let err = EarthquakeRecord::try_from(&f).unwrap_err();
        assert!(err.to_string().contains("2 coordinate(s)"));
    }

    #[test]
    fn collection_conversion_stops_at_first_bad_feature() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"properties": {"mag": 1.0, "time": 1}, "geometry": {"coordinates": [1.0, 2.0, 3.0]}, "id": "ok"},
                {"properties": {"time": 1}, "geometry": {"coordinates": [1.0, 2.0, 3.0]}, "id": "bad"}
            ]
        }))
        .unwrap();
        let err = records_from_collection(&collection).unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }
}
