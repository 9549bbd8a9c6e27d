use serde::{Serialize, Serializer};

use crate::constants::{
    MARKER_FILL_OPACITY, MARKER_RADIUS_SCALE, MARKER_STROKE_COLOR, MARKER_STROKE_OPACITY,
    MARKER_STROKE_WEIGHT,
};
use crate::model::EarthquakeRecord;

/// Fill colors for the depth ramp, deepest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthColor {
    Deepest,
    VeryDeep,
    Deep,
    Intermediate,
    Shallow,
    Surface,
}

impl DepthColor {
    pub fn hex(self) -> &'static str {
        match self {
            DepthColor::Deepest => "#800026",
            DepthColor::VeryDeep => "#BD0026",
            DepthColor::Deep => "#E31A1C",
            DepthColor::Intermediate => "#FC4E2A",
            DepthColor::Shallow => "#FD8D3C",
            DepthColor::Surface => "#FEB24C",
        }
    }
}

impl std::fmt::Display for DepthColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for DepthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude * MARKER_RADIUS_SCALE
}

/// Step function over depth in km. Bounds are exclusive: exactly 90 km falls
/// into the 70-90 bucket.
pub fn depth_color(depth: f64) -> DepthColor {
    if depth > 90.0 {
        DepthColor::Deepest
    } else if depth > 70.0 {
        DepthColor::VeryDeep
    } else if depth > 50.0 {
        DepthColor::Deep
    } else if depth > 30.0 {
        DepthColor::Intermediate
    } else if depth > 10.0 {
        DepthColor::Shallow
    } else {
        DepthColor::Surface
    }
}

// Leaflet path options for a circle marker, serialized with Leaflet's key names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarkerOptions {
    pub radius: f64,
    pub fill_color: DepthColor,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

pub fn marker_style(record: &EarthquakeRecord) -> CircleMarkerOptions {
    CircleMarkerOptions {
        radius: marker_radius(record.magnitude),
        fill_color: depth_color(record.depth_km),
        color: MARKER_STROKE_COLOR,
        weight: MARKER_STROKE_WEIGHT,
        opacity: MARKER_STROKE_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_five_times_magnitude() {
        for m in [-1.0, 0.0, 0.5, 2.5, 7.0, 9.1] {
            assert_eq!(marker_radius(m), 5.0 * m);
        }
    }

    #[test]
    fn depth_buckets_use_exclusive_lower_bounds() {
        assert_eq!(depth_color(90.0).hex(), "#BD0026");
        assert_eq!(depth_color(90.0001).hex(), "#800026");
        assert_eq!(depth_color(70.0).hex(), "#E31A1C");
        assert_eq!(depth_color(50.5).hex(), "#E31A1C");
        assert_eq!(depth_color(31.0).hex(), "#FC4E2A");
        assert_eq!(depth_color(30.0).hex(), "#FD8D3C");
        assert_eq!(depth_color(10.0).hex(), "#FEB24C");
        assert_eq!(depth_color(-5.0).hex(), "#FEB24C");
        assert_eq!(depth_color(700.0).hex(), "#800026");
    }

    #[test]
    fn options_serialize_with_leaflet_keys() {
        let record = EarthquakeRecord {
            id: "a".into(),
            magnitude: 3.0,
            depth_km: 45.0,
            longitude: 0.0,
            latitude: 0.0,
            place: String::new(),
            time: 0,
            status: String::new(),
            tsunami: false,
            url: String::new(),
        };
        let json = serde_json::to_value(marker_style(&record)).unwrap();
        assert_eq!(json["radius"], 15.0);
        assert_eq!(json["fillColor"], "#FC4E2A");
        assert_eq!(json["color"], "#000");
        assert_eq!(json["weight"], 1.0);
        assert_eq!(json["opacity"], 1.0);
        assert_eq!(json["fillOpacity"], 0.8);
    }
}
