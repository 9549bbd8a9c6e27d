use std::path::Path;

use crate::error::Result;
use crate::model::FeatureCollection;

// Embedded sample: the 2024-12-05 Cape Mendocino event
const SAMPLE_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "mag": 7,
                "place": "2024 Offshore Cape Mendocino, California Earthquake",
                "time": 1733424261110,
                "url": "https://earthquake.usgs.gov/earthquakes/eventpage/nc75095651",
                "status": "reviewed",
                "tsunami": 1
            },
            "geometry": {
                "type": "Point",
                "coordinates": [-125.021666666667, 40.374, 10]
            },
            "id": "nc75095651"
        }
    ]
}"#;

pub fn sample_collection() -> Result<FeatureCollection> {
    Ok(serde_json::from_str(SAMPLE_GEOJSON)?)
}

/// Reads a GeoJSON feature collection from disk.
pub fn load_collection(path: &Path) -> Result<FeatureCollection> {
    let content = std::fs::read_to_string(path)?;
    let collection: FeatureCollection = serde_json::from_str(&content)?;
    tracing::info!(
        "📂 Loaded {} feature(s) from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}
