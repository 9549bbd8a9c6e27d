use serde::Serialize;

use crate::constants::{
    DEFAULT_CENTER, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM,
    OSM_ATTRIBUTION, OSM_TILE_URL,
};
use crate::error::{QuakeMapError, Result};
use crate::legend::LegendControl;
use crate::markers::CircleMarker;

// Leaflet map options; `center` serializes as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [DEFAULT_CENTER.0, DEFAULT_CENTER.1],
            zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<()> {
        let [lat, lng] = self.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(QuakeMapError::invalid_config(format!(
                "center [{}, {}] is not a valid latitude/longitude",
                lat, lng
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(QuakeMapError::invalid_config(format!(
                "min zoom {} exceeds max zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom < self.min_zoom || self.zoom > self.max_zoom {
            return Err(QuakeMapError::invalid_config(format!(
                "zoom {} outside [{}, {}]",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// Everything the browser needs to build the Leaflet map: one entry per
/// Leaflet call, in the order they are made.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub container_id: String,
    pub options: MapConfig,
    pub tile_layers: Vec<TileLayer>,
    pub markers: Vec<CircleMarker>,
    pub legends: Vec<LegendControl>,
}

/// Binds a map to the DOM container `container_id` and adds the base
/// OpenStreetMap tile layer.
pub fn create_map(container_id: &str, config: MapConfig) -> Result<MapView> {
    if container_id.trim().is_empty() {
        return Err(QuakeMapError::invalid_config("container id is empty"));
    }
    config.validate()?;

    tracing::debug!(
        "Creating map in #{} at [{}, {}] zoom {}",
        container_id,
        config.center[0],
        config.center[1],
        config.zoom
    );

    Ok(MapView {
        container_id: container_id.to_string(),
        options: config,
        tile_layers: vec![TileLayer::openstreetmap()],
        markers: Vec::new(),
        legends: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_exactly_one_osm_tile_layer() {
        let map = create_map("map", MapConfig::default()).unwrap();
        assert_eq!(map.container_id, "map");
        assert_eq!(map.tile_layers, vec![TileLayer::openstreetmap()]);
        assert!(map.tile_layers[0].url_template.contains("{z}/{x}/{y}"));
        assert!(map.markers.is_empty());
        assert!(map.legends.is_empty());
    }

    #[test]
    fn default_config_is_centered_on_cape_mendocino() {
        let config = MapConfig::default();
        assert_eq!(config.center, [40.374, -125.021]);
        assert_eq!((config.zoom, config.min_zoom, config.max_zoom), (6, 2, 18));
    }

    #[test]
    fn options_serialize_as_leaflet_map_options() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["center"][0], 40.374);
        assert_eq!(json["minZoom"], 2);
        assert_eq!(json["maxZoom"], 18);
    }

    #[test]
    fn rejects_empty_container() {
        assert!(matches!(
            create_map("  ", MapConfig::default()),
            Err(QuakeMapError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_inconsistent_zoom_bounds() {
        let inverted = MapConfig {
            min_zoom: 10,
            max_zoom: 4,
            ..MapConfig::default()
        };
        assert!(create_map("map", inverted).is_err());

        let outside = MapConfig {
            zoom: 1,
            ..MapConfig::default()
        };
        assert!(create_map("map", outside).is_err());
    }

    #[test]
    fn rejects_center_off_the_globe() {
        let config = MapConfig {
            center: [95.0, 0.0],
            ..MapConfig::default()
        };
        assert!(create_map("map", config).is_err());
    }
}
