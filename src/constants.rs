// Server configuration
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: [u8; 4] = [127, 0, 0, 1];

// Map bootstrap defaults (centered on the Cape Mendocino event)
pub const DEFAULT_CONTAINER_ID: &str = "map";
pub const DEFAULT_CENTER: (f64, f64) = (40.374, -125.021);
pub const DEFAULT_ZOOM: u8 = 6;
pub const DEFAULT_MIN_ZOOM: u8 = 2;
pub const DEFAULT_MAX_ZOOM: u8 = 18;

// Base tile layer
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// Marker styling: radius = magnitude * MARKER_RADIUS_SCALE
pub const MARKER_RADIUS_SCALE: f64 = 5.0;
pub const MARKER_STROKE_COLOR: &str = "#000";
pub const MARKER_STROKE_WEIGHT: f64 = 1.0;
pub const MARKER_STROKE_OPACITY: f64 = 1.0;
pub const MARKER_FILL_OPACITY: f64 = 0.8;

// Legend
pub const LEGEND_TITLE: &str = "Depth (km)";
pub const LEGEND_POSITION: &str = "bottomright";
pub const LEGEND_DEPTH_BREAKPOINTS: [u32; 6] = [0, 10, 30, 50, 70, 90];

// Leaflet assets
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
