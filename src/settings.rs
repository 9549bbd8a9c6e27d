use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_CENTER, DEFAULT_CONTAINER_ID, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_PORT,
    DEFAULT_ZOOM,
};
use crate::map::MapConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub port: u16,
    pub container_id: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub data_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center_lat: DEFAULT_CENTER.0,
            center_lon: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            data_file: None,
        }
    }
}

// String values are written double-quoted with `\` and `"` backslash-escaped
fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// Strips one pair of surrounding quotes and undoes `quote_value` escapes;
// bare values are returned as written
fn unquote_value(raw: &str) -> String {
    let inner = match raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => return raw.to_string(),
    };
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                value.push(escaped);
                continue;
            }
        }
        value.push(c);
    }
    value
}

// Overwrites `target` only when `key` is present and parses
fn parse_into<T: FromStr>(config_map: &HashMap<String, String>, key: &str, target: &mut T) {
    if let Some(raw) = config_map.get(key) {
        match raw.parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!("⚠️  Ignoring unparsable value for '{}': {}", key, raw),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), unquote_value(value.trim()));
            }
        }

        parse_into(&config_map, "port", &mut settings.port);
        parse_into(&config_map, "center_lat", &mut settings.center_lat);
        parse_into(&config_map, "center_lon", &mut settings.center_lon);
        parse_into(&config_map, "zoom", &mut settings.zoom);
        parse_into(&config_map, "min_zoom", &mut settings.min_zoom);
        parse_into(&config_map, "max_zoom", &mut settings.max_zoom);
        if let Some(container_id) = config_map.get("container_id") {
            settings.container_id = container_id.clone();
        }
        if let Some(data_file) = config_map.get("data_file") {
            settings.data_file = Some(data_file.clone()).filter(|s| !s.is_empty());
        }

        tracing::debug!("Loaded settings from {}", config_path.display());
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        crate::utils::ensure_parent_dir_exists(config_path)
            .context("Creating config directory")?;

        let mut content = String::new();
        content.push_str("# QuakeMap Configuration File\n");
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("container_id = {}\n", quote_value(&self.container_id)));
        content.push_str(&format!("center_lat = {}\n", self.center_lat));
        content.push_str(&format!("center_lon = {}\n", self.center_lon));
        content.push_str(&format!("zoom = {}\n", self.zoom));
        content.push_str(&format!("min_zoom = {}\n", self.min_zoom));
        content.push_str(&format!("max_zoom = {}\n", self.max_zoom));
        if let Some(ref data_file) = self.data_file {
            content.push_str(&format!("data_file = {}\n", quote_value(data_file)));
        }

        std::fs::write(config_path, content).context("Failed to write to config file")?;
        Ok(())
    }

    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            center: [self.center_lat, self.center_lon],
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(PathBuf::from)
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("quakemap.ini");
        path
    }
}
