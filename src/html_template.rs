use std::borrow::Cow;

use axum::response::Html;
use rust_embed::RustEmbed;

use crate::constants::{LEAFLET_CSS_URL, LEAFLET_JS_URL};
use crate::error::Result;
use crate::map::MapView;
use crate::utils::escape_html;

#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Asset;

pub fn asset(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|file| file.data)
}

fn asset_text(name: &str) -> String {
    asset(name)
        .map(|data| String::from_utf8_lossy(&data).into_owned())
        .unwrap_or_default()
}

// Scene JSON goes inside a <script> element. Markup characters only occur
// inside JSON strings, so unicode escapes keep the JSON equivalent while the
// HTML parser never sees a tag, comment opener or entity.
fn scene_json(map: &MapView) -> Result<String> {
    let json = serde_json::to_string(map)?;
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    Ok(escaped)
}

fn fill_template(map: &MapView, style: &str, script: &str) -> Result<String> {
    Ok(MAP_HTML
        .replace("<!-- LEAFLET_CSS_PLACEHOLDER -->", LEAFLET_CSS_URL)
        .replace("<!-- LEAFLET_JS_PLACEHOLDER -->", LEAFLET_JS_URL)
        .replace("<!-- STYLE_PLACEHOLDER -->", style)
        .replace("<!-- SCRIPT_PLACEHOLDER -->", script)
        .replace("<!-- CONTAINER_ID_PLACEHOLDER -->", &escape_html(&map.container_id))
        .replace("<!-- SCENE_PLACEHOLDER -->", &scene_json(map)?))
}

/// Page served over HTTP: assets are linked, the scene is inlined.
pub fn render_page(map: &MapView) -> Result<Html<String>> {
    fill_template(
        map,
        r#"<link rel="stylesheet" href="/style.css" />"#,
        r#"<script src="/script.js"></script>"#,
    )
    .map(Html)
}

/// Single self-contained file: stylesheet, script and scene are all inlined.
pub fn render_standalone_page(map: &MapView) -> Result<String> {
    let style = format!("<style>\n{}</style>", asset_text("style.css"));
    let script = format!("<script>\n{}</script>", asset_text("script.js"));
    fill_template(map, &style, &script)
}

// HTML template for the map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Earthquake Map</title>
    <link rel="stylesheet" href="<!-- LEAFLET_CSS_PLACEHOLDER -->" />
    <!-- STYLE_PLACEHOLDER -->
</head>
<body>
    <div id="<!-- CONTAINER_ID_PLACEHOLDER -->" style="height: 100vh; width: 100%;"></div>
    <script type="application/json" id="quakemap-scene"><!-- SCENE_PLACEHOLDER --></script>
    <script src="<!-- LEAFLET_JS_PLACEHOLDER -->"></script>
    <!-- SCRIPT_PLACEHOLDER -->
</body>
</html>
"#;
