use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};

use crate::html_template::{asset, render_page};
use crate::map::MapView;
use crate::model::EarthquakeRecord;
use crate::settings::Settings;

use super::state::AppState;

pub async fn index_html(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state.map).map_err(|e| {
        tracing::error!("Failed to render map page: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn serve_asset(name: &str, content_type: &'static str) -> Response {
    match asset(name) {
        Some(data) => (
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            data.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn style_css() -> Response {
    serve_asset("style.css", "text/css; charset=utf-8")
}

pub async fn script_js() -> Response {
    serve_asset("script.js", "application/javascript; charset=utf-8")
}

pub async fn get_map_scene(State(state): State<AppState>) -> Json<MapView> {
    Json(state.map.as_ref().clone())
}

pub async fn get_all_quakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<EarthquakeRecord>>, StatusCode> {
    let records = state.store.get_all_records().map_err(|e| {
        tracing::error!("Record store error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(records))
}

pub async fn get_quake(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<EarthquakeRecord>, StatusCode> {
    let record = state.store.get_record(&id).map_err(|e| {
        tracing::error!("Record store error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    record.map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}

pub async fn health() -> &'static str {
    "ok"
}
