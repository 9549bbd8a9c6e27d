use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::constants::DEFAULT_HOST;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{
    get_all_quakes, get_map_scene, get_quake, get_settings, health, index_html, script_js,
    style_css,
};

// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/style.css", get(style_css))
        .route("/script.js", get(script_js))
        .route("/api/map", get(get_map_scene))
        .route("/api/quakes", get(get_all_quakes))
        .route("/api/quakes/:id", get(get_quake))
        .route("/api/settings", get(get_settings))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<()> {
    let app = create_app(state);
    let addr = SocketAddr::from((DEFAULT_HOST, port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("🌐 Server running at http://{}", addr);
    tracing::info!("   🗺️  API endpoints:");
    tracing::info!("      - GET /api/map - Map scene (tiles, markers, legend)");
    tracing::info!("      - GET /api/quakes - Loaded earthquake records");
    tracing::info!("      - GET /api/quakes/<id> - One earthquake record");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    tracing::info!("👋 Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::QuakeStore;
    use crate::settings::Settings;
    use crate::visualization::initialize_visualization;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let settings = Settings::default();
        let viz = initialize_visualization(&settings).unwrap();
        let store = QuakeStore::new();
        store.replace_all(viz.records).unwrap();
        create_app(AppState {
            store,
            map: Arc::new(viz.map),
            settings: Arc::new(settings),
        })
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn index_serves_the_map_page() {
        let (status, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("quakemap-scene"));
        assert!(body.contains("/script.js"));
    }

    #[tokio::test]
    async fn scene_endpoint_returns_styled_marker() {
        let (status, body) = get_body("/api/map").await;
        assert_eq!(status, StatusCode::OK);
        let scene: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(scene["containerId"], "map");
        assert_eq!(scene["markers"][0]["latLng"][0], 40.374);
        assert_eq!(scene["markers"][0]["options"]["fillColor"], "#FEB24C");
        assert_eq!(scene["legends"][0]["entries"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn quake_lookup_by_id() {
        let (status, body) = get_body("/api/quakes/nc75095651").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Cape Mendocino"));

        let (status, _) = get_body("/api/quakes/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lists_quakes_and_settings() {
        let (_, body) = get_body("/api/quakes").await;
        let quakes: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(quakes.as_array().unwrap().len(), 1);
        assert_eq!(quakes[0]["tsunami"], true);

        let (_, body) = get_body("/api/settings").await;
        let settings: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(settings["port"], 3001);
    }

    #[tokio::test]
    async fn serves_embedded_assets() {
        let (status, body) = get_body("/script.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("L.circleMarker"));

        let (status, _) = get_body("/style.css").await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_body("/health").await;
        assert_eq!(body, "ok");
    }
}
