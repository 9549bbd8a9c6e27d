use std::sync::Arc;

use crate::database::QuakeStore;
use crate::map::MapView;
use crate::settings::Settings;

// Application state shared by the handlers; the scene is built once at startup
#[derive(Clone)]
pub struct AppState {
    pub store: QuakeStore,
    pub map: Arc<MapView>,
    pub settings: Arc<Settings>,
}
