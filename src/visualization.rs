use crate::dataset::{load_collection, sample_collection};
use crate::error::Result;
use crate::legend::add_legend;
use crate::map::{create_map, MapView};
use crate::markers::add_markers;
use crate::model::{records_from_collection, EarthquakeRecord, FeatureCollection};
use crate::settings::Settings;

/// A built scene together with the records it was built from.
#[derive(Debug, Clone)]
pub struct Visualization {
    pub map: MapView,
    pub records: Vec<EarthquakeRecord>,
}

/// Builds the map from the configured data file, or from the embedded sample
/// when none is set.
pub fn initialize_visualization(settings: &Settings) -> Result<Visualization> {
    let collection = match settings.data_path() {
        Some(path) => load_collection(&path)?,
        None => sample_collection()?,
    };
    initialize_with_collection(settings, &collection)
}

/// Bootstrap, then markers, then legend. One pass, no retries.
pub fn initialize_with_collection(
    settings: &Settings,
    collection: &FeatureCollection,
) -> Result<Visualization> {
    let records = records_from_collection(collection)?;

    let mut map = create_map(&settings.container_id, settings.map_config())?;
    add_markers(&mut map, &records);
    add_legend(&mut map);

    tracing::info!(
        "🗺️  Map ready: {} marker(s), {} legend(s)",
        map.markers.len(),
        map.legends.len()
    );
    Ok(Visualization { map, records })
}
