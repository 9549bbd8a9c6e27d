use serde::Serialize;

use crate::map::MapView;
use crate::model::EarthquakeRecord;
use crate::popup::format_popup;
use crate::style::{marker_style, CircleMarkerOptions};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub id: String,
    pub lat_lng: [f64; 2],
    pub options: CircleMarkerOptions,
    pub popup: String,
}

impl CircleMarker {
    pub fn from_record(record: &EarthquakeRecord, popup: String) -> Self {
        Self {
            id: record.id.clone(),
            lat_lng: record.lat_lng(),
            options: marker_style(record),
            popup,
        }
    }
}

/// Places one circle marker per record, in iteration order, each bound to its
/// popup. Returns the number of markers added.
pub fn add_markers<'a, I>(map: &mut MapView, records: I) -> usize
where
    I: IntoIterator<Item = &'a EarthquakeRecord>,
{
    add_markers_with(map, records, format_popup)
}

pub(crate) fn add_markers_with<'a, I, F>(map: &mut MapView, records: I, popup: F) -> usize
where
    I: IntoIterator<Item = &'a EarthquakeRecord>,
    F: Fn(&EarthquakeRecord) -> String,
{
    let before = map.markers.len();
    for record in records {
        map.markers.push(CircleMarker::from_record(record, popup(record)));
    }
    let added = map.markers.len() - before;
    tracing::debug!("Added {} earthquake marker(s)", added);
    added
}
