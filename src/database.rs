use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock};

use crate::model::EarthquakeRecord;

// In-memory record store shared by the HTTP handlers
#[derive(Clone, Default)]
pub struct QuakeStore {
    records: Arc<RwLock<Vec<EarthquakeRecord>>>,
}

impl QuakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole record set, e.g. after loading a new data file.
    pub fn replace_all(&self, new_records: Vec<EarthquakeRecord>) -> Result<usize> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("Record store lock poisoned"))?;
        *records = new_records;
        Ok(records.len())
    }

    /// All records, newest event first.
    pub fn get_all_records(&self) -> Result<Vec<EarthquakeRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("Record store lock poisoned"))?;
        let mut result = records.clone();
        result.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(result)
    }

    pub fn get_record(&self, id: &str) -> Result<Option<EarthquakeRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("Record store lock poisoned"))?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(id: &str, time: i64) -> EarthquakeRecord {
        EarthquakeRecord {
            id: id.into(),
            magnitude: 1.0,
            depth_km: 1.0,
            longitude: 0.0,
            latitude: 0.0,
            place: String::new(),
            time,
            status: String::new(),
            tsunami: false,
            url: String::new(),
        }
    }

    #[test]
    fn returns_newest_first() {
        let store = QuakeStore::new();
        store
            .replace_all(vec![quake("old", 1), quake("new", 3), quake("mid", 2)])
            .unwrap();
        let ids: Vec<_> = store
            .get_all_records()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn replace_drops_previous_records() {
        let store = QuakeStore::new();
        store.replace_all(vec![quake("a", 1), quake("b", 2)]).unwrap();
        assert_eq!(store.replace_all(vec![quake("c", 3)]).unwrap(), 1);
        assert_eq!(store.get_all_records().unwrap().len(), 1);
        assert!(store.get_record("a").unwrap().is_none());
        assert_eq!(store.get_record("c").unwrap().map(|r| r.time), Some(3));
    }
}
