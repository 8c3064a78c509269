//! Seed records for the demo host.
//!
//! A handful of New York points standing in for the data-acquisition
//! layer. Real deployments build the [`RecordStore`] from loaded data and
//! hand it to the same pipeline.

use incident_map_record_models::{
    IncidentCategory, IncidentRecord, RecordStore, VenueCategory, VenueRecord,
};

/// Builds the seed record store. None of the incidents carry an occurrence
/// date, so the time filter passes all of them through.
#[must_use]
pub fn store() -> RecordStore {
    RecordStore::new(
        vec![
            IncidentRecord {
                id: 1,
                category: IncidentCategory::Theft,
                latitude: 40.7128,
                longitude: -74.006,
                severity: 3.0,
                occurred_at: None,
            },
            IncidentRecord {
                id: 2,
                category: IncidentCategory::Assault,
                latitude: 40.73,
                longitude: -73.995,
                severity: 5.0,
                occurred_at: None,
            },
        ],
        vec![
            VenueRecord {
                id: 1,
                name: "Central Park".to_string(),
                category: VenueCategory::Park,
                latitude: 40.7829,
                longitude: -73.9654,
            },
            VenueRecord {
                id: 2,
                name: "Times Square".to_string(),
                category: VenueCategory::Plaza,
                latitude: 40.758,
                longitude: -73.9855,
            },
        ],
    )
}
