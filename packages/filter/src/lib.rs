#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pure filter-and-derive engine.
//!
//! Every function here is a synchronous, non-blocking transformation over
//! in-memory records: no I/O, no shared mutable state, no subscription
//! model. The host framework invokes a derivation whenever the filter state
//! changes and re-renders from the result.

pub mod slider;
pub mod transition;

use incident_map_filter_models::{CategoryCount, FilterState};
use incident_map_record_models::{IncidentCategory, IncidentRecord, VenueRecord};

/// Derives the incidents visible under the current filter state.
///
/// A record is kept iff its category passes the incident selection and its
/// occurrence date (when present) lies within the time window, inclusive.
/// Records without an occurrence date are **never** excluded by the time
/// filter; the seed data carries no dates, and silently dropping dateless
/// records would blank the map. Input order is preserved.
#[must_use]
pub fn visible_incidents(incidents: &[IncidentRecord], state: &FilterState) -> Vec<IncidentRecord> {
    incidents
        .iter()
        .filter(|record| {
            state.incident_category.matches(&record.category)
                && record
                    .occurred_at
                    .is_none_or(|date| state.time_window.contains(date))
        })
        .cloned()
        .collect()
}

/// Derives the venues visible under the current filter state.
///
/// Venues are filtered by category only; they are not time-stamped events
/// and the time window never applies to them.
#[must_use]
pub fn visible_venues(venues: &[VenueRecord], state: &FilterState) -> Vec<VenueRecord> {
    venues
        .iter()
        .filter(|record| state.venue_category.matches(&record.category))
        .cloned()
        .collect()
}

/// Tallies incidents per category, one entry per [`IncidentCategory`] in
/// declaration order.
///
/// Callers pass the **full unfiltered** incident set: the statistics panel
/// shows the overall distribution regardless of the active category filter,
/// matching the reference dashboard. Passing a filtered set instead would
/// make the chart collapse to a single slice whenever one category is
/// selected.
#[must_use]
pub fn category_counts(incidents: &[IncidentRecord]) -> Vec<CategoryCount> {
    IncidentCategory::all()
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: incidents
                .iter()
                .filter(|record| record.category == category)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use incident_map_filter_models::{CategorySelection, TimeWindow};
    use incident_map_record_models::VenueCategory;

    fn incident(id: u64, category: IncidentCategory, occurred_at: Option<NaiveDate>) -> IncidentRecord {
        IncidentRecord {
            id,
            category,
            latitude: 40.7128,
            longitude: -74.006,
            severity: 3.0,
            occurred_at,
        }
    }

    fn venue(id: u64, name: &str, category: VenueCategory) -> VenueRecord {
        VenueRecord {
            id,
            name: name.to_string(),
            category,
            latitude: 40.7829,
            longitude: -73.9654,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed_incidents() -> Vec<IncidentRecord> {
        vec![
            incident(1, IncidentCategory::Theft, None),
            incident(2, IncidentCategory::Assault, None),
        ]
    }

    #[test]
    fn all_selection_returns_input_unchanged() {
        let incidents = seed_incidents();
        let state = FilterState::default();
        assert_eq!(visible_incidents(&incidents, &state), incidents);
    }

    #[test]
    fn category_selection_keeps_only_matching_records() {
        let incidents = seed_incidents();
        let state = FilterState {
            incident_category: CategorySelection::Only(IncidentCategory::Theft),
            ..FilterState::default()
        };
        let visible = visible_incidents(&incidents, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn filtered_output_is_a_subset_in_input_order() {
        let incidents = vec![
            incident(1, IncidentCategory::Robbery, None),
            incident(2, IncidentCategory::Theft, None),
            incident(3, IncidentCategory::Robbery, None),
        ];
        let state = FilterState {
            incident_category: CategorySelection::Only(IncidentCategory::Robbery),
            ..FilterState::default()
        };
        let visible = visible_incidents(&incidents, &state);
        assert_eq!(visible.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 3]);
        for record in &visible {
            assert!(incidents.contains(record));
        }
    }

    #[test]
    fn time_window_excludes_out_of_window_dates() {
        let incidents = vec![
            incident(1, IncidentCategory::Theft, Some(date(2023, 3, 10))),
            incident(2, IncidentCategory::Theft, Some(date(2023, 11, 5))),
        ];
        let state = FilterState {
            time_window: TimeWindow::new(date(2023, 1, 1), date(2023, 6, 30)).unwrap(),
            ..FilterState::default()
        };
        let visible = visible_incidents(&incidents, &state);
        assert_eq!(visible.iter().map(|r| r.id).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn time_window_bounds_are_inclusive() {
        let incidents = vec![
            incident(1, IncidentCategory::Theft, Some(date(2023, 1, 1))),
            incident(2, IncidentCategory::Theft, Some(date(2023, 6, 30))),
        ];
        let state = FilterState {
            time_window: TimeWindow::new(date(2023, 1, 1), date(2023, 6, 30)).unwrap(),
            ..FilterState::default()
        };
        assert_eq!(visible_incidents(&incidents, &state).len(), 2);
    }

    #[test]
    fn dateless_records_pass_the_time_filter() {
        let incidents = vec![incident(1, IncidentCategory::Theft, None)];
        let state = FilterState {
            time_window: TimeWindow::new(date(2023, 6, 1), date(2023, 6, 2)).unwrap(),
            ..FilterState::default()
        };
        assert_eq!(visible_incidents(&incidents, &state).len(), 1);
    }

    #[test]
    fn venues_ignore_the_time_window() {
        let venues = vec![venue(1, "Central Park", VenueCategory::Park)];
        let state = FilterState {
            time_window: TimeWindow::new(date(2023, 6, 1), date(2023, 6, 2)).unwrap(),
            ..FilterState::default()
        };
        assert_eq!(visible_venues(&venues, &state).len(), 1);
    }

    #[test]
    fn venue_selection_keeps_only_matching_venues() {
        let venues = vec![
            venue(1, "Central Park", VenueCategory::Park),
            venue(2, "Times Square", VenueCategory::Plaza),
        ];
        let state = FilterState {
            venue_category: CategorySelection::Only(VenueCategory::Plaza),
            ..FilterState::default()
        };
        let visible = visible_venues(&venues, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Times Square");
    }

    #[test]
    fn counts_follow_category_declaration_order() {
        let counts = category_counts(&seed_incidents());
        assert_eq!(
            counts.iter().map(|c| c.category).collect::<Vec<_>>(),
            IncidentCategory::all()
        );
    }

    #[test]
    fn counts_sum_to_the_record_total() {
        let incidents = vec![
            incident(1, IncidentCategory::Theft, None),
            incident(2, IncidentCategory::Theft, None),
            incident(3, IncidentCategory::Burglary, None),
        ];
        let counts = category_counts(&incidents);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), incidents.len());
    }

    #[test]
    fn counts_are_independent_of_the_active_filter() {
        // The statistics panel tallies the full set even while a single
        // category is selected on the map.
        let incidents = seed_incidents();
        let state = FilterState {
            incident_category: CategorySelection::Only(IncidentCategory::Theft),
            ..FilterState::default()
        };
        let visible = visible_incidents(&incidents, &state);
        assert_eq!(visible.len(), 1);
        let counts = category_counts(&incidents);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 2);
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let counts = category_counts(&[]);
        assert_eq!(counts.len(), IncidentCategory::all().len());
        assert!(counts.iter().all(|c| c.count == 0));
    }
}
