#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Derived-view assembly and the rendering-surface boundary.
//!
//! [`DerivedView`] is the complete recomputation of what the dashboard
//! shows for one filter state: the visible record subsets plus the
//! category tallies. It has no identity of its own; hosts throw it away
//! and re-derive on every state change rather than patching it.
//!
//! The [`MapSurface`] and [`ChartSurface`] traits decouple the pipeline
//! from any specific rendering backend. Implementations are provided
//! upstream in crates that choose a rendering strategy; the core only
//! produces typed marker and slice payloads.

use incident_map_color::{Rgb, SeverityScale};
use incident_map_filter_models::{CategoryCount, FilterState};
use incident_map_record_models::{
    IncidentCategory, IncidentRecord, RecordStore, VenueCategory, VenueRecord,
};
use serde::{Deserialize, Serialize};

/// The recomputed visible subsets and aggregate counts for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    /// Incidents passing the category and time filters, in source order.
    pub incidents: Vec<IncidentRecord>,
    /// Venues passing the venue-category filter, in source order.
    pub venues: Vec<VenueRecord>,
    /// Per-category tallies over the full unfiltered incident set, in
    /// category declaration order.
    pub category_counts: Vec<CategoryCount>,
}

impl DerivedView {
    /// Recomputes the view from the record store and the current filter
    /// state. Pure and memo-free; the store is never mutated.
    #[must_use]
    pub fn derive(store: &RecordStore, state: &FilterState) -> Self {
        let incidents = incident_map_filter::visible_incidents(&store.incidents, state);
        let venues = incident_map_filter::visible_venues(&store.venues, state);
        let category_counts = incident_map_filter::category_counts(&store.incidents);
        log::debug!(
            "derived view: {}/{} incidents, {}/{} venues visible",
            incidents.len(),
            store.incidents.len(),
            venues.len(),
            store.venues.len(),
        );
        Self {
            incidents,
            venues,
            category_counts,
        }
    }
}

/// One incident point ready for the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncidentMarker {
    /// Latitude of the point.
    pub latitude: f64,
    /// Longitude of the point.
    pub longitude: f64,
    /// Fill color from the severity scale.
    pub color: Rgb,
    /// Label payload: incident category.
    pub category: IncidentCategory,
    /// Label payload: severity.
    pub severity: f64,
}

/// One venue point ready for the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueMarker {
    /// Latitude of the point.
    pub latitude: f64,
    /// Longitude of the point.
    pub longitude: f64,
    /// Label payload: venue name.
    pub name: String,
    /// Label payload: venue category.
    pub category: VenueCategory,
}

/// One proportional-chart slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// The tallied category.
    pub category: IncidentCategory,
    /// Number of incidents of that category.
    pub count: usize,
    /// Slice fill color.
    pub color: Rgb,
}

/// Builds map markers for the visible incidents, coloring each by
/// `scale.map(severity)`.
#[must_use]
pub fn incident_markers(incidents: &[IncidentRecord], scale: &SeverityScale) -> Vec<IncidentMarker> {
    incidents
        .iter()
        .map(|record| IncidentMarker {
            latitude: record.latitude,
            longitude: record.longitude,
            color: scale.map(record.severity),
            category: record.category,
            severity: record.severity,
        })
        .collect()
}

/// Builds map markers for the visible venues.
#[must_use]
pub fn venue_markers(venues: &[VenueRecord]) -> Vec<VenueMarker> {
    venues
        .iter()
        .map(|record| VenueMarker {
            latitude: record.latitude,
            longitude: record.longitude,
            name: record.name.clone(),
            category: record.category,
        })
        .collect()
}

/// Builds chart slices from category tallies, coloring slice `i` of `n` by
/// sampling the scale at `i / n`. The sampling positions match the
/// reference dashboard so the legend colors line up across clients.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chart_slices(counts: &[CategoryCount], scale: &SeverityScale) -> Vec<ChartSlice> {
    let total = counts.len() as f64;
    counts
        .iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            category: entry.category,
            count: entry.count,
            color: scale.sample(index as f64 / total),
        })
        .collect()
}

/// A map rendering backend. Receives fully-styled point payloads; the core
/// never touches rendering primitives.
pub trait MapSurface {
    /// Draws the incident layer, replacing any previous incident markers.
    fn draw_incidents(&mut self, markers: &[IncidentMarker]);

    /// Draws the venue layer, replacing any previous venue markers.
    fn draw_venues(&mut self, markers: &[VenueMarker]);
}

/// A proportional-chart rendering backend.
pub trait ChartSurface {
    /// Draws the chart, replacing any previous slices.
    fn draw_slices(&mut self, slices: &[ChartSlice]);
}

/// Pushes a derived view to the rendering surfaces.
pub fn render(
    view: &DerivedView,
    scale: &SeverityScale,
    map: &mut dyn MapSurface,
    chart: &mut dyn ChartSurface,
) {
    map.draw_incidents(&incident_markers(&view.incidents, scale));
    map.draw_venues(&venue_markers(&view.venues));
    chart.draw_slices(&chart_slices(&view.category_counts, scale));
}
