#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Demo host for the incident-map pipeline.
//!
//! Plays the role of the dashboard shell: it owns the seed record store,
//! turns command-line flags into filter events, runs the derivation, and
//! renders the result to text (or JSON) surfaces. Everything record-shaped
//! flows through the same pipeline a real map frontend would use.

mod seed;

use clap::Parser;
use incident_map_color::SeverityScale;
use incident_map_filter::transition::{self, FilterEvent};
use incident_map_filter_models::{CategorySelection, FilterState, TimeWindow};
use incident_map_record_models::{IncidentCategory, VenueCategory};
use incident_map_view::{
    ChartSlice, ChartSurface, DerivedView, IncidentMarker, MapSurface, VenueMarker,
};
use serde::Serialize;

/// Render the incident map for one filter configuration.
#[derive(Debug, Parser)]
#[command(name = "incident_map_cli")]
struct Args {
    /// Incident category to show ("All" or a category name).
    #[arg(long, default_value = "All")]
    incident_category: String,

    /// Venue category to show ("All" or a category name).
    #[arg(long, default_value = "All")]
    venue_category: String,

    /// Date-range slider pair as percentages, e.g. "0,100".
    #[arg(long, value_parser = parse_range, default_value = "0,100")]
    range: (f64, f64),

    /// Emit the derived view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn parse_range(value: &str) -> Result<(f64, f64), String> {
    let (low, high) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LOW,HIGH, got {value:?}"))?;
    let low = low
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad low value: {e}"))?;
    let high = high
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad high value: {e}"))?;
    Ok((low, high))
}

/// Text renderer for both surfaces.
struct TextSurfaces;

impl MapSurface for TextSurfaces {
    fn draw_incidents(&mut self, markers: &[IncidentMarker]) {
        println!("Incidents ({}):", markers.len());
        for marker in markers {
            println!(
                "  {} severity {} at ({:.4}, {:.4}) {}",
                marker.category, marker.severity, marker.latitude, marker.longitude, marker.color,
            );
        }
    }

    fn draw_venues(&mut self, markers: &[VenueMarker]) {
        println!("Venues ({}):", markers.len());
        for marker in markers {
            println!(
                "  {} ({}) at ({:.4}, {:.4})",
                marker.name, marker.category, marker.latitude, marker.longitude,
            );
        }
    }
}

impl ChartSurface for TextSurfaces {
    fn draw_slices(&mut self, slices: &[ChartSlice]) {
        println!("Statistics:");
        for slice in slices {
            println!("  {} {} {}", slice.category, slice.count, slice.color);
        }
    }
}

/// JSON payload mirroring what the map and chart surfaces receive.
#[derive(Serialize)]
struct JsonOutput {
    incidents: Vec<IncidentMarker>,
    venues: Vec<VenueMarker>,
    chart: Vec<ChartSlice>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();
    let store = seed::store();

    // The scale is built once over the full set, before any filtering.
    let scale = SeverityScale::from_incidents(&store.incidents)?;

    let bounds = TimeWindow::default();
    let events = [
        FilterEvent::SetIncidentCategory(CategorySelection::<IncidentCategory>::parse(
            &args.incident_category,
        )?),
        FilterEvent::SetVenueCategory(CategorySelection::<VenueCategory>::parse(
            &args.venue_category,
        )?),
        FilterEvent::SetTimeWindow {
            low_pct: args.range.0,
            high_pct: args.range.1,
        },
    ];

    let mut state = FilterState::default();
    for event in &events {
        state = transition::apply(&state, event, &bounds)?;
    }
    log::info!(
        "showing {} through {}",
        state.time_window.start(),
        state.time_window.end()
    );

    let view = DerivedView::derive(&store, &state);

    if args.json {
        let output = JsonOutput {
            incidents: incident_map_view::incident_markers(&view.incidents, &scale),
            venues: incident_map_view::venue_markers(&view.venues),
            chart: incident_map_view::chart_slices(&view.category_counts, &scale),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut map = TextSurfaces;
        let mut chart = TextSurfaces;
        incident_map_view::render(&view, &scale, &mut map, &mut chart);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_pairs() {
        assert_eq!(parse_range("0,100").unwrap(), (0.0, 100.0));
        assert_eq!(parse_range("25, 75").unwrap(), (25.0, 75.0));
    }

    #[test]
    fn rejects_malformed_range() {
        assert!(parse_range("50").is_err());
        assert!(parse_range("a,b").is_err());
    }
}
