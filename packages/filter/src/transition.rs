//! Filter-state transitions.
//!
//! A single-state machine: the current [`FilterState`] tuple plus three
//! inputs, one per control widget. Each transition replaces exactly one
//! field and produces a whole new state; nothing is mutated in place and
//! there is no terminal state.

use incident_map_filter_models::{CategorySelection, FilterState, TimeWindow};
use incident_map_record_models::{IncidentCategory, VenueCategory};

use crate::slider::{self, InvalidRangeError};

/// A control-widget input driving one filter-state transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterEvent {
    /// The incident-category select emitted a new selection.
    SetIncidentCategory(CategorySelection<IncidentCategory>),
    /// The venue-category select emitted a new selection.
    SetVenueCategory(CategorySelection<VenueCategory>),
    /// The date-range slider emitted a new percentage pair.
    SetTimeWindow {
        /// Low thumb position, 0-100.
        low_pct: f64,
        /// High thumb position, 0-100.
        high_pct: f64,
    },
}

/// Applies one event to `state`, producing the next state.
///
/// `bounds` are the host-configured slider date bounds; they only matter
/// for [`FilterEvent::SetTimeWindow`]. The untouched fields carry over
/// verbatim, with no cross-field side effects.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] if a `SetTimeWindow` event carries an
/// out-of-bounds or out-of-order percentage pair; the prior state remains
/// valid in that case.
pub fn apply(
    state: &FilterState,
    event: &FilterEvent,
    bounds: &TimeWindow,
) -> Result<FilterState, InvalidRangeError> {
    let next = match *event {
        FilterEvent::SetIncidentCategory(selection) => FilterState {
            incident_category: selection,
            ..*state
        },
        FilterEvent::SetVenueCategory(selection) => FilterState {
            venue_category: selection,
            ..*state
        },
        FilterEvent::SetTimeWindow { low_pct, high_pct } => FilterState {
            time_window: slider::slider_to_window(low_pct, high_pct, bounds)?,
            ..*state
        },
    };
    log::trace!("filter transition {event:?} -> {next:?}");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_event_touches_only_the_incident_field() {
        let state = FilterState::default();
        let next = apply(
            &state,
            &FilterEvent::SetIncidentCategory(CategorySelection::Only(IncidentCategory::Assault)),
            &TimeWindow::default(),
        )
        .unwrap();
        assert_eq!(
            next.incident_category,
            CategorySelection::Only(IncidentCategory::Assault)
        );
        assert_eq!(next.venue_category, state.venue_category);
        assert_eq!(next.time_window, state.time_window);
    }

    #[test]
    fn venue_event_touches_only_the_venue_field() {
        let state = FilterState::default();
        let next = apply(
            &state,
            &FilterEvent::SetVenueCategory(CategorySelection::Only(VenueCategory::Library)),
            &TimeWindow::default(),
        )
        .unwrap();
        assert_eq!(
            next.venue_category,
            CategorySelection::Only(VenueCategory::Library)
        );
        assert_eq!(next.incident_category, state.incident_category);
        assert_eq!(next.time_window, state.time_window);
    }

    #[test]
    fn window_event_touches_only_the_window_field() {
        let state = FilterState {
            incident_category: CategorySelection::Only(IncidentCategory::Theft),
            ..FilterState::default()
        };
        let next = apply(
            &state,
            &FilterEvent::SetTimeWindow {
                low_pct: 0.0,
                high_pct: 50.0,
            },
            &TimeWindow::default(),
        )
        .unwrap();
        assert_eq!(next.incident_category, state.incident_category);
        assert_eq!(next.venue_category, state.venue_category);
        assert_eq!(next.time_window.start(), TimeWindow::default().start());
        assert!(next.time_window.end() < TimeWindow::default().end());
    }

    #[test]
    fn invalid_window_event_leaves_no_partial_state() {
        let state = FilterState::default();
        let result = apply(
            &state,
            &FilterEvent::SetTimeWindow {
                low_pct: 90.0,
                high_pct: 10.0,
            },
            &TimeWindow::default(),
        );
        assert!(result.is_err());
        // The caller still holds the untouched prior state.
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn transitions_compose() {
        let bounds = TimeWindow::default();
        let mut state = FilterState::default();
        for event in [
            FilterEvent::SetIncidentCategory(CategorySelection::Only(IncidentCategory::Robbery)),
            FilterEvent::SetVenueCategory(CategorySelection::Only(VenueCategory::Park)),
            FilterEvent::SetTimeWindow {
                low_pct: 25.0,
                high_pct: 75.0,
            },
        ] {
            state = apply(&state, &event, &bounds).unwrap();
        }
        assert_eq!(
            state.incident_category,
            CategorySelection::Only(IncidentCategory::Robbery)
        );
        assert_eq!(
            state.venue_category,
            CategorySelection::Only(VenueCategory::Park)
        );
        assert!(state.time_window.start() > bounds.start());
        assert!(state.time_window.end() < bounds.end());
    }
}
