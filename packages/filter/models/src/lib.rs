#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Filter state and aggregate-count definitions.
//!
//! [`FilterState`] is the complete set of user-chosen constraints at one
//! moment. It carries no behavior beyond construction and field access; the
//! derivation and transition logic lives in `incident_map_filter`. The state
//! is a plain value: each user interaction replaces it wholesale, and every
//! derived view is recomputed from scratch against the current value.

use std::str::FromStr;

use chrono::NaiveDate;
use incident_map_record_models::{IncidentCategory, UnknownCategoryError, VenueCategory};
use serde::{Deserialize, Serialize};

/// Start of the default time window when the host supplies no bounds.
pub const DEFAULT_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => unreachable!(),
};

/// End of the default time window when the host supplies no bounds.
pub const DEFAULT_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2023, 12, 31) {
    Some(date) => date,
    None => unreachable!(),
};

/// A category constraint: either everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySelection<C> {
    /// No category constraint.
    All,
    /// Only records of the given category.
    Only(C),
}

impl<C: PartialEq> CategorySelection<C> {
    /// Returns `true` if a record of `category` passes this selection.
    #[must_use]
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl<C> CategorySelection<C>
where
    C: FromStr,
{
    /// Parses a control-widget selection string.
    ///
    /// `"All"` (case-insensitive) selects everything; any other value must
    /// be a canonical category name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategoryError`] if the string is neither `"All"` nor
    /// a declared category.
    pub fn parse(value: &str) -> Result<Self, UnknownCategoryError> {
        if value.eq_ignore_ascii_case("All") {
            return Ok(Self::All);
        }
        C::from_str(value)
            .map(Self::Only)
            .map_err(|_| UnknownCategoryError {
                value: value.to_string(),
            })
    }
}

/// Error returned when a [`TimeWindow`] is constructed with `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindowError {
    /// The offending start date.
    pub start: NaiveDate,
    /// The offending end date.
    pub end: NaiveDate,
}

impl std::fmt::Display for InvalidWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid time window: start {} is after end {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidWindowError {}

/// An inclusive date interval with `start <= end`.
///
/// The invariant is enforced at construction, so holders never need to
/// re-check ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeWindow {
    /// Creates a window from ordered bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWindowError`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidWindowError> {
        if start > end {
            return Err(InvalidWindowError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive end of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` lies within the window, inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
        }
    }
}

/// The current user-chosen constraints narrowing the visible records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Incident-category constraint for the map and incident list.
    pub incident_category: CategorySelection<IncidentCategory>,
    /// Venue-category constraint for the venue overlay.
    pub venue_category: CategorySelection<VenueCategory>,
    /// Occurrence-date constraint for incidents. Venues are not
    /// time-stamped events and are never subject to it.
    pub time_window: TimeWindow,
}

impl Default for FilterState {
    /// Initial state: all categories visible over the default window.
    fn default() -> Self {
        Self {
            incident_category: CategorySelection::All,
            venue_category: CategorySelection::All,
            time_window: TimeWindow::default(),
        }
    }
}

/// A single incident-category tally for the statistics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The tallied category.
    pub category: IncidentCategory,
    /// Number of incidents of that category.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_matches_everything() {
        let selection: CategorySelection<IncidentCategory> = CategorySelection::All;
        for category in IncidentCategory::all() {
            assert!(selection.matches(category));
        }
    }

    #[test]
    fn only_selection_matches_exactly_one() {
        let selection = CategorySelection::Only(IncidentCategory::Theft);
        assert!(selection.matches(&IncidentCategory::Theft));
        assert!(!selection.matches(&IncidentCategory::Assault));
    }

    #[test]
    fn parses_all_case_insensitively() {
        let selection: CategorySelection<VenueCategory> =
            CategorySelection::parse("all").unwrap();
        assert_eq!(selection, CategorySelection::All);
    }

    #[test]
    fn parses_category_name() {
        let selection: CategorySelection<VenueCategory> =
            CategorySelection::parse("Museum").unwrap();
        assert_eq!(selection, CategorySelection::Only(VenueCategory::Museum));
    }

    #[test]
    fn rejects_unknown_selection() {
        let err = CategorySelection::<IncidentCategory>::parse("Loitering").unwrap_err();
        assert_eq!(err.value, "Loitering");
    }

    #[test]
    fn window_rejects_reversed_bounds() {
        let err = TimeWindow::new(DEFAULT_WINDOW_END, DEFAULT_WINDOW_START).unwrap_err();
        assert_eq!(err.start, DEFAULT_WINDOW_END);
    }

    #[test]
    fn window_contains_is_inclusive() {
        let window = TimeWindow::default();
        assert!(window.contains(DEFAULT_WINDOW_START));
        assert!(window.contains(DEFAULT_WINDOW_END));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }

    #[test]
    fn default_state_selects_everything() {
        let state = FilterState::default();
        assert_eq!(state.incident_category, CategorySelection::All);
        assert_eq!(state.venue_category, CategorySelection::All);
        assert_eq!(state.time_window.start(), DEFAULT_WINDOW_START);
        assert_eq!(state.time_window.end(), DEFAULT_WINDOW_END);
    }
}
