#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record types and category taxonomies for the incident map.
//!
//! This crate defines the canonical incident and venue record shapes that
//! the rest of the system derives from. The record store is populated once
//! by the data-acquisition layer at startup and never mutated; every
//! downstream computation is a pure function over these types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Category of a reported incident.
///
/// The declaration order is load-bearing: the statistics chart emits one
/// slice per category in this order, so reordering variants reorders the
/// chart legend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum IncidentCategory {
    /// Taking of property without force
    Theft,
    /// Physical attack on a person
    Assault,
    /// Unlawful entry to commit theft
    Burglary,
    /// Taking property by force or threat
    Robbery,
}

impl IncidentCategory {
    /// Returns all variants in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Theft, Self::Assault, Self::Burglary, Self::Robbery]
    }
}

/// Category of a public venue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum VenueCategory {
    /// Public green space
    Park,
    /// Open public square
    Plaza,
    /// Museum or gallery
    Museum,
    /// Public library
    Library,
}

impl VenueCategory {
    /// Returns all variants in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Park, Self::Plaza, Self::Museum, Self::Library]
    }
}

/// Error returned when a category string from a control widget falls outside
/// the declared taxonomy. The taxonomy is closed: unknown values are rejected
/// at the parse boundary rather than widening the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError {
    /// The unrecognized category string.
    pub value: String,
}

impl std::fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category {:?}", self.value)
    }
}

impl std::error::Error for UnknownCategoryError {}

/// A single reported incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Unique identifier.
    pub id: u64,
    /// Incident category.
    pub category: IncidentCategory,
    /// Latitude (WGS84, -90 to 90).
    pub latitude: f64,
    /// Longitude (WGS84, -180 to 180).
    pub longitude: f64,
    /// Severity. Unbounded, but sources report a small positive range.
    pub severity: f64,
    /// Occurrence date. Seed data carries no dates; the time filter treats
    /// a missing date as pass-through.
    pub occurred_at: Option<NaiveDate>,
}

/// A single point-of-interest venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Venue category.
    pub category: VenueCategory,
    /// Latitude (WGS84, -90 to 90).
    pub latitude: f64,
    /// Longitude (WGS84, -180 to 180).
    pub longitude: f64,
}

/// Immutable in-memory record collections.
///
/// Populated once by the data-acquisition collaborator. An empty store is a
/// legal "records not yet loaded" state everywhere except severity-scale
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordStore {
    /// All incident records, in source order.
    pub incidents: Vec<IncidentRecord>,
    /// All venue records, in source order.
    pub venues: Vec<VenueRecord>,
}

impl RecordStore {
    /// Creates a store from loaded record sequences.
    #[must_use]
    pub const fn new(incidents: Vec<IncidentRecord>, venues: Vec<VenueRecord>) -> Self {
        Self { incidents, venues }
    }
}
