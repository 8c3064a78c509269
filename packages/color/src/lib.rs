#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Severity-to-color scale for incident rendering.
//!
//! [`SeverityScale`] is built once over the full incident set at load time
//! and passed explicitly to every consumer. There is no module-level scale:
//! the domain is captured at construction and never re-derived after
//! filtering, so marker colors stay stable while the user narrows the
//! visible set.

use incident_map_record_models::IncidentRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Low-severity endpoint of the default palette.
pub const DEFAULT_LOW: Rgb = Rgb::new(0xff, 0xed, 0xa0);

/// High-severity endpoint of the default palette.
pub const DEFAULT_HIGH: Rgb = Rgb::new(0xf0, 0x3b, 0x20);

/// Errors that can occur while building a severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeverityScaleError {
    /// The scale was built over zero records with a usable severity. The
    /// caller must load records before any record-dependent work; a silent
    /// default domain would color everything arbitrarily.
    #[error("cannot build a severity scale over an empty incident set")]
    EmptyDomain,
}

/// Error returned when parsing a malformed hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {value:?}: expected \"#rrggbb\"")]
pub struct ParseColorError {
    /// The rejected literal.
    pub value: String,
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Creates a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex literal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the literal is not exactly `#` followed
    /// by six hex digits.
    pub fn from_hex(value: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError {
            value: value.to_string(),
        };
        let digits = value.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 {
            return Err(err());
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| err())?;
        Ok(Self { r, g, b })
    }

    /// Formats the color as a `#rrggbb` hex literal.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Interpolate between two colors at `t` in `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(low: Rgb, high: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| f64::from(a).mul_add(1.0 - t, f64::from(b) * t).round() as u8;
    Rgb {
        r: channel(low.r, high.r),
        g: channel(low.g, high.g),
        b: channel(low.b, high.b),
    }
}

/// A deterministic linear mapping from severity to color.
///
/// Severities below the domain minimum clamp to the low endpoint color and
/// severities above the maximum clamp to the high endpoint; [`Self::map`]
/// is total and never fails once the scale is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityScale {
    domain_min: f64,
    domain_max: f64,
    low: Rgb,
    high: Rgb,
}

impl SeverityScale {
    /// Creates a scale over an explicit domain and palette.
    #[must_use]
    pub const fn new(domain_min: f64, domain_max: f64, low: Rgb, high: Rgb) -> Self {
        Self {
            domain_min,
            domain_max,
            low,
            high,
        }
    }

    /// Builds a scale with the default palette over the observed severity
    /// range of the **full** incident set. Call this once at load time,
    /// before any filtering.
    ///
    /// Non-finite severities are skipped when computing the domain.
    ///
    /// # Errors
    ///
    /// Returns [`SeverityScaleError::EmptyDomain`] if no record carries a
    /// finite severity.
    pub fn from_incidents(incidents: &[IncidentRecord]) -> Result<Self, SeverityScaleError> {
        let mut domain: Option<(f64, f64)> = None;
        for record in incidents {
            if !record.severity.is_finite() {
                continue;
            }
            domain = Some(match domain {
                None => (record.severity, record.severity),
                Some((min, max)) => (min.min(record.severity), max.max(record.severity)),
            });
        }
        let (domain_min, domain_max) = domain.ok_or(SeverityScaleError::EmptyDomain)?;
        log::debug!("built severity scale over domain [{domain_min}, {domain_max}]");
        Ok(Self::new(domain_min, domain_max, DEFAULT_LOW, DEFAULT_HIGH))
    }

    /// Lower bound of the severity domain.
    #[must_use]
    pub const fn domain_min(&self) -> f64 {
        self.domain_min
    }

    /// Upper bound of the severity domain.
    #[must_use]
    pub const fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Maps a severity to its display color.
    ///
    /// Inputs outside the domain clamp to the nearest endpoint color. A
    /// collapsed domain (every record at one severity) maps all inputs to
    /// the midpoint color.
    #[must_use]
    pub fn map(&self, severity: f64) -> Rgb {
        let span = self.domain_max - self.domain_min;
        let t = if span > 0.0 {
            (severity - self.domain_min) / span
        } else {
            0.5
        };
        lerp(self.low, self.high, t)
    }

    /// Color at a normalized position of the range, independent of the
    /// severity domain. The chart boundary samples this at
    /// `index / category-count` to color its slices.
    #[must_use]
    pub fn sample(&self, fraction: f64) -> Rgb {
        lerp(self.low, self.high, fraction)
    }
}
