//! Dashboard input: the widget map and typed, defaulted widget views.
//!
//! The fetch layer delivers a JSON document with a `widgets` object. Any widget
//! can be missing, error-flagged, or carry fields of the wrong type. This module
//! never rejects input. It exposes one accessor, [`WidgetRecord`], whose
//! `*_or` methods substitute a default when a field is absent or malformed,
//! and builds every typed view from it so all renderers share the same defaults.
//!
//! # Document Shape
//!
//! ```json
//! { "timestamp": "2026-10-19T20:30:00+00:00",
//!   "widgets": {
//!     "sun":     { "sunrise": "07:21", "sunset": "18:02" },
//!     "moon":    { "name": "Waxing Gibbous", "age_days": 10.4, "illumination_pct": 78.2 },
//!     "planets": { "planets": [ { "name": "Jupiter", "dir": "E" } ] },
//!     "aurora":  { "nt": 42, "level": "LOW", "status_color": "green" },
//!     "iss":     { "time": "19:42", "date": "20 Oct", "max_alt": 54,
//!                  "rise_dir": "W", "set_dir": "SE", "duration_min": 6 } } }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::SYNODIC_MONTH_DAYS;
use crate::error::Result;

// =============================================================================
// Document
// =============================================================================

/// The envelope written by the data server.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Document {
    /// ISO-8601 generation time. Informational only.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Widget map. Anything other than an object is treated as empty.
    #[serde(default)]
    pub widgets: Value,
}

/// The widgets of one fetch cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    widgets: Map<String, Value>,
}

impl DashboardData {
    /// Wrap an already-extracted widget map.
    pub fn from_widgets(widgets: Map<String, Value>) -> Self { Self { widgets } }

    /// Parse a full document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(text)?;
        Ok(Self::from(document))
    }

    /// Read and parse a document file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let document: Document = serde_json::from_str(&text)?;
        debug!(
            path = %path.as_ref().display(),
            timestamp = document.timestamp.as_deref().unwrap_or("none"),
            "dashboard document loaded"
        );
        Ok(Self::from(document))
    }

    /// Raw value stored under a widget key.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&Value> {
        self.widgets.get(key)
    }

    /// Number of widget keys present, including malformed ones.
    pub fn len(&self) -> usize { self.widgets.len() }

    /// Whether the widget map is empty.
    pub fn is_empty(&self) -> bool { self.widgets.is_empty() }
}

impl From<Document> for DashboardData {
    fn from(document: Document) -> Self {
        match document.widgets {
            Value::Object(widgets) => Self { widgets },
            _ => Self::default(),
        }
    }
}

impl From<Value> for DashboardData {
    /// Accepts either a full document (`{"widgets": {...}}`) or the bare widget map.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove("widgets") {
                Some(Value::Object(widgets)) => Self { widgets },
                Some(_) => Self::default(),
                None => Self { widgets: map },
            },
            _ => Self::default(),
        }
    }
}

// =============================================================================
// Widget Kinds
// =============================================================================

/// The five data-driven widgets, in dispatch order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WidgetKind {
    Sun,
    Moon,
    Planets,
    Aurora,
    Iss,
}

impl WidgetKind {
    /// All kinds in dispatch order.
    pub const ALL: [Self; 5] = [Self::Sun, Self::Moon, Self::Planets, Self::Aurora, Self::Iss];

    /// Key of this widget in the document's widget map.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Planets => "planets",
            Self::Aurora => "aurora",
            Self::Iss => "iss",
        }
    }
}

// =============================================================================
// Uniform Field Accessor
// =============================================================================

/// Read-only view of one JSON object with value-or-default accessors.
///
/// A record built from a non-object value behaves like an empty object, so
/// every accessor returns its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidgetRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> WidgetRecord<'a> {
    /// View `value` as a record.
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Whether the underlying value was a JSON object.
    pub fn is_object(&self) -> bool { self.fields.is_some() }

    /// Raw field value. JSON `null` reads as absent.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&'a Value> {
        self.fields?.get(key).filter(|v| !v.is_null())
    }

    /// Whether the record carries an error indicator.
    ///
    /// Any `error` value other than `null` or `false` counts; the data server
    /// writes the failure message as a string.
    pub fn is_error_flagged(&self) -> bool { self.get("error").is_some_and(|v| v.as_bool() != Some(false)) }

    /// String field, or `default` when absent or not a string.
    pub fn str_or(
        &self,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Numeric field as `f32`, or `default` when absent or not a number.
    pub fn f32_or(
        &self,
        key: &str,
        default: f32,
    ) -> f32 {
        self.get(key).and_then(Value::as_f64).map_or(default, |v| v as f32)
    }

    /// Integer field, or `None` when absent or not a number.
    ///
    /// Fractional numbers round to the nearest integer and saturate at the
    /// `i32` range.
    pub fn opt_i32(
        &self,
        key: &str,
    ) -> Option<i32> {
        let value = self.get(key)?;
        if let Some(i) = value.as_i64() {
            return Some(i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
        }
        value.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i32)
    }

    /// Integer field, or `default` when absent or not a number.
    pub fn i32_or(
        &self,
        key: &str,
        default: i32,
    ) -> i32 {
        self.opt_i32(key).unwrap_or(default)
    }

    /// Array field, or `None` when absent or not an array.
    pub fn list(
        &self,
        key: &str,
    ) -> Option<&'a [Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }
}

// =============================================================================
// Typed Widget Views
// =============================================================================

/// Default shown for any missing clock time.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Default shown for any missing short string.
pub const UNKNOWN: &str = "?";

/// Sunrise and sunset.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SunWidget<'a> {
    pub sunrise: &'a str,
    pub sunset: &'a str,
}

impl<'a> SunWidget<'a> {
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        Self {
            sunrise: record.str_or("sunrise", TIME_PLACEHOLDER),
            sunset: record.str_or("sunset", TIME_PLACEHOLDER),
        }
    }
}

/// Moon phase name, illumination and age.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MoonWidget<'a> {
    pub name: &'a str,
    pub illumination_pct: f32,
    pub age_days: f32,
}

impl<'a> MoonWidget<'a> {
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        Self {
            name: record.str_or("name", "Unknown"),
            illumination_pct: record.f32_or("illumination_pct", 0.0),
            age_days: record.f32_or("age_days", 0.0),
        }
    }

    /// Elapsed fraction of the synodic month, always in `[0, 1)`.
    pub fn phase_fraction(&self) -> f32 { phase_fraction(self.age_days) }
}

/// Normalize a moon age in days to a phase fraction in `[0, 1)`.
pub fn phase_fraction(age_days: f32) -> f32 {
    if !age_days.is_finite() {
        return 0.0;
    }
    let frac = age_days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    // rem_euclid can round up to exactly the modulus for tiny negative ages
    if frac >= 1.0 { 0.0 } else { frac }
}

/// One visible planet.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlanetEntry<'a> {
    pub name: &'a str,
    pub direction: &'a str,
}

impl<'a> PlanetEntry<'a> {
    /// Direction is read from `dir` (server key), then `direction`.
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        let direction = record
            .get("dir")
            .and_then(Value::as_str)
            .unwrap_or_else(|| record.str_or("direction", UNKNOWN));
        Self {
            name: record.str_or("name", UNKNOWN),
            direction,
        }
    }
}

/// Planets visible tonight. The list is nested under the widget's own
/// `planets` key.
#[derive(Clone, Copy, Debug)]
pub struct PlanetsWidget<'a> {
    entries: Option<&'a [Value]>,
}

impl<'a> PlanetsWidget<'a> {
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        Self {
            entries: record.list("planets"),
        }
    }

    /// Whether the nested list is present.
    pub fn has_list(&self) -> bool { self.entries.is_some() }

    /// Number of listed planets, before the render cap.
    pub fn count(&self) -> usize { self.entries.map_or(0, <[Value]>::len) }

    /// Listed planets in order.
    pub fn entries(&self) -> impl Iterator<Item = PlanetEntry<'a>> + 'a {
        self.entries
            .unwrap_or(&[])
            .iter()
            .map(|v| PlanetEntry::from_record(&WidgetRecord::new(v)))
    }
}

/// AuroraWatch alert colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusColor {
    Green,
    Yellow,
    Amber,
    Red,
    Unrecognized,
}

impl StatusColor {
    /// Exact, case-sensitive match on the server's status id.
    pub fn parse(value: &str) -> Self {
        match value {
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "amber" => Self::Amber,
            "red" => Self::Red,
            _ => Self::Unrecognized,
        }
    }

    /// Whether this colour warrants the severity bar.
    pub const fn is_elevated(self) -> bool { matches!(self, Self::Amber | Self::Red) }
}

/// Geomagnetic activity.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AuroraWidget<'a> {
    pub level: &'a str,
    /// Magnetometer reading in nanotesla; `None` when absent or non-numeric.
    pub nt: Option<i32>,
    pub status_color: StatusColor,
}

impl<'a> AuroraWidget<'a> {
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        Self {
            level: record.str_or("level", UNKNOWN),
            nt: record.opt_i32("nt"),
            status_color: StatusColor::parse(record.str_or("status_color", "green")),
        }
    }
}

/// Next visible ISS pass.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IssWidget<'a> {
    pub time: &'a str,
    pub date: &'a str,
    pub max_alt: i32,
    pub rise_dir: &'a str,
    pub set_dir: &'a str,
    pub duration_min: i32,
}

impl<'a> IssWidget<'a> {
    pub fn from_record(record: &WidgetRecord<'a>) -> Self {
        Self {
            time: record.str_or("time", TIME_PLACEHOLDER),
            date: record.str_or("date", UNKNOWN),
            max_alt: record.i32_or("max_alt", 0),
            rise_dir: record.str_or("rise_dir", UNKNOWN),
            set_dir: record.str_or("set_dir", UNKNOWN),
            duration_min: record.i32_or("duration_min", 0),
        }
    }
}
