//! Export and import of counter collections.
//!
//! Export format:
//! ```json
//! {
//!   "exportDate": "2025-02-10T09:15:00Z",
//!   "counters": [
//!     { "mineralName": "Cuarzo", "value": 12, "increment": 1, "color": "#3b82f6",
//!       "createdAt": "2025-02-10T09:00:00Z" }
//!   ]
//! }
//! ```
//!
//! Exported counters carry no `id`. Import accepts the same layout, fills in
//! defaults for missing fields, and ignores any `id` it finds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::counter::{Counter, CounterPatch};
use crate::descriptor::Descriptors;
use crate::error::{ImportError, TallyError};
use crate::palette::DEFAULT_COLOR;

/// A point-in-time snapshot of the collection, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub export_date: DateTime<Utc>,
    pub counters: Vec<ExportedCounter>,
}

/// A counter as it appears in an export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedCounter {
    #[serde(rename = "mineralName")]
    pub label: String,
    pub value: u64,
    pub increment: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u64>,
    pub color: String,
    #[serde(flatten)]
    pub descriptors: Descriptors,
    pub created_at: DateTime<Utc>,
}

impl From<&Counter> for ExportedCounter {
    fn from(counter: &Counter) -> Self {
        Self {
            label: counter.label.clone(),
            value: counter.value,
            increment: counter.increment,
            max_value: counter.max_value,
            color: counter.color.clone(),
            descriptors: counter.descriptors.clone(),
            created_at: counter.created_at,
        }
    }
}

impl ExportSnapshot {
    /// Snapshot `counters` in their current order.
    #[must_use]
    pub fn capture(counters: &[Counter], export_date: DateTime<Utc>) -> Self {
        Self {
            export_date,
            counters: counters.iter().map(ExportedCounter::from).collect(),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TallyError> {
        serde_json::to_string_pretty(self).map_err(|e| TallyError::Serialization(e.to_string()))
    }
}

/// One entry of an import blob. Every field except the name is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    #[serde(rename = "mineralName")]
    pub label: String,
    #[serde(default)]
    pub value: Option<u64>,
    #[serde(default)]
    pub increment: Option<u64>,
    #[serde(default)]
    pub max_value: Option<u64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(flatten)]
    pub descriptors: Descriptors,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ImportEntry {
    /// Build a brand-new counter (fresh id) from this entry.
    ///
    /// Missing `value` → 0, missing or zero `increment` → 1, missing or empty
    /// `color` → [`DEFAULT_COLOR`], missing or unreadable `createdAt` → `now`.
    #[must_use]
    pub fn into_counter(self, now: DateTime<Utc>) -> Counter {
        let created_at = match self.created_at.as_deref() {
            None => now,
            Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
                tracing::warn!(
                    label = %self.label,
                    created_at = raw,
                    "unreadable createdAt in import, using current time"
                );
                now
            }),
        };
        let color = self
            .color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());

        let mut counter = Counter::new(self.label, color, self.descriptors, created_at);
        counter.value = self.value.unwrap_or(0);
        counter.apply(CounterPatch {
            increment: Some(self.increment.unwrap_or(1)),
            max_value: Some(self.max_value),
            ..CounterPatch::default()
        });
        counter
    }
}

/// Read a timestamp as RFC 3339, then as a zone-less date-time or a bare
/// `YYYY-MM-DD` date, both taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse an import blob into its entries without touching any collection.
///
/// # Errors
///
/// - [`ImportError::Malformed`] if the blob is not JSON
/// - [`ImportError::MissingCounters`] if there is no `counters` array
/// - [`ImportError::InvalidEntry`] if an entry is not counter-shaped
pub fn parse_import(raw: &str) -> Result<Vec<ImportEntry>, ImportError> {
    let doc: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ImportError::Malformed(e.to_string()))?;

    let entries = doc
        .get("counters")
        .and_then(serde_json::Value::as_array)
        .ok_or(ImportError::MissingCounters)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<ImportEntry>(entry.clone()).map_err(|e| {
                ImportError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// File name used for exports taken on `date`, e.g. `mineral-counters-2025-02-10.json`.
#[must_use]
pub fn export_file_name(prefix: &str, date: DateTime<Utc>) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}
