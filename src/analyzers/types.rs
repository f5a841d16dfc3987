//! Data types produced by the report pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Day names indexed by weekday number, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// How many entries each ranking keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub top_streets: usize,
    pub top_violations: usize,
    pub peak_hours: usize,
    pub peak_days: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_streets: 100,
            top_violations: 20,
            peak_hours: 6,
            peak_days: 3,
        }
    }
}

/// A street and the number of citations written on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreetCount {
    pub street: String,
    pub count: u64,
}

/// A violation type and how often it was cited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationCount {
    #[serde(rename = "type")]
    pub violation_type: String,
    pub count: u64,
}

/// Normalized hour and day weights for downstream risk scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMultipliers {
    pub hours: Vec<f64>,
    pub days: Vec<f64>,
}

/// The citation hotspot report, written once per run as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotReport {
    pub generated_at: DateTime<Utc>,
    pub total_citations: u64,
    pub hour_distribution: Vec<u64>,
    pub hour_distribution_normalized: Vec<f64>,
    pub day_of_week_distribution: Vec<u64>,
    pub day_of_week_names: [&'static str; 7],
    pub day_distribution_normalized: Vec<f64>,
    pub hour_by_day_of_week: Vec<Vec<u64>>,
    pub top_streets: Vec<StreetCount>,
    pub top_violations: Vec<ViolationCount>,
    pub peak_hours: Vec<usize>,
    pub peak_days: Vec<usize>,
    pub risk_multipliers: RiskMultipliers,
}
