use chrono::{DateTime, Utc};

use crate::analyzers::rank::{peak_indices, top_n};
use crate::analyzers::types::{
    DAY_NAMES, HotspotReport, ReportLimits, RiskMultipliers, StreetCount, ViolationCount,
};
use crate::analyzers::utility::normalize;
use crate::stats::CitationStats;

/// Entries shown per ranking in the console summary.
const SUMMARY_TOP: usize = 5;

/// Builds the report from final counts, stamped with the current time.
pub fn assemble(stats: &CitationStats, limits: &ReportLimits) -> HotspotReport {
    assemble_at(stats, limits, Utc::now())
}

/// Builds the report from final counts with an explicit generation time.
pub fn assemble_at(
    stats: &CitationStats,
    limits: &ReportLimits,
    generated_at: DateTime<Utc>,
) -> HotspotReport {
    let hour_distribution_normalized = normalize(&stats.hour_counts);
    let day_distribution_normalized = normalize(&stats.day_of_week_counts);

    let top_streets = top_n(&stats.street_counts, limits.top_streets)
        .into_iter()
        .map(|(street, count)| StreetCount { street, count })
        .collect();

    let top_violations = top_n(&stats.violation_counts, limits.top_violations)
        .into_iter()
        .map(|(violation_type, count)| ViolationCount {
            violation_type,
            count,
        })
        .collect();

    HotspotReport {
        generated_at,
        total_citations: stats.total,
        hour_distribution: stats.hour_counts.to_vec(),
        hour_distribution_normalized: hour_distribution_normalized.clone(),
        day_of_week_distribution: stats.day_of_week_counts.to_vec(),
        day_of_week_names: DAY_NAMES,
        day_distribution_normalized: day_distribution_normalized.clone(),
        hour_by_day_of_week: stats
            .hour_by_day_of_week
            .iter()
            .map(|hours| hours.to_vec())
            .collect(),
        top_streets,
        top_violations,
        peak_hours: peak_indices(&stats.hour_counts, limits.peak_hours),
        peak_days: peak_indices(&stats.day_of_week_counts, limits.peak_days),
        risk_multipliers: RiskMultipliers {
            hours: hour_distribution_normalized,
            days: day_distribution_normalized,
        },
    }
}

/// One-line console summaries of a report.
pub fn summary_lines(report: &HotspotReport) -> Vec<String> {
    let peak_days: Vec<&str> = report
        .peak_days
        .iter()
        .filter_map(|&d| report.day_of_week_names.get(d).copied())
        .collect();

    let streets: Vec<&str> = report
        .top_streets
        .iter()
        .take(SUMMARY_TOP)
        .map(|s| s.street.as_str())
        .collect();

    let violations: Vec<&str> = report
        .top_violations
        .iter()
        .take(SUMMARY_TOP)
        .map(|v| v.violation_type.as_str())
        .collect();

    vec![
        format!("Total citations: {}", report.total_citations),
        format!("Peak hours: {:?}", report.peak_hours),
        format!("Peak days: {:?}", peak_days),
        format!("Top {SUMMARY_TOP} streets: {:?}", streets),
        format!("Top {SUMMARY_TOP} violations: {:?}", violations),
    ]
}
