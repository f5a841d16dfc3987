//! Citation count buckets.
//!
//! [`CitationStats`] folds parsed rows into hour, weekday, hour-by-weekday,
//! violation and street counters. Counters only ever grow during a run.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::parser::{ParsedCitation, RawRecord, parse_record};

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Label counter that remembers the order labels were first seen in.
///
/// Iteration follows first-seen order, which is what ranking ties fall back on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.index.get(label).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// Citation counts bucketed by time and place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationStats {
    pub total: u64,

    pub hour_counts: [u64; HOURS_PER_DAY],
    pub day_of_week_counts: [u64; DAYS_PER_WEEK],
    pub hour_by_day_of_week: [[u64; HOURS_PER_DAY]; DAYS_PER_WEEK],
    pub violation_counts: CountMap,
    pub street_counts: CountMap,

    // diagnostics
    pub skipped_records: u64,
    pub unparsed_times: u64,
}

impl CitationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and counts every record in input order.
    ///
    /// Rows with too few fields are skipped and counted in `skipped_records`.
    #[tracing::instrument(skip_all, fields(records = records.len(), year = year))]
    pub fn from_records(records: &[RawRecord], year: i32) -> Self {
        let mut s = Self::new();

        for record in records {
            match parse_record(record, year) {
                Some(parsed) => s.accumulate(&parsed),
                None => {
                    debug!(
                        line = record.line,
                        fields = record.fields.len(),
                        "Skipping malformed row"
                    );
                    s.skipped_records += 1;
                }
            }
        }

        if s.unparsed_times * 2 > s.total {
            warn!(
                unparsed = s.unparsed_times,
                total = s.total,
                "Most citations had no readable time and were counted at midnight"
            );
        }

        s
    }

    /// Adds one parsed citation to the buckets.
    pub fn accumulate(&mut self, parsed: &ParsedCitation) {
        let hour = usize::from(parsed.hour);

        self.total += 1;
        self.hour_counts[hour] += 1;

        if !parsed.time_matched {
            self.unparsed_times += 1;
        }

        if let Some(day) = parsed.day_of_week {
            let day = usize::from(day);
            self.day_of_week_counts[day] += 1;
            self.hour_by_day_of_week[day][hour] += 1;
        }

        if let Some(violation) = parsed.violation.as_deref().filter(|v| !v.is_empty()) {
            self.violation_counts.increment(violation);
        }

        if let Some(street) = &parsed.street {
            self.street_counts.increment(street);
        }
    }
}
