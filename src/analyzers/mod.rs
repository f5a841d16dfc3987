//! Ranking, normalization and report assembly.
//!
//! Everything in here is a pure function of the final [`crate::stats::CitationStats`]:
//! top-N rankings, peak buckets, 0–1 distributions, and the composed
//! [`types::HotspotReport`] with its console summary.

pub mod rank;
pub mod report;
pub mod types;
pub mod utility;
