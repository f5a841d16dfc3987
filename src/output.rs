//! Report persistence and console summary.
//!
//! Supports pretty-printed JSON on disk, optionally gzip-compressed, and
//! summary lines through the logging pipeline.

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::report::summary_lines;
use crate::analyzers::types::HotspotReport;

/// Logs each console summary line of a report.
pub fn log_summary(report: &HotspotReport) {
    for line in summary_lines(report) {
        info!("{}", line);
    }
}

/// Writes the report as pretty-printed JSON and returns the path written.
///
/// With `gzip` set the JSON is compressed and `.gz` is appended to `path`
/// unless it already ends that way.
pub fn write_report(path: &Path, report: &HotspotReport, gzip: bool) -> Result<PathBuf> {
    let json = serde_json::to_vec_pretty(report)?;

    let (body, target) = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        (encoder.finish()?, gz_path(path))
    } else {
        (json, path.to_path_buf())
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }

    debug!(path = %target.display(), bytes = body.len(), gzip, "Writing report");
    fs::write(&target, body)
        .with_context(|| format!("failed to write report '{}'", target.display()))?;

    Ok(target)
}

fn gz_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|e| e == "gz") {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}
