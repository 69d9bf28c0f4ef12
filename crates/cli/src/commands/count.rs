use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use distpair_kernel::{count, load_points, OffsetTable};

/// How the result is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare decimal pair count, one line.
    #[default]
    Plain,
    /// Single-line JSON report.
    Json,
    /// Human-readable summary table.
    Stats,
}

/// Full result of one counting run.
#[derive(Debug, Serialize)]
pub struct CountReport {
    pub distance: i64,
    pub declared: u64,
    pub points: usize,
    pub duplicates: u64,
    pub offsets: usize,
    pub ordered_hits: u64,
    pub pairs: u64,
}

pub fn run(input: &Path, format: OutputFormat) -> anyhow::Result<CountReport> {
    let started = Instant::now();

    let loaded = load_points(input)
        .with_context(|| format!("Failed to read points from {}", input.display()))?;
    tracing::debug!(
        declared = loaded.declared,
        unique = loaded.set.len(),
        duplicates = loaded.duplicates,
        "points loaded"
    );

    let offsets = OffsetTable::new();
    tracing::debug!(
        offsets = offsets.len(),
        distance = offsets.distance(),
        "offset table built"
    );

    let summary = count::summarize(&loaded.set, &offsets);
    tracing::debug!(
        pairs = summary.pairs,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "count finished"
    );

    let report = CountReport {
        distance: offsets.distance(),
        declared: loaded.declared,
        points: summary.points,
        duplicates: loaded.duplicates,
        offsets: summary.offsets,
        ordered_hits: summary.ordered_hits,
        pairs: summary.pairs,
    };

    match format {
        OutputFormat::Plain => println!("{}", report.pairs),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Stats => print_stats(&report),
    }

    Ok(report)
}

fn print_stats(report: &CountReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["Distance".to_string(), report.distance.to_string()]);
    table.add_row(vec!["Declared points".to_string(), report.declared.to_string()]);
    table.add_row(vec!["Unique points".to_string(), report.points.to_string()]);
    table.add_row(vec![
        "Collapsed duplicates".to_string(),
        report.duplicates.to_string(),
    ]);
    table.add_row(vec!["Offsets".to_string(), report.offsets.to_string()]);
    table.add_row(vec!["Ordered hits".to_string(), report.ordered_hits.to_string()]);
    table.add_row(vec!["Distinct pairs".to_string(), report.pairs.to_string()]);

    println!("{table}");
}
