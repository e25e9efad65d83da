//! Markdown summary report for one OC-DFG run.

use crate::aggregator::ranking::top_edges;
use crate::parser::schema::{OcDfg, OcelLog};
use crate::utils::config::REPORT_TOP_EDGES;
use crate::utils::error::OutputError;
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Everything the report summarizes
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub event_log_path: &'a str,
    pub ocel_path: &'a str,
    pub event_log_rows: usize,
    pub log: &'a OcelLog,
    pub dfg: &'a OcDfg,
}

/// Build the Markdown report text
///
/// **Public** - pure; the caller decides where the text goes
///
/// Lists input sizes, objects per type and the top ranked edges of every
/// object type. Types without edges, and an empty DFG as a whole, are
/// reported explicitly instead of being left out.
pub fn build_report(input: &ReportInput<'_>) -> String {
    let mut type_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for object in &input.log.objects {
        *type_counts.entry(object.object_type.as_str()).or_insert(0) += 1;
    }

    let mut lines = vec![
        "# OC-DFG Report".to_string(),
        String::new(),
        format!("- Event log: `{}`", input.event_log_path),
        format!("- OCEL: `{}`", input.ocel_path),
        format!("- Event log rows: {}", input.event_log_rows),
        format!("- OCEL objects: {}", input.log.objects.len()),
        format!("- OCEL events: {}", input.log.events.len()),
        String::new(),
        "## Object Type Distribution".to_string(),
    ];

    for (object_type, count) in &type_counts {
        lines.push(format!("- {}: {}", object_type, count));
    }

    lines.push(String::new());
    lines.push("## OC-DFG (Top Edges)".to_string());

    if input.dfg.is_empty() {
        lines.push("- No transitions were generated.".to_string());
    }

    let all_types: BTreeSet<&str> = type_counts
        .keys()
        .copied()
        .chain(input.dfg.keys().map(String::as_str))
        .collect();

    for object_type in all_types {
        lines.push(format!("### {}", object_type));

        let edges = top_edges(input.dfg, object_type, REPORT_TOP_EDGES);
        for edge in edges {
            lines.push(format!("- {} -> {} (count={})", edge.from, edge.to, edge.count));
        }
        if edges.is_empty() {
            lines.push("- No transitions".to_string());
        }
        lines.push(String::new());
    }

    let mut report = lines.join("\n").trim_end().to_string();
    report.push('\n');
    report
}

/// Write report text to a Markdown file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_report(report: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    std::fs::write(output_path, report).map_err(OutputError::WriteFailed)?;

    Ok(())
}
