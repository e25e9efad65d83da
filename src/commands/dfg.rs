//! DFG command implementation.
//!
//! The dfg command:
//! 1. Resolves the event log and OCEL inputs
//! 2. Loads both files
//! 3. Builds the ranked OC-DFG
//! 4. Writes the JSON artifact
//! 5. Writes the Markdown report

use super::models::DfgArgs;
use super::utils::{load_event_log, load_ocel, resolve_inputs};
use crate::aggregator::{build_oc_dfg, DfgStats};
use crate::output::{build_report, write_dfg, write_report, ReportInput};
use crate::parser::DfgDocument;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the dfg command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of the written JSON artifact and report
///
/// # Errors
/// * No input matched a discovery pattern
/// * A file could not be read or parsed (including malformed timestamps)
/// * An output could not be written
pub fn execute_dfg(args: &DfgArgs) -> Result<(PathBuf, PathBuf)> {
    let start_time = Instant::now();

    info!("Step 1/5: Resolving inputs...");
    let inputs = resolve_inputs(&args.inputs)?;
    info!("Event log: {}", inputs.event_log.display());
    info!("OCEL: {}", inputs.ocel.display());

    info!("Step 2/5: Loading inputs...");
    let rows = load_event_log(&inputs.event_log)?;
    let log = load_ocel(&inputs.ocel)?;

    info!("Step 3/5: Building OC-DFG...");
    let dfg = build_oc_dfg(&log)
        .with_context(|| format!("Failed to build OC-DFG from {}", inputs.ocel.display()))?;

    let stats = DfgStats::from_dfg(&dfg);
    info!("OC-DFG: {}", stats.summary());
    if stats.is_empty() {
        warn!("No transitions found in {}", inputs.ocel.display());
    }

    let event_log_path = inputs.event_log.display().to_string();
    let ocel_path = inputs.ocel.display().to_string();

    info!("Step 4/5: Writing OC-DFG JSON...");
    let report = build_report(&ReportInput {
        event_log_path: &event_log_path,
        ocel_path: &ocel_path,
        event_log_rows: rows.len(),
        log: &log,
        dfg: &dfg,
    });

    let document = DfgDocument::new(event_log_path, ocel_path, dfg);
    write_dfg(&document, &args.dfg_out).context("Failed to write OC-DFG JSON")?;
    info!("✓ OC-DFG written to: {}", args.dfg_out.display());

    info!("Step 5/5: Writing report...");
    write_report(&report, &args.report_out).context("Failed to write report")?;
    info!("✓ Report written to: {}", args.report_out.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", report.trim_end());
        println!("{}", "=".repeat(80));
    }

    info!("OC-DFG completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok((args.dfg_out.clone(), args.report_out.clone()))
}

/// Validate dfg arguments
///
/// **Public** - can be called before execute_dfg for early validation
pub fn validate_dfg_args(args: &DfgArgs) -> Result<()> {
    if args.dfg_out.as_os_str().is_empty() {
        anyhow::bail!("DFG output path cannot be empty");
    }

    if args.report_out.as_os_str().is_empty() {
        anyhow::bail!("Report output path cannot be empty");
    }

    if args.dfg_out == args.report_out {
        anyhow::bail!("DFG output and report output must be different files");
    }

    Ok(())
}
