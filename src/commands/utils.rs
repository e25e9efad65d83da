use super::models::{InputArgs, ResolvedInputs};
use crate::output::read_dfg;
use crate::parser::{parse_event_log, parse_ocel, EventLogRow, OcelLog};
use crate::utils::config::{EVENT_LOG_PATTERN, OCEL_PATTERN, SCHEMA_VERSION};
use crate::utils::error::InputError;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// First file in `raw_dir` (by name) matching a `*suffix` pattern
///
/// Hidden files are skipped. A missing directory counts as no match.
///
/// # Errors
/// * `InputError::MissingInput` - nothing matched
pub fn resolve_default_file(raw_dir: &Path, pattern: &str) -> Result<PathBuf, InputError> {
    let suffix = pattern.trim_start_matches('*');
    let missing = || InputError::MissingInput {
        pattern: pattern.to_string(),
        dir: raw_dir.display().to_string(),
    };

    let entries = std::fs::read_dir(raw_dir).map_err(|_| missing())?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !name.starts_with('.') && name.ends_with(suffix))
        })
        .collect();

    matches.sort();
    let first = matches.into_iter().next().ok_or_else(missing)?;

    debug!("Resolved {} -> {}", pattern, first.display());
    Ok(first)
}

/// Resolve both inputs, preferring explicit paths over discovery
///
/// Both lookups happen before any file is read, so a missing input
/// fails the run up front.
pub fn resolve_inputs(args: &InputArgs) -> Result<ResolvedInputs> {
    let event_log = match &args.event_log {
        Some(path) => path.clone(),
        None => resolve_default_file(&args.raw_dir, EVENT_LOG_PATTERN)?,
    };
    let ocel = match &args.ocel {
        Some(path) => path.clone(),
        None => resolve_default_file(&args.raw_dir, OCEL_PATTERN)?,
    };

    Ok(ResolvedInputs {
        event_log: absolute(event_log),
        ocel: absolute(ocel),
    })
}

fn absolute(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}

/// Read and parse the event log CSV
pub fn load_event_log(path: &Path) -> Result<Vec<EventLogRow>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event log {}", path.display()))?;
    parse_event_log(&raw).with_context(|| format!("Failed to parse event log {}", path.display()))
}

/// Read and parse the OCEL JSON document
pub fn load_ocel(path: &Path) -> Result<OcelLog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OCEL {}", path.display()))?;
    parse_ocel(&raw).with_context(|| format!("Failed to parse OCEL {}", path.display()))
}

/// Validate a DFG JSON file
pub fn validate_dfg_file(file_path: PathBuf) -> Result<()> {
    println!("Validating OC-DFG: {}", file_path.display());

    let document = read_dfg(&file_path)?;

    println!("✓ Valid OC-DFG JSON");
    println!("  Event log: {}", document.meta.event_log_path);
    println!("  OCEL: {}", document.meta.ocel_path);
    println!("  Object types: {}", document.meta.object_types.len());
    println!("  Edges: {}", document.edge_count());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("OC-DFG Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("DFG Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Object-centric directly-follows graphs from OCEL event logs.");
}
