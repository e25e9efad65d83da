use crate::utils::config::{DEFAULT_DFG_OUT, DEFAULT_GRAPH_DIR, DEFAULT_RAW_DIR, DEFAULT_REPORT_OUT};
use std::path::PathBuf;

/// Where to find the event log and OCEL document
///
/// **Public** - shared by the dfg and graph commands
#[derive(Debug, Clone)]
pub struct InputArgs {
    /// Directory searched when an explicit path is not given
    pub raw_dir: PathBuf,

    /// Explicit event log CSV (overrides discovery)
    pub event_log: Option<PathBuf>,

    /// Explicit OCEL JSON (overrides discovery)
    pub ocel: Option<PathBuf>,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            event_log: None,
            ocel: None,
        }
    }
}

/// Arguments for the dfg command
#[derive(Debug, Clone)]
pub struct DfgArgs {
    pub inputs: InputArgs,

    /// Output path for the JSON DFG artifact
    pub dfg_out: PathBuf,

    /// Output path for the Markdown report
    pub report_out: PathBuf,

    /// Print the report to stdout
    pub print_summary: bool,
}

impl Default for DfgArgs {
    fn default() -> Self {
        Self {
            inputs: InputArgs::default(),
            dfg_out: PathBuf::from(DEFAULT_DFG_OUT),
            report_out: PathBuf::from(DEFAULT_REPORT_OUT),
            print_summary: false,
        }
    }
}

/// Arguments for the graph command
#[derive(Debug, Clone)]
pub struct GraphArgs {
    pub inputs: InputArgs,

    /// Directory receiving the two PNG files
    pub out_dir: PathBuf,

    /// Canvas width in pixels (both views)
    pub width: u32,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            inputs: InputArgs::default(),
            out_dir: PathBuf::from(DEFAULT_GRAPH_DIR),
            width: crate::utils::config::DEFAULT_CANVAS_WIDTH,
        }
    }
}

/// Input files after discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub event_log: PathBuf,
    pub ocel: PathBuf,
}

impl ResolvedInputs {
    /// Base name used for image files and titles
    pub fn log_name(&self) -> String {
        self.event_log
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "event-log".to_string())
    }
}
