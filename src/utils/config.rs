//! Configuration and constants for the CLI.

use crate::raster::Rgb;

/// Current DFG artifact schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Input discovery (first match by name wins)
pub const EVENT_LOG_PATTERN: &str = "*.csv";
pub const OCEL_PATTERN: &str = "*.ocel.json";

pub const DEFAULT_RAW_DIR: &str = "data/raw";
pub const DEFAULT_DFG_OUT: &str = "data/processed/oc_dfg.json";
pub const DEFAULT_REPORT_OUT: &str = "data/processed/oc_dfg_report.md";
pub const DEFAULT_GRAPH_DIR: &str = "data/processed/graphs";

/// Number of edges listed per object type in the Markdown report
pub const REPORT_TOP_EDGES: usize = 10;

// Image artifacts
pub const OC_DFG_SUFFIX: &str = "-oc-dfg";
pub const OC_PN_SUFFIX: &str = "-oc-pn";
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const OC_DFG_CANVAS_HEIGHT: u32 = 520;
pub const OC_PN_CANVAS_HEIGHT: u32 = 540;

// Horizontal margin of the activity band
pub const OC_DFG_MARGIN: i32 = 100;
pub const OC_PN_MARGIN: i32 = 110;

pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);
pub const TITLE_INK: Rgb = Rgb::new(20, 20, 20);
pub const LABEL_INK: Rgb = Rgb::new(50, 50, 50);

/// Legend colors, cycled per object type
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(31, 119, 180),
    Rgb::new(255, 127, 14),
    Rgb::new(44, 160, 44),
    Rgb::new(214, 39, 40),
    Rgb::new(148, 103, 189),
    Rgb::new(140, 86, 75),
];
