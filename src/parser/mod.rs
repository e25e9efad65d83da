//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Parsing the OCEL JSON document
//! - Parsing the tabular event log
//! - Normalizing event timestamps
//! - Defining the DFG artifact schema

pub mod event_log;
pub mod ocel;
pub mod schema;

// Re-export main types
pub use event_log::{parse_event_log, EventLogRow};
pub use ocel::{event_timestamp, parse_ocel, parse_timestamp};
pub use schema::{DfgDocument, DfgEdge, DfgMeta, OcDfg, OcelEvent, OcelLog, OcelObject};
