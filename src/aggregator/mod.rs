//! Aggregation of OCEL events into object traces and DFG edges.
//!
//! This module transforms a parsed OCEL document into:
//! - Per-object traces (chronologically ordered events)
//! - Per-type transition counts
//! - Ranked edge lists and summary statistics

pub mod dfg;
pub mod ranking;
pub mod traces;

// Re-export main types and functions
pub use dfg::{activity_sequence, build_oc_dfg, count_transitions, object_types, TransitionCounter};
pub use ranking::{collect_activities, rank_edges, top_edges, DfgStats};
pub use traces::{extract_traces, ObjectTraces};
