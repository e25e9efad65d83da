//! Input and output schema definitions.
//!
//! Input side: the object-centric event log (OCEL) document.
//! Output side: the DFG artifact written to JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed business object referenced by events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcelObject {
    pub id: String,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// A single event; it belongs to the trace of every object in `omap`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcelEvent {
    #[serde(default)]
    pub id: String,

    /// Activity label (empty labels are skipped during aggregation)
    #[serde(default)]
    pub activity: String,

    /// ISO-8601 timestamp, kept raw until trace ordering
    pub timestamp: String,

    /// Referenced object ids
    #[serde(default)]
    pub omap: Vec<String>,
}

/// Top-level OCEL document. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcelLog {
    #[serde(default)]
    pub objects: Vec<OcelObject>,

    #[serde(default)]
    pub events: Vec<OcelEvent>,
}

/// One ranked directly-follows edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfgEdge {
    pub from: String,
    pub to: String,
    pub count: u64,
}

impl DfgEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, count: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            count,
        }
    }
}

/// Object type -> ranked edges. Only types with at least one edge are present.
pub type OcDfg = BTreeMap<String, Vec<DfgEdge>>;

/// Top-level DFG artifact written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DfgDocument {
    pub meta: DfgMeta,
    pub oc_dfg: OcDfg,
}

/// Provenance of a DFG artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DfgMeta {
    /// Source event log (CSV)
    pub event_log_path: String,

    /// Source OCEL document
    pub ocel_path: String,

    /// Sorted object types that produced at least one edge
    pub object_types: Vec<String>,
}

impl DfgDocument {
    /// Wrap a DFG with its provenance
    ///
    /// **Public** - used by the dfg command before writing JSON
    pub fn new(event_log_path: impl Into<String>, ocel_path: impl Into<String>, oc_dfg: OcDfg) -> Self {
        Self {
            meta: DfgMeta {
                event_log_path: event_log_path.into(),
                ocel_path: ocel_path.into(),
                object_types: oc_dfg.keys().cloned().collect(),
            },
            oc_dfg,
        }
    }

    /// Total number of distinct edges across all object types
    pub fn edge_count(&self) -> usize {
        self.oc_dfg.values().map(Vec::len).sum()
    }
}
