//! Edge ranking and summary statistics over an OC-DFG.

use super::dfg::TransitionCounter;
use crate::parser::schema::{DfgEdge, OcDfg};
use std::collections::BTreeSet;

/// Turn a transition counter into edges sorted by (-count, from, to)
///
/// **Public** - this order is what makes reports and images reproducible
pub fn rank_edges(counter: &TransitionCounter<'_>) -> Vec<DfgEdge> {
    let mut edges: Vec<DfgEdge> = counter
        .iter()
        .map(|(&(from, to), &count)| DfgEdge::new(from, to, count))
        .collect();

    edges.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });

    edges
}

/// Sorted set of every activity that appears on some edge
pub fn collect_activities(dfg: &OcDfg) -> Vec<String> {
    let activities: BTreeSet<&str> = dfg
        .values()
        .flatten()
        .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
        .collect();

    activities.into_iter().map(str::to_string).collect()
}

/// First `n` ranked edges of one object type (empty when the type is absent)
pub fn top_edges<'a>(dfg: &'a OcDfg, object_type: &str, n: usize) -> &'a [DfgEdge] {
    dfg.get(object_type)
        .map(|edges| &edges[..edges.len().min(n)])
        .unwrap_or(&[])
}

/// Summary statistics of an OC-DFG
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfgStats {
    /// Object types with at least one edge
    pub object_types: usize,

    /// Distinct (type, from, to) edges
    pub edge_count: usize,

    /// Sum of all edge counts
    pub transition_count: u64,

    /// Distinct activity labels on any edge
    pub activity_count: usize,
}

impl DfgStats {
    pub fn from_dfg(dfg: &OcDfg) -> Self {
        Self {
            object_types: dfg.len(),
            edge_count: dfg.values().map(Vec::len).sum(),
            transition_count: dfg.values().flatten().map(|e| e.count).sum(),
            activity_count: collect_activities(dfg).len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Types: {} | Edges: {} | Transitions: {} | Activities: {}",
            self.object_types, self.edge_count, self.transition_count, self.activity_count
        )
    }
}
