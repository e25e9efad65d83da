//! Aggregate object traces into a per-type directly-follows graph.
//!
//! For every object, its trace is reduced to the sequence of activity
//! labels and each adjacent pair `(a[i], a[i+1])` is counted under the
//! object's type.
//!
//! Example: two `order` objects with activities [A, B, C] give
//! `order: A -> B (2), B -> C (2)`.

use super::ranking::rank_edges;
use super::traces::{extract_traces, ObjectTraces};
use crate::parser::schema::{OcDfg, OcelEvent, OcelLog, OcelObject};
use crate::utils::error::ParseError;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// (from, to) -> number of times observed
pub type TransitionCounter<'a> = HashMap<(&'a str, &'a str), u64>;

/// Build the ranked object-centric DFG for a whole log
///
/// **Public** - main entry point for aggregation
///
/// # Returns
/// Object type -> edges sorted by (-count, from, to). Types whose
/// objects never produce an adjacent pair are absent.
///
/// # Errors
/// * `ParseError::MalformedTimestamp` - propagated from trace extraction
pub fn build_oc_dfg(log: &OcelLog) -> Result<OcDfg, ParseError> {
    let types = object_types(&log.objects);
    let traces = extract_traces(&log.objects, &log.events)?;
    let counters = count_transitions(&types, &traces);

    let dfg: OcDfg = counters
        .into_iter()
        .map(|(object_type, counter)| (object_type.to_string(), rank_edges(&counter)))
        .collect();

    debug!("Built OC-DFG for {} object types", dfg.len());

    Ok(dfg)
}

/// Object id -> object type. A repeated id keeps its last type.
pub fn object_types(objects: &[OcelObject]) -> HashMap<&str, &str> {
    objects
        .iter()
        .map(|o| (o.id.as_str(), o.object_type.as_str()))
        .collect()
}

/// Activity labels of a trace, skipping events without one
pub fn activity_sequence<'a>(trace: &[&'a OcelEvent]) -> Vec<&'a str> {
    trace
        .iter()
        .map(|event| event.activity.as_str())
        .filter(|activity| !activity.is_empty())
        .collect()
}

/// Count adjacent activity pairs per object type
///
/// Objects with fewer than two labelled events contribute nothing.
pub fn count_transitions<'a>(
    types: &HashMap<&'a str, &'a str>,
    traces: &ObjectTraces<'a>,
) -> BTreeMap<&'a str, TransitionCounter<'a>> {
    let mut counters: BTreeMap<&'a str, TransitionCounter<'a>> = BTreeMap::new();

    for (object_id, trace) in traces {
        let Some(object_type) = types.get(object_id) else {
            continue;
        };

        let activities = activity_sequence(trace);
        if activities.len() < 2 {
            continue;
        }

        let counter = counters.entry(*object_type).or_default();
        for pair in activities.windows(2) {
            *counter.entry((pair[0], pair[1])).or_insert(0) += 1;
        }
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::DfgEdge;

    fn log_with(objects: &[(&str, &str)], events: &[(&str, &str, &str, Vec<&str>)]) -> OcelLog {
        OcelLog {
            objects: objects
                .iter()
                .map(|(id, t)| OcelObject {
                    id: id.to_string(),
                    object_type: t.to_string(),
                    attributes: Default::default(),
                })
                .collect(),
            events: events
                .iter()
                .map(|(id, activity, ts, omap)| OcelEvent {
                    id: id.to_string(),
                    activity: activity.to_string(),
                    timestamp: ts.to_string(),
                    omap: omap.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_activities_are_skipped() {
        let log = log_with(
            &[("o1", "order")],
            &[
                ("e1", "Create", "2024-01-01T00:00:00Z", vec!["o1"]),
                ("e2", "", "2024-01-02T00:00:00Z", vec!["o1"]),
                ("e3", "Ship", "2024-01-03T00:00:00Z", vec!["o1"]),
            ],
        );

        let dfg = build_oc_dfg(&log).unwrap();
        assert_eq!(dfg["order"], vec![DfgEdge::new("Create", "Ship", 1)]);
    }

    #[test]
    fn test_single_event_objects_contribute_nothing() {
        let log = log_with(
            &[("o1", "order"), ("i1", "item")],
            &[
                ("e1", "Create", "2024-01-01T00:00:00Z", vec!["o1", "i1"]),
                ("e2", "Ship", "2024-01-02T00:00:00Z", vec!["o1"]),
            ],
        );

        let dfg = build_oc_dfg(&log).unwrap();
        assert!(dfg.contains_key("order"));
        assert!(!dfg.contains_key("item"));
    }

    #[test]
    fn test_self_loops_are_counted() {
        let log = log_with(
            &[("o1", "order")],
            &[
                ("e1", "Edit", "2024-01-01T00:00:00Z", vec!["o1"]),
                ("e2", "Edit", "2024-01-02T00:00:00Z", vec!["o1"]),
                ("e3", "Edit", "2024-01-03T00:00:00Z", vec!["o1"]),
            ],
        );

        let dfg = build_oc_dfg(&log).unwrap();
        assert_eq!(dfg["order"], vec![DfgEdge::new("Edit", "Edit", 2)]);
    }

    #[test]
    fn test_activity_sequence_keeps_order() {
        let log = log_with(
            &[("o1", "order")],
            &[
                ("e1", "A", "2024-01-01T00:00:00Z", vec!["o1"]),
                ("e2", "", "2024-01-01T00:00:00Z", vec!["o1"]),
                ("e3", "B", "2024-01-01T00:00:00Z", vec!["o1"]),
            ],
        );

        let traces = extract_traces(&log.objects, &log.events).unwrap();
        assert_eq!(activity_sequence(&traces["o1"]), vec!["A", "B"]);
    }
}
