//! Reconstruct per-object traces from the flat OCEL event list.
//!
//! An event belongs to the trace of every object listed in its `omap`.
//! Each trace is ordered by (timestamp, event id), so ties on the
//! timestamp still yield a total order.

use crate::parser::ocel::event_timestamp;
use crate::parser::schema::{OcelEvent, OcelObject};
use crate::utils::error::ParseError;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Object id -> chronologically ordered events
pub type ObjectTraces<'a> = BTreeMap<&'a str, Vec<&'a OcelEvent>>;

/// Group events by referenced object and order each group
///
/// **Public** - first stage of DFG discovery
///
/// # Arguments
/// * `objects` - Known objects; `omap` ids outside this set are ignored
/// * `events` - Flat event list in any order
///
/// # Returns
/// One ordered trace per object that is referenced at least once
///
/// # Errors
/// * `ParseError::MalformedTimestamp` - an attached event has an unparseable
///   timestamp. Events that reference no known object are never parsed.
pub fn extract_traces<'a>(
    objects: &'a [OcelObject],
    events: &'a [OcelEvent],
) -> Result<ObjectTraces<'a>, ParseError> {
    let known: HashSet<&str> = objects.iter().map(|o| o.id.as_str()).collect();

    let mut grouped: BTreeMap<&'a str, Vec<(DateTime<Utc>, &'a OcelEvent)>> = BTreeMap::new();
    let mut dangling = 0usize;

    for event in events {
        let mut stamp: Option<DateTime<Utc>> = None;

        for object_id in &event.omap {
            if !known.contains(object_id.as_str()) {
                dangling += 1;
                continue;
            }

            let ts = match stamp {
                Some(ts) => ts,
                None => {
                    let ts = event_timestamp(event)?;
                    stamp = Some(ts);
                    ts
                }
            };

            grouped.entry(object_id.as_str()).or_default().push((ts, event));
        }
    }

    if dangling > 0 {
        debug!("Ignored {} references to unknown objects", dangling);
    }

    let traces: ObjectTraces<'a> = grouped
        .into_iter()
        .map(|(object_id, mut stamped)| {
            stamped.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
            let ordered = stamped.into_iter().map(|(_, event)| event).collect();
            (object_id, ordered)
        })
        .collect();

    debug!("Extracted {} object traces", traces.len());

    Ok(traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(id: &str, object_type: &str) -> OcelObject {
        OcelObject {
            id: id.to_string(),
            object_type: object_type.to_string(),
            attributes: Default::default(),
        }
    }

    fn event(id: &str, activity: &str, timestamp: &str, omap: &[&str]) -> OcelEvent {
        OcelEvent {
            id: id.to_string(),
            activity: activity.to_string(),
            timestamp: timestamp.to_string(),
            omap: omap.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(trace: &[&OcelEvent]) -> Vec<String> {
        trace.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_orders_by_timestamp() {
        let objects = vec![object("o1", "order")];
        let events = vec![
            event("e2", "Ship", "2024-01-02T00:00:00Z", &["o1"]),
            event("e1", "Create", "2024-01-01T00:00:00Z", &["o1"]),
        ];

        let traces = extract_traces(&objects, &events).unwrap();
        assert_eq!(ids(&traces["o1"]), vec!["e1", "e2"]);
    }

    #[test]
    fn test_timestamp_ties_break_on_event_id() {
        let objects = vec![object("o1", "order")];
        let events = vec![
            event("evt-b", "B", "2024-01-01T00:00:00Z", &["o1"]),
            event("evt-a", "A", "2024-01-01T00:00:00+00:00", &["o1"]),
        ];

        let traces = extract_traces(&objects, &events).unwrap();
        assert_eq!(ids(&traces["o1"]), vec!["evt-a", "evt-b"]);
    }

    #[test]
    fn test_shared_event_lands_in_every_trace() {
        let objects = vec![object("o1", "order"), object("i1", "item")];
        let events = vec![event("e1", "Pack", "2024-01-01T00:00:00Z", &["o1", "i1"])];

        let traces = extract_traces(&objects, &events).unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(ids(&traces["i1"]), vec!["e1"]);
        assert_eq!(ids(&traces["o1"]), vec!["e1"]);
    }

    #[test]
    fn test_dangling_reference_is_ignored() {
        let objects = vec![object("o1", "order")];
        let events = vec![
            event("e1", "Create", "2024-01-01T00:00:00Z", &["o1", "ghost"]),
            event("e2", "Haunt", "not a timestamp", &["ghost"]),
        ];

        let traces = extract_traces(&objects, &events).unwrap();
        assert_eq!(traces.len(), 1);
        assert!(!traces.contains_key("ghost"));
        assert_eq!(ids(&traces["o1"]), vec!["e1"]);
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let objects = vec![object("o1", "order")];
        let events = vec![event("e1", "Create", "01/02/2024", &["o1"])];

        let err = extract_traces(&objects, &events).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTimestamp { .. }));
    }
}
