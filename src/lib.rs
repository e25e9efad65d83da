//! OC-DFG Studio
//!
//! Object-centric directly-follows graph discovery for OCEL event logs,
//! with a self-contained raster canvas and PNG encoder for the graph views.
//!
//! Pipeline: OCEL document -> per-object traces -> ranked per-type edges
//! -> JSON artifact, Markdown report, OC-DFG / OC-PN images.

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod raster;
pub mod utils;
