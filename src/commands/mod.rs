//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod dfg;
pub mod graph;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use dfg::{execute_dfg, validate_dfg_args};
pub use graph::{execute_graph, validate_graph_args};
pub use models::{DfgArgs, GraphArgs, InputArgs, ResolvedInputs};
pub use utils::{display_version, resolve_default_file, resolve_inputs, validate_dfg_file};
