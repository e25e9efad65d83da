//! Graph rendering of OC-DFGs into PNG images.
//!
//! Two views are produced from the same ranked edges:
//! - OC-DFG: activity circles with one arrow lane per object type
//! - OC-PN: activity boxes joined through illustrative transition circles

pub mod layout;
pub mod renderer;

// Re-export main types
pub use renderer::{render_oc_dfg, render_oc_dfg_png, render_oc_pn, render_oc_pn_png, RenderConfig};
