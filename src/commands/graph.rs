//! Graph command implementation.
//!
//! Renders the OC-DFG and OC-PN views of one log into
//! `<log>-oc-dfg.png` and `<log>-oc-pn.png`.

use super::models::GraphArgs;
use super::utils::{load_ocel, resolve_inputs};
use crate::aggregator::build_oc_dfg;
use crate::graph::{render_oc_dfg_png, render_oc_pn_png, RenderConfig};
use crate::output::write_png;
use crate::utils::config::{OC_DFG_SUFFIX, OC_PN_SUFFIX};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Smallest width that still leaves room for the activity band
const MIN_WIDTH: u32 = 300;
const MAX_WIDTH: u32 = 10_000;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of the OC-DFG and OC-PN images
pub fn execute_graph(args: &GraphArgs) -> Result<(PathBuf, PathBuf)> {
    let inputs = resolve_inputs(&args.inputs)?;
    let log_name = inputs.log_name();

    info!("Rendering graphs for: {}", log_name);

    let log = load_ocel(&inputs.ocel)?;
    let dfg = build_oc_dfg(&log)
        .with_context(|| format!("Failed to build OC-DFG from {}", inputs.ocel.display()))?;

    let dfg_config = RenderConfig::oc_dfg()
        .with_title(format!("{} - OC-DFG", log_name))
        .with_width(args.width);
    let pn_config = RenderConfig::oc_pn()
        .with_title(format!("{} - OC-PN", log_name))
        .with_width(args.width);

    let dfg_path = args.out_dir.join(format!("{}{}.png", log_name, OC_DFG_SUFFIX));
    let pn_path = args.out_dir.join(format!("{}{}.png", log_name, OC_PN_SUFFIX));

    let dfg_png = render_oc_dfg_png(&dfg, &dfg_config).context("Failed to encode OC-DFG image")?;
    write_png(&dfg_png, &dfg_path).context("Failed to write OC-DFG image")?;
    info!("✓ OC-DFG image written to: {}", dfg_path.display());

    let pn_png = render_oc_pn_png(&dfg, &pn_config).context("Failed to encode OC-PN image")?;
    write_png(&pn_png, &pn_path).context("Failed to write OC-PN image")?;
    info!("✓ OC-PN image written to: {}", pn_path.display());

    Ok((dfg_path, pn_path))
}

/// Validate graph arguments
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if args.width < MIN_WIDTH {
        anyhow::bail!("width must be at least {} pixels", MIN_WIDTH);
    }

    if args.width > MAX_WIDTH {
        anyhow::bail!("width is too large (max {})", MAX_WIDTH);
    }

    Ok(())
}
