//! OC-DFG Studio CLI
//!
//! Discovers object-centric directly-follows graphs from OCEL event logs
//! and renders them as PNG images.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use oc_dfg_studio::commands::{
    display_version, execute_dfg, execute_graph, validate_dfg_args, validate_dfg_file,
    validate_graph_args, DfgArgs, GraphArgs, InputArgs,
};
use oc_dfg_studio::utils::config::{
    DEFAULT_CANVAS_WIDTH, DEFAULT_DFG_OUT, DEFAULT_GRAPH_DIR, DEFAULT_RAW_DIR, DEFAULT_REPORT_OUT,
};

/// OC-DFG Studio - object-centric process discovery
#[derive(Parser, Debug)]
#[command(name = "oc-dfg")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Input location flags shared by dfg and graph
#[derive(Args, Debug)]
struct InputFlags {
    /// Directory containing the raw event log (*.csv) and OCEL (*.ocel.json)
    #[arg(long, default_value = DEFAULT_RAW_DIR)]
    raw_dir: PathBuf,

    /// Event log CSV (skips discovery)
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// OCEL JSON (skips discovery)
    #[arg(long)]
    ocel: Option<PathBuf>,
}

impl From<InputFlags> for InputArgs {
    fn from(flags: InputFlags) -> Self {
        Self {
            raw_dir: flags.raw_dir,
            event_log: flags.event_log,
            ocel: flags.ocel,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the OC-DFG JSON artifact and Markdown report
    Dfg {
        #[command(flatten)]
        inputs: InputFlags,

        /// Output path for the OC-DFG JSON
        #[arg(long, default_value = DEFAULT_DFG_OUT)]
        dfg_out: PathBuf,

        /// Output path for the Markdown report
        #[arg(long, default_value = DEFAULT_REPORT_OUT)]
        report_out: PathBuf,

        /// Print the report to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Render OC-DFG and OC-PN images
    Graph {
        #[command(flatten)]
        inputs: InputFlags,

        /// Output directory for the PNG files
        #[arg(short, long, default_value = DEFAULT_GRAPH_DIR)]
        out_dir: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
        width: u32,
    },

    /// Validate an OC-DFG JSON file
    Validate {
        /// Path to OC-DFG JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Dfg {
            inputs,
            dfg_out,
            report_out,
            summary,
        } => {
            let args = DfgArgs {
                inputs: inputs.into(),
                dfg_out,
                report_out,
                print_summary: summary,
            };

            validate_dfg_args(&args)?;
            execute_dfg(&args)?;
        }

        Commands::Graph {
            inputs,
            out_dir,
            width,
        } => {
            let args = GraphArgs {
                inputs: inputs.into(),
                out_dir,
                width,
            };

            validate_graph_args(&args)?;
            let (dfg_png, pn_png) = execute_graph(&args)?;
            println!("OC-DFG image: {}", dfg_png.display());
            println!("OC-PN image:  {}", pn_png.display());
        }

        Commands::Validate { file } => {
            validate_dfg_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
