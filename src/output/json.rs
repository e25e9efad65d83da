//! JSON DFG artifact writer and reader.

use crate::parser::schema::DfgDocument;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a DFG document to a JSON file
///
/// **Public** - main entry point for DFG output
///
/// Pretty-printed with two-space indentation; non-ASCII labels are
/// written as-is.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_dfg(document: &DfgDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing OC-DFG to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "OC-DFG written successfully ({} object types, {} edges)",
        document.meta.object_types.len(),
        document.edge_count()
    );

    Ok(())
}

/// Read a DFG document from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dfg(input_path: impl AsRef<Path>) -> Result<DfgDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading OC-DFG from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: DfgDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "OC-DFG loaded: {} object types from {}",
        document.meta.object_types.len(),
        document.meta.ocel_path
    );

    Ok(document)
}
