use anyhow::{Context, Result};
use floatseq::{load, CodecConfig};
use std::path::Path;

use crate::args::OutputFormat;
use crate::printing::format_values;

pub fn decode_file(file: &Path, format: OutputFormat, config: &CodecConfig) -> Result<()> {
    let values = load(file, config).context("Failed to decode sequence")?;
    print!("{}", format_values(&values, format)?);
    Ok(())
}
