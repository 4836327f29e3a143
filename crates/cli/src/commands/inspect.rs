use anyhow::{Context, Result};
use floatseq::{inspect, CodecConfig};
use std::path::Path;

use crate::printing::print_blob_info;

pub fn show_info(file: &Path, json: bool, config: &CodecConfig) -> Result<()> {
    let info = inspect(file, config.byte_order).context("Failed to inspect file")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_blob_info(file, &info);
    }

    Ok(())
}
