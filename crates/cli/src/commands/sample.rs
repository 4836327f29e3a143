use anyhow::{Context, Result};
use floatseq::{save, CodecConfig, SAMPLE_SEQUENCE};
use std::path::Path;

/// Write the fixed five-element sample array.
pub fn write_sample(output: &Path, config: &CodecConfig) -> Result<()> {
    let written = save(output, &SAMPLE_SEQUENCE, config).context("Failed to write sample")?;
    println!(
        "✓ Wrote sample {:?} ({written} bytes) to {}",
        SAMPLE_SEQUENCE,
        output.display()
    );
    Ok(())
}
