use anyhow::{Context, Result};
use floatseq::{save, CodecConfig};

use crate::args::EncodeArgs;
use crate::utils::parse_values;

pub fn encode_values(args: &EncodeArgs, config: &CodecConfig) -> Result<()> {
    let values = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_values(&text)?
        }
        None => parse_values(&args.values.join(" "))?,
    };

    let written = save(&args.output, &values, config).context("Failed to write sequence")?;

    println!(
        "✓ Encoded {} values ({written} bytes, {}, {} endian) to {}",
        values.len(),
        config.strategy,
        config.byte_order,
        args.output.display()
    );
    Ok(())
}
