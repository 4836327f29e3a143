use anyhow::Result;
use floatseq::{load, CodecConfig};
use std::path::Path;

pub fn validate_file(file: &Path, config: &CodecConfig) -> Result<()> {
    println!("🔍 Validating: {}", file.display());

    match load(file, config) {
        Ok(values) => {
            let non_finite = values.iter().filter(|v| !v.is_finite()).count();
            println!("✓ Layout: OK ({}, {} endian)", config.strategy, config.byte_order);
            println!("✓ Elements: {}", values.len());
            if non_finite > 0 {
                println!("⚠️  {non_finite} non-finite value(s) (NaN or infinity)");
            }
            Ok(())
        }
        Err(e) if e.is_format() => {
            println!("✗ Layout: FAILED");
            anyhow::bail!("Malformed sequence file: {e}")
        }
        Err(e) => Err(e.into()),
    }
}
