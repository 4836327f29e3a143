use anyhow::Result;
use floatseq::{BlobInfo, CodecStrategy};
use std::fmt::Write;
use std::path::Path;

use crate::args::OutputFormat;

/// Render decoded values. Text output uses the shortest representation that
/// parses back to the same `f32`.
pub fn format_values(values: &[f32], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for value in values {
                writeln!(out, "{value}")?;
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(values)?)),
    }
}

pub fn print_blob_info(file: &Path, info: &BlobInfo) {
    println!("\n📦 {}", file.display());
    println!("{}", "=".repeat(50));
    match info.strategy {
        CodecStrategy::Plain => println!("  • Layout: plain (assumed {} endian)", info.byte_order),
        CodecStrategy::Framed => println!("  • Layout: framed ({} endian)", info.byte_order),
    }
    println!("  • File size: {} bytes", info.file_len);

    match info.declared {
        None => println!("  • Declared elements: ✗ header truncated"),
        Some(n) if n < 0 => println!("  • Declared elements: ✗ {n} (negative)"),
        Some(n) => println!("  • Declared elements: {n}"),
    }

    if let Some(expected) = info.expected_len() {
        println!("  • Expected size: {expected} bytes");
    }

    if info.is_consistent() {
        println!("  ✓ Size matches header");
    } else {
        println!("  ⚠️  Size does not match header ({} elements present)", info.available());
    }
}
