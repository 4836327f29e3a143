use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use floatseq::{ByteOrder, CodecConfig, CodecStrategy};
use std::path::PathBuf;

/// Codec selection shared by every subcommand.
///
/// Flags given on the command line override the values from `--config`.
#[derive(Args, Debug, Default)]
pub struct CodecArgs {
    /// JSON file with codec settings (strategy, byte_order, max_elements)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Encoding strategy (plain, framed)
    #[arg(short, long, global = true)]
    pub strategy: Option<CodecStrategy>,

    /// Byte order of the count and elements (big, little)
    #[arg(short, long, global = true)]
    pub byte_order: Option<ByteOrder>,

    /// Refuse to decode blobs declaring more elements than this
    #[arg(long, global = true)]
    pub max_elements: Option<usize>,
}

impl CodecArgs {
    pub fn resolve(&self) -> Result<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => CodecConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CodecConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(order) = self.byte_order {
            config.byte_order = order;
        }
        if self.max_elements.is_some() {
            config.max_elements = self.max_elements;
        }

        tracing::debug!(?config, "resolved codec configuration");
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Output file (created or truncated)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Text file with numbers separated by commas or whitespace
    #[arg(short, long, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Values to encode (e.g. "1.5 -2 3e4" or "1.5,-2,3e4")
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// JSON array (NaN and infinities become null)
    Json,
}
