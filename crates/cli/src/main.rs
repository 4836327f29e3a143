mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{CodecArgs, EncodeArgs, OutputFormat};
use commands::{decode, encode, inspect, sample, validate};

/// floatseq: store sequences of 32-bit floats in a compact binary file
///
/// Files hold a 4-byte element count followed by the elements
/// (`float-sequence-v1`), optionally behind a magic/version frame.
#[derive(Parser, Debug)]
#[command(name = "floatseq")]
#[command(author, version, about = "Encode and decode binary float sequences", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    codec: CodecArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode numbers into a sequence file.
    ///
    /// Values come from the command line or from a text file.
    Encode(EncodeArgs),

    /// Decode a sequence file and print its values.
    Decode {
        /// Sequence file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Inspect: Show header information without decoding the body.
    Inspect {
        /// Sequence file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate that a file is a complete, well-formed sequence.
    Validate {
        /// Sequence file
        file: PathBuf,
    },

    /// Write the five-element sample array.
    Sample {
        /// Output file
        #[arg(short, long, default_value = defaults::SAMPLE_OUTPUT)]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        defaults::VERBOSE_LOG_LEVEL
    } else {
        defaults::LOG_LEVEL
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.codec.resolve()?;

    match cli.command {
        Commands::Encode(args) => {
            encode::encode_values(&args, &config)?;
        }
        Commands::Decode { file, format } => {
            decode::decode_file(&file, format, &config)?;
        }
        Commands::Inspect { file, json } => {
            inspect::show_info(&file, json, &config)?;
        }
        Commands::Validate { file } => {
            validate::validate_file(&file, &config)?;
        }
        Commands::Sample { output } => {
            sample::write_sample(&output, &config)?;
        }
    }

    Ok(())
}
