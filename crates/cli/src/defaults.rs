//! Shared default values for the command-line tool.

pub const SAMPLE_OUTPUT: &str = "sample.bin";

/// Log filter used when `RUST_LOG` is unset.
pub const LOG_LEVEL: &str = "warn";
/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
