use crate::byte_order::ByteOrder;
use crate::error::CodecError;
use crate::strategies::{FramedCodec, PlainCodec};
use crate::traits::Codec;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Strategies for encoding sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecStrategy {
    /// Bare `float-sequence-v1`: count + elements.
    #[default]
    Plain,
    /// Magic, version and byte order flag in front of the plain body.
    Framed,
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Framed => write!(f, "framed"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "v1" => Ok(Self::Plain),
            "framed" => Ok(Self::Framed),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: plain, framed"
            )),
        }
    }
}

/// Everything needed to pick and parameterise a codec.
///
/// Missing fields fall back to their defaults when deserialised, so `{}` is a
/// valid configuration (plain, big endian, no limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub strategy: CodecStrategy,
    pub byte_order: ByteOrder,
    pub max_elements: Option<usize>,
}

/// Failure to load a [`CodecConfig`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecConfig {
    pub fn new(strategy: CodecStrategy, byte_order: ByteOrder) -> Self {
        Self {
            strategy,
            byte_order,
            max_elements: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn plain(&self) -> PlainCodec {
        PlainCodec {
            order: self.byte_order,
            max_elements: self.max_elements,
        }
    }

    fn framed(&self) -> FramedCodec {
        FramedCodec {
            order: self.byte_order,
            max_elements: self.max_elements,
        }
    }
}

impl Codec for CodecConfig {
    fn encode(&self, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError> {
        match self.strategy {
            CodecStrategy::Plain => self.plain().encode(seq, sink),
            CodecStrategy::Framed => self.framed().encode(seq, sink),
        }
    }

    fn decode(&self, source: &mut dyn Read) -> Result<Vec<f32>, CodecError> {
        match self.strategy {
            CodecStrategy::Plain => self.plain().decode(source),
            CodecStrategy::Framed => self.framed().decode(source),
        }
    }

    fn encoded_len(&self, n: usize) -> usize {
        match self.strategy {
            CodecStrategy::Plain => self.plain().encoded_len(n),
            CodecStrategy::Framed => self.framed().encoded_len(n),
        }
    }
}
