//! Binary encoding of `f32` sequences.
//!
//! Provides the `float-sequence-v1` layout (a 4-byte element count followed by
//! the elements) and an optional framed variant with magic and version bytes.

mod byte_order;
mod config;
mod error;
mod strategies;
mod traits;
mod utils;

pub use byte_order::ByteOrder;
pub use config::{CodecConfig, CodecStrategy, ConfigError};
pub use error::CodecError as Error;
pub use error::{CodecError, FormatError};
pub use strategies::{FrameHeader, FramedCodec, PlainCodec, FRAME_HEADER_SIZE, MAGIC, VERSION};
pub use traits::Codec;
pub use utils::{body_len, COUNT_SIZE, ELEMENT_SIZE};

/// Ordered list of 32-bit floats as handed back by every decoder.
pub type FloatSequence = Vec<f32>;

/// Encode with the default codec (plain, big endian).
pub fn encode(seq: &[f32], sink: &mut dyn std::io::Write) -> Result<usize, CodecError> {
    PlainCodec::default().encode(seq, sink)
}

/// Decode with the default codec (plain, big endian).
pub fn decode(source: &mut dyn std::io::Read) -> Result<FloatSequence, CodecError> {
    PlainCodec::default().decode(source)
}
