//! floatseq: binary persistence for sequences of 32-bit floats.
//!
//! The encoding itself lives in the `floatseq_codec` crate and is re-exported
//! here. This crate adds file storage on top of it.

pub mod prelude;
pub mod storage;

pub use floatseq_codec as codec;

// Re-export commonly used types so they are reachable as `floatseq::Codec`,
// `floatseq::PlainCodec`, etc.
pub use floatseq_codec::{
    ByteOrder, Codec, CodecConfig, CodecError, CodecStrategy, FloatSequence, FormatError,
    FramedCodec, PlainCodec,
};
pub use storage::{inspect, load, save, BlobInfo, StorageError};

/// The array written by the `sample` command.
pub const SAMPLE_SEQUENCE: [f32; 5] = [1.2, 2.45, 7.78, 9.01, 2.35];
