//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use floatseq::prelude::*;
//!
//! let codec = PlainCodec::default();
//! let blob = codec.encode_to_vec(&[1.0, 2.0]).unwrap();
//! assert_eq!(blob.len(), 12);
//! assert_eq!(codec.decode_slice(&blob).unwrap(), vec![1.0, 2.0]);
//! ```

pub use crate::storage::{inspect, load, save, BlobInfo, StorageError};
pub use floatseq_codec::{
    ByteOrder, Codec, CodecConfig, CodecError, CodecStrategy, FloatSequence, FormatError,
    FramedCodec, PlainCodec,
};
