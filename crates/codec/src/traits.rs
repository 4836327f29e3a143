use crate::error::{CodecError, FormatError};
use std::io::{Read, Write};

/// Core trait for float sequence codecs.
///
/// Every strategy (like `PlainCodec` or `FramedCodec`) must be able to:
/// 1.  `encode`: Write a sequence to any byte sink and report how many bytes went out.
/// 2.  `decode`: Read one blob back from any byte source into a new owned sequence.
///
/// Sinks and sources are trait objects so the codec never touches the filesystem
/// and strategies can be boxed (`Box<dyn Codec>`).
pub trait Codec {
    fn encode(&self, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError>;
    fn decode(&self, source: &mut dyn Read) -> Result<Vec<f32>, CodecError>;

    /// Exact size of the blob produced for `n` elements.
    fn encoded_len(&self, n: usize) -> usize;

    /// Fail with `TooLong` when `n` elements cannot be represented. Callers
    /// that must not touch their sink on failure check this first.
    fn check_encodable(&self, n: usize) -> Result<(), CodecError> {
        match i32::try_from(n) {
            Ok(_) => Ok(()),
            Err(_) => Err(CodecError::TooLong { len: n }),
        }
    }

    fn encode_to_vec(&self, seq: &[f32]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.encoded_len(seq.len()));
        self.encode(seq, &mut out)?;
        Ok(out)
    }

    /// Decode a whole blob held in memory. Unlike `decode`, leftover bytes
    /// after the last element are an error.
    fn decode_slice(&self, data: &[u8]) -> Result<Vec<f32>, CodecError> {
        let mut cursor = data;
        let seq = self.decode(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(FormatError::TrailingBytes(cursor.len()).into());
        }
        Ok(seq)
    }
}
