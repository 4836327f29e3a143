use crate::byte_order::ByteOrder;
use crate::error::{CodecError, FormatError};
use crate::traits::Codec;
use crate::utils::{body_len, read_count, read_elements, read_up_to, write_body};
use std::io::{Read, Write};
use tracing::debug;

pub const MAGIC: [u8; 4] = *b"FSEQ";
pub const VERSION: u8 = 1;
pub const FRAME_HEADER_SIZE: usize = 6;

/// Strategy: `float-sequence-v1` behind a small self-describing frame.
///
/// # Layout
///
/// ```text
/// offset 0:  b"FSEQ"
/// offset 4:  u8        version (1)
/// offset 5:  u8        byte order (0 = big, 1 = little)
/// offset 6:  float-sequence-v1 body in that byte order
/// total:     10 + 4*N bytes
/// ```
///
/// # Why use this?
///
/// *   **Detection:** Files that are not float sequences are rejected by the magic.
/// *   **Portability:** The reader learns the byte order from the blob, so
///     `order` only matters when encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FramedCodec {
    pub order: ByteOrder,
    pub max_elements: Option<usize>,
}

/// Decoded frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: u8,
    pub order: ByteOrder,
}

impl FrameHeader {
    pub fn parse(bytes: [u8; FRAME_HEADER_SIZE]) -> Result<Self, FormatError> {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[..4]);
        if magic != MAGIC {
            return Err(FormatError::BadMagic(magic));
        }
        if bytes[4] != VERSION {
            return Err(FormatError::UnsupportedVersion(bytes[4]));
        }
        let order = ByteOrder::from_flag(bytes[5]).ok_or(FormatError::UnknownByteOrder(bytes[5]))?;
        Ok(Self {
            version: bytes[4],
            order,
        })
    }

    pub fn read(source: &mut dyn Read) -> Result<Self, CodecError> {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        let found = read_up_to(source, &mut bytes)?;
        if found < FRAME_HEADER_SIZE {
            return Err(FormatError::TruncatedHeader {
                expected: FRAME_HEADER_SIZE,
                found,
            }
            .into());
        }
        Ok(Self::parse(bytes)?)
    }
}

impl FramedCodec {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            max_elements: None,
        }
    }

    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = Some(limit);
        self
    }
}

impl Codec for FramedCodec {
    fn encode(&self, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError> {
        // Reject before the header goes out so nothing is written for an unencodable input.
        self.check_encodable(seq.len())?;

        let mut header = [0u8; FRAME_HEADER_SIZE];
        header[..4].copy_from_slice(&MAGIC);
        header[4] = VERSION;
        header[5] = self.order.flag();
        sink.write_all(&header)?;

        let written = FRAME_HEADER_SIZE + write_body(self.order, seq, sink)?;
        sink.flush()?;
        debug!(elements = seq.len(), bytes = written, order = %self.order, "encoded framed blob");
        Ok(written)
    }

    fn decode(&self, source: &mut dyn Read) -> Result<Vec<f32>, CodecError> {
        let header = FrameHeader::read(source)?;
        let declared = read_count(header.order, source, self.max_elements)?;
        let seq = read_elements(header.order, declared, source)?;
        debug!(elements = seq.len(), order = %header.order, "decoded framed blob");
        Ok(seq)
    }

    fn encoded_len(&self, n: usize) -> usize {
        FRAME_HEADER_SIZE + body_len(n)
    }
}
