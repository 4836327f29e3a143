use super::StorageError;
use floatseq_codec::{
    body_len, ByteOrder, CodecError, CodecStrategy, FormatError, FrameHeader, COUNT_SIZE,
    FRAME_HEADER_SIZE, MAGIC,
};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// What the header of a blob file claims, next to what the file actually holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlobInfo {
    pub strategy: CodecStrategy,
    pub byte_order: ByteOrder,
    /// Raw element count from the header. `None` when the file is too short
    /// to contain one.
    pub declared: Option<i32>,
    pub file_len: u64,
}

impl BlobInfo {
    fn header_len(&self) -> u64 {
        match self.strategy {
            CodecStrategy::Plain => 0,
            CodecStrategy::Framed => FRAME_HEADER_SIZE as u64,
        }
    }

    /// File size implied by the header, if the count is usable.
    pub fn expected_len(&self) -> Option<u64> {
        let n = usize::try_from(self.declared?).ok()?;
        Some(self.header_len() + body_len(n) as u64)
    }

    /// Elements that fit in the bytes actually present after the count.
    pub fn available(&self) -> u64 {
        let data_start = self.header_len() + COUNT_SIZE as u64;
        self.file_len.saturating_sub(data_start) / 4
    }

    pub fn is_consistent(&self) -> bool {
        self.expected_len() == Some(self.file_len)
    }
}

/// Read just enough of `path` to describe it, without decoding the body.
///
/// Files starting with the frame magic are described from their frame header;
/// anything else is taken as a plain blob in `plain_order`.
pub fn inspect(path: impl AsRef<Path>, plain_order: ByteOrder) -> Result<BlobInfo, StorageError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| StorageError::io(path, e))?;
    let file_len = file
        .metadata()
        .map_err(|e| StorageError::io(path, e))?
        .len();

    let mut head = Vec::with_capacity(FRAME_HEADER_SIZE + COUNT_SIZE);
    file.by_ref()
        .take((FRAME_HEADER_SIZE + COUNT_SIZE) as u64)
        .read_to_end(&mut head)
        .map_err(|e| StorageError::io(path, e))?;
    let head = head.as_slice();

    let (strategy, byte_order, count_bytes) = if head.starts_with(&MAGIC) {
        if head.len() < FRAME_HEADER_SIZE {
            return Err(StorageError::codec(
                path,
                CodecError::Format(FormatError::TruncatedHeader {
                    expected: FRAME_HEADER_SIZE,
                    found: head.len(),
                }),
            ));
        }
        let mut frame = [0u8; FRAME_HEADER_SIZE];
        frame.copy_from_slice(&head[..FRAME_HEADER_SIZE]);
        let header = FrameHeader::parse(frame).map_err(|e| StorageError::codec(path, e.into()))?;
        (CodecStrategy::Framed, header.order, &head[FRAME_HEADER_SIZE..])
    } else {
        (CodecStrategy::Plain, plain_order, head)
    };

    let declared = (count_bytes.len() >= COUNT_SIZE).then(|| {
        let mut raw = [0u8; COUNT_SIZE];
        raw.copy_from_slice(&count_bytes[..COUNT_SIZE]);
        byte_order.i32_from_bytes(raw)
    });

    Ok(BlobInfo {
        strategy,
        byte_order,
        declared,
        file_len,
    })
}
