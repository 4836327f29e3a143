use crate::byte_order::ByteOrder;
use crate::error::{CodecError, FormatError};
use std::io::{self, Read, Write};

pub const COUNT_SIZE: usize = 4;
pub const ELEMENT_SIZE: usize = 4;

// Elements moved per read/write call.
const CHUNK_ELEMENTS: usize = 1024;
// Upper bound on capacity reserved from the declared count alone. A corrupt
// header must not be able to request gigabytes before any body byte arrives.
pub const PREALLOC_LIMIT: usize = 64 * 1024;

/// Size of a plain body (count + elements) holding `n` elements.
pub fn body_len(n: usize) -> usize {
    COUNT_SIZE + ELEMENT_SIZE * n
}

/// Fill `buf` as far as the source allows. Returns the number of bytes read,
/// which is less than `buf.len()` only when the source hit end of stream.
pub fn read_up_to(source: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Write the count prefix followed by every element, in chunks.
pub fn write_body(order: ByteOrder, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError> {
    let count = i32::try_from(seq.len()).map_err(|_| CodecError::TooLong { len: seq.len() })?;
    sink.write_all(&order.i32_to_bytes(count))?;

    let mut buf = Vec::with_capacity(CHUNK_ELEMENTS.min(seq.len()) * ELEMENT_SIZE);
    for chunk in seq.chunks(CHUNK_ELEMENTS) {
        buf.clear();
        for &value in chunk {
            buf.extend_from_slice(&order.f32_to_bytes(value));
        }
        sink.write_all(&buf)?;
    }

    Ok(body_len(seq.len()))
}

/// Read and validate the count prefix.
pub fn read_count(
    order: ByteOrder,
    source: &mut dyn Read,
    max_elements: Option<usize>,
) -> Result<usize, CodecError> {
    let mut header = [0u8; COUNT_SIZE];
    let found = read_up_to(source, &mut header)?;
    if found < COUNT_SIZE {
        return Err(FormatError::TruncatedHeader {
            expected: COUNT_SIZE,
            found,
        }
        .into());
    }

    let count = order.i32_from_bytes(header);
    if count < 0 {
        return Err(FormatError::InvalidLength(count).into());
    }
    // Non-negative i32 always fits in usize on supported targets.
    let declared = count as usize;

    if let Some(limit) = max_elements {
        if declared > limit {
            return Err(FormatError::TooLarge { declared, limit }.into());
        }
    }

    Ok(declared)
}

/// Read exactly `declared` elements. Never reads past the last one.
pub fn read_elements(
    order: ByteOrder,
    declared: usize,
    source: &mut dyn Read,
) -> Result<Vec<f32>, CodecError> {
    let mut seq = Vec::with_capacity(declared.min(PREALLOC_LIMIT));
    let mut buf = [0u8; CHUNK_ELEMENTS * ELEMENT_SIZE];

    while seq.len() < declared {
        let want = (declared - seq.len()).min(CHUNK_ELEMENTS) * ELEMENT_SIZE;
        let got = read_up_to(source, &mut buf[..want])?;

        for bytes in buf[..got].chunks_exact(ELEMENT_SIZE) {
            let mut raw = [0u8; ELEMENT_SIZE];
            raw.copy_from_slice(bytes);
            seq.push(order.f32_from_bytes(raw));
        }

        if got < want {
            return Err(FormatError::TruncatedBody {
                declared,
                found: seq.len(),
            }
            .into());
        }
    }

    Ok(seq)
}
