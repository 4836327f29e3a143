use crate::byte_order::ByteOrder;
use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::{body_len, read_count, read_elements, write_body};
use std::io::{Read, Write};
use tracing::debug;

/// Strategy: `float-sequence-v1`, a 4-byte count followed by the raw elements.
///
/// # Layout
///
/// ```text
/// offset 0:  i32       element count N
/// offset 4:  f32[N]    elements, sequence order
/// total:     4 + 4*N bytes
/// ```
///
/// No magic, no version, no checksum. Both sides must agree on the byte order
/// out of band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainCodec {
    pub order: ByteOrder,
    pub max_elements: Option<usize>,
}

impl PlainCodec {
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

impl Codec for PlainCodec {
    fn encode(&self, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError> {
        let written = write_body(self.order, seq, sink)?;
        sink.flush()?;
        debug!(elements = seq.len(), bytes = written, order = %self.order, "encoded plain blob");
        Ok(written)
    }

    fn decode(&self, source: &mut dyn Read) -> Result<Vec<f32>, CodecError> {
        let declared = read_count(self.order, source, self.max_elements)?;
        let seq = read_elements(self.order, declared, source)?;
        debug!(elements = seq.len(), order = %self.order, "decoded plain blob");
        Ok(seq)
    }

    fn encoded_len(&self, n: usize) -> usize {
        body_len(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use rand::Rng;

    fn bits(seq: &[f32]) -> Vec<u32> {
        seq.iter().map(|v| v.to_bits()).collect()
    }

    #[test]
    fn test_encode_empty() {
        let codec = PlainCodec::default();
        let encoded = codec.encode_to_vec(&[]).expect("Encoding failed");
        assert_eq!(encoded, vec![0, 0, 0, 0]);
        let decoded = codec.decode_slice(&encoded).expect("Decoding failed");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_exercise_array() {
        let codec = PlainCodec::default();
        let input = [1.2f32, 2.45, 7.78, 9.01, 2.35];
        let encoded = codec.encode_to_vec(&input).expect("Encoding failed");
        assert_eq!(encoded.len(), 24);
        assert_eq!(&encoded[..4], &[0, 0, 0, 5]);

        let decoded = codec.decode_slice(&encoded).expect("Decoding failed");
        assert_eq!(decoded, vec![1.2f32, 2.45, 7.78, 9.01, 2.35]);
    }

    #[test]
    fn test_single_value_big_endian_bytes() {
        let encoded = PlainCodec::new(ByteOrder::Big).encode_to_vec(&[1.0]).unwrap();
        assert_eq!(encoded, vec![0, 0, 0, 1, 0x3F, 0x80, 0, 0]);
    }

    #[test]
    fn test_single_value_little_endian_bytes() {
        let encoded = PlainCodec::new(ByteOrder::Little).encode_to_vec(&[1.0]).unwrap();
        assert_eq!(encoded, vec![1, 0, 0, 0, 0, 0, 0x80, 0x3F]);
    }

    #[test]
    fn test_round_trip_random_bits() {
        let mut rng = rand::thread_rng();
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let codec = PlainCodec::new(order);
            for _ in 0..10 {
                let len = rng.gen_range(0..3000);
                // Uniform bit patterns cover NaNs, infinities and subnormals.
                let input: Vec<f32> = (0..len).map(|_| f32::from_bits(rng.gen())).collect();
                let encoded = codec.encode_to_vec(&input).expect("Encoding failed");
                assert_eq!(encoded.len(), 4 + 4 * len);
                let decoded = codec.decode_slice(&encoded).expect("Decoding failed");
                assert_eq!(bits(&decoded), bits(&input));
            }
        }
    }

    #[test]
    fn test_special_values() {
        let codec = PlainCodec::default();
        let input = [
            0.0f32,
            -0.0,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::from_bits(0x7FA0_0001),
        ];
        let decoded = codec
            .decode_slice(&codec.encode_to_vec(&input).unwrap())
            .unwrap();
        assert_eq!(bits(&decoded), bits(&input));
    }

    #[test]
    fn test_decode_truncated_header() {
        let codec = PlainCodec::default();
        for len in 0..4 {
            let err = codec.decode_slice(&vec![0u8; len]).unwrap_err();
            assert_eq!(
                err.format_error(),
                Some(&FormatError::TruncatedHeader {
                    expected: 4,
                    found: len
                })
            );
        }
    }

    #[test]
    fn test_decode_truncated_body() {
        let codec = PlainCodec::default();
        let mut encoded = codec.encode_to_vec(&[1.0, 2.0, 3.0]).unwrap();
        encoded.truncate(encoded.len() - 2);
        let err = codec.decode_slice(&encoded).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::TruncatedBody {
                declared: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_decode_negative_length() {
        let codec = PlainCodec::default();
        let mut blob = (-5i32).to_be_bytes().to_vec();
        blob.extend_from_slice(&[0u8; 20]);
        let err = codec.decode_slice(&blob).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.format_error(), Some(&FormatError::InvalidLength(-5)));
    }

    #[test]
    fn test_decode_max_elements() {
        let codec = PlainCodec::default().with_max_elements(2);
        let encoded = PlainCodec::default().encode_to_vec(&[1.0, 2.0, 3.0]).unwrap();
        let err = codec.decode_slice(&encoded).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::TooLarge {
                declared: 3,
                limit: 2
            })
        );
    }

    #[test]
    fn test_decode_slice_rejects_trailing_bytes() {
        let codec = PlainCodec::default();
        let mut encoded = codec.encode_to_vec(&[4.0]).unwrap();
        encoded.push(0xAA);
        let err = codec.decode_slice(&encoded).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::TrailingBytes(1)));
    }

    #[test]
    fn test_stream_decode_leaves_trailing_bytes() {
        let codec = PlainCodec::default();
        let mut encoded = codec.encode_to_vec(&[4.0, 5.0]).unwrap();
        encoded.extend_from_slice(b"rest");

        let mut source: &[u8] = &encoded;
        let decoded = codec.decode(&mut source).unwrap();
        assert_eq!(decoded, vec![4.0, 5.0]);
        assert_eq!(source, b"rest");
    }

    #[test]
    fn test_byte_order_mismatch_is_not_silent_for_counts() {
        // Count 1 in little endian reads as 16777216 in big endian.
        let encoded = PlainCodec::new(ByteOrder::Little).encode_to_vec(&[1.0]).unwrap();
        let err = PlainCodec::new(ByteOrder::Big).decode_slice(&encoded).unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::TruncatedBody { declared: 16_777_216, found: 1 })
        ));
    }
}
