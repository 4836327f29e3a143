//! File storage for encoded float sequences.
//!
//! The codec itself only sees `Read`/`Write` trait objects; this module is the
//! one place that opens files. Every handle is owned by the call that opened
//! it and is closed on drop, including on the error paths.

mod header;

pub use header::{inspect, BlobInfo};

use floatseq_codec::{Codec, CodecError, FormatError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for file storage operations. Always names the file involved.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Codec { path: PathBuf, source: CodecError },
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn codec(path: &Path, source: CodecError) -> Self {
        Self::Codec {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Lift an I/O failure raised inside the codec back to `Io`, so a read or
    /// write failure never looks like a content problem.
    fn from_codec(path: &Path, source: CodecError) -> Self {
        match source {
            CodecError::Io(e) => Self::io(path, e),
            other => Self::codec(path, other),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Codec { path, .. } => path,
        }
    }

    /// True when the filesystem failed, whatever the file's content.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// True when the file was readable but its content was malformed.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Codec { source, .. } if source.is_format())
    }

    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Codec { source, .. } => source.format_error(),
            Self::Io { .. } => None,
        }
    }
}

/// Encode `seq` into `path`, creating the file or truncating what was there.
///
/// The data is flushed and synced before returning, so a successful return
/// means all `codec.encoded_len(seq.len())` bytes reached the file. A
/// sequence the codec cannot represent is rejected before the file is opened,
/// leaving any existing content untouched.
pub fn save(path: impl AsRef<Path>, seq: &[f32], codec: &dyn Codec) -> Result<usize, StorageError> {
    let path = path.as_ref();
    codec
        .check_encodable(seq.len())
        .map_err(|e| StorageError::codec(path, e))?;

    let file = File::create(path).map_err(|e| StorageError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let written = codec
        .encode(seq, &mut writer)
        .map_err(|e| StorageError::from_codec(path, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| StorageError::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| StorageError::io(path, e))?;

    debug!(path = %path.display(), elements = seq.len(), bytes = written, "saved sequence");
    Ok(written)
}

/// Decode the whole of `path`. Bytes left after the last element are a
/// format error.
pub fn load(path: impl AsRef<Path>, codec: &dyn Codec) -> Result<Vec<f32>, StorageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StorageError::io(path, e))?;
    let file_len = file.metadata().map_err(|e| StorageError::io(path, e))?.len();
    let mut reader = BufReader::new(file);

    let seq = codec.decode(&mut reader).map_err(|e| {
        warn!(path = %path.display(), error = %e, "rejected blob");
        StorageError::from_codec(path, e)
    })?;

    // The decoded blob is exactly `encoded_len` bytes; anything past that is left over.
    let expected = codec.encoded_len(seq.len()) as u64;
    if file_len > expected {
        let trailing = (file_len - expected) as usize;
        warn!(path = %path.display(), trailing, "rejected blob with trailing bytes");
        let err = FormatError::TrailingBytes(trailing);
        return Err(StorageError::codec(path, err.into()));
    }

    debug!(path = %path.display(), elements = seq.len(), "loaded sequence");
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatseq_codec::{ByteOrder, CodecConfig, CodecStrategy, FramedCodec, PlainCodec};
    use std::io::{Read, Write};
    use tempfile::tempdir;

    /// Plain layout with a tiny representable length, standing in for a
    /// sequence past `i32::MAX` elements.
    struct CappedCodec {
        inner: PlainCodec,
        cap: usize,
    }

    impl Codec for CappedCodec {
        fn encode(&self, seq: &[f32], sink: &mut dyn Write) -> Result<usize, CodecError> {
            self.check_encodable(seq.len())?;
            self.inner.encode(seq, sink)
        }

        fn decode(&self, source: &mut dyn Read) -> Result<Vec<f32>, CodecError> {
            self.inner.decode(source)
        }

        fn encoded_len(&self, n: usize) -> usize {
            self.inner.encoded_len(n)
        }

        fn check_encodable(&self, n: usize) -> Result<(), CodecError> {
            if n > self.cap {
                return Err(CodecError::TooLong { len: n });
            }
            Ok(())
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        let codec = PlainCodec::default();

        let written = save(&path, &[1.2, 2.45, 7.78], &codec).unwrap();
        assert_eq!(written, 16);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 16);
        assert_eq!(load(&path, &codec).unwrap(), vec![1.2f32, 2.45, 7.78]);
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        std::fs::write(&path, vec![0xFFu8; 100]).unwrap();

        let codec = CodecConfig::new(CodecStrategy::Framed, ByteOrder::Little);
        save(&path, &[3.0], &codec).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 14);
        assert_eq!(load(&path, &codec).unwrap(), vec![3.0f32]);
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.bin");
        let err = load(&path, &PlainCodec::default()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!err.is_format());
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_save_into_missing_directory_is_io() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no").join("such").join("dir.bin");
        let err = save(&path, &[1.0], &PlainCodec::default()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn test_load_directory_is_io() {
        let temp = tempdir().unwrap();
        let err = load(temp.path(), &PlainCodec::default()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.is_io());
        assert!(!err.is_format());
        assert_eq!(err.format_error(), None);
        assert_eq!(err.path(), temp.path());
    }

    #[test]
    fn test_save_too_long_leaves_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        let original = PlainCodec::default().encode_to_vec(&[5.0, 6.0]).unwrap();
        std::fs::write(&path, &original).unwrap();

        let codec = CappedCodec {
            inner: PlainCodec::default(),
            cap: 2,
        };
        let err = save(&path, &[1.0, 2.0, 3.0], &codec).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Codec {
                source: CodecError::TooLong { len: 3 },
                ..
            }
        ));
        assert!(!err.is_io());
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_save_too_long_creates_no_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        let codec = CappedCodec {
            inner: PlainCodec::default(),
            cap: 0,
        };
        save(&path, &[1.0], &codec).unwrap_err();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_framed_trailing_bytes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        let codec = FramedCodec::new(ByteOrder::Little);
        let mut blob = codec.encode_to_vec(&[1.0, 2.0]).unwrap();
        blob.extend_from_slice(&codec.encode_to_vec(&[3.0]).unwrap());
        std::fs::write(&path, blob).unwrap();

        let err = load(&path, &codec).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::TrailingBytes(14)));
    }

    #[test]
    fn test_load_trailing_bytes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        let mut blob = PlainCodec::default().encode_to_vec(&[1.0]).unwrap();
        blob.extend_from_slice(&[0, 0, 0]);
        std::fs::write(&path, blob).unwrap();

        let err = load(&path, &PlainCodec::default()).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.format_error(), Some(&FormatError::TrailingBytes(3)));
    }

    #[test]
    fn test_load_truncated_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("seq.bin");
        std::fs::write(&path, [0u8, 0, 0, 9, 1, 2, 3, 4]).unwrap();

        let err = load(&path, &PlainCodec::default()).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::TruncatedBody {
                declared: 9,
                found: 1
            })
        );
        assert!(err.to_string().contains("seq.bin"));
    }
}
