mod framed;
mod plain;

pub use framed::{FrameHeader, FramedCodec, FRAME_HEADER_SIZE, MAGIC, VERSION};
pub use plain::PlainCodec;
