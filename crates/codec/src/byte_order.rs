use serde::{Deserialize, Serialize};

/// Byte order shared by the element count and every element of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    pub fn i32_to_bytes(self, value: i32) -> [u8; 4] {
        match self {
            Self::Big => value.to_be_bytes(),
            Self::Little => value.to_le_bytes(),
        }
    }

    pub fn i32_from_bytes(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Big => i32::from_be_bytes(bytes),
            Self::Little => i32::from_le_bytes(bytes),
        }
    }

    /// Goes through the raw bit pattern so NaN payloads and signed zero survive.
    pub fn f32_to_bytes(self, value: f32) -> [u8; 4] {
        match self {
            Self::Big => value.to_bits().to_be_bytes(),
            Self::Little => value.to_bits().to_le_bytes(),
        }
    }

    pub fn f32_from_bytes(self, bytes: [u8; 4]) -> f32 {
        match self {
            Self::Big => f32::from_bits(u32::from_be_bytes(bytes)),
            Self::Little => f32::from_bits(u32::from_le_bytes(bytes)),
        }
    }

    /// Flag byte used by the framed header.
    pub(crate) fn flag(self) -> u8 {
        match self {
            Self::Big => 0,
            Self::Little => 1,
        }
    }

    pub(crate) fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Big),
            1 => Some(Self::Little),
            _ => None,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Big => write!(f, "big"),
            Self::Little => write!(f, "little"),
        }
    }
}

impl std::str::FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "big" | "be" => Ok(Self::Big),
            "little" | "le" => Ok(Self::Little),
            _ => Err(format!("Unknown byte order: {s}. Available: big, little")),
        }
    }
}
