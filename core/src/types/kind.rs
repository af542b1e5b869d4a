use core::fmt;

/// Identifier of one type inside a type-info source.
///
/// Ids are opaque to the walker; the only property it relies on is their
/// total order, which drives both memoization and output order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub const fn new(raw: u32) -> Self {
        TypeId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a type, as recorded by the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Unknown,
    Integer,
    Float,
    Pointer,
    Array,
    Function,
    Struct,
    Union,
    Enum,
    Forward,
    Typedef,
    Volatile,
    Const,
    Restrict,
}

impl Kind {
    /// Decode the 5-bit kind field of a CTF type record.
    pub fn from_raw(raw: u16) -> Option<Self> {
        let kind = match raw {
            0 => Kind::Unknown,
            1 => Kind::Integer,
            2 => Kind::Float,
            3 => Kind::Pointer,
            4 => Kind::Array,
            5 => Kind::Function,
            6 => Kind::Struct,
            7 => Kind::Union,
            8 => Kind::Enum,
            9 => Kind::Forward,
            10 => Kind::Typedef,
            11 => Kind::Volatile,
            12 => Kind::Const,
            13 => Kind::Restrict,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn to_raw(self) -> u16 {
        match self {
            Kind::Unknown => 0,
            Kind::Integer => 1,
            Kind::Float => 2,
            Kind::Pointer => 3,
            Kind::Array => 4,
            Kind::Function => 5,
            Kind::Struct => 6,
            Kind::Union => 7,
            Kind::Enum => 8,
            Kind::Forward => 9,
            Kind::Typedef => 10,
            Kind::Volatile => 11,
            Kind::Const => 12,
            Kind::Restrict => 13,
        }
    }

    /// Kinds that name another type rather than describing one.
    pub const fn is_alias(self) -> bool {
        matches!(
            self,
            Kind::Typedef | Kind::Volatile | Kind::Const | Kind::Restrict
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Unknown => "unknown",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Pointer => "pointer",
            Kind::Array => "array",
            Kind::Function => "function",
            Kind::Struct => "struct",
            Kind::Union => "union",
            Kind::Enum => "enum",
            Kind::Forward => "forward",
            Kind::Typedef => "typedef",
            Kind::Volatile => "volatile",
            Kind::Const => "const",
            Kind::Restrict => "restrict",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.to_raw())
    }
}

/// Bit-level encoding of an integer or floating point type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// Format flags. For integers see [`Encoding::SIGNED`] and friends.
    pub format: u8,
    /// Offset in bits of the value within its storage.
    pub offset: u8,
    /// Width in bits.
    pub bits: u16,
}

impl Encoding {
    pub const SIGNED: u8 = 0x01;
    pub const CHAR: u8 = 0x02;
    pub const BOOL: u8 = 0x04;
    pub const VARARGS: u8 = 0x08;

    pub fn from_raw(raw: u32) -> Self {
        Encoding {
            format: ((raw >> 24) & 0xff) as u8,
            offset: ((raw >> 16) & 0xff) as u8,
            bits: (raw & 0xffff) as u16,
        }
    }

    pub fn to_raw(self) -> u32 {
        (u32::from(self.format) << 24) | (u32::from(self.offset) << 16) | u32::from(self.bits)
    }

    pub fn is_signed(self) -> bool {
        self.format & Self::SIGNED != 0
    }

    /// Width in whole bytes.
    pub fn byte_width(self) -> u32 {
        u32::from(self.bits) / 8
    }
}

/// Element and index types of an array, plus its element count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayInfo {
    pub contents: TypeId,
    pub index: TypeId,
    pub count: u32,
}

/// One member of a struct or union, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: TypeId,
    /// Offset from the start of the aggregate, in bits.
    pub bit_offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_raw_values_round_trip() {
        for raw in 0..=13 {
            let kind = Kind::from_raw(raw).unwrap();
            assert_eq!(kind.to_raw(), raw);
        }
        assert_eq!(Kind::from_raw(14), None);
        assert_eq!(Kind::from_raw(31), None);
    }

    #[test]
    fn encoding_unpacks_fields() {
        let enc = Encoding::from_raw(0x0100_0020);
        assert!(enc.is_signed());
        assert_eq!(enc.offset, 0);
        assert_eq!(enc.bits, 32);
        assert_eq!(enc.byte_width(), 4);
        assert_eq!(enc.to_raw(), 0x0100_0020);
    }

    #[test]
    fn unsigned_char_encoding() {
        let enc = Encoding {
            format: Encoding::CHAR,
            offset: 0,
            bits: 8,
        };
        assert!(!enc.is_signed());
        assert_eq!(enc.byte_width(), 1);
    }

    #[test]
    fn type_ids_order_numerically() {
        assert!(TypeId::new(2) < TypeId::new(10));
        assert_eq!(TypeId::new(7).to_string(), "7");
    }
}
