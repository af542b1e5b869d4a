//! CTF container header.
//!
//! ```text
//! +----------------------------------------------------------+
//! | magic (2) | version (1) | flags (1)                      |
//! | parent label (4) | parent name (4)                       |
//! | label off (4) | object off (4) | function off (4)        |
//! | type off (4) | string off (4) | string len (4)           |
//! +----------------------------------------------------------+
//! | body: labels, objects, functions, types, strings         |
//! +----------------------------------------------------------+
//! ```
//!
//! Offsets are relative to the first byte after the header. The container is
//! written in the byte order of the machine that produced it, which is
//! recovered from the magic.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

pub const CTF_MAGIC: u16 = 0xcff1;

pub const CTF_VERSION_2: u8 = 2;

/// Body after the header is zlib-compressed.
pub const CTF_F_COMPRESS: u8 = 0x1;

/// Byte order a container was written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Detect the byte order from the first two bytes of a container.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 2 {
            return None;
        }
        if LittleEndian::read_u16(bytes) == CTF_MAGIC {
            Some(Endian::Little)
        } else if BigEndian::read_u16(bytes) == CTF_MAGIC {
            Some(Endian::Big)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: u16,
    pub version: u8,
    pub flags: u8,
    pub parent_label: u32,
    pub parent_name: u32,
    pub label_offset: u32,
    pub object_offset: u32,
    pub function_offset: u32,
    pub type_offset: u32,
    pub string_offset: u32,
    pub string_len: u32,
}

impl Header {
    pub const SIZE: usize = 36;

    pub fn new() -> Self {
        Self {
            magic: CTF_MAGIC,
            version: CTF_VERSION_2,
            flags: 0,
            parent_label: 0,
            parent_name: 0,
            label_offset: 0,
            object_offset: 0,
            function_offset: 0,
            type_offset: 0,
            string_offset: 0,
            string_len: 0,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & CTF_F_COMPRESS != 0
    }

    /// A container with a parent name holds child types that extend a
    /// parent container.
    pub fn is_child(&self) -> bool {
        self.parent_name != 0
    }

    pub fn write<E: ByteOrder, W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u16::<E>(self.magic)?;
        w.write_u8(self.version)?;
        w.write_u8(self.flags)?;
        w.write_u32::<E>(self.parent_label)?;
        w.write_u32::<E>(self.parent_name)?;
        w.write_u32::<E>(self.label_offset)?;
        w.write_u32::<E>(self.object_offset)?;
        w.write_u32::<E>(self.function_offset)?;
        w.write_u32::<E>(self.type_offset)?;
        w.write_u32::<E>(self.string_offset)?;
        w.write_u32::<E>(self.string_len)?;
        Ok(())
    }

    pub fn read<E: ByteOrder, R: Read>(r: &mut R) -> io::Result<Self> {
        let magic = r.read_u16::<E>()?;
        if magic != CTF_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid CTF magic",
            ));
        }

        Ok(Self {
            magic,
            version: r.read_u8()?,
            flags: r.read_u8()?,
            parent_label: r.read_u32::<E>()?,
            parent_name: r.read_u32::<E>()?,
            label_offset: r.read_u32::<E>()?,
            object_offset: r.read_u32::<E>()?,
            function_offset: r.read_u32::<E>()?,
            type_offset: r.read_u32::<E>()?,
            string_offset: r.read_u32::<E>()?,
            string_len: r.read_u32::<E>()?,
        })
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
