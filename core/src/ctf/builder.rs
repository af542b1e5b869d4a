//! Programmatic construction of CTF containers.
//!
//! Types get ids in the order they are added, starting at 1, so a type may
//! refer to one that is added later by predicting its id.
//!
//! ```ignore
//! let mut b = CtfBuilder::new();
//! let int = b.integer("int", 32, true);
//! let point = b.structure("point", 8, &[("x", int, 0), ("y", int, 32)]);
//! let ctf = CtfFile::parse(&b.build())?;
//! ```

use std::io::{self, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::write::ZlibEncoder;

use super::container::{CTF_LSIZE_SENT, CTF_LSTRUCT_THRESH};
use super::header::{CTF_F_COMPRESS, Header};
use crate::types::{ArrayInfo, Encoding, Kind, TypeId};

#[derive(Debug, Clone)]
enum RawBody {
    None,
    Scalar { size: u64, encoding: Encoding },
    Reference(TypeId),
    Array(ArrayInfo),
    Function { ret: TypeId, args: Vec<TypeId> },
    Aggregate { size: u64, members: Vec<(u32, TypeId, u64)> },
    Enum { size: u64, values: Vec<(u32, i32)> },
}

#[derive(Debug, Clone)]
struct RawType {
    name: u32,
    kind: Kind,
    root: bool,
    body: RawBody,
}

#[derive(Debug, Clone)]
pub struct CtfBuilder {
    types: Vec<RawType>,
    strings: Vec<u8>,
    compressed: bool,
}

impl CtfBuilder {
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            // Offset 0 is the empty name.
            strings: vec![0],
            compressed: false,
        }
    }

    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    /// Keep `id` out of name lookups, as compilers do for bit-field
    /// encodings of a base type.
    pub fn hide(&mut self, id: TypeId) {
        if let Some(ty) = self.types.get_mut(id.raw() as usize - 1) {
            ty.root = false;
        }
    }

    pub fn integer(&mut self, name: &str, bits: u16, signed: bool) -> TypeId {
        let format = if signed { Encoding::SIGNED } else { 0 };
        let encoding = Encoding {
            format,
            offset: 0,
            bits,
        };
        self.push(name, Kind::Integer, RawBody::Scalar {
            size: u64::from(bits.div_ceil(8)),
            encoding,
        })
    }

    pub fn float(&mut self, name: &str, bits: u16) -> TypeId {
        // Format 1 is single precision, 2 double; the reader only uses bits.
        let encoding = Encoding {
            format: if bits > 32 { 2 } else { 1 },
            offset: 0,
            bits,
        };
        self.push(name, Kind::Float, RawBody::Scalar {
            size: u64::from(bits / 8),
            encoding,
        })
    }

    pub fn pointer(&mut self, target: TypeId) -> TypeId {
        self.push("", Kind::Pointer, RawBody::Reference(target))
    }

    pub fn typedef(&mut self, name: &str, target: TypeId) -> TypeId {
        self.push(name, Kind::Typedef, RawBody::Reference(target))
    }

    /// Add a `const`, `volatile` or `restrict` layer over `target`.
    pub fn qualifier(&mut self, kind: Kind, target: TypeId) -> TypeId {
        assert!(
            matches!(kind, Kind::Const | Kind::Volatile | Kind::Restrict),
            "{kind} is not a qualifier"
        );
        self.push("", kind, RawBody::Reference(target))
    }

    pub fn array(&mut self, contents: TypeId, count: u32) -> TypeId {
        let info = ArrayInfo {
            contents,
            index: TypeId::new(0),
            count,
        };
        self.push("", Kind::Array, RawBody::Array(info))
    }

    pub fn function(&mut self, ret: TypeId, args: &[TypeId]) -> TypeId {
        self.push("", Kind::Function, RawBody::Function {
            ret,
            args: args.to_vec(),
        })
    }

    /// Add a struct; member offsets are in bits.
    pub fn structure(&mut self, name: &str, size: u64, members: &[(&str, TypeId, u64)]) -> TypeId {
        let members = self.intern_members(members);
        self.push(name, Kind::Struct, RawBody::Aggregate { size, members })
    }

    pub fn union(&mut self, name: &str, size: u64, members: &[(&str, TypeId, u64)]) -> TypeId {
        let members = self.intern_members(members);
        self.push(name, Kind::Union, RawBody::Aggregate { size, members })
    }

    pub fn enumeration(&mut self, name: &str, size: u64, values: &[(&str, i32)]) -> TypeId {
        let values = values
            .iter()
            .map(|(name, value)| (self.intern(name), *value))
            .collect();
        self.push(name, Kind::Enum, RawBody::Enum { size, values })
    }

    pub fn forward(&mut self, name: &str) -> TypeId {
        self.push(name, Kind::Forward, RawBody::None)
    }

    pub fn unknown(&mut self) -> TypeId {
        self.push("", Kind::Unknown, RawBody::None)
    }

    /// Serialize in little-endian byte order.
    pub fn build(&self) -> Vec<u8> {
        self.build_as::<LittleEndian>()
    }

    pub fn build_big_endian(&self) -> Vec<u8> {
        self.build_as::<BigEndian>()
    }

    /// Wrap the container in an ELF relocatable object as `.SUNW_ctf`.
    #[cfg(feature = "test-support")]
    pub fn build_elf(&self) -> Vec<u8> {
        use object::write::Object;
        use object::{Architecture, BinaryFormat, Endianness, SectionKind};

        let mut obj = Object::new(BinaryFormat::Elf, Architecture::X86_64, Endianness::Little);
        let section = obj.add_section(Vec::new(), b".SUNW_ctf".to_vec(), SectionKind::Other);
        obj.set_section_data(section, self.build(), 4);
        obj.write().expect("in-memory object always serializes")
    }

    fn build_as<E: ByteOrder>(&self) -> Vec<u8> {
        let mut types = Vec::new();
        for ty in &self.types {
            write_type::<E, _>(&mut types, ty).expect("writing to a Vec cannot fail");
        }

        let mut body = types.clone();
        body.extend_from_slice(&self.strings);

        let header = Header {
            flags: if self.compressed { CTF_F_COMPRESS } else { 0 },
            type_offset: 0,
            string_offset: types.len() as u32,
            string_len: self.strings.len() as u32,
            ..Header::new()
        };

        let mut out = Vec::with_capacity(Header::SIZE + body.len());
        header
            .write::<E, _>(&mut out)
            .expect("writing to a Vec cannot fail");
        if self.compressed {
            let mut encoder = ZlibEncoder::new(out, Compression::default());
            encoder.write_all(&body).expect("writing to a Vec cannot fail");
            encoder.finish().expect("writing to a Vec cannot fail")
        } else {
            out.extend_from_slice(&body);
            out
        }
    }

    fn push(&mut self, name: &str, kind: Kind, body: RawBody) -> TypeId {
        let name = self.intern(name);
        self.types.push(RawType {
            name,
            kind,
            root: true,
            body,
        });
        TypeId::new(self.types.len() as u32)
    }

    fn intern(&mut self, name: &str) -> u32 {
        if name.is_empty() {
            return 0;
        }
        let offset = self.strings.len() as u32;
        self.strings.extend_from_slice(name.as_bytes());
        self.strings.push(0);
        offset
    }

    fn intern_members(&mut self, members: &[(&str, TypeId, u64)]) -> Vec<(u32, TypeId, u64)> {
        members
            .iter()
            .map(|(name, ty, offset)| (self.intern(name), *ty, *offset))
            .collect()
    }
}

impl Default for CtfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_type<E: ByteOrder, W: Write>(w: &mut W, ty: &RawType) -> io::Result<()> {
    let (size_or_type, long_size) = match &ty.body {
        RawBody::Reference(target) | RawBody::Function { ret: target, .. } => {
            (target.raw() as u16, None)
        }
        RawBody::Scalar { size, .. } | RawBody::Aggregate { size, .. } | RawBody::Enum { size, .. } => {
            if *size >= u64::from(CTF_LSIZE_SENT) {
                (CTF_LSIZE_SENT, Some(*size))
            } else {
                (*size as u16, None)
            }
        }
        RawBody::Array(_) | RawBody::None => (0, None),
    };
    let vlen = match &ty.body {
        RawBody::Function { args, .. } => args.len(),
        RawBody::Aggregate { members, .. } => members.len(),
        RawBody::Enum { values, .. } => values.len(),
        _ => 0,
    };
    let info = (ty.kind.to_raw() << 11) | (u16::from(ty.root) << 10) | (vlen as u16 & 0x3ff);

    w.write_u32::<E>(ty.name)?;
    w.write_u16::<E>(info)?;
    w.write_u16::<E>(size_or_type)?;
    if let Some(size) = long_size {
        w.write_u32::<E>((size >> 32) as u32)?;
        w.write_u32::<E>(size as u32)?;
    }

    match &ty.body {
        RawBody::None | RawBody::Reference(_) => {}
        RawBody::Scalar { encoding, .. } => w.write_u32::<E>(encoding.to_raw())?,
        RawBody::Array(info) => {
            w.write_u16::<E>(info.contents.raw() as u16)?;
            w.write_u16::<E>(info.index.raw() as u16)?;
            w.write_u32::<E>(info.count)?;
        }
        RawBody::Function { args, .. } => {
            for arg in args {
                w.write_u16::<E>(arg.raw() as u16)?;
            }
            if args.len() % 2 == 1 {
                w.write_u16::<E>(0)?;
            }
        }
        RawBody::Aggregate { size, members } => {
            for (name, ty, offset) in members {
                w.write_u32::<E>(*name)?;
                w.write_u16::<E>(ty.raw() as u16)?;
                if *size >= CTF_LSTRUCT_THRESH {
                    w.write_u16::<E>(0)?;
                    w.write_u32::<E>((offset >> 32) as u32)?;
                    w.write_u32::<E>(*offset as u32)?;
                } else {
                    w.write_u16::<E>(*offset as u16)?;
                }
            }
        }
        RawBody::Enum { values, .. } => {
            for (name, value) in values {
                w.write_u32::<E>(*name)?;
                w.write_i32::<E>(*value)?;
            }
        }
    }
    Ok(())
}
