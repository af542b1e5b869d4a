use std::borrow::Cow;
use std::io::{self, Cursor, Read};
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use hashbrown::HashMap;
use object::{Object, ObjectSection};

use super::header::{CTF_VERSION_2, Endian, Header};
use crate::api::error::{Error, Result};
use crate::types::{ArrayInfo, Encoding, Kind, Member, TypeId, TypeInfo};

/// Size field value announcing a 64-bit size after the record header.
pub(crate) const CTF_LSIZE_SENT: u16 = 0xffff;

/// Aggregates at least this large store members with 64-bit offsets.
pub(crate) const CTF_LSTRUCT_THRESH: u64 = 8192;

/// Child containers number their types above this value.
const CHILD_ID_BASE: u32 = 0x8000;

/// Sections that carry CTF data in an object file.
const SECTION_NAMES: [&str; 2] = [".SUNW_ctf", ".ctf"];

const DEFAULT_POINTER_SIZE: u64 = 8;

#[derive(Debug, Clone)]
pub(crate) enum Body {
    /// Unknown and forward declarations carry nothing.
    None,
    Scalar { size: u64, encoding: Encoding },
    /// Pointer, typedef and qualifiers name the type they apply to.
    Reference(TypeId),
    Array(ArrayInfo),
    Function { ret: TypeId },
    Aggregate { size: u64, members: Vec<Member> },
    Enum { size: u64 },
}

#[derive(Debug, Clone)]
pub(crate) struct TypeEntry {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) root: bool,
    pub(crate) body: Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Namespace {
    Ordinary,
    Struct,
    Union,
    Enum,
}

/// A parsed CTF container.
///
/// The whole type section is decoded up front; queries afterwards never
/// touch the raw bytes again.
#[derive(Debug)]
pub struct CtfFile {
    header: Header,
    endian: Endian,
    pointer_size: u64,
    first_id: u32,
    types: Vec<TypeEntry>,
    names: HashMap<(Namespace, String), TypeId>,
    /// Pointer type targeting each type, for `name *` lookups.
    pointers: HashMap<TypeId, TypeId>,
}

impl CtfFile {
    /// Open a raw CTF container or an object file carrying a CTF section.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        if Endian::detect(&bytes).is_some() {
            tracing::debug!(path = %path.display(), "reading raw CTF container");
            return Self::parse(&bytes);
        }

        let file = object::File::parse(&*bytes)?;
        let section = SECTION_NAMES
            .iter()
            .find_map(|name| file.section_by_name(name))
            .ok_or_else(|| Error::NoCtfData {
                path: path.to_path_buf(),
            })?;
        let data = section.uncompressed_data()?;
        let pointer_size = if file.is_64() { 8 } else { 4 };
        tracing::debug!(
            path = %path.display(),
            section = section.name().unwrap_or("?"),
            pointer_size,
            "reading CTF section from object file"
        );

        Ok(Self::parse(&data)?.with_pointer_size(pointer_size))
    }

    /// Parse an in-memory container.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        match Endian::detect(bytes) {
            Some(Endian::Little) => Self::parse_as::<LittleEndian>(bytes, Endian::Little),
            Some(Endian::Big) => Self::parse_as::<BigEndian>(bytes, Endian::Big),
            None => Err(Error::malformed("bad magic number")),
        }
    }

    fn parse_as<E: ByteOrder>(bytes: &[u8], endian: Endian) -> Result<Self> {
        if bytes.len() < Header::SIZE {
            return Err(Error::malformed("truncated header"));
        }
        let header = Header::read::<E, _>(&mut Cursor::new(bytes))
            .map_err(|e| Error::malformed(format!("header: {e}")))?;
        if header.version != CTF_VERSION_2 {
            return Err(Error::UnsupportedVersion(header.version));
        }

        let body = &bytes[Header::SIZE..];
        let body: Cow<'_, [u8]> = if header.is_compressed() {
            Cow::Owned(inflate(body)?)
        } else {
            Cow::Borrowed(body)
        };

        let string_end = header
            .string_offset
            .checked_add(header.string_len)
            .ok_or_else(|| Error::malformed("string table length overflows"))?;
        let strings = Strings(section(&body, header.string_offset, string_end, "string table")?);
        let type_data = section(&body, header.type_offset, header.string_offset, "type section")?;

        let first_id = if header.is_child() {
            CHILD_ID_BASE + 1
        } else {
            1
        };

        let mut types = Vec::new();
        let mut cursor = Cursor::new(type_data);
        while (cursor.position() as usize) < type_data.len() {
            let id = first_id as usize + types.len();
            let entry = read_type::<E>(&mut cursor, &strings).map_err(|e| {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    Error::malformed(format!("type {id}: truncated record"))
                } else {
                    Error::malformed(format!("type {id}: {e}"))
                }
            })?;
            types.push(entry);
        }
        tracing::debug!(types = types.len(), ?endian, "parsed CTF type section");

        let mut file = CtfFile {
            header,
            endian,
            pointer_size: DEFAULT_POINTER_SIZE,
            first_id,
            types,
            names: HashMap::new(),
            pointers: HashMap::new(),
        };
        file.index();
        Ok(file)
    }

    /// Override the size reported for pointer types.
    pub fn with_pointer_size(mut self, pointer_size: u64) -> Self {
        self.pointer_size = pointer_size;
        self
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn pointer_size(&self) -> u64 {
        self.pointer_size
    }

    /// Number of type records in the container.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn index(&mut self) {
        for (index, entry) in self.types.iter().enumerate() {
            let id = TypeId::new(self.first_id + index as u32);

            if let (Kind::Pointer, Body::Reference(target)) = (entry.kind, &entry.body) {
                self.pointers.entry(*target).or_insert(id);
            }

            if !entry.root || entry.name.is_empty() {
                continue;
            }
            let namespace = match entry.kind {
                Kind::Integer | Kind::Float | Kind::Typedef => Namespace::Ordinary,
                Kind::Struct | Kind::Forward => Namespace::Struct,
                Kind::Union => Namespace::Union,
                Kind::Enum => Namespace::Enum,
                _ => continue,
            };

            // First definition wins, but a full definition replaces a forward.
            let slot = self
                .names
                .entry((namespace, entry.name.clone()))
                .or_insert(id);
            if *slot != id && entry.kind != Kind::Forward {
                let existing = (slot.raw() - self.first_id) as usize;
                if self.types[existing].kind == Kind::Forward {
                    *slot = id;
                }
            }
        }
    }

    pub(crate) fn entry(&self, id: TypeId) -> Result<&TypeEntry> {
        id.raw()
            .checked_sub(self.first_id)
            .and_then(|index| self.types.get(index as usize))
            .ok_or(Error::InvalidTypeId(id))
    }

    /// Upper bound on the length of any chain of references.
    pub(crate) fn chain_limit(&self) -> usize {
        self.types.len() + 1
    }

    /// Size of `id`, following aliases and multiplying through arrays in a
    /// loop, so long chains need no stack.
    fn size_at(&self, id: TypeId) -> Result<u64> {
        let overflow = || Error::malformed(format!("size of type {id} overflows"));
        let mut current = id;
        let mut count: u64 = 1;

        for _ in 0..=self.chain_limit() {
            let entry = self.entry(current)?;
            let size = match &entry.body {
                Body::Scalar { size, .. } | Body::Aggregate { size, .. } | Body::Enum { size } => {
                    *size
                }
                Body::Reference(_) if entry.kind == Kind::Pointer => self.pointer_size,
                Body::Reference(target) => {
                    current = *target;
                    continue;
                }
                Body::Array(info) => {
                    count = count.checked_mul(u64::from(info.count)).ok_or_else(overflow)?;
                    current = info.contents;
                    continue;
                }
                Body::Function { .. } => 0,
                Body::None => {
                    return Err(Error::Introspection {
                        id: current,
                        what: "size",
                    });
                }
            };
            return size.checked_mul(count).ok_or_else(overflow);
        }
        Err(Error::malformed(format!("size of type {id} refers to itself")))
    }
}

impl TypeInfo for CtfFile {
    fn lookup_by_name(&self, name: &str) -> Option<TypeId> {
        let base = name.trim_end_matches(|c: char| c == '*' || c.is_whitespace());
        let stars = name[base.len()..].chars().filter(|&c| c == '*').count();

        let base = base.trim();
        let (namespace, tag) = if let Some(tag) = base.strip_prefix("struct ") {
            (Namespace::Struct, tag)
        } else if let Some(tag) = base.strip_prefix("union ") {
            (Namespace::Union, tag)
        } else if let Some(tag) = base.strip_prefix("enum ") {
            (Namespace::Enum, tag)
        } else {
            (Namespace::Ordinary, base)
        };

        let mut id = *self.names.get(&(namespace, tag.trim().to_string()))?;
        for _ in 0..stars {
            id = *self.pointers.get(&id)?;
        }
        Some(id)
    }

    fn resolve(&self, id: TypeId) -> Result<TypeId> {
        let mut current = id;
        for _ in 0..self.chain_limit() {
            let entry = self.entry(current)?;
            match &entry.body {
                Body::Reference(next) if entry.kind.is_alias() => current = *next,
                _ => return Ok(current),
            }
        }
        Err(Error::malformed(format!("typedef chain of type {id} loops")))
    }

    fn kind(&self, id: TypeId) -> Result<Kind> {
        Ok(self.entry(id)?.kind)
    }

    fn encoding(&self, id: TypeId) -> Result<Encoding> {
        match self.entry(id)?.body {
            Body::Scalar { encoding, .. } => Ok(encoding),
            _ => Err(Error::Introspection {
                id,
                what: "encoding",
            }),
        }
    }

    fn array_info(&self, id: TypeId) -> Result<ArrayInfo> {
        match self.entry(id)?.body {
            Body::Array(info) => Ok(info),
            _ => Err(Error::Introspection {
                id,
                what: "array information",
            }),
        }
    }

    fn members(&self, id: TypeId) -> Result<&[Member]> {
        match &self.entry(id)?.body {
            Body::Aggregate { members, .. } => Ok(members),
            _ => Err(Error::Introspection {
                id,
                what: "members",
            }),
        }
    }

    fn size_of(&self, id: TypeId) -> Result<u64> {
        self.size_at(id)
    }

    fn type_name(&self, id: TypeId) -> Result<String> {
        self.format_name(id)
    }

    fn schema_version(&self) -> u32 {
        u32::from(self.header.version)
    }
}

fn inflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| Error::malformed(format!("failed to decompress: {e}")))?;
    Ok(out)
}

fn section<'a>(body: &'a [u8], start: u32, end: u32, what: &str) -> Result<&'a [u8]> {
    body.get(start as usize..end as usize)
        .ok_or_else(|| Error::malformed(format!("{what} [{start}, {end}) is out of bounds")))
}

struct Strings<'a>(&'a [u8]);

impl Strings<'_> {
    fn get(&self, name: u32) -> io::Result<String> {
        if name >> 31 != 0 {
            return Err(invalid("name refers to the external string table"));
        }
        let offset = (name & 0x7fff_ffff) as usize;
        let tail = self
            .0
            .get(offset..)
            .ok_or_else(|| invalid(format!("name offset {offset} is out of bounds")))?;
        let end = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| invalid(format!("name at offset {offset} is not terminated")))?;
        Ok(String::from_utf8_lossy(&tail[..end]).into_owned())
    }
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn read_type<E: ByteOrder>(r: &mut Cursor<&[u8]>, strings: &Strings<'_>) -> io::Result<TypeEntry> {
    let name = strings.get(r.read_u32::<E>()?)?;
    let info = r.read_u16::<E>()?;
    let size_or_type = r.read_u16::<E>()?;

    let raw_kind = (info >> 11) & 0x1f;
    let root = info & 0x400 != 0;
    let vlen = info & 0x3ff;
    let kind = Kind::from_raw(raw_kind).ok_or_else(|| invalid(format!("unknown kind {raw_kind}")))?;

    let size = if size_or_type == CTF_LSIZE_SENT {
        let hi = r.read_u32::<E>()?;
        let lo = r.read_u32::<E>()?;
        (u64::from(hi) << 32) | u64::from(lo)
    } else {
        u64::from(size_or_type)
    };
    let reference = TypeId::new(u32::from(size_or_type));

    let body = match kind {
        Kind::Integer | Kind::Float => Body::Scalar {
            size,
            encoding: Encoding::from_raw(r.read_u32::<E>()?),
        },
        Kind::Pointer | Kind::Typedef | Kind::Volatile | Kind::Const | Kind::Restrict => {
            Body::Reference(reference)
        }
        Kind::Array => {
            let contents = r.read_u16::<E>()?;
            let index = r.read_u16::<E>()?;
            let count = r.read_u32::<E>()?;
            Body::Array(ArrayInfo {
                contents: TypeId::new(u32::from(contents)),
                index: TypeId::new(u32::from(index)),
                count,
            })
        }
        Kind::Function => {
            // Argument ids, padded to a 4-byte boundary.
            for _ in 0..vlen + (vlen & 1) {
                r.read_u16::<E>()?;
            }
            Body::Function { ret: reference }
        }
        Kind::Struct | Kind::Union => {
            let mut members = Vec::with_capacity(usize::from(vlen));
            for _ in 0..vlen {
                let name = strings.get(r.read_u32::<E>()?)?;
                let ty = TypeId::new(u32::from(r.read_u16::<E>()?));
                let bit_offset = if size >= CTF_LSTRUCT_THRESH {
                    let _pad = r.read_u16::<E>()?;
                    let hi = r.read_u32::<E>()?;
                    let lo = r.read_u32::<E>()?;
                    (u64::from(hi) << 32) | u64::from(lo)
                } else {
                    u64::from(r.read_u16::<E>()?)
                };
                members.push(Member {
                    name,
                    ty,
                    bit_offset,
                });
            }
            Body::Aggregate { size, members }
        }
        Kind::Enum => {
            for _ in 0..vlen {
                strings.get(r.read_u32::<E>()?)?;
                r.read_i32::<E>()?;
            }
            Body::Enum { size }
        }
        Kind::Unknown | Kind::Forward => Body::None,
    };

    Ok(TypeEntry {
        name,
        kind,
        root,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctf::CtfBuilder;
    use pretty_assertions::assert_eq;

    fn sample() -> (CtfBuilder, [TypeId; 6]) {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let long = b.integer("long", 64, true);
        let double = b.float("double", 64);
        let size_t = b.typedef("size_t", long);
        let point = b.structure("point", 8, &[("x", int, 0), ("y", int, 32)]);
        let ptr = b.pointer(point);
        (b, [int, long, double, size_t, point, ptr])
    }

    #[test]
    fn parses_types_in_id_order() {
        let (b, [int, long, double, size_t, point, ptr]) = sample();
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.len(), 6);
        assert_eq!(ctf.schema_version(), 2);
        assert_eq!(ctf.kind(int).unwrap(), Kind::Integer);
        assert_eq!(ctf.kind(long).unwrap(), Kind::Integer);
        assert_eq!(ctf.kind(double).unwrap(), Kind::Float);
        assert_eq!(ctf.kind(size_t).unwrap(), Kind::Typedef);
        assert_eq!(ctf.kind(point).unwrap(), Kind::Struct);
        assert_eq!(ctf.kind(ptr).unwrap(), Kind::Pointer);
        assert_eq!(int, TypeId::new(1));
    }

    #[test]
    fn reads_encodings_and_members() {
        let (b, [int, _, double, _, point, _]) = sample();
        let ctf = CtfFile::parse(&b.build()).unwrap();

        let enc = ctf.encoding(int).unwrap();
        assert_eq!(enc.bits, 32);
        assert!(enc.is_signed());
        assert_eq!(ctf.encoding(double).unwrap().bits, 64);

        let members = ctf.members(point).unwrap();
        assert_eq!(
            members,
            &[
                Member {
                    name: "x".to_string(),
                    ty: int,
                    bit_offset: 0
                },
                Member {
                    name: "y".to_string(),
                    ty: int,
                    bit_offset: 32
                },
            ]
        );
    }

    #[test]
    fn wrong_kind_accessors_fail() {
        let (b, [int, _, _, _, point, _]) = sample();
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert!(matches!(
            ctf.encoding(point),
            Err(Error::Introspection { what: "encoding", .. })
        ));
        assert!(matches!(ctf.members(int), Err(Error::Introspection { .. })));
        assert!(matches!(ctf.array_info(int), Err(Error::Introspection { .. })));
        assert!(matches!(
            ctf.kind(TypeId::new(99)),
            Err(Error::InvalidTypeId(id)) if id == TypeId::new(99)
        ));
        assert!(matches!(
            ctf.kind(TypeId::new(0)),
            Err(Error::InvalidTypeId(_))
        ));
    }

    #[test]
    fn resolve_strips_typedefs_and_qualifiers() {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let cint = b.qualifier(Kind::Const, int);
        let vcint = b.qualifier(Kind::Volatile, cint);
        let myint = b.typedef("myint_t", vcint);
        let ptr = b.pointer(myint);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.resolve(myint).unwrap(), int);
        assert_eq!(ctf.resolve(cint).unwrap(), int);
        assert_eq!(ctf.resolve(int).unwrap(), int);
        // Pointers are describable on their own.
        assert_eq!(ctf.resolve(ptr).unwrap(), ptr);
    }

    #[test]
    fn resolve_detects_typedef_loops() {
        let mut b = CtfBuilder::new();
        // Ids are handed out in order, so 2 can be referenced before it exists.
        let a = b.typedef("a_t", TypeId::new(2));
        b.typedef("b_t", a);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert!(matches!(ctf.resolve(a), Err(Error::Malformed(_))));
    }

    #[test]
    fn sizes_follow_the_type_graph() {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let arr = b.array(int, 10);
        let grid = b.array(arr, 3);
        let ptr = b.pointer(int);
        let alias = b.typedef("grid_t", grid);
        let fwd = b.forward("opaque");
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.size_of(int).unwrap(), 4);
        assert_eq!(ctf.size_of(arr).unwrap(), 40);
        assert_eq!(ctf.size_of(grid).unwrap(), 120);
        assert_eq!(ctf.size_of(ptr).unwrap(), 8);
        assert_eq!(ctf.size_of(alias).unwrap(), 120);
        assert!(matches!(ctf.size_of(fwd), Err(Error::Introspection { .. })));

        let ctf = ctf.with_pointer_size(4);
        assert_eq!(ctf.size_of(ptr).unwrap(), 4);
    }

    #[test]
    fn long_alias_chains_are_sized_iteratively() {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let mut ty = b.array(int, 3);
        for _ in 0..60_000 {
            ty = b.qualifier(Kind::Volatile, ty);
        }
        let outer = b.array(ty, 2);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.size_of(ty).unwrap(), 12);
        assert_eq!(ctf.size_of(outer).unwrap(), 24);
    }

    #[test]
    fn oversized_arrays_are_malformed() {
        let mut b = CtfBuilder::new();
        let long = b.integer("long", 64, true);
        let huge = b.array(long, u32::MAX);
        let grid = b.array(huge, u32::MAX);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert!(matches!(ctf.size_of(grid), Err(Error::Malformed(_))));
    }

    #[test]
    fn lookup_uses_tag_namespaces() {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let tagged = b.structure("stat", 4, &[("mode", int, 0)]);
        let plain = b.typedef("stat", tagged);
        let ptr = b.pointer(tagged);
        let u = b.union("value", 4, &[("i", int, 0)]);
        let e = b.enumeration("color", 4, &[("RED", 0), ("GREEN", 1)]);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.lookup_by_name("int"), Some(int));
        assert_eq!(ctf.lookup_by_name("struct stat"), Some(tagged));
        assert_eq!(ctf.lookup_by_name("stat"), Some(plain));
        assert_eq!(ctf.lookup_by_name("struct stat *"), Some(ptr));
        assert_eq!(ctf.lookup_by_name("struct stat*"), Some(ptr));
        assert_eq!(ctf.lookup_by_name("union value"), Some(u));
        assert_eq!(ctf.lookup_by_name("enum color"), Some(e));
        assert_eq!(ctf.lookup_by_name("value"), None);
        assert_eq!(ctf.lookup_by_name("int *"), None);
        assert_eq!(ctf.lookup_by_name("no_such_type"), None);
    }

    #[test]
    fn lookup_skips_non_root_types_and_prefers_definitions() {
        let mut b = CtfBuilder::new();
        let fwd = b.forward("node");
        let int = b.integer("int", 32, true);
        let bitfield = b.integer("int", 3, true);
        b.hide(bitfield);
        let node = b.structure("node", 4, &[("value", int, 0)]);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_ne!(ctf.lookup_by_name("struct node"), Some(fwd));
        assert_eq!(ctf.lookup_by_name("struct node"), Some(node));
        assert_eq!(ctf.lookup_by_name("int"), Some(int));
    }

    #[test]
    fn big_endian_and_compressed_containers_parse() {
        let (b, [int, .., point, _]) = sample();

        let be = CtfFile::parse(&b.build_big_endian()).unwrap();
        assert_eq!(be.endian(), Endian::Big);
        assert_eq!(be.members(point).unwrap().len(), 2);

        let mut b = b;
        b.set_compressed(true);
        let bytes = b.build();
        let compressed = CtfFile::parse(&bytes).unwrap();
        assert!(compressed.header().is_compressed());
        assert_eq!(compressed.encoding(int).unwrap().bits, 32);
    }

    #[test]
    fn large_aggregates_use_long_member_offsets() {
        let mut b = CtfBuilder::new();
        let char_ = b.integer("char", 8, true);
        let buf = b.array(char_, 70_000);
        let tail = b.integer("long", 64, true);
        let big = b.structure("big", 70_008, &[("buf", buf, 0), ("tail", tail, 560_000)]);
        let ctf = CtfFile::parse(&b.build()).unwrap();

        assert_eq!(ctf.size_of(big).unwrap(), 70_008);
        assert_eq!(ctf.members(big).unwrap()[1].bit_offset, 560_000);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            CtfFile::parse(b"not ctf at all, not even close......."),
            Err(Error::Malformed(_))
        ));

        let mut bytes = CtfBuilder::new().build();
        bytes[2] = 3;
        assert!(matches!(
            CtfFile::parse(&bytes),
            Err(Error::UnsupportedVersion(3))
        ));

        let (b, _) = sample();
        let bytes = b.build();
        assert!(matches!(
            CtfFile::parse(&bytes[..Header::SIZE - 1]),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn truncated_type_section_names_the_record() {
        let mut b = CtfBuilder::new();
        b.integer("int", 32, true);
        let mut bytes = b.build();

        // Shrink the type section by moving the string table offset back.
        let string_offset = LittleEndian::read_u32(&bytes[28..32]);
        LittleEndian::write_u32(&mut bytes[28..32], string_offset - 2);
        let len = LittleEndian::read_u32(&bytes[32..36]);
        LittleEndian::write_u32(&mut bytes[32..36], len + 2);

        let err = CtfFile::parse(&bytes).unwrap_err();
        assert_eq!(err.to_string(), "malformed CTF container: type 1: truncated record");
    }

    #[test]
    fn open_reports_missing_files() {
        let err = CtfFile::open("/nonexistent/definitely/missing.ctf").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
