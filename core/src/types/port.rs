use super::kind::{ArrayInfo, Encoding, Kind, Member, TypeId};
use crate::api::error::Result;

/// Read-only access to a repository of C type descriptions.
///
/// The walker and serializer only ever talk to a source through this trait.
/// Every accessor that can fail for a reachable id reports it as an error;
/// callers treat that as a data-integrity fault in the source.
pub trait TypeInfo {
    /// Find the id of a named type, e.g. `int`, `struct stat`, `size_t`.
    fn lookup_by_name(&self, name: &str) -> Option<TypeId>;

    /// Strip typedefs and qualifiers until a describable type is reached.
    ///
    /// Must be idempotent: `resolve(resolve(id)) == resolve(id)`.
    fn resolve(&self, id: TypeId) -> Result<TypeId>;

    fn kind(&self, id: TypeId) -> Result<Kind>;

    /// Encoding of an integer or float type.
    fn encoding(&self, id: TypeId) -> Result<Encoding>;

    fn array_info(&self, id: TypeId) -> Result<ArrayInfo>;

    /// Members of a struct or union, in declaration order.
    fn members(&self, id: TypeId) -> Result<&[Member]>;

    /// Size in bytes of a value of this type.
    fn size_of(&self, id: TypeId) -> Result<u64>;

    /// Name of the type in C declaration syntax.
    fn type_name(&self, id: TypeId) -> Result<String>;

    /// Version of the type-info schema the source was read with.
    fn schema_version(&self) -> u32;
}
