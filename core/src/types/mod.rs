//! The type-info port.
//!
//! - [`TypeInfo`]: capability interface over a source of C type descriptions
//! - [`TypeId`], [`Kind`]: identity and classification of a type
//! - [`Encoding`], [`ArrayInfo`], [`Member`]: per-kind details
//!
//! [`crate::ctf::CtfFile`] is the implementation shipped with this crate.

mod kind;
mod port;

pub use kind::{ArrayInfo, Encoding, Kind, Member, TypeId};
pub use port::TypeInfo;
