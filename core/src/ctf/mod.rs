//! Reader for CTF (Compact C Type Format) version 2 data.
//!
//! CTF is the type-information format embedded by illumos and FreeBSD
//! toolchains in a `.SUNW_ctf` section. [`CtfFile`] decodes a container,
//! either standalone or out of an object file, and answers [`TypeInfo`]
//! queries over it.
//!
//! [`TypeInfo`]: crate::types::TypeInfo

mod container;
mod header;
mod name;

#[cfg(any(test, feature = "test-support"))]
mod builder;

pub use container::CtfFile;
pub use header::{CTF_F_COMPRESS, CTF_MAGIC, CTF_VERSION_2, Endian, Header};

#[cfg(any(test, feature = "test-support"))]
pub use builder::CtfBuilder;
