//! Error type for every ctf2json operation.
//!
//! All errors are fatal: the conversion either produces a complete document
//! or nothing at all. The variants follow the causes a run can fail for:
//! the source could not be read, a requested type is missing, the source
//! cannot describe a reachable type, or the type is outside what the
//! document format can represent.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Kind, TypeId};

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no CTF data found in {}", path.display())]
    NoCtfData { path: PathBuf },

    #[error("failed to parse object file: {0}")]
    Object(#[from] object::Error),

    #[error("malformed CTF container: {0}")]
    Malformed(String),

    #[error("unsupported CTF version {0}")]
    UnsupportedVersion(u8),

    #[error("type not present in binary: {0}")]
    TypeNotFound(String),

    #[error("invalid type id {0}")]
    InvalidTypeId(TypeId),

    #[error("failed to read {what} of type {id}")]
    Introspection { id: TypeId, what: &'static str },

    #[error("unknown or unresolved CTF kind for id {id}: {kind}")]
    UnsupportedKind { id: TypeId, kind: Kind },

    #[error("unimplemented kind {kind} for id {id}")]
    Unimplemented { id: TypeId, kind: Kind },

    #[error("type {0} contains itself")]
    Cycle(TypeId),

    #[error("type {id} is nested more than {max_depth} levels deep")]
    NestingTooDeep { id: TypeId, max_depth: usize },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    /// True for errors caused by the request rather than by the source.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Error::TypeNotFound(_))
    }
}
