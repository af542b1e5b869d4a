//! ctf2json - describe C types from CTF data as JSON
//!
//! # Overview
//!
//! CTF (Compact C Type Format) is the compact type information illumos and
//! FreeBSD toolchains embed in binaries. ctf2json takes the names of a few
//! root types, discovers every type they depend on, and writes one JSON
//! document describing them:
//!
//! ```text
//! { "metadata": { ... "requested_types": [ "struct stat" ] },
//!   "data": [ { "name": "int", "integer": { "length": 4, "signed": true } }, ... ] }
//! ```
//!
//! # Quick Start
//!
//! ```
//! use ctf2json::{ConvertOptions, CtfFile, OutputStyle, convert};
//! use ctf2json::ctf::CtfBuilder;
//!
//! let mut b = CtfBuilder::new();
//! let int = b.integer("int", 32, true);
//! b.structure("point", 8, &[("x", int, 0), ("y", int, 32)]);
//! let ctf = CtfFile::parse(&b.build()).unwrap();
//!
//! let doc = convert(&ctf, "point.ctf", &["struct point"], &ConvertOptions::default()).unwrap();
//! assert_eq!(doc.data.len(), 2);
//!
//! let json = doc.to_bytes(OutputStyle::Compact).unwrap();
//! assert!(json.ends_with(b"}\n"));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{RenderConfig, render_error, render_error_to};

// Re-export public API from ctf2json_core
pub use ctf2json_core::api::{ConvertOptions, Error, Result, convert, convert_file};
pub use ctf2json_core::ctf::{self, CtfFile};
pub use ctf2json_core::emit::{self, Document, OutputStyle};
pub use ctf2json_core::graph::{self, Registry, VisitRecord, Walker};
pub use ctf2json_core::types::{self, Kind, TypeId, TypeInfo};
