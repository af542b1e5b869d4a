//! Public API for converting CTF type information to JSON.
//!
//! # Example
//!
//! ```no_run
//! use ctf2json_core::api::{ConvertOptions, convert_file};
//! use ctf2json_core::emit::OutputStyle;
//!
//! let doc = convert_file("/usr/lib/libc.so.1", &["struct stat"], &ConvertOptions::default())?;
//! doc.write_to(&mut std::io::stdout(), OutputStyle::Pretty)?;
//! # Ok::<(), ctf2json_core::api::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod options;

pub use convert::{convert, convert_file};
pub use error::{Error, Result};
pub use options::ConvertOptions;
