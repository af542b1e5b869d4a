//! Conversion of CTF type information into self-describing JSON.
//!
//! Given the names of a few root types, the crate walks everything those
//! roots depend on, describes each distinct type once, keeps a link from
//! every alias back to the type it resolves to, and renders the result as a
//! deterministic JSON document.

pub mod api;
pub mod ctf;
pub mod emit;
pub mod graph;
pub mod types;

pub use api::{ConvertOptions, Error, Result, convert, convert_file};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
