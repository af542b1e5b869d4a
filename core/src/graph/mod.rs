//! Discovery of the types a set of roots depends on.
//!
//! - [`Registry`]: ordered record of every id reached, concrete or alias
//! - [`Walker`]: memoized depth-first traversal that fills a registry

mod registry;
mod walker;

pub use registry::{Registry, VisitRecord};
pub use walker::{DEFAULT_MAX_DEPTH, Walker, walk_roots};
