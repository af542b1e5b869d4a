//! Rendering of the final JSON document.
//!
//! - [`render_tree`]: registry entries to `data` nodes
//! - [`Metadata`]: the `metadata` object
//! - [`Document`]: both, written out atomically

mod document;
mod metadata;
mod node;
mod tree;

pub use document::{Document, OutputStyle};
pub use metadata::{FORMAT_VERSION, Metadata};
pub use node::{MemberNode, Node, NodeBody};
pub use tree::{member_reaches_end, render_tree};
