use crate::graph::DEFAULT_MAX_DEPTH;

/// Knobs for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest array/struct nesting the walker accepts.
    pub max_depth: usize,
    /// Fixed `created_at` stamp; the current time when `None`.
    pub created_at: Option<i64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            created_at: None,
        }
    }
}
