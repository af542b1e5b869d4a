use serde::Serialize;

/// Version of the document layout produced by this crate.
pub const FORMAT_VERSION: &str = "1.0";

/// The `metadata` object of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub ctf2json_version: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    /// Source the types were read from, as it was given.
    pub derived_from: String,
    pub ctf_version: u32,
    /// Root names exactly as requested: same order, duplicates kept.
    pub requested_types: Vec<String>,
}

impl Metadata {
    /// Metadata stamped with the current time.
    pub fn new(
        derived_from: impl Into<String>,
        ctf_version: u32,
        requested_types: Vec<String>,
    ) -> Self {
        Self {
            ctf2json_version: FORMAT_VERSION.to_string(),
            created_at: chrono::Utc::now().timestamp(),
            derived_from: derived_from.into(),
            ctf_version,
            requested_types,
        }
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }
}
