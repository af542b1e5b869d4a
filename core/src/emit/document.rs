use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::metadata::Metadata;
use super::node::Node;
use crate::api::error::Result;

/// Layout of the written JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One value per line, indented with tabs.
    #[default]
    Pretty,
    /// Everything on a single line.
    Compact,
}

/// The complete output: `{ "metadata": ..., "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub metadata: Metadata,
    pub data: Vec<Node>,
}

impl Document {
    /// Encode the document, followed by a single newline.
    pub fn to_bytes(&self, style: OutputStyle) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match style {
            OutputStyle::Pretty => {
                let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
                self.serialize(&mut ser)?;
            }
            OutputStyle::Compact => serde_json::to_writer(&mut out, self)?,
        }
        out.push(b'\n');
        Ok(out)
    }

    /// Encode the whole document first, then write it in one go, so a
    /// failure never leaves half a document behind.
    pub fn write_to<W: Write>(&self, writer: &mut W, style: OutputStyle) -> Result<()> {
        let bytes = self.to_bytes(style)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
