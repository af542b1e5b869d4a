use std::path::Path;

use super::error::Result;
use super::options::ConvertOptions;
use crate::ctf::CtfFile;
use crate::emit::{Document, Metadata, render_tree};
use crate::graph::walk_roots;
use crate::types::TypeInfo;

/// Describe `roots` and everything they depend on as a [`Document`].
///
/// `source` is echoed in the metadata as `derived_from`. Nothing is returned
/// unless every root was found and every reachable type could be rendered.
pub fn convert<T, S>(info: &T, source: &str, roots: &[S], options: &ConvertOptions) -> Result<Document>
where
    T: TypeInfo + ?Sized,
    S: AsRef<str>,
{
    let registry = walk_roots(info, roots, options.max_depth)?;
    tracing::debug!(entries = registry.len(), "type graph complete");
    let data = render_tree(info, &registry)?;

    let requested = roots.iter().map(|root| root.as_ref().to_string()).collect();
    let mut metadata = Metadata::new(source, info.schema_version(), requested);
    if let Some(created_at) = options.created_at {
        metadata = metadata.with_created_at(created_at);
    }

    Ok(Document { metadata, data })
}

/// Open the CTF data at `path` and [`convert`] it.
pub fn convert_file<S: AsRef<str>>(
    path: impl AsRef<Path>,
    roots: &[S],
    options: &ConvertOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let ctf = CtfFile::open(path)?;
    convert(&ctf, &path.to_string_lossy(), roots, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::Error;
    use crate::ctf::CtfBuilder;
    use crate::emit::NodeBody;
    use pretty_assertions::assert_eq;

    fn fixture() -> CtfFile {
        let mut b = CtfBuilder::new();
        let int = b.integer("int", 32, true);
        let arr = b.array(int, 4);
        b.typedef("quad_t", arr);
        b.structure("pair", 8, &[("a", int, 0), ("b", int, 32)]);
        b.union("u", 4, &[("i", int, 0)]);
        CtfFile::parse(&b.build()).unwrap()
    }

    fn options() -> ConvertOptions {
        ConvertOptions {
            created_at: Some(7),
            ..ConvertOptions::default()
        }
    }

    #[test]
    fn metadata_echoes_roots_with_duplicates() {
        let doc = convert(&fixture(), "fixture.ctf", &["int", "quad_t", "int"], &options()).unwrap();
        assert_eq!(doc.metadata.requested_types, ["int", "quad_t", "int"]);
        assert_eq!(doc.metadata.derived_from, "fixture.ctf");
        assert_eq!(doc.metadata.ctf_version, 2);
        assert_eq!(doc.metadata.created_at, 7);
    }

    #[test]
    fn array_root_yields_only_its_element() {
        let doc = convert(&fixture(), "f", &["quad_t"], &options()).unwrap();
        let kinds: Vec<_> = doc
            .data
            .iter()
            .map(|node| match &node.body {
                NodeBody::Integer { .. } => "integer",
                NodeBody::Float { .. } => "float",
                NodeBody::Struct(_) => "struct",
                NodeBody::Typedef(_) => "typedef",
            })
            .collect();
        assert_eq!(kinds, ["integer", "typedef"]);
    }

    #[test]
    fn failures_produce_no_document() {
        let err = convert(&fixture(), "f", &["struct pair", "no_such_type"], &options()).unwrap_err();
        assert!(matches!(err, Error::TypeNotFound(_)));

        // The struct renders fine, but the union after it cannot.
        let err = convert(&fixture(), "f", &["struct pair", "union u"], &options()).unwrap_err();
        assert!(matches!(err, Error::Unimplemented { .. }));
    }
}
