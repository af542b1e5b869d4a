use serde::Serialize;

/// One entry of the `data` array.
///
/// Serializes as `{ "name": ..., "<kind>": ... }`, with the kind key
/// supplied by [`NodeBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub body: NodeBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeBody {
    Integer { length: u32, signed: bool },
    Float { length: u32 },
    Struct(Vec<MemberNode>),
    /// Name of the canonical type this entry stands for.
    Typedef(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberNode {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}
