use super::node::{MemberNode, Node, NodeBody};
use crate::api::error::{Error, Result};
use crate::graph::{Registry, VisitRecord};
use crate::types::{Kind, TypeId, TypeInfo};

/// Render every registry entry, in ascending id order, as a `data` node.
///
/// Arrays produce no node of their own; their element type is already in
/// the registry. Concrete kinds without a JSON rendering are an error, so a
/// document is either complete or not produced at all.
pub fn render_tree<T: TypeInfo + ?Sized>(info: &T, registry: &Registry) -> Result<Vec<Node>> {
    let mut nodes = Vec::with_capacity(registry.len());
    for (id, record) in registry.iter() {
        let node = match record {
            VisitRecord::Alias(target) => Node {
                name: info.type_name(id)?,
                body: NodeBody::Typedef(info.type_name(target)?),
            },
            VisitRecord::Concrete => match render_concrete(info, id)? {
                Some(node) => node,
                None => continue,
            },
        };
        nodes.push(node);
    }
    Ok(nodes)
}

fn render_concrete<T: TypeInfo + ?Sized>(info: &T, id: TypeId) -> Result<Option<Node>> {
    let kind = info.kind(id)?;
    let body = match kind {
        Kind::Integer => {
            let encoding = info.encoding(id)?;
            NodeBody::Integer {
                length: encoding.byte_width(),
                signed: encoding.is_signed(),
            }
        }
        Kind::Float => NodeBody::Float {
            length: info.encoding(id)?.byte_width(),
        },
        Kind::Struct => NodeBody::Struct(render_members(info, id)?),
        Kind::Array => return Ok(None),
        _ => return Err(Error::Unimplemented { id, kind }),
    };
    Ok(Some(Node {
        name: info.type_name(id)?,
        body,
    }))
}

fn render_members<T: TypeInfo + ?Sized>(info: &T, id: TypeId) -> Result<Vec<MemberNode>> {
    let aggregate_size = info.size_of(id)?;
    let members = info.members(id)?;

    let mut nodes = Vec::with_capacity(members.len());
    let mut last_reaches_end = true;
    for member in members {
        let size = info.size_of(member.ty)?;
        last_reaches_end = member_reaches_end(size, member.bit_offset, aggregate_size);
        nodes.push(MemberNode {
            name: member.name.clone(),
            ty: info.type_name(member.ty)?,
        });
    }

    if !last_reaches_end {
        tracing::trace!(%id, aggregate_size, "last member stops short of the struct size");
    }
    Ok(nodes)
}

/// Whether a member of `size` bytes at `bit_offset` ends exactly at the end
/// of an aggregate of `aggregate_size` bytes.
pub fn member_reaches_end(size: u64, bit_offset: u64, aggregate_size: u64) -> bool {
    size.checked_add(bit_offset / 8) == Some(aggregate_size)
}
