use hashbrown::HashSet;

use super::registry::Registry;
use crate::api::error::{Error, Result};
use crate::types::{Kind, TypeId, TypeInfo};

/// Default bound on how deeply arrays and structs may nest.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Resolution-aware depth-first walk over a type-info source.
///
/// Each distinct id reached is registered exactly once: canonical ids as
/// concrete entries, everything else as an alias of its canonical id. The
/// registry is borrowed, so several roots (or several walkers) can share it
/// and skip whatever earlier walks already covered.
pub struct Walker<'a, T: TypeInfo + ?Sized> {
    info: &'a T,
    registry: &'a mut Registry,
    max_depth: usize,
    /// Canonical ids whose members are currently being walked.
    in_progress: HashSet<TypeId>,
}

impl<'a, T: TypeInfo + ?Sized> Walker<'a, T> {
    pub fn new(info: &'a T, registry: &'a mut Registry) -> Self {
        Self {
            info,
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
            in_progress: HashSet::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Look up a root by name and walk everything it depends on.
    pub fn visit_root(&mut self, name: &str) -> Result<TypeId> {
        let id = self
            .info
            .lookup_by_name(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))?;
        tracing::debug!(name, %id, "walking root type");
        self.visit(id)?;
        Ok(id)
    }

    pub fn visit(&mut self, id: TypeId) -> Result<()> {
        self.visit_at(id, 0)
    }

    fn visit_at(&mut self, original: TypeId, depth: usize) -> Result<()> {
        if self.registry.contains(original) {
            return Ok(());
        }
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep {
                id: original,
                max_depth: self.max_depth,
            });
        }

        let resolved = self.info.resolve(original)?;
        if self.registry.contains(resolved) {
            self.registry.insert_alias(original, resolved);
            return Ok(());
        }
        if !self.in_progress.insert(resolved) {
            return Err(Error::Cycle(resolved));
        }

        let info = self.info;
        let kind = info.kind(resolved)?;
        tracing::debug!(%original, %resolved, kind = kind.as_str(), depth, "visiting");
        match kind {
            Kind::Array => {
                let array = info.array_info(resolved)?;
                self.visit_at(array.contents, depth + 1)?;
            }
            Kind::Struct => {
                for member in info.members(resolved)? {
                    self.visit_at(member.ty, depth + 1)?;
                }
            }
            Kind::Integer | Kind::Float | Kind::Pointer | Kind::Union | Kind::Enum => {}
            Kind::Unknown
            | Kind::Forward
            | Kind::Typedef
            | Kind::Volatile
            | Kind::Const
            | Kind::Restrict
            | Kind::Function => {
                return Err(Error::UnsupportedKind { id: resolved, kind });
            }
        }

        self.in_progress.remove(&resolved);
        self.registry.insert_concrete(resolved);
        if original != resolved {
            self.registry.insert_alias(original, resolved);
        }
        Ok(())
    }
}

/// Walk every root in order over one shared registry.
pub fn walk_roots<T, S>(info: &T, roots: &[S], max_depth: usize) -> Result<Registry>
where
    T: TypeInfo + ?Sized,
    S: AsRef<str>,
{
    let mut registry = Registry::new();
    {
        let mut walker = Walker::new(info, &mut registry).with_max_depth(max_depth);
        for root in roots {
            walker.visit_root(root.as_ref())?;
        }
    }
    Ok(registry)
}
