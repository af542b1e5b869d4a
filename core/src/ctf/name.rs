//! C declaration syntax for CTF types.

use super::container::{Body, CtfFile};
use crate::api::error::{Error, Result};
use crate::types::{Kind, TypeId};

const ANONYMOUS: &str = "(anon)";

impl CtfFile {
    /// Format `id` the way a C compiler would spell it in a cast:
    /// `struct stat`, `char *`, `int (*)[4]`, `const char *`.
    ///
    /// Layers are peeled off one at a time from the outside in, so chains of
    /// any length are named without recursion.
    pub(crate) fn format_name(&self, id: TypeId) -> Result<String> {
        let mut declarator = Declarator::default();
        let mut current = id;

        for _ in 0..=self.chain_limit() {
            let entry = self.entry(current)?;
            current = match (entry.kind, &entry.body) {
                (Kind::Pointer, Body::Reference(target)) => {
                    declarator.prefix.push("*");
                    *target
                }
                (Kind::Array, Body::Array(info)) => {
                    declarator.group();
                    declarator.suffix.push_str(&format!("[{}]", info.count));
                    info.contents
                }
                (Kind::Function, Body::Function { ret }) => {
                    declarator.group();
                    declarator.suffix.push_str("()");
                    *ret
                }
                (Kind::Const | Kind::Volatile | Kind::Restrict, Body::Reference(target)) => {
                    let qualifier = entry.kind.as_str();
                    if self.entry(*target)?.kind == Kind::Pointer {
                        // Qualifies the pointer itself: `char *const`.
                        if !declarator.is_empty() {
                            declarator.prefix.push(" ");
                        }
                        declarator.prefix.push(qualifier);
                    } else {
                        declarator.leading.push(qualifier);
                    }
                    *target
                }
                (Kind::Struct | Kind::Union | Kind::Enum, _) => {
                    let tag = format!("{} {}", entry.kind.as_str(), tag_name(&entry.name));
                    return Ok(declarator.finish(&tag));
                }
                (Kind::Forward, _) => {
                    let tag = format!("struct {}", tag_name(&entry.name));
                    return Ok(declarator.finish(&tag));
                }
                (Kind::Integer | Kind::Float | Kind::Typedef, _) if !entry.name.is_empty() => {
                    return Ok(declarator.finish(&entry.name));
                }
                _ => return Err(Error::Introspection { id: current, what: "name" }),
            };
        }
        Err(Error::malformed(format!("name of type {id} refers to itself")))
    }
}

/// A declaration under construction.
#[derive(Debug, Default)]
struct Declarator {
    /// Qualifiers of the base type, outermost first: `const volatile int`.
    leading: Vec<&'static str>,
    /// Text left of the name position; the last piece is leftmost.
    prefix: Vec<&'static str>,
    /// Text right of the name position, in order.
    suffix: String,
}

impl Declarator {
    fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Parenthesize a pointer declarator before a suffix is applied to it.
    fn group(&mut self) {
        if self.prefix.last().is_some_and(|piece| piece.starts_with('*')) {
            self.prefix.push("(");
            self.suffix.push(')');
        }
    }

    fn finish(self, base: &str) -> String {
        let mut out = String::new();
        for qualifier in &self.leading {
            out.push_str(qualifier);
            out.push(' ');
        }
        out.push_str(base);
        if !self.is_empty() {
            out.push(' ');
            for piece in self.prefix.iter().rev() {
                out.push_str(piece);
            }
            out.push_str(&self.suffix);
        }
        out
    }
}

fn tag_name(name: &str) -> &str {
    if name.is_empty() { ANONYMOUS } else { name }
}
