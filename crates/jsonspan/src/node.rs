//! Lazy tree nodes and the cursor API over them.
//!
//! A [`Node`] records a value's kind and extent but materializes its
//! children only when a lookup first asks for them. Expansion is a one-way
//! transition on the `children` slot: `None` means "never expanded",
//! `Some(vec)` means "expanded" (possibly to nothing) and is never
//! re-scanned. Expansion is best-effort: a member whose value cannot be
//! delimited is dropped, and the pass ends there with whatever was
//! collected. Partial trees are valid; broken members are simply absent
//! from lookups.
//!
//! The public surface is [`NodeMut`], a cursor pairing a node with the
//! document buffer its spans index into. Lookups consume the cursor and
//! return a child cursor with the same lifetime, so a path is walked as
//! `doc.root().get_by_name("a")?.get_by_index(2)?`. The `&mut` borrow
//! taken from the document means the borrow checker enforces the
//! one-tree-one-thread access rule; concurrent expansion races are
//! unrepresentable.

use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};

use crate::error::Error;
use crate::scalar;
use crate::scanner::{ArrayElements, Member, ObjectMembers};
use crate::span::Span;

/// The syntactic type of a value, decided by its first significant byte:
/// `"` is a string, `{` an object, `[` an array, anything else misc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A quoted string.
    String,
    /// A `{...}` object with named members.
    Object,
    /// A `[...]` array with indexed elements.
    Array,
    /// Any unquoted scalar: number, boolean, null, or other token.
    Misc,
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Kind::String => "string",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Misc => "misc",
        })
    }
}

/// One value in the tree. Spans index into the owning document's buffer.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: Kind,
    /// Key span including surrounding quotes; absent for array elements
    /// and the root.
    pub(crate) name: Span,
    /// The value's own extent, quotes and braces included.
    pub(crate) value: Span,
    /// `None` until the first lookup expands this node.
    pub(crate) children: Option<Vec<Node>>,
}

impl Node {
    pub(crate) fn from_member(member: Member) -> Self {
        Node {
            kind: member.kind,
            name: member.name,
            value: member.value,
            children: None,
        }
    }

    /// The key bytes without their surrounding quotes, if this node has a
    /// usable name.
    fn key<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        if self.name.len() < 2 {
            return None;
        }
        let raw = self.name.slice(buf);
        Some(&raw[1..raw.len() - 1])
    }

    /// Materializes direct children, once. Subsequent calls are no-ops.
    ///
    /// Walks this node's own value span; grandchildren stay unexpanded
    /// until their own lookup. A walk failure ends the pass quietly with
    /// the members collected so far.
    pub(crate) fn expand(&mut self, buf: &[u8]) {
        if self.children.is_some() {
            return;
        }
        let mut children = Vec::new();
        match self.kind {
            Kind::Object => {
                let mut walk = ObjectMembers::new(buf, self.value.start(), self.value.end());
                while let Ok(Some(member)) = walk.next_entry() {
                    children.push(Node::from_member(member));
                }
            }
            Kind::Array => {
                let mut walk = ArrayElements::new(buf, self.value.start(), self.value.end());
                while let Ok(Some(member)) = walk.next_entry() {
                    children.push(Node::from_member(member));
                }
            }
            Kind::String | Kind::Misc => {}
        }
        self.children = Some(children);
    }

    fn expanded(&mut self, buf: &[u8]) -> &mut Vec<Node> {
        self.expand(buf);
        match self.children.as_mut() {
            Some(children) => children,
            // expand always fills the slot
            None => unreachable!(),
        }
    }
}

/// A cursor over one node of a [`Document`](crate::Document).
///
/// Obtained from [`Document::root`](crate::Document::root); navigated with
/// [`get_by_name`](Self::get_by_name) and
/// [`get_by_index`](Self::get_by_index), which consume the cursor and
/// return a cursor over the child. Scalar accessors read the node's span
/// directly and never trigger parsing.
#[derive(Debug)]
pub struct NodeMut<'doc> {
    buf: &'doc [u8],
    node: &'doc mut Node,
}

impl<'doc> NodeMut<'doc> {
    pub(crate) fn new(buf: &'doc [u8], node: &'doc mut Node) -> Self {
        NodeMut { buf, node }
    }

    /// The node's syntactic type.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.node.kind
    }

    /// The member key this node was found under, without its quotes.
    /// `None` for array elements and the root.
    #[must_use]
    pub fn name(&self) -> Option<&'doc BStr> {
        self.node.key(self.buf).map(ByteSlice::as_bstr)
    }

    /// The raw bytes of the node's value span, quotes and braces
    /// included. Intended for diagnostics; it prints as text whether or
    /// not the bytes are valid UTF-8.
    #[must_use]
    pub fn raw(&self) -> &'doc BStr {
        self.node.value.slice(self.buf).as_bstr()
    }

    /// Looks up an object member by key.
    ///
    /// Expands the node's direct children on first call. Matching is an
    /// exact case-sensitive byte comparison against the quote-stripped
    /// key; the first match in insertion order wins.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if this node is not an object;
    /// [`Error::NotFound`] if no member matches.
    pub fn get_by_name(self, name: &str) -> Result<NodeMut<'doc>, Error> {
        if self.node.kind != Kind::Object {
            return Err(Error::TypeMismatch {
                expected: "object",
                found: self.node.kind,
            });
        }
        let NodeMut { buf, node } = self;
        let child = node
            .expanded(buf)
            .iter_mut()
            .find(|child| child.key(buf) == Some(name.as_bytes()))
            .ok_or(Error::NotFound)?;
        Ok(NodeMut::new(buf, child))
    }

    /// Looks up an array element by zero-based position.
    ///
    /// Expands the node's direct children on first call.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if this node is not an array;
    /// [`Error::NotFound`] if `idx` is out of range.
    pub fn get_by_index(self, idx: usize) -> Result<NodeMut<'doc>, Error> {
        if self.node.kind != Kind::Array {
            return Err(Error::TypeMismatch {
                expected: "array",
                found: self.node.kind,
            });
        }
        let NodeMut { buf, node } = self;
        let child = node.expanded(buf).get_mut(idx).ok_or(Error::NotFound)?;
        Ok(NodeMut::new(buf, child))
    }

    /// The number of direct children, expanding the node if needed.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] on string and misc nodes.
    pub fn child_count(&mut self) -> Result<usize, Error> {
        match self.node.kind {
            Kind::Object | Kind::Array => Ok(self.node.expanded(self.buf).len()),
            found @ (Kind::String | Kind::Misc) => Err(Error::TypeMismatch {
                expected: "object or array",
                found,
            }),
        }
    }

    /// Reads a misc leaf as an unsigned integer.
    ///
    /// Digit-led content parses as a standard numeric literal: `0x` or
    /// `0X` for hexadecimal, a leading zero for octal, decimal otherwise.
    /// Anything else takes the keyword path: `no`, `null`, and `false`
    /// read as 0; `yes` and `true` read as 1.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the node is misc;
    /// [`Error::Conversion`] when the content fits neither shape.
    pub fn to_u64(&self) -> Result<u64, Error> {
        self.require_misc()?;
        scalar::to_unsigned(self.node.value.slice(self.buf))
    }

    /// Reads a misc leaf as a signed integer. Same grammar as
    /// [`to_u64`](Self::to_u64) plus an optional leading `-`.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the node is misc;
    /// [`Error::Conversion`] when the content fits neither shape or
    /// overflows.
    pub fn to_i64(&self) -> Result<i64, Error> {
        self.require_misc()?;
        scalar::to_signed(self.node.value.slice(self.buf))
    }

    /// Reads a string leaf's content with the surrounding quotes
    /// stripped. No escape decoding is performed.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the node is a string;
    /// [`Error::Conversion`] when the span is shorter than its two quote
    /// bytes or the content is not valid UTF-8.
    pub fn as_str(&self) -> Result<&'doc str, Error> {
        let content = self.string_content()?;
        core::str::from_utf8(content).map_err(|_| Error::Conversion)
    }

    /// Like [`as_str`](Self::as_str) but without the UTF-8 requirement.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless the node is a string;
    /// [`Error::Conversion`] when the span is shorter than its two quote
    /// bytes.
    pub fn as_bstr(&self) -> Result<&'doc BStr, Error> {
        self.string_content().map(ByteSlice::as_bstr)
    }

    /// Copies a string leaf's quote-stripped content into `out` and
    /// returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// As [`as_bstr`](Self::as_bstr), plus
    /// [`Error::InsufficientCapacity`] when `out` is too small for the
    /// content.
    pub fn copy_str_to(&self, out: &mut [u8]) -> Result<usize, Error> {
        let content = self.string_content()?;
        if out.len() < content.len() {
            return Err(Error::InsufficientCapacity {
                needed: content.len(),
                capacity: out.len(),
            });
        }
        out[..content.len()].copy_from_slice(content);
        Ok(content.len())
    }

    fn require_misc(&self) -> Result<(), Error> {
        if self.node.kind == Kind::Misc {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: "misc",
                found: self.node.kind,
            })
        }
    }

    fn string_content(&self) -> Result<&'doc [u8], Error> {
        if self.node.kind != Kind::String {
            return Err(Error::TypeMismatch {
                expected: "string",
                found: self.node.kind,
            });
        }
        let raw = self.node.value.slice(self.buf);
        // Two bytes minimum: the quotes themselves.
        if raw.len() < 2 {
            return Err(Error::Conversion);
        }
        Ok(&raw[1..raw.len() - 1])
    }
}
