//! Byte spans: offset and length views into the document buffer.
//!
//! A span never owns memory. It records where a slice of the owning buffer
//! begins and how long it is, so nodes stay cheap to copy and the tree is
//! freely movable. A zero-length span means "absent".

/// A read-only `(start, len)` view into the document buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// The absent span.
    pub(crate) const EMPTY: Span = Span { start: 0, len: 0 };

    /// Builds a span from a half-open `[start, stop)` byte range.
    pub(crate) fn from_bounds(start: usize, stop: usize) -> Self {
        debug_assert!(stop >= start);
        Span {
            start,
            len: stop - start,
        }
    }

    pub(crate) fn start(self) -> usize {
        self.start
    }

    pub(crate) fn len(self) -> usize {
        self.len
    }

    /// One past the last byte of the span.
    pub(crate) fn end(self) -> usize {
        self.start + self.len
    }

    pub(crate) fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The bytes this span covers within `buf`.
    pub(crate) fn slice(self, buf: &[u8]) -> &[u8] {
        &buf[self.start..self.end()]
    }
}
