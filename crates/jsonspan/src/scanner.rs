//! The boundary scanner: stateless routines that delimit one value.
//!
//! Overview
//! - Given a half-open byte range known to hold a value, the scanner skips
//!   leading blanks and line ends, classifies the value by its first
//!   significant byte, and finds the value's exact end boundary. It never
//!   allocates and never mutates the buffer.
//! - Objects and arrays are walked member by member through the resumable
//!   [`ObjectMembers`] and [`ArrayElements`] walkers. The same walkers back
//!   two callers with different policies: the boundary scan here is strict
//!   and propagates every failure, while lazy expansion in `node` is
//!   best-effort and simply stops walking on the first failure.
//!
//! Permissiveness, on purpose
//! - Member separators are not validated. A `,` between members (and any
//!   other byte that is not `"`, `:`, `}` in an object, or not `[`, `,`,
//!   `]` in an array) falls through the walker's default arm and is
//!   skipped, so input with missing commas is accepted. Do not tighten
//!   this: lookup results on such input are part of the observable
//!   behavior.
//! - Strings have no escape awareness. The first `"` after the opening one
//!   always closes the string, even when preceded by a backslash.
//! - A misc scalar cannot fail to scan. Its content is only judged later,
//!   when an accessor interprets it.
//!
//! Whitespace
//! - "Blank" is space or tab; "line end" is `\n` or `\r`. These two classes
//!   are the only bytes the scanner treats as insignificant; no other
//!   control characters are special.

use bstr::ByteSlice;
use thiserror::Error;

use crate::node::Kind;
use crate::span::Span;

/// A failure to delimit a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The range was exhausted before any significant byte was found.
    #[error("no value before end of input")]
    MalformedInput,
    /// The range was exhausted before the object's `}`.
    #[error("'}}' is missing")]
    UnterminatedObject,
    /// The range was exhausted before the array's `]`.
    #[error("']' is missing")]
    UnterminatedArray,
    /// The range was exhausted before the string's closing quote.
    #[error("'\"' is missing")]
    UnterminatedString,
    /// An object key was the empty string.
    #[error("object key is empty")]
    EmptyKey,
}

/// A delimited value: its syntactic kind and its exact extent.
///
/// The span includes the surrounding quotes of a string and the braces or
/// brackets of a container. A misc scalar's span has its trailing blanks
/// and line ends trimmed and may be empty, which callers treat as "no
/// value here".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scanned {
    pub(crate) kind: Kind,
    pub(crate) span: Span,
}

/// One member yielded by a walker: an object member or array element.
///
/// `name` is the key span including its surrounding quotes, or
/// [`Span::EMPTY`] for array elements.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Member {
    pub(crate) name: Span,
    pub(crate) kind: Kind,
    pub(crate) value: Span,
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

fn is_insignificant(b: u8) -> bool {
    is_blank(b) || is_line_end(b)
}

/// Skips leading blanks and line ends, then classifies the value that
/// starts at the first significant byte. Returns the kind and the byte's
/// absolute position.
pub(crate) fn classify(buf: &[u8], begin: usize, end: usize) -> Result<(Kind, usize), ScanError> {
    let mut pos = begin;
    while pos < end {
        let b = buf[pos];
        if !is_insignificant(b) {
            let kind = match b {
                b'{' => Kind::Object,
                b'[' => Kind::Array,
                b'"' => Kind::String,
                _ => Kind::Misc,
            };
            return Ok((kind, pos));
        }
        pos += 1;
    }
    Err(ScanError::MalformedInput)
}

/// Delimits the single value starting in `[begin, end)`.
pub(crate) fn scan_value(buf: &[u8], begin: usize, end: usize) -> Result<Scanned, ScanError> {
    let (kind, start) = classify(buf, begin, end)?;
    let stop = match kind {
        Kind::Object => scan_object(buf, start, end)? + 1,
        Kind::Array => scan_array(buf, start, end)? + 1,
        Kind::String => scan_string(buf, start, end)? + 1,
        Kind::Misc => scan_misc(buf, start, end),
    };
    Ok(Scanned {
        kind,
        span: Span::from_bounds(start, stop),
    })
}

/// Finds the `}` closing the object whose `{` sits at `open`. Returns the
/// absolute position of the `}`.
fn scan_object(buf: &[u8], open: usize, end: usize) -> Result<usize, ScanError> {
    let mut members = ObjectMembers::new(buf, open, end);
    loop {
        if members.next_entry()?.is_none() {
            return Ok(members.position());
        }
    }
}

/// Finds the `]` closing the array whose `[` sits at `open`. Returns the
/// absolute position of the `]`.
fn scan_array(buf: &[u8], open: usize, end: usize) -> Result<usize, ScanError> {
    let mut elements = ArrayElements::new(buf, open, end);
    loop {
        if elements.next_entry()?.is_none() {
            return Ok(elements.position());
        }
    }
}

/// Finds the `"` closing the string whose opening `"` sits at `open`.
/// Returns the absolute position of the closing quote. No escape handling:
/// the first quote byte after the opening one closes the string.
fn scan_string(buf: &[u8], open: usize, end: usize) -> Result<usize, ScanError> {
    match buf[open + 1..end].find_byte(b'"') {
        Some(i) => Ok(open + 1 + i),
        None => Err(ScanError::UnterminatedString),
    }
}

/// Delimits an unquoted scalar starting at `begin`. Returns the exclusive
/// end of its content, with trailing blanks and line ends trimmed via the
/// pad counter. End of range acts as an implicit terminator, so a misc
/// scan always succeeds.
fn scan_misc(buf: &[u8], begin: usize, end: usize) -> usize {
    let mut pos = begin;
    let mut pads = 0;
    while pos < end {
        let b = buf[pos];
        if is_insignificant(b) {
            pads += 1;
            pos += 1;
            continue;
        }
        if matches!(b, b'}' | b']' | b',') {
            break;
        }
        pads = 0;
        pos += 1;
    }
    pos - pads
}

/// Walks the direct members of an object, key and value pairs in document
/// order.
///
/// The walker holds its position between calls so a caller can resume
/// after each member. `next_entry` returns `Ok(Some(member))` for each
/// member with a nonzero-length value, `Ok(None)` once the closing `}` is
/// reached (left unconsumed, at [`position`](Self::position)), and `Err`
/// when a key or value cannot be delimited or the range runs out.
///
/// A key with no following `:` contributes nothing; a `:` with no pending
/// key yields a member with an absent name. A member whose value span is
/// empty (for example `{"a":}`) is dropped and the walk continues.
pub(crate) struct ObjectMembers<'b> {
    buf: &'b [u8],
    pos: usize,
    end: usize,
    pending_name: Span,
}

impl<'b> ObjectMembers<'b> {
    /// Starts walking the object whose `{` sits at `open`.
    pub(crate) fn new(buf: &'b [u8], open: usize, end: usize) -> Self {
        ObjectMembers {
            buf,
            pos: open + 1,
            end,
            pending_name: Span::EMPTY,
        }
    }

    /// The walker's current byte position. After `Ok(None)` this is the
    /// closing `}`.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn next_entry(&mut self) -> Result<Option<Member>, ScanError> {
        while self.pos < self.end {
            let b = self.buf[self.pos];
            if is_insignificant(b) {
                self.pos += 1;
                continue;
            }
            match b {
                b'"' => {
                    let close = scan_string(self.buf, self.pos, self.end)?;
                    if close == self.pos + 1 {
                        return Err(ScanError::EmptyKey);
                    }
                    self.pending_name = Span::from_bounds(self.pos, close + 1);
                    self.pos = close + 1;
                }
                b':' => {
                    let value = scan_value(self.buf, self.pos + 1, self.end)?;
                    self.pos = value.span.end();
                    let name = core::mem::take(&mut self.pending_name);
                    if !value.span.is_empty() {
                        return Ok(Some(Member {
                            name,
                            kind: value.kind,
                            value: value.span,
                        }));
                    }
                }
                b'}' => return Ok(None),
                // Commas and any other stray byte between members are
                // skipped unvalidated.
                _ => self.pos += 1,
            }
        }
        Err(ScanError::UnterminatedObject)
    }
}

/// Walks the direct elements of an array in document order.
///
/// `[` and `,` are treated identically as "a value follows". Same return
/// convention as [`ObjectMembers::next_entry`]; elements with empty value
/// spans (for example the gap in `[1,,2]` contributes nothing because the
/// scan of the gap yields an empty misc span) are dropped.
pub(crate) struct ArrayElements<'b> {
    buf: &'b [u8],
    pos: usize,
    end: usize,
}

impl<'b> ArrayElements<'b> {
    /// Starts walking the array whose `[` sits at `open`.
    pub(crate) fn new(buf: &'b [u8], open: usize, end: usize) -> Self {
        ArrayElements {
            buf,
            pos: open,
            end,
        }
    }

    /// The walker's current byte position. After `Ok(None)` this is the
    /// closing `]`.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn next_entry(&mut self) -> Result<Option<Member>, ScanError> {
        while self.pos < self.end {
            let b = self.buf[self.pos];
            if is_insignificant(b) {
                self.pos += 1;
                continue;
            }
            match b {
                b'[' | b',' => {
                    let value = scan_value(self.buf, self.pos + 1, self.end)?;
                    self.pos = value.span.end();
                    if !value.span.is_empty() {
                        return Ok(Some(Member {
                            name: Span::EMPTY,
                            kind: value.kind,
                            value: value.span,
                        }));
                    }
                }
                b']' => return Ok(None),
                _ => self.pos += 1,
            }
        }
        Err(ScanError::UnterminatedArray)
    }
}
