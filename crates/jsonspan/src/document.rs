//! The buffer owner and tree builder.
//!
//! A [`Document`] owns the byte buffer that every span in its tree
//! indexes into, together with the root node. The two are created
//! together and dropped together; nothing in the API lets a node outlive
//! its buffer or the buffer be freed under a live node.
//!
//! Building runs the scanner exactly once over the whole buffer to find
//! the single top-level value. The strict scan result is preferred; when
//! it reports an unterminated construct, the builder falls back to a
//! lenient extent running to the end of the buffer so that a damaged
//! document still yields a tree. Lookups on such a tree then degrade
//! best-effort, omitting whatever could not be delimited.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::Error;
use crate::node::{Node, NodeMut};
use crate::scanner::{self, ScanError};
use crate::span::Span;

/// An immutable buffer and the lazy tree parsed over it.
#[derive(Debug)]
pub struct Document {
    buf: Box<[u8]>,
    root: Node,
}

impl Document {
    /// Copies `text` into a fresh buffer and builds a document over it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when `text` has zero length;
    /// [`Error::Scan`] when no usable top-level value is found.
    pub fn from_string(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        Self::from_bytes(text.as_bytes().to_vec())
    }

    /// Builds a document over a buffer the caller already owns. The
    /// buffer transfers into the document and is released with it.
    ///
    /// # Errors
    ///
    /// As [`from_string`](Self::from_string).
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }
        let buf = bytes.into_boxed_slice();
        let root = build_root(&buf)?;
        Ok(Document { buf, root })
    }

    /// Reads a file's full contents and builds a document over them.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be opened or read, otherwise as
    /// [`from_string`](Self::from_string).
    #[cfg(feature = "std")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// A cursor over the top-level value.
    pub fn root(&mut self) -> NodeMut<'_> {
        NodeMut::new(&self.buf, &mut self.root)
    }
}

/// Runs the one top-level scan and wraps the result as the root node.
fn build_root(buf: &[u8]) -> Result<Node, Error> {
    let (kind, start) = scanner::classify(buf, 0, buf.len())?;
    let span = match scanner::scan_value(buf, 0, buf.len()) {
        Ok(scanned) => scanned.span,
        // An unterminated top-level construct still gets a tree; its
        // extent runs to the end of the buffer and expansion degrades
        // best-effort from there.
        Err(
            ScanError::UnterminatedObject
            | ScanError::UnterminatedArray
            | ScanError::UnterminatedString,
        ) => Span::from_bounds(start, buf.len()),
        Err(err @ (ScanError::MalformedInput | ScanError::EmptyKey)) => return Err(err.into()),
    };
    if span.is_empty() {
        return Err(ScanError::MalformedInput.into());
    }
    Ok(Node {
        kind,
        name: Span::EMPTY,
        value: span,
        children: None,
    })
}
