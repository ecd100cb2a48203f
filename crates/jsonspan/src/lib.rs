//! A lazy, zero-copy reader for JSON-like configuration buffers.
//!
//! The crate parses nothing up front beyond delimiting the single
//! top-level value. Each object or array node materializes its direct
//! children the first time a lookup asks for them by name or index, and
//! caches them; deep values that are never looked up are never parsed.
//! Every node is a span into the one buffer the [`Document`] owns, so
//! navigation allocates only the child node records themselves.
//!
//! ```
//! use jsonspan::Document;
//!
//! let mut doc = Document::from_string(r#"{"a":1,"b":[2,3,"x"]}"#)?;
//! assert_eq!(doc.root().get_by_name("a")?.to_u64()?, 1);
//! let third = doc.root().get_by_name("b")?.get_by_index(2)?;
//! assert_eq!(third.as_str()?, "x");
//! # Ok::<(), jsonspan::Error>(())
//! ```
//!
//! The format is JSON-like, not JSON: strings have no escape handling,
//! member separators are not validated, and unquoted scalars cover
//! numbers, booleans, null, and any other bare token. See the `scanner`
//! module docs for the exact rules. Malformed regions degrade
//! best-effort: a member that cannot be delimited is absent from lookups
//! instead of failing the whole document.
//!
//! A tree is navigated through a `&mut` borrow of its document, so access
//! is single-threaded by construction; once that borrow ends the
//! document can move freely between threads.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod document;
mod error;
mod node;
mod scalar;
mod scanner;
mod span;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use error::Error;
pub use node::{Kind, NodeMut};
pub use scanner::ScanError;
