//! Read-only access to bit-packed trie dictionaries.
//!
//! A dictionary is a flat byte buffer of sibling lists, the root list at
//! offset 0. Nothing is materialized: every lookup decodes entries directly
//! from the buffer.
//!
//! # Architecture
//!
//! - [`format`] -- bit-exact field decoders and layout constants
//! - [`reader`] -- cursor over one sibling list
//! - [`dictionary`] -- the [`Dictionary`] handle: membership, validation, enumeration
//! - `writer` -- fixture builder (feature `test-util`)

pub mod dictionary;
pub mod format;
pub mod reader;
#[cfg(any(test, feature = "test-util"))]
pub mod writer;

pub use dictionary::{DictStats, Dictionary};
pub use reader::{Entry, NodeReader};
#[cfg(any(test, feature = "test-util"))]
pub use writer::TrieWriter;

/// Error type for dictionary decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    #[error("dictionary buffer is empty")]
    Empty,
    #[error("dictionary truncated: {needed} byte(s) needed at offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },
    #[error("sibling list at offset {offset} has no entries")]
    EmptyList { offset: usize },
    #[error("child address {to:#x} in list at {from:#x} does not point forward")]
    BackwardAddress { from: usize, to: usize },
}
