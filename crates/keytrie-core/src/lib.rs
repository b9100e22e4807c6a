//! Character data shared by the keytrie crates.
//!
//! - [`codepage`] -- single-byte codepage to UTF-16 tables used when decoding
//!   dictionary characters
//! - [`charset`] -- base-letter and lowercase tables used for loose matching
//!   of typed keys against dictionary characters
//!
//! All tables are plain data built at compile time. Searchers receive them by
//! reference, so a different locale only needs a different pair of tables.

pub mod charset;
pub mod codepage;

pub use charset::CharTables;
pub use codepage::Codepage;

/// Apostrophe, skipped by the searcher when the user did not type it.
pub const QUOTE: u16 = b'\'' as u16;
