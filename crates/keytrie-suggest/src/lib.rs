//! Fuzzy word suggestions over a keytrie dictionary.
//!
//! Given a sequence of key presses, each of which may stand for several
//! letters, the searcher walks the dictionary trie and returns the
//! best-scoring full-word matches and completions.
//!
//! # Architecture
//!
//! - [`input`] -- the per-position alternative key codes of one request
//! - [`options`] -- result sizes and scoring weights
//! - [`results`] -- the fixed-capacity ranked accumulator
//! - `search` -- the recursive trie walk
//! - [`suggester`] -- the [`Suggester`] handle tying the pieces together
//!
//! # Example
//!
//! ```no_run
//! use keytrie_dict::Dictionary;
//! use keytrie_suggest::{InputCodes, Suggester};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("main.dict")?;
//! let suggester = Suggester::new(Dictionary::new(&data)?);
//! let input = InputCodes::from_rows([vec!['c' as u16], vec!['a' as u16, 'o' as u16]]);
//! for s in suggester.suggest(&input)?.iter() {
//!     println!("{} {}", s.text(), s.frequency);
//! }
//! # Ok(())
//! # }
//! ```

pub mod input;
pub mod options;
pub mod results;
mod search;
pub mod suggester;

pub use input::InputCodes;
pub use keytrie_dict::DictError;
pub use options::SuggestOptions;
pub use results::{ResultSet, Suggestion};
pub use suggester::Suggester;
