// Search configuration.

/// Default number of suggestions kept.
pub const DEFAULT_MAX_WORDS: usize = 12;
/// Default word slot size, terminator included.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 48;
/// Default number of alternatives considered per key press.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 16;
/// Default multiplier for matching the primary (typed) key.
pub const DEFAULT_TYPED_LETTER_WEIGHT: u32 = 2;
/// Default multiplier for a candidate that matches every typed position.
pub const DEFAULT_FULL_WORD_WEIGHT: u32 = 2;

/// Options for one suggestion search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Number of ranked suggestions kept.
    pub max_words: usize,
    /// Word slot size including the terminator; words are at most
    /// `max_word_length - 1` units long.
    pub max_word_length: usize,
    /// Alternatives per position beyond this count are ignored.
    pub max_alternatives: usize,
    /// Weight applied when the primary key of a position matches.
    pub typed_letter_weight: u32,
    /// Weight applied to candidates consuming the whole input.
    pub full_word_weight: u32,
    /// Keep the candidate that spells exactly the typed keys. The caller
    /// normally shows the typed word separately, so it is dropped by default.
    pub include_typed_word: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            typed_letter_weight: DEFAULT_TYPED_LETTER_WEIGHT,
            full_word_weight: DEFAULT_FULL_WORD_WEIGHT,
            include_typed_word: false,
        }
    }
}
