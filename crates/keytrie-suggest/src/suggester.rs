// Suggester: top-level entry point for lookups against one dictionary.
//
// The handle only holds borrowed, immutable data plus its options, so it is
// Send + Sync and may serve lookups from several threads at once. All mutable
// search state (the candidate buffer and the accumulator) lives in the call.

use keytrie_core::CharTables;
use keytrie_dict::{DictError, Dictionary};
use tracing::{debug, debug_span};

use crate::input::InputCodes;
use crate::options::SuggestOptions;
use crate::results::ResultSet;
use crate::search::Search;

/// Fuzzy lookups against one dictionary.
#[derive(Debug, Clone)]
pub struct Suggester<'a> {
    dict: Dictionary<'a>,
    tables: CharTables<'a>,
    options: SuggestOptions,
}

impl<'a> Suggester<'a> {
    /// Create a suggester with the built-in Greek/Latin-1 tables and default
    /// options.
    pub fn new(dict: Dictionary<'a>) -> Self {
        Self::with_tables(dict, CharTables::greek())
    }

    pub fn with_tables(dict: Dictionary<'a>, tables: CharTables<'a>) -> Self {
        Self {
            dict,
            tables,
            options: SuggestOptions::default(),
        }
    }

    pub fn dictionary(&self) -> Dictionary<'a> {
        self.dict
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SuggestOptions) {
        self.options = options;
    }

    pub fn set_max_words(&mut self, value: usize) {
        self.options.max_words = value;
    }

    pub fn set_max_word_length(&mut self, value: usize) {
        self.options.max_word_length = value;
    }

    pub fn set_max_alternatives(&mut self, value: usize) {
        self.options.max_alternatives = value;
    }

    pub fn set_typed_letter_weight(&mut self, value: u32) {
        self.options.typed_letter_weight = value;
    }

    pub fn set_full_word_weight(&mut self, value: u32) {
        self.options.full_word_weight = value;
    }

    pub fn set_include_typed_word(&mut self, value: bool) {
        self.options.include_typed_word = value;
    }

    /// Run a lookup and return up to `max_words` ranked suggestions.
    pub fn suggest(&self, input: &InputCodes) -> Result<ResultSet, DictError> {
        let mut results = ResultSet::new(self.options.max_words);
        self.suggest_into(input, &mut results)?;
        Ok(results)
    }

    /// Run a lookup into an existing accumulator, which is reset first and
    /// keeps its own capacity. Returns the number of suggestions found.
    pub fn suggest_into(
        &self,
        input: &InputCodes,
        results: &mut ResultSet,
    ) -> Result<usize, DictError> {
        Self::run(self.dict, self.tables, &self.options, input, results)
    }

    fn run(
        dict: Dictionary<'a>,
        tables: CharTables<'a>,
        options: &SuggestOptions,
        input: &InputCodes,
        results: &mut ResultSet,
    ) -> Result<usize, DictError> {
        let _span = debug_span!("suggest", input_len = input.len()).entered();
        results.reset();
        Search::new(dict, tables, input, options, results).run()?;
        debug!(found = results.len(), "search complete");
        Ok(results.len())
    }

    /// Exact dictionary membership, no folding or alternatives.
    pub fn is_valid_word(&self, word: &[u16]) -> Result<bool, DictError> {
        self.dict.is_valid_word(word)
    }

    /// Lookup over flat, caller-owned buffers.
    ///
    /// `codes` holds `codes_size` rows of `max_alternatives` codes, each row
    /// ending at its first non-positive value. Results are written to
    /// `out_words` (slots of `max_word_length` units, null-terminated) and
    /// `out_frequencies`, at most `max_words` of them; both buffers are zeroed
    /// past the returned count. Weights and typed-word handling come from
    /// this suggester's options.
    ///
    /// A request whose rows run past the end of `codes` finds nothing, since
    /// an empty position never matches.
    #[allow(clippy::too_many_arguments)]
    pub fn get_suggestions_flat(
        &self,
        codes: &[i32],
        codes_size: usize,
        out_words: &mut [u16],
        out_frequencies: &mut [i32],
        max_word_length: usize,
        max_words: usize,
        max_alternatives: usize,
    ) -> Result<usize, DictError> {
        let rows_fit = codes_size
            .checked_mul(max_alternatives)
            .is_some_and(|n| n <= codes.len());
        if !rows_fit {
            out_words.fill(0);
            out_frequencies.fill(0);
            return Ok(0);
        }
        // Nothing beyond the frequency buffer can be reported.
        let max_words = max_words.min(out_frequencies.len());

        let input = InputCodes::from_flat(codes, codes_size, max_alternatives);
        let options = SuggestOptions {
            max_words,
            max_word_length,
            max_alternatives,
            ..self.options.clone()
        };
        let mut results = ResultSet::new(max_words);
        Self::run(self.dict, self.tables, &options, &input, &mut results)?;

        let words_len = out_words.len().min(max_words.saturating_mul(max_word_length));
        let freqs_len = out_frequencies.len().min(max_words);
        Ok(results.write_flat(
            &mut out_words[..words_len],
            &mut out_frequencies[..freqs_len],
            max_word_length,
        ))
    }
}
