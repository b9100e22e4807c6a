// Recursive trie walk producing scored candidates.
//
// One call of `walk` decodes one sibling list. While typed input remains, an
// entry is followed only if one of the alternatives at the current input
// position equals the raw or folded character; once input runs out, every
// descendant is a completion. The walk is depth-first on the call stack and
// bounded by `MAX_DEPTH_FACTOR * input.len()`.

use keytrie_core::{CharTables, QUOTE};
use keytrie_dict::dictionary::ROOT;
use keytrie_dict::{DictError, Dictionary};
use tracing::trace;

use crate::input::InputCodes;
use crate::options::SuggestOptions;
use crate::results::ResultSet;

/// Words longer than this multiple of the typed length are not explored.
pub(crate) const MAX_DEPTH_FACTOR: usize = 3;

pub(crate) struct Search<'s, 'a> {
    dict: Dictionary<'a>,
    tables: CharTables<'a>,
    input: &'s InputCodes,
    options: &'s SuggestOptions,
    results: &'s mut ResultSet,
    /// Candidate being spelled; `word[..depth]` is the current path.
    word: Vec<u16>,
    max_depth: usize,
}

impl<'s, 'a> Search<'s, 'a> {
    pub(crate) fn new(
        dict: Dictionary<'a>,
        tables: CharTables<'a>,
        input: &'s InputCodes,
        options: &'s SuggestOptions,
        results: &'s mut ResultSet,
    ) -> Self {
        let max_depth = input.len().saturating_mul(MAX_DEPTH_FACTOR);
        // The walk never writes past `max_depth`.
        let scratch = options.max_word_length.min(max_depth.saturating_add(2));
        Self {
            dict,
            tables,
            input,
            options,
            results,
            word: vec![0; scratch],
            max_depth,
        }
    }

    pub(crate) fn run(mut self) -> Result<(), DictError> {
        if self.input.is_empty() || self.results.capacity() == 0 {
            return Ok(());
        }
        self.walk(ROOT, 0, false, 1, 0)
    }

    /// `snr` is the product of the weights collected along the path.
    fn walk(
        &mut self,
        pos: usize,
        depth: usize,
        completion: bool,
        snr: u32,
        input_index: usize,
    ) -> Result<(), DictError> {
        if depth > self.max_depth {
            return Ok(());
        }
        // A word ending here needs depth + 1 units plus the terminator.
        if depth + 1 >= self.options.max_word_length {
            return Ok(());
        }

        let input = self.input;
        let completion = completion || input_index >= input.len();

        let mut reader = self.dict.reader_at(pos);
        let count = reader.read_count()?;
        for _ in 0..count {
            let entry = reader.read_entry()?;
            let c = entry.character;
            let frequency = u32::from(entry.frequency);

            if completion {
                self.word[depth] = c;
                if entry.terminal {
                    self.submit(depth + 1, frequency.saturating_mul(snr));
                }
                if let Some(child) = entry.children {
                    self.walk(child, depth + 1, true, snr, input_index)?;
                }
            } else if c == QUOTE && input.primary(input_index) != Some(u32::from(QUOTE)) {
                // Contractions: take the apostrophe without consuming a key.
                self.word[depth] = QUOTE;
                if let Some(child) = entry.children {
                    self.walk(child, depth + 1, false, snr, input_index)?;
                }
            } else {
                let folded = self.tables.fold(c, depth);
                let last_key = input_index + 1 == input.len();
                let keys = input
                    .alternatives(input_index)
                    .iter()
                    .take(self.options.max_alternatives);
                for (j, &key) in keys.enumerate() {
                    if key != u32::from(folded) && key != u32::from(c) {
                        continue;
                    }
                    let weight = if j == 0 {
                        self.options.typed_letter_weight
                    } else {
                        1
                    };
                    let snr = snr.saturating_mul(weight);
                    self.word[depth] = c;
                    if last_key {
                        if entry.terminal
                            && (self.options.include_typed_word
                                || !input.is_typed(&self.word[..depth + 1]))
                        {
                            let score = frequency
                                .saturating_mul(snr)
                                .saturating_mul(self.options.full_word_weight);
                            self.submit(depth + 1, score);
                        }
                        if let Some(child) = entry.children {
                            self.walk(child, depth + 1, true, snr, input_index + 1)?;
                        }
                    } else if let Some(child) = entry.children {
                        self.walk(child, depth + 1, false, snr, input_index + 1)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn submit(&mut self, len: usize, frequency: u32) {
        let word = &self.word[..len];
        let inserted = self.results.submit(word, frequency);
        trace!(
            word = %String::from_utf16_lossy(word),
            frequency,
            inserted,
            "candidate"
        );
    }
}
