// Ranked result accumulator.

/// A suggested word and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// UTF-16 code units of the word.
    pub word: Vec<u16>,
    /// Score: stored frequency times the weights collected along the path.
    pub frequency: u32,
}

impl Suggestion {
    /// The word as a `String`; unpaired surrogates become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.word)
    }
}

/// Fixed-capacity list of suggestions ordered by descending frequency.
///
/// Among equal frequencies the shorter word ranks first. When full, a new
/// candidate evicts the lowest-ranked entry only if it ranks above it.
#[derive(Debug, Clone)]
pub struct ResultSet {
    capacity: usize,
    entries: Vec<Suggestion>,
}

impl ResultSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, keeping the capacity.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Offer a candidate. Returns `false` when it does not make the top
    /// `capacity`, which is not an error.
    ///
    /// An unused slot counts as frequency 0 with an empty word, so a
    /// zero-frequency candidate never gets in.
    pub fn submit(&mut self, word: &[u16], frequency: u32) -> bool {
        let at = self.entries.iter().position(|s| {
            frequency > s.frequency || (frequency == s.frequency && word.len() < s.word.len())
        });
        let at = match at {
            Some(i) => i,
            None if self.entries.len() < self.capacity && frequency > 0 => self.entries.len(),
            None => return false,
        };
        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(
            at,
            Suggestion {
                word: word.to_vec(),
                frequency,
            },
        );
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.entries
    }

    /// Copy the results into caller-owned flat buffers.
    ///
    /// `words` holds consecutive slots of `max_word_length` units; each word is
    /// cut to `max_word_length - 1` units and null-terminated. Both buffers are
    /// zeroed first, so slots past the returned count read as empty.
    pub fn write_flat(
        &self,
        words: &mut [u16],
        frequencies: &mut [i32],
        max_word_length: usize,
    ) -> usize {
        words.fill(0);
        frequencies.fill(0);
        if max_word_length == 0 {
            return 0;
        }
        let slots = frequencies.len().min(words.len() / max_word_length);
        let mut written = 0;
        for (slot, s) in self.entries.iter().take(slots).enumerate() {
            let dest = &mut words[slot * max_word_length..(slot + 1) * max_word_length];
            let n = s.word.len().min(max_word_length - 1);
            dest[..n].copy_from_slice(&s.word[..n]);
            frequencies[slot] = i32::try_from(s.frequency).unwrap_or(i32::MAX);
            written += 1;
        }
        written
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
