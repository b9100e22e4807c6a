// Dictionary handle: membership checks, load-time validation, enumeration.

use std::collections::VecDeque;

use hashbrown::HashSet;
use keytrie_core::Codepage;
use keytrie_core::codepage::ISO_8859_7;

use crate::DictError;
use crate::reader::NodeReader;

/// Offset of the root sibling list.
pub const ROOT: usize = 0;

/// Summary produced by [`Dictionary::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictStats {
    /// Number of sibling lists.
    pub lists: usize,
    /// Number of entries across all lists.
    pub entries: usize,
    /// Number of terminal entries, i.e. words.
    pub words: usize,
    /// Length of the longest word.
    pub max_depth: usize,
}

/// A read-only view over a serialized trie.
///
/// Cheap to copy; any number of threads may search the same buffer.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary<'a> {
    data: &'a [u8],
    codepage: &'a Codepage,
}

impl<'a> Dictionary<'a> {
    /// Wrap a buffer encoded with the default ISO-8859-7 codepage.
    pub fn new(data: &'a [u8]) -> Result<Self, DictError> {
        Self::with_codepage(data, &ISO_8859_7)
    }

    pub fn with_codepage(data: &'a [u8], codepage: &'a Codepage) -> Result<Self, DictError> {
        if data.is_empty() {
            return Err(DictError::Empty);
        }
        Ok(Self { data, codepage })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn codepage(&self) -> &'a Codepage {
        self.codepage
    }

    /// A cursor at `offset`, normally a sibling list start.
    pub fn reader_at(&self, offset: usize) -> NodeReader<'a> {
        NodeReader::new(self.data, offset, self.codepage)
    }

    pub fn root(&self) -> NodeReader<'a> {
        self.reader_at(ROOT)
    }

    /// Exact membership test: every character must match by code, and the
    /// last one must end a word.
    ///
    /// Siblings are scanned to the end even after a failed branch, since a
    /// list may hold the same letter more than once.
    pub fn is_valid_word(&self, word: &[u16]) -> Result<bool, DictError> {
        if word.is_empty() {
            return Ok(false);
        }
        self.is_valid_word_at(ROOT, word, 0)
    }

    fn is_valid_word_at(&self, pos: usize, word: &[u16], offset: usize) -> Result<bool, DictError> {
        let mut reader = self.reader_at(pos);
        let count = reader.read_count()?;
        let current = word[offset];
        let last = offset == word.len() - 1;
        for _ in 0..count {
            let entry = reader.read_entry()?;
            if entry.character != current {
                continue;
            }
            if last {
                if entry.terminal {
                    return Ok(true);
                }
            } else if let Some(child) = entry.children {
                if self.is_valid_word_at(child, word, offset + 1)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Walk every reachable sibling list once, checking bounds and structure.
    ///
    /// A dictionary that passes can be searched without decode errors.
    pub fn validate(&self) -> Result<DictStats, DictError> {
        let mut stats = DictStats::default();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([(ROOT, 0usize)]);

        while let Some((pos, depth)) = queue.pop_front() {
            if !seen.insert(pos) {
                continue;
            }
            stats.lists += 1;
            let mut reader = self.reader_at(pos);
            let count = reader.read_count()?;
            if count == 0 {
                return Err(DictError::EmptyList { offset: pos });
            }
            for _ in 0..count {
                let entry = reader.read_entry()?;
                stats.entries += 1;
                if entry.terminal {
                    stats.words += 1;
                    stats.max_depth = stats.max_depth.max(depth + 1);
                }
                if let Some(child) = entry.children {
                    if child <= pos {
                        return Err(DictError::BackwardAddress {
                            from: pos,
                            to: child,
                        });
                    }
                    queue.push_back((child, depth + 1));
                }
            }
        }
        Ok(stats)
    }

    /// Every word with its stored frequency, in trie order.
    pub fn words(&self) -> Result<Vec<(Vec<u16>, u8)>, DictError> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_words(ROOT, &mut prefix, &mut out)?;
        Ok(out)
    }

    fn collect_words(
        &self,
        pos: usize,
        prefix: &mut Vec<u16>,
        out: &mut Vec<(Vec<u16>, u8)>,
    ) -> Result<(), DictError> {
        let mut reader = self.reader_at(pos);
        let count = reader.read_count()?;
        for _ in 0..count {
            let entry = reader.read_entry()?;
            prefix.push(entry.character);
            if entry.terminal {
                out.push((prefix.clone(), entry.frequency));
            }
            if let Some(child) = entry.children {
                // Forward-only addresses keep a corrupt buffer from looping.
                if child <= pos {
                    return Err(DictError::BackwardAddress {
                        from: pos,
                        to: child,
                    });
                }
                self.collect_words(child, prefix, out)?;
            }
            prefix.pop();
        }
        Ok(())
    }
}
