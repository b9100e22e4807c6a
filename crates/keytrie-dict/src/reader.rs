// Cursor over the sibling lists of a dictionary buffer.

use keytrie_core::Codepage;

use crate::DictError;
use crate::format;

/// One decoded sibling entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// UTF-16 code unit of the character.
    pub character: u16,
    /// Whether the path ending here spells a word.
    pub terminal: bool,
    /// Offset of the child sibling list, if any.
    pub children: Option<usize>,
    /// Stored frequency; 0 for non-terminal entries.
    pub frequency: u8,
}

/// A byte cursor positioned inside a dictionary buffer.
///
/// Each `read_*` method decodes one field at the cursor and advances past it.
#[derive(Debug, Clone)]
pub struct NodeReader<'a> {
    data: &'a [u8],
    pos: usize,
    codepage: &'a Codepage,
}

impl<'a> NodeReader<'a> {
    pub fn new(data: &'a [u8], pos: usize, codepage: &'a Codepage) -> Self {
        Self {
            data,
            pos,
            codepage,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_count(&mut self) -> Result<usize, DictError> {
        let (count, n) = format::decode_count(self.data, self.pos)?;
        self.pos += n;
        Ok(count)
    }

    pub fn read_char(&mut self) -> Result<u16, DictError> {
        let (c, n) = format::decode_char(self.data, self.pos, self.codepage)?;
        self.pos += n;
        Ok(c)
    }

    /// Peek at the terminal flag of the flags/address field without advancing.
    pub fn is_terminal(&self) -> Result<bool, DictError> {
        format::decode_terminal(self.data, self.pos)
    }

    pub fn read_address(&mut self) -> Result<Option<usize>, DictError> {
        let (address, n) = format::decode_address(self.data, self.pos)?;
        self.pos += n;
        Ok(address)
    }

    pub fn read_frequency(&mut self) -> Result<u8, DictError> {
        let (freq, n) = format::decode_frequency(self.data, self.pos)?;
        self.pos += n;
        Ok(freq)
    }

    /// Decode a whole entry: character, flags, address and (if terminal)
    /// frequency.
    pub fn read_entry(&mut self) -> Result<Entry, DictError> {
        let character = self.read_char()?;
        let terminal = self.is_terminal()?;
        let children = self.read_address()?;
        let frequency = if terminal { self.read_frequency()? } else { 0 };
        Ok(Entry {
            character,
            terminal,
            children,
            frequency,
        })
    }
}
