// Key codes of one lookup request.

/// The typed key sequence: for each position, the candidate codes that key
/// press may stand for, most likely first.
///
/// The first code of a position is the primary (actually typed) key; the rest
/// are adjacent or otherwise plausible alternatives. Codes are kept as `u32`
/// so values outside the UTF-16 range never match anything instead of
/// wrapping onto a real character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCodes {
    rows: Vec<Vec<u32>>,
}

impl InputCodes {
    /// Build from explicit rows. A zero code ends its row.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = u16>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .take_while(|&c| c != 0)
                    .map(u32::from)
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// One position per code unit, no alternatives.
    pub fn from_typed(word: &[u16]) -> Self {
        Self::from_rows(word.iter().map(|&c| [c]))
    }

    /// Decode the row-major flat layout: `len` rows of `stride` codes, each
    /// row ending at its first non-positive code or at the stride.
    ///
    /// Rows missing from a short `codes` slice are left empty.
    pub fn from_flat(codes: &[i32], len: usize, stride: usize) -> Self {
        let rows = (0..len)
            .map(|i| {
                let start = i.saturating_mul(stride).min(codes.len());
                let end = start.saturating_add(stride).min(codes.len());
                codes[start..end]
                    .iter()
                    .take_while(|&&c| c > 0)
                    .map(|&c| c as u32)
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All candidate codes at `index`, primary first.
    pub fn alternatives(&self, index: usize) -> &[u32] {
        self.rows.get(index).map_or(&[], Vec::as_slice)
    }

    /// The typed key at `index`.
    pub fn primary(&self, index: usize) -> Option<u32> {
        self.alternatives(index).first().copied()
    }

    /// Whether `word` is exactly the sequence of primary keys.
    pub fn is_typed(&self, word: &[u16]) -> bool {
        word.len() == self.len()
            && word
                .iter()
                .enumerate()
                .all(|(i, &c)| self.primary(i) == Some(u32::from(c)))
    }
}
