// Base-letter and lowercase tables for loose key matching.
//
// The searcher compares a typed key against both the raw dictionary character
// and its folded form. Folding strips diacritics at every depth but lowercases
// only the first letter of a word: users capitalize word-initial letters, so
// an uppercase dictionary entry must still match a lowercase key there, while
// an uppercase letter in the middle of a word is significant.

/// Size of the built-in tables. Codes at or above this pass through unchanged.
pub const TABLE_SIZE: usize = 0x400;

/// Lookup tables consulted by the searcher.
///
/// Both slices are indexed by UTF-16 code unit. Codes outside a slice are
/// returned unchanged, so tables may be as short as the locale needs.
#[derive(Debug, Clone, Copy)]
pub struct CharTables<'a> {
    base: &'a [u16],
    lower: &'a [u16],
}

impl<'a> CharTables<'a> {
    /// Build tables from caller-supplied data.
    pub fn new(base: &'a [u16], lower: &'a [u16]) -> Self {
        Self { base, lower }
    }

    /// Strip diacritics: the canonical base letter of `c`.
    #[inline]
    pub fn base(&self, c: u16) -> u16 {
        self.base.get(c as usize).copied().unwrap_or(c)
    }

    /// Lowercase `c`, but only for the word-initial position (`depth == 0`).
    #[inline]
    pub fn lower_at_depth(&self, c: u16, depth: usize) -> u16 {
        if depth != 0 {
            return c;
        }
        if (u16::from(b'A')..=u16::from(b'Z')).contains(&c) {
            c | 0x20
        } else if c > 127 {
            self.lower.get(c as usize).copied().unwrap_or(c)
        } else {
            c
        }
    }

    /// The comparison form of a dictionary character at `depth`.
    #[inline]
    pub fn fold(&self, c: u16, depth: usize) -> u16 {
        self.lower_at_depth(self.base(c), depth)
    }
}

impl CharTables<'static> {
    /// Built-in tables covering Latin-1 and the Greek block.
    pub fn greek() -> Self {
        Self::new(&BASE_CHARS, &LOWER_CHARS)
    }
}

impl Default for CharTables<'static> {
    fn default() -> Self {
        Self::greek()
    }
}

// ---------------------------------------------------------------------------
// Built-in table data
// ---------------------------------------------------------------------------

/// Accented letter -> base letter.
const BASE_PAIRS: &[(u16, u16)] = &[
    // Latin-1 capitals
    (0x00C0, 0x0041), (0x00C1, 0x0041), (0x00C2, 0x0041), (0x00C3, 0x0041),
    (0x00C4, 0x0041), (0x00C5, 0x0041), (0x00C7, 0x0043), (0x00C8, 0x0045),
    (0x00C9, 0x0045), (0x00CA, 0x0045), (0x00CB, 0x0045), (0x00CC, 0x0049),
    (0x00CD, 0x0049), (0x00CE, 0x0049), (0x00CF, 0x0049), (0x00D1, 0x004E),
    (0x00D2, 0x004F), (0x00D3, 0x004F), (0x00D4, 0x004F), (0x00D5, 0x004F),
    (0x00D6, 0x004F), (0x00D8, 0x004F), (0x00D9, 0x0055), (0x00DA, 0x0055),
    (0x00DB, 0x0055), (0x00DC, 0x0055), (0x00DD, 0x0059),
    // Latin-1 small letters
    (0x00E0, 0x0061), (0x00E1, 0x0061), (0x00E2, 0x0061), (0x00E3, 0x0061),
    (0x00E4, 0x0061), (0x00E5, 0x0061), (0x00E7, 0x0063), (0x00E8, 0x0065),
    (0x00E9, 0x0065), (0x00EA, 0x0065), (0x00EB, 0x0065), (0x00EC, 0x0069),
    (0x00ED, 0x0069), (0x00EE, 0x0069), (0x00EF, 0x0069), (0x00F1, 0x006E),
    (0x00F2, 0x006F), (0x00F3, 0x006F), (0x00F4, 0x006F), (0x00F5, 0x006F),
    (0x00F6, 0x006F), (0x00F8, 0x006F), (0x00F9, 0x0075), (0x00FA, 0x0075),
    (0x00FB, 0x0075), (0x00FC, 0x0075), (0x00FD, 0x0079), (0x00FF, 0x0079),
    // Greek capitals with tonos / dialytika
    (0x0386, 0x0391), (0x0388, 0x0395), (0x0389, 0x0397), (0x038A, 0x0399),
    (0x038C, 0x039F), (0x038E, 0x03A5), (0x038F, 0x03A9), (0x03AA, 0x0399),
    (0x03AB, 0x03A5),
    // Greek small letters with tonos / dialytika
    (0x0390, 0x03B9), (0x03AC, 0x03B1), (0x03AD, 0x03B5), (0x03AE, 0x03B7),
    (0x03AF, 0x03B9), (0x03B0, 0x03C5), (0x03CA, 0x03B9), (0x03CB, 0x03C5),
    (0x03CC, 0x03BF), (0x03CD, 0x03C5), (0x03CE, 0x03C9),
];

/// Uppercase letters above ASCII whose lowercase form is not `c + 0x20`.
const LOWER_PAIRS: &[(u16, u16)] = &[
    (0x0130, 0x0069), // İ -> i, not the adjacent ı
    (0x0178, 0x00FF),
    (0x0386, 0x03AC), (0x0388, 0x03AD), (0x0389, 0x03AE), (0x038A, 0x03AF),
    (0x038C, 0x03CC), (0x038E, 0x03CD), (0x038F, 0x03CE),
];

/// Uppercase ranges mapped by a fixed offset, as `(first, last, offset)`.
const LOWER_RANGES: &[(u16, u16, u16)] = &[
    (0x00C0, 0x00D6, 0x20),
    (0x00D8, 0x00DE, 0x20),
    (0x0391, 0x03A1, 0x20),
    (0x03A3, 0x03AB, 0x20),
];

/// Latin Extended-A pairs stored as (capital, small) adjacent code points,
/// `(first, last)` inclusive, capitals on the parity of `first`.
const LOWER_ADJACENT: &[(u16, u16)] = &[
    (0x0100, 0x0137),
    (0x0139, 0x0148),
    (0x014A, 0x0177),
    (0x0179, 0x017E),
];

static BASE_CHARS: [u16; TABLE_SIZE] = build_base_table();
static LOWER_CHARS: [u16; TABLE_SIZE] = build_lower_table();

const fn identity_table() -> [u16; TABLE_SIZE] {
    let mut table = [0u16; TABLE_SIZE];
    let mut i = 0;
    while i < TABLE_SIZE {
        table[i] = i as u16;
        i += 1;
    }
    table
}

const fn build_base_table() -> [u16; TABLE_SIZE] {
    let mut table = identity_table();
    let mut p = 0;
    while p < BASE_PAIRS.len() {
        let (from, to) = BASE_PAIRS[p];
        table[from as usize] = to;
        p += 1;
    }
    table
}

const fn build_lower_table() -> [u16; TABLE_SIZE] {
    let mut table = identity_table();

    let mut r = 0;
    while r < LOWER_RANGES.len() {
        let (first, last, offset) = LOWER_RANGES[r];
        let mut c = first;
        while c <= last {
            table[c as usize] = c + offset;
            c += 1;
        }
        r += 1;
    }

    let mut a = 0;
    while a < LOWER_ADJACENT.len() {
        let (first, last) = LOWER_ADJACENT[a];
        let mut c = first;
        while c < last {
            table[c as usize] = c + 1;
            c += 2;
        }
        a += 1;
    }

    let mut p = 0;
    while p < LOWER_PAIRS.len() {
        let (from, to) = LOWER_PAIRS[p];
        table[from as usize] = to;
        p += 1;
    }
    table
}
