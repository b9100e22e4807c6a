// Single-byte codepages used by the dictionary character encoding.
//
// A dictionary stores each character as one codepage byte, except for the
// escape byte 0xFF which introduces a raw big-endian UTF-16 code unit. The
// codepage is therefore only consulted for bytes 0x00..=0xFE.

/// Byte value that introduces a raw two-byte character code.
pub const ESCAPE_BYTE: u8 = 0xFF;

/// A byte -> UTF-16 code unit table.
///
/// Undefined bytes map to 0, which never matches a typed key.
#[derive(Debug)]
pub struct Codepage {
    name: &'static str,
    table: [u16; 256],
}

impl Codepage {
    /// Name of the codepage, as accepted by [`Codepage::by_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Map a codepage byte to its UTF-16 code unit.
    #[inline]
    pub fn decode(&self, byte: u8) -> u16 {
        self.table[byte as usize]
    }

    /// Reverse lookup: the byte that encodes `code`, if any.
    ///
    /// Never returns the escape byte, and never maps code 0.
    pub fn encode(&self, code: u16) -> Option<u8> {
        if code == 0 {
            return None;
        }
        (0..ESCAPE_BYTE).find(|&b| self.table[b as usize] == code)
    }

    /// Look up one of the built-in codepages by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Codepage> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "iso-8859-7" | "iso8859-7" | "greek" => Some(&ISO_8859_7),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Some(&LATIN_1),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// ISO-8859-7 (Greek). This is the default dictionary codepage.
pub static ISO_8859_7: Codepage = Codepage {
    name: "iso-8859-7",
    table: iso_8859_7_table(),
};

/// ISO-8859-1 (Latin-1): every byte maps to the code point of the same value.
pub static LATIN_1: Codepage = Codepage {
    name: "iso-8859-1",
    table: latin_1_table(),
};

/// Bytes 0xA1..=0xBF of ISO-8859-7. 0xAE is undefined.
const ISO_8859_7_A1_BF: [u16; 31] = [
    0x2018, 0x2019, 0x00A3, 0x20AC, 0x20AF, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x037A, 0x00AB,
    0x00AC, 0x00AD, 0x0000, 0x2015, 0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x0384, 0x0385, 0x0386,
    0x00B7, 0x0388, 0x0389, 0x038A, 0x00BB, 0x038C, 0x00BD, 0x038E, 0x038F,
];

const fn latin_1_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u16;
        i += 1;
    }
    table
}

const fn iso_8859_7_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i <= 0xA0 {
        table[i] = i as u16;
        i += 1;
    }
    while i <= 0xBF {
        table[i] = ISO_8859_7_A1_BF[i - 0xA1];
        i += 1;
    }
    // 0xC0..=0xFE follow the Greek block in order; 0xD2 and 0xFF are undefined.
    while i <= 0xFE {
        if i != 0xD2 {
            table[i] = (i - 0xC0 + 0x0390) as u16;
        }
        i += 1;
    }
    table
}
