// Dictionary binary format: layout constants and single-field decoders.
//
// A sibling list is laid out as:
//
//   [count: 1 byte] entry*count
//
// and each entry as:
//
//   [char: 1 byte | 0xFF hi lo] [flags/address: 1 or 3 bytes] [frequency: 1 byte if terminal]
//
// The leading flags/address byte carries FLAG_TERMINAL_MASK and
// FLAG_ADDRESS_MASK. Without the address flag the field is that single byte.
// With it, the low 6 bits of the leading byte and the next two bytes form a
// big-endian child address.

use keytrie_core::Codepage;
use keytrie_core::codepage::ESCAPE_BYTE;

use crate::DictError;

/// Size of the sibling count field.
pub const COUNT_SIZE: usize = 1;
/// Size of an escaped character field (escape byte + 16-bit code).
pub const ESCAPED_CHAR_SIZE: usize = 3;
/// Size of the flags byte when no child address follows.
pub const NULL_ADDRESS_SIZE: usize = 1;
/// Size of the flags/address field when a child address is present.
pub const ADDRESS_SIZE: usize = 3;
/// Size of the frequency field.
pub const FREQUENCY_SIZE: usize = 1;

/// Set on the leading flags/address byte of a word-ending entry.
pub const FLAG_TERMINAL_MASK: u8 = 0x80;
/// Set on the leading flags/address byte when a child address follows.
pub const FLAG_ADDRESS_MASK: u8 = 0x40;
/// Usable address bits across the three address bytes.
pub const ADDRESS_MASK: usize = 0x3F_FFFF;

#[inline]
fn byte_at(data: &[u8], offset: usize) -> Result<u8, DictError> {
    data.get(offset).copied().ok_or(DictError::Truncated {
        offset,
        needed: 1,
        len: data.len(),
    })
}

#[inline]
fn bytes_at<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], DictError> {
    data.get(offset..offset + N)
        .and_then(|s| s.try_into().ok())
        .ok_or(DictError::Truncated {
            offset,
            needed: N,
            len: data.len(),
        })
}

/// Decode a sibling count. Returns `(count, bytes_consumed)`.
#[inline]
pub fn decode_count(data: &[u8], offset: usize) -> Result<(usize, usize), DictError> {
    Ok((byte_at(data, offset)? as usize, COUNT_SIZE))
}

/// Decode a character. Returns `(code, bytes_consumed)`.
///
/// Bytes below 0xFF go through `codepage`; 0xFF is followed by a raw
/// big-endian code.
#[inline]
pub fn decode_char(
    data: &[u8],
    offset: usize,
    codepage: &Codepage,
) -> Result<(u16, usize), DictError> {
    let b = byte_at(data, offset)?;
    if b == ESCAPE_BYTE {
        let [hi, lo] = bytes_at::<2>(data, offset + 1)?;
        Ok((u16::from_be_bytes([hi, lo]), ESCAPED_CHAR_SIZE))
    } else {
        Ok((codepage.decode(b), 1))
    }
}

/// Test the terminal flag of the flags/address byte. Consumes nothing.
#[inline]
pub fn decode_terminal(data: &[u8], offset: usize) -> Result<bool, DictError> {
    Ok(byte_at(data, offset)? & FLAG_TERMINAL_MASK != 0)
}

/// Decode a child address. Returns `(address, bytes_consumed)`.
///
/// Address 0 is the root list and therefore never a child; it is reported as
/// `None` just like a missing address.
#[inline]
pub fn decode_address(data: &[u8], offset: usize) -> Result<(Option<usize>, usize), DictError> {
    let lead = byte_at(data, offset)?;
    if lead & FLAG_ADDRESS_MASK == 0 {
        return Ok((None, NULL_ADDRESS_SIZE));
    }
    let [b0, b1, b2] = bytes_at::<3>(data, offset)?;
    let address = ((b0 as usize & (ADDRESS_MASK >> 16)) << 16) | ((b1 as usize) << 8) | b2 as usize;
    Ok(((address != 0).then_some(address), ADDRESS_SIZE))
}

/// Decode a frequency. Returns `(frequency, bytes_consumed)`.
#[inline]
pub fn decode_frequency(data: &[u8], offset: usize) -> Result<(u8, usize), DictError> {
    Ok((byte_at(data, offset)?, FREQUENCY_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keytrie_core::codepage::{ISO_8859_7, LATIN_1};

    #[test]
    fn char_through_codepage() {
        let data = [0xE1];
        assert_eq!(decode_char(&data, 0, &ISO_8859_7).unwrap(), (0x03B1, 1));
        assert_eq!(decode_char(&data, 0, &LATIN_1).unwrap(), (0x00E1, 1));
    }

    #[test]
    fn escaped_char_is_big_endian() {
        let data = [0x00, 0xFF, 0x04, 0x30];
        assert_eq!(decode_char(&data, 1, &ISO_8859_7).unwrap(), (0x0430, 3));
    }

    #[test]
    fn escaped_char_truncated() {
        let data = [0xFF, 0x04];
        assert_eq!(
            decode_char(&data, 0, &ISO_8859_7).unwrap_err(),
            DictError::Truncated {
                offset: 1,
                needed: 2,
                len: 2
            }
        );
    }

    #[test]
    fn absent_address_consumes_one_byte() {
        let data = [FLAG_TERMINAL_MASK, 0x07];
        assert_eq!(decode_address(&data, 0).unwrap(), (None, 1));
        assert!(decode_terminal(&data, 0).unwrap());
    }

    #[test]
    fn present_address_uses_six_high_bits() {
        let data = [FLAG_ADDRESS_MASK | 0x3F, 0x12, 0x34];
        assert_eq!(decode_address(&data, 0).unwrap(), (Some(0x3F_1234), 3));
        assert!(!decode_terminal(&data, 0).unwrap());
    }

    #[test]
    fn terminal_flag_does_not_leak_into_address() {
        let data = [FLAG_TERMINAL_MASK | FLAG_ADDRESS_MASK | 0x01, 0x00, 0x05];
        assert_eq!(decode_address(&data, 0).unwrap(), (Some(0x01_0005), 3));
    }

    #[test]
    fn zero_address_means_no_children() {
        let data = [FLAG_ADDRESS_MASK, 0x00, 0x00];
        assert_eq!(decode_address(&data, 0).unwrap(), (None, 3));
    }

    #[test]
    fn truncated_address() {
        let data = [FLAG_ADDRESS_MASK, 0x01];
        assert!(matches!(
            decode_address(&data, 0),
            Err(DictError::Truncated { offset: 0, needed: 3, .. })
        ));
    }

    #[test]
    fn count_and_frequency() {
        let data = [3, 200];
        assert_eq!(decode_count(&data, 0).unwrap(), (3, 1));
        assert_eq!(decode_frequency(&data, 1).unwrap(), (200, 1));
        assert!(decode_frequency(&data, 2).is_err());
    }
}
