//! Text transforms between menu strings and ROM bytes.
//!
//! Three encodings exist in the menu ROM:
//!
//! - **Plain**: one ASCII byte per character, space-padded. Used by the game
//!   name, the page 2 header and every text row.
//! - **Dual plane**: the page 1 header is drawn with large display-code tiles.
//!   Each character becomes two bytes in the *ink plane* (`0xF6` followed by
//!   the tile code, or `0x20 0x20` for a blank), and a parallel *visibility
//!   plane* marks every ink byte as shown (`0x00`) or blank (`0x20`).
//! - **Grid rows**: plain rows truncated and padded to exactly 28 characters.
//!
//! All text is uppercased before encoding. Padding happens before encoding, so
//! pad characters of the dual-plane field are encoded like any other space.
//!
//! # Example
//!
//! ```
//! use megatech_menu::encoding::encode_dual_plane;
//!
//! let planes = encode_dual_plane(b"HI", 2);
//! assert_eq!(planes.ink, [0xF6, 0x6C, 0xF6, 0x70]);
//! assert_eq!(planes.visibility, [0x00, 0x00, 0x00, 0x00]);
//! ```

use bstr::BString;

use crate::{
    FieldName, ValidationError,
    util::space_pad,
};

/// Marker byte preceding a display-code tile in the ink plane.
pub const DISPLAY_CODE_MARKER: u8 = 0xF6;

/// Blank cell, in both planes.
pub const BLANK: u8 = 0x20;

/// Visibility plane value for a drawn byte.
pub const VISIBLE: u8 = 0x00;

/// Tile code of `'A'`; every following letter is 4 tiles further.
const DISPLAY_CODE_BASE: u8 = b'A' + 15;
const DISPLAY_CODE_STEP: u8 = 4;

/// Characters an encoding can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    /// `0x20..=0x7E`, after uppercasing.
    PrintableAscii,
    /// `A-Z` and space, after uppercasing.
    DisplayCode,
}

impl Alphabet {
    pub fn accepts(&self, byte: u8) -> bool {
        match self {
            Alphabet::PrintableAscii => (0x20..=0x7E).contains(&byte),
            Alphabet::DisplayCode => byte == b' ' || byte.is_ascii_uppercase(),
        }
    }
}

/// Checks that `text` holds between 1 and `max_length` characters.
pub fn check_length(field: FieldName, text: &str, max_length: usize) -> Result<(), ValidationError> {
    let got = text.chars().count();
    if got == 0 || got > max_length {
        return Err(ValidationError::LengthOutOfRange {
            field,
            got,
            allowed: max_length,
        });
    }
    Ok(())
}

/// Uppercases `text` and converts it to bytes, rejecting the first character
/// outside `alphabet`.
///
/// `line` is only used to locate the error for grid rows.
pub fn normalize(
    field: FieldName,
    line: Option<usize>,
    text: &str,
    alphabet: Alphabet,
) -> Result<Vec<u8>, ValidationError> {
    let mut result = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let upper = character.to_ascii_uppercase();
        if !upper.is_ascii() || !alphabet.accepts(upper as u8) {
            return Err(ValidationError::UnsupportedCharacter {
                field,
                line,
                position,
                character,
            });
        }
        result.push(upper as u8);
    }
    Ok(result)
}

/// Literal bytes padded with spaces to `width`.
pub fn encode_plain(text: &[u8], width: usize) -> Vec<u8> {
    space_pad(text, width)
}

/// Inverse of [`encode_plain`]; keeps the padding.
pub fn decode_plain(data: &[u8]) -> BString {
    BString::from(data)
}

/// Tile code for an uppercase letter, `None` for anything else.
pub fn display_code(letter: u8) -> Option<u8> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    Some(DISPLAY_CODE_BASE + DISPLAY_CODE_STEP * (letter - b'A'))
}

/// Letter for a tile code, `None` if the code is not a letter tile.
pub fn letter_for_code(code: u8) -> Option<u8> {
    let delta = code.checked_sub(DISPLAY_CODE_BASE)?;
    if delta % DISPLAY_CODE_STEP != 0 || delta / DISPLAY_CODE_STEP >= 26 {
        return None;
    }
    Some(b'A' + delta / DISPLAY_CODE_STEP)
}

/// Both planes of a display-code field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualPlane {
    pub ink: Vec<u8>,
    pub visibility: Vec<u8>,
}

/// Encodes `text` (already normalized to `A-Z` and space) padded to `chars`
/// characters. Both planes are `2 * chars` bytes long.
pub fn encode_dual_plane(text: &[u8], chars: usize) -> DualPlane {
    let padded = space_pad(text, chars);
    let mut ink = Vec::with_capacity(chars * 2);
    for &ch in &padded {
        match display_code(ch) {
            Some(code) => ink.extend([DISPLAY_CODE_MARKER, code]),
            None => ink.extend([BLANK, BLANK]),
        }
    }
    let visibility = visibility_plane(&ink);
    DualPlane { ink, visibility }
}

/// Derives the visibility plane from the ink plane.
pub fn visibility_plane(ink: &[u8]) -> Vec<u8> {
    ink.iter()
        .map(|&b| if b == BLANK { BLANK } else { VISIBLE })
        .collect()
}

/// Decodes an ink plane back to text, keeping the padding.
///
/// On failure returns the index of the first byte that is not part of a
/// valid cell.
pub fn decode_ink_plane(ink: &[u8]) -> Result<BString, usize> {
    let mut text = Vec::with_capacity(ink.len() / 2);
    for (i, cell) in ink.chunks(2).enumerate() {
        let pos = i * 2;
        match cell {
            [BLANK, BLANK] => text.push(b' '),
            [DISPLAY_CODE_MARKER, code] => match letter_for_code(*code) {
                Some(letter) => text.push(letter),
                None => return Err(pos + 1),
            },
            [BLANK, _] => return Err(pos + 1),
            _ => return Err(pos),
        }
    }
    Ok(BString::from(text))
}

/// Encodes one grid row: truncated to `width` characters, uppercased and
/// padded. Characters past `width` are dropped unchecked.
pub fn encode_grid_line(
    field: FieldName,
    line_index: usize,
    line: &str,
    width: usize,
) -> Result<Vec<u8>, ValidationError> {
    let end = line.char_indices().nth(width).map_or(line.len(), |(i, _)| i);
    let text = normalize(field, Some(line_index), &line[..end], Alphabet::PrintableAscii)?;
    Ok(encode_plain(&text, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_code_formula() {
        assert_eq!(display_code(b'A'), Some(0x50));
        assert_eq!(display_code(b'H'), Some(0x6C));
        assert_eq!(display_code(b'I'), Some(0x70));
        assert_eq!(display_code(b'Z'), Some(0x50 + 4 * 25));
        assert_eq!(display_code(b' '), None);
        assert_eq!(display_code(b'a'), None);
    }

    #[test]
    fn test_letter_for_code_inverts_display_code() {
        for letter in b'A'..=b'Z' {
            assert_eq!(letter_for_code(display_code(letter).unwrap()), Some(letter));
        }
        assert_eq!(letter_for_code(0x51), None);
        assert_eq!(letter_for_code(0x20), None);
        assert_eq!(letter_for_code(0x50 + 4 * 26), None);
    }

    #[test]
    fn test_normalize_uppercases() {
        let text = normalize(FieldName::GameName, None, "Sonic 2", Alphabet::PrintableAscii).unwrap();
        assert_eq!(text, b"SONIC 2");
    }

    #[test]
    fn test_normalize_rejects_outside_alphabet() {
        let err = normalize(FieldName::Page1Header, None, "AB1", Alphabet::DisplayCode).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedCharacter {
                field: FieldName::Page1Header,
                line: None,
                position: 2,
                character: '1',
            }
        );

        let err = normalize(FieldName::GameName, None, "Café", Alphabet::PrintableAscii).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnsupportedCharacter { position: 3, character: 'é', .. }
        ));
    }

    #[test]
    fn test_check_length_bounds() {
        assert!(check_length(FieldName::GameName, "A", 24).is_ok());
        assert!(check_length(FieldName::GameName, &"A".repeat(24), 24).is_ok());
        assert_eq!(
            check_length(FieldName::GameName, "", 24),
            Err(ValidationError::LengthOutOfRange {
                field: FieldName::GameName,
                got: 0,
                allowed: 24
            })
        );
        assert!(check_length(FieldName::GameName, &"A".repeat(25), 24).is_err());
    }

    #[test]
    fn test_dual_plane_pads_before_encoding() {
        let planes = encode_dual_plane(b"HI", 14);
        assert_eq!(planes.ink.len(), 28);
        assert_eq!(planes.visibility.len(), 28);
        assert_eq!(&planes.ink[..4], &[0xF6, 0x6C, 0xF6, 0x70]);
        assert!(planes.ink[4..].iter().all(|&b| b == BLANK));
        assert_eq!(&planes.visibility[..4], &[0x00; 4]);
        assert!(planes.visibility[4..].iter().all(|&b| b == BLANK));
    }

    #[test]
    fn test_decode_ink_plane() {
        let planes = encode_dual_plane(b"MEGA TECH", 14);
        assert_eq!(decode_ink_plane(&planes.ink).unwrap(), BString::from("MEGA TECH     "));

        assert_eq!(decode_ink_plane(&[0xF6, 0x51]), Err(1));
        assert_eq!(decode_ink_plane(&[0x20, 0x20, 0x41, 0x20]), Err(2));
        assert_eq!(decode_ink_plane(&[0x20, 0x00]), Err(1));
    }

    #[test]
    fn test_grid_line_truncates_and_pads() {
        let row = encode_grid_line(FieldName::Page2Lines, 0, "press start", 28).unwrap();
        assert_eq!(row, b"PRESS START                 ");

        let long = "x".repeat(40);
        let row = encode_grid_line(FieldName::Page2Lines, 0, &long, 28).unwrap();
        assert_eq!(row, "X".repeat(28).as_bytes());
    }

    #[test]
    fn test_grid_line_ignores_truncated_tail() {
        let line = format!("{}\u{00e9}", "A".repeat(28));
        assert!(encode_grid_line(FieldName::Page1Lines, 3, &line, 28).is_ok());

        let err = encode_grid_line(FieldName::Page1Lines, 3, "A\tB", 28).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnsupportedCharacter { line: Some(3), position: 1, .. }
        ));
    }
}
