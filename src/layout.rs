//! Field layout of the Mega-Tech menu ROM.
//!
//! This module provides [`LAYOUT`], the static table of every patchable text
//! region in the menu ROM. It is the only place where byte offsets live; the
//! engine, the reader and the tests all derive their positions from it.
//!
//! # ROM Layout
//!
//! | Offset  | Length      | Field                    | Encoding                         |
//! |---------|-------------|--------------------------|----------------------------------|
//! | 0x010   | 24          | Game name                | plain ASCII, space-padded        |
//! | 0x0DB   | 28          | Page 1 header ink        | 0xF6 marker + display code       |
//! | 0x0F7   | 28          | Page 1 header visibility | 0x20 = blank, 0x00 = shown       |
//! | 0x19F   | 7 × 28      | Page 1 text              | plain ASCII rows, 56 byte stride |
//! | 0x584   | 18          | Page 2 header            | plain ASCII, space-padded        |
//! | 0x5A2   | 16          | Page 2 tail              | always cleared to spaces         |
//! | 0x5CF   | 16 × 28     | Page 2 text              | plain ASCII rows, 28 byte stride |
//!
//! # Example
//!
//! ```
//! use megatech_menu::layout::{lookup, FieldName};
//!
//! let name = lookup(FieldName::GameName);
//! assert_eq!(name.offset, 0x10);
//! assert_eq!(name.encoded_width(), 24);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::limits::{
    LINE_WIDTH, MAX_GAME_NAME_LENGTH, MAX_PAGE1_HEADER_LENGTH, MAX_PAGE2_HEADER_LENGTH,
    PAGE1_ROWS, PAGE2_ROWS, PAGE2_TAIL_CLEAR_LENGTH,
};

/// Logical name of a patchable field.
///
/// The declaration order is the processing order of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    GameName,
    Page1Header,
    Page1Lines,
    Page2Header,
    Page2Lines,
}

impl FieldName {
    /// All fields in processing order.
    pub const ALL: [FieldName; 5] = [
        FieldName::GameName,
        FieldName::Page1Header,
        FieldName::Page1Lines,
        FieldName::Page2Header,
        FieldName::Page2Lines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::GameName => "game_name",
            FieldName::Page1Header => "page1_header",
            FieldName::Page1Lines => "page1_lines",
            FieldName::Page2Header => "page2_header",
            FieldName::Page2Lines => "page2_lines",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL.into_iter().find(|name| name.as_str() == s).ok_or(())
    }
}

/// How the characters of a field are turned into ROM bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// One literal ASCII byte per character.
    PlainUppercaseAscii,
    /// Two bytes per character in the ink plane, mirrored byte for byte by a
    /// visibility plane stored at `visibility_offset`.
    DualPlaneDisplayCode { visibility_offset: usize },
    /// `rows` lines of plain ASCII, row `i` starting at `offset + i * stride`.
    FixedLineGrid { rows: usize, stride: usize },
}

/// A contiguous byte range inside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.offset && pos < self.end()
    }
}

/// Static description of one patchable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: FieldName,
    /// Absolute byte position of the first encoded byte.
    pub offset: usize,
    /// Maximum number of input characters (per row for grids).
    pub max_length: usize,
    pub encoding: Encoding,
    /// Fill used when the input is shorter than `max_length`.
    pub pad_char: u8,
    /// Region blanked to `pad_char` every time the field is written.
    pub tail_clear: Option<Span>,
}

impl FieldDescriptor {
    /// Width in bytes of one encoded unit of the field: the whole text for
    /// plain fields, one plane for the dual-plane field, one row for grids.
    ///
    /// Depends only on `max_length` and `encoding`, never on the input.
    pub const fn encoded_width(&self) -> usize {
        match self.encoding {
            Encoding::PlainUppercaseAscii | Encoding::FixedLineGrid { .. } => self.max_length,
            Encoding::DualPlaneDisplayCode { .. } => self.max_length * 2,
        }
    }

    /// Every byte range this field writes, in write order.
    pub fn spans(&self) -> Vec<Span> {
        let width = self.encoded_width();
        let mut spans = match self.encoding {
            Encoding::PlainUppercaseAscii => vec![Span::new(self.offset, width)],
            Encoding::DualPlaneDisplayCode { visibility_offset } => {
                vec![Span::new(self.offset, width), Span::new(visibility_offset, width)]
            }
            Encoding::FixedLineGrid { rows, stride } => (0..rows)
                .map(|row| Span::new(self.offset + row * stride, width))
                .collect(),
        };
        if let Some(tail) = self.tail_clear {
            spans.push(tail);
        }
        spans
    }

    /// Exclusive end of the furthest byte this field writes.
    pub fn end(&self) -> usize {
        self.spans().iter().map(Span::end).max().unwrap_or(self.offset)
    }
}

/// The menu ROM layout, in processing order.
pub static LAYOUT: [FieldDescriptor; 5] = [
    FieldDescriptor {
        name: FieldName::GameName,
        offset: 0x10,
        max_length: MAX_GAME_NAME_LENGTH,
        encoding: Encoding::PlainUppercaseAscii,
        pad_char: b' ',
        tail_clear: None,
    },
    FieldDescriptor {
        name: FieldName::Page1Header,
        offset: 0xDB,
        max_length: MAX_PAGE1_HEADER_LENGTH,
        encoding: Encoding::DualPlaneDisplayCode { visibility_offset: 0xF7 },
        pad_char: b' ',
        tail_clear: None,
    },
    FieldDescriptor {
        name: FieldName::Page1Lines,
        offset: 0x19F,
        max_length: LINE_WIDTH,
        encoding: Encoding::FixedLineGrid {
            rows: PAGE1_ROWS,
            stride: LINE_WIDTH * 2,
        },
        pad_char: b' ',
        tail_clear: None,
    },
    FieldDescriptor {
        name: FieldName::Page2Header,
        offset: 0x584,
        max_length: MAX_PAGE2_HEADER_LENGTH,
        encoding: Encoding::PlainUppercaseAscii,
        pad_char: b' ',
        tail_clear: Some(Span::new(0x5A2, PAGE2_TAIL_CLEAR_LENGTH)),
    },
    FieldDescriptor {
        name: FieldName::Page2Lines,
        offset: 0x5CF,
        max_length: LINE_WIDTH,
        encoding: Encoding::FixedLineGrid {
            rows: PAGE2_ROWS,
            stride: LINE_WIDTH,
        },
        pad_char: b' ',
        tail_clear: None,
    },
];

/// Returns the descriptor of `name`.
pub fn lookup(name: FieldName) -> &'static FieldDescriptor {
    // LAYOUT is declared in FieldName order.
    &LAYOUT[name as usize]
}

/// Smallest image length that holds every field of the layout.
pub fn required_image_len() -> usize {
    LAYOUT.iter().map(FieldDescriptor::end).max().unwrap_or(0)
}
