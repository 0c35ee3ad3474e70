//! Mega-Tech menu text limits.
//!
//! These constants define the field widths and row counts of the menu ROM
//! (`epr-12368-22.ic3`). They are used by the layout table for validation and
//! padding, and are exported for callers that want to validate or trim input
//! up front.
//!
//! Reference summary:
//! - Game name: 24 characters (space‑padded)
//! - Page 1 header: 14 characters, stored as two 28 byte planes
//! - Page 1 text: 7 rows of 28 characters, every other screen row
//! - Page 2 header: 18 characters (space‑padded), followed by a 16 byte blank-out region
//! - Page 2 text: 16 rows of 28 characters, contiguous

/// Maximum number of characters for the game name.
pub const MAX_GAME_NAME_LENGTH: usize = 24;

/// Maximum number of characters for the page 1 header.
pub const MAX_PAGE1_HEADER_LENGTH: usize = 14;

/// Maximum number of characters for the page 2 header.
pub const MAX_PAGE2_HEADER_LENGTH: usize = 18;

/// Characters per text row. Longer lines are truncated.
pub const LINE_WIDTH: usize = 28;

/// Number of text rows on page 1.
pub const PAGE1_ROWS: usize = 7;

/// Number of text rows on page 2.
pub const PAGE2_ROWS: usize = 16;

/// Bytes cleared to space after the page 2 header on every run.
pub const PAGE2_TAIL_CLEAR_LENGTH: usize = 16;

/// Leading character that marks a configuration line as menu text.
pub const SENTINEL: char = '|';
