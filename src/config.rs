//! Reads menu text from the `config.ini` format used by the menu maker.
//!
//! ```ini
//! [Menu]
//! game_name = Tetris
//!
//! [page_1]
//! page_1_header = Tetris
//! page_1_text =
//!     |Stack the falling blocks
//!     |to clear lines.
//!
//! [page_2]
//! page_2_header = How to play
//! page_2_text =
//!     |Left/right: move
//! ```
//!
//! Keys are case-insensitive, section names are not. Indented lines continue
//! the value of the previous key. Only text lines starting with `|` reach the
//! menu; the marker itself is stripped. Missing keys read as empty text.

use std::collections::HashMap;
use std::path::Path;

use crate::{FieldSet, PatchError, limits::SENTINEL};

const MENU_SECTION: &str = "Menu";
const PAGE1_SECTION: &str = "page_1";
const PAGE2_SECTION: &str = "page_2";

type Sections = HashMap<String, HashMap<String, String>>;

impl FieldSet {
    /// Parses menu text from INI source.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ConfigSyntax`] for lines that are neither a
    /// section, a key, a comment nor a continuation.
    pub fn from_ini_str(text: &str) -> crate::Result<Self> {
        let sections = parse_sections(text)?;
        let get = |section, key| value(&sections, section, key);

        Ok(FieldSet {
            game_name: get(MENU_SECTION, "game_name").to_string(),
            page1_header: get(PAGE1_SECTION, "page_1_header").to_string(),
            page1_lines: sentinel_lines(get(PAGE1_SECTION, "page_1_text")),
            page2_header: get(PAGE2_SECTION, "page_2_header").to_string(),
            page2_lines: sentinel_lines(get(PAGE2_SECTION, "page_2_text")),
        })
    }

    /// Reads and parses an INI file.
    pub fn from_ini_path(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| PatchError::io_error(path, err))?;
        Self::from_ini_str(&text)
    }
}

/// Lines of `text` that start with the `|` marker, with the marker removed.
pub fn sentinel_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix(SENTINEL))
        .map(str::to_string)
        .collect()
}

fn value<'a>(sections: &'a Sections, section: &str, key: &str) -> &'a str {
    sections
        .get(section)
        .and_then(|keys| keys.get(key))
        .map_or("", String::as_str)
}

fn syntax_error(line: usize, message: impl Into<String>) -> PatchError {
    PatchError::ConfigSyntax {
        line,
        message: message.into(),
    }
}

fn parse_sections(text: &str) -> crate::Result<Sections> {
    let mut sections = Sections::new();
    let mut section: Option<String> = None;
    let mut key: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();

        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let indented = line.starts_with([' ', '\t']);
        if let (Some(section), Some(key)) = (&section, &key) {
            if indented || trimmed.is_empty() {
                if let Some(value) = sections.get_mut(section).and_then(|keys| keys.get_mut(key)) {
                    value.push('\n');
                    value.push_str(trimmed);
                }
                continue;
            }
        }
        if trimmed.is_empty() {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if sections.contains_key(name) {
                return Err(syntax_error(line_no, format!("duplicate section [{name}]")));
            }
            sections.insert(name.to_string(), HashMap::new());
            section = Some(name.to_string());
            key = None;
            continue;
        }

        let Some(split) = trimmed.find(['=', ':']) else {
            return Err(syntax_error(line_no, format!("expected `key = value`, found {trimmed:?}")));
        };
        let Some(current) = &section else {
            return Err(syntax_error(line_no, "key outside of a section"));
        };
        let name = trimmed[..split].trim().to_lowercase();
        let value = trimmed[split + 1..].trim().to_string();
        let keys = sections.entry(current.clone()).or_default();
        if keys.contains_key(&name) {
            return Err(syntax_error(line_no, format!("duplicate key {name:?} in [{current}]")));
        }
        keys.insert(name.clone(), value);
        key = Some(name);
    }

    // Blank lines inside a value are kept, trailing ones are not.
    for keys in sections.values_mut() {
        for value in keys.values_mut() {
            let end = value.trim_end().len();
            value.truncate(end);
        }
    }
    Ok(sections)
}
