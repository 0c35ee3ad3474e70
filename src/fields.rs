//! Menu text supplied by the caller.

use crate::FieldName;

/// The five text values of a menu ROM.
///
/// Grid lines must already be clean text: the `|` sentinel used by the
/// configuration format is stripped before lines end up here (see
/// [`crate::config::sentinel_lines`]).
///
/// # Example
///
/// ```
/// use megatech_menu::FieldSet;
///
/// let fields = FieldSet::new("Tetris")
///     .page1("Tetris", ["Stack the blocks"])
///     .page2("How to play", ["Clear lines to score"]);
/// assert_eq!(fields.page1_lines.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub game_name: String,
    pub page1_header: String,
    pub page1_lines: Vec<String>,
    pub page2_header: String,
    pub page2_lines: Vec<String>,
}

/// Borrowed view of one field of a [`FieldSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Lines(&'a [String]),
}

impl FieldSet {
    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            ..Default::default()
        }
    }

    /// Sets the page 1 header and text rows.
    pub fn page1<I, S>(mut self, header: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page1_header = header.into();
        self.page1_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the page 2 header and text rows.
    pub fn page2<I, S>(mut self, header: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page2_header = header.into();
        self.page2_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn value(&self, name: FieldName) -> FieldValue<'_> {
        match name {
            FieldName::GameName => FieldValue::Text(&self.game_name),
            FieldName::Page1Header => FieldValue::Text(&self.page1_header),
            FieldName::Page1Lines => FieldValue::Lines(&self.page1_lines),
            FieldName::Page2Header => FieldValue::Text(&self.page2_header),
            FieldName::Page2Lines => FieldValue::Lines(&self.page2_lines),
        }
    }
}
