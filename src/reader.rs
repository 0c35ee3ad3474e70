//! Reads the menu text currently stored in an image.

use crate::{
    FieldName, FieldSet, LAYOUT, PatchError,
    encoding::{decode_ink_plane, decode_plain},
    layout::{Encoding, FieldDescriptor, Span},
    util::trim_spaces,
};

/// Decodes every field of `image` back into a [`FieldSet`].
///
/// Trailing padding is trimmed from every value and trailing blank rows are
/// dropped from the grids, so reading a freshly patched image yields the
/// normalized (uppercased) input.
///
/// # Errors
///
/// - [`PatchError::PreconditionViolation`] if `image` is too small for the layout
/// - [`PatchError::UndecodableText`] if the page 1 header holds a byte pair
///   that is not a display-code cell
pub fn read_fields(image: &[u8]) -> crate::Result<FieldSet> {
    let mut fields = FieldSet::default();
    for descriptor in &LAYOUT {
        match descriptor.encoding {
            Encoding::PlainUppercaseAscii => {
                let text = read_text(image, descriptor)?;
                match descriptor.name {
                    FieldName::GameName => fields.game_name = text,
                    _ => fields.page2_header = text,
                }
            }
            Encoding::DualPlaneDisplayCode { .. } => {
                let span = Span::new(descriptor.offset, descriptor.encoded_width());
                let ink = slice(image, descriptor.name, span)?;
                let text = decode_ink_plane(ink).map_err(|pos| PatchError::UndecodableText {
                    field: descriptor.name,
                    offset: span.offset + pos,
                    byte: ink[pos],
                })?;
                fields.page1_header = trim_spaces(&text).to_string();
            }
            Encoding::FixedLineGrid { .. } => {
                let lines = read_lines(image, descriptor)?;
                match descriptor.name {
                    FieldName::Page1Lines => fields.page1_lines = lines,
                    _ => fields.page2_lines = lines,
                }
            }
        }
    }
    Ok(fields)
}

fn slice(image: &[u8], field: FieldName, span: Span) -> crate::Result<&[u8]> {
    image
        .get(span.offset..span.end())
        .ok_or_else(|| PatchError::PreconditionViolation {
            field,
            offset: span.offset,
            width: span.len,
            image_len: image.len(),
        })
}

fn read_text(image: &[u8], descriptor: &FieldDescriptor) -> crate::Result<String> {
    let span = Span::new(descriptor.offset, descriptor.encoded_width());
    let data = slice(image, descriptor.name, span)?;
    Ok(trim_spaces(&decode_plain(data)).to_string())
}

fn read_lines(image: &[u8], descriptor: &FieldDescriptor) -> crate::Result<Vec<String>> {
    let mut lines = Vec::new();
    for span in descriptor.spans() {
        let data = slice(image, descriptor.name, span)?;
        lines.push(trim_spaces(data).to_string());
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Ok(lines)
}
