//! The patch engine: validates a [`FieldSet`] and writes it into a menu image.
//!
//! Patching happens in two phases. [`plan`] validates and encodes every field
//! in layout order, collecting all validation errors instead of stopping at the
//! first one. Only when the whole set is valid and every planned write fits
//! the image are the bytes written, so a failed call never leaves a partially
//! patched image behind.
//!
//! # Example
//!
//! ```
//! use megatech_menu::{apply, layout::required_image_len, FieldSet};
//!
//! let rom = vec![0u8; required_image_len()];
//! let fields = FieldSet::new("Tetris")
//!     .page1("Tetris", ["Stack the blocks"])
//!     .page2("How to play", ["Clear lines to score"]);
//!
//! let patched = apply(&rom, &fields)?;
//! assert_eq!(patched.len(), rom.len());
//! assert_eq!(&patched[0x10..0x16], b"TETRIS");
//! # Ok::<(), megatech_menu::PatchError>(())
//! ```

use crate::{
    FieldDescriptor, FieldName, FieldSet, FieldValue, LAYOUT, PatchError, ValidationError,
    encoding::{self, Alphabet},
    layout::{Encoding, Span},
    util::blank,
};

/// One contiguous write into the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    pub field: FieldName,
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl Patch {
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.bytes.len())
    }
}

/// Validates and encodes every field, in layout order.
///
/// # Errors
///
/// Returns [`PatchError::Validation`] with every field error found.
pub fn plan(fields: &FieldSet) -> crate::Result<Vec<Patch>> {
    let mut patches = Vec::new();
    let mut errors = Vec::new();
    for descriptor in &LAYOUT {
        match encode_field(descriptor, fields.value(descriptor.name)) {
            Ok(field_patches) => patches.extend(field_patches),
            Err(field_errors) => errors.extend(field_errors),
        }
    }
    if !errors.is_empty() {
        log::warn!("{} menu field(s) failed validation", errors.len());
        return Err(PatchError::Validation(errors));
    }
    Ok(patches)
}

/// Returns a patched copy of `source`. The source is never modified.
///
/// # Errors
///
/// - [`PatchError::Validation`] if any field is invalid
/// - [`PatchError::PreconditionViolation`] if `source` is too small for the layout
pub fn apply(source: &[u8], fields: &FieldSet) -> crate::Result<Vec<u8>> {
    let patches = plan(fields)?;
    check_bounds(&patches, source.len())?;
    let mut image = source.to_vec();
    write_patches(&mut image, &patches);
    Ok(image)
}

/// Patches `image` directly. The buffer is left untouched on error.
///
/// # Errors
///
/// Same as [`apply`].
pub fn apply_in_place(image: &mut [u8], fields: &FieldSet) -> crate::Result<()> {
    let patches = plan(fields)?;
    check_bounds(&patches, image.len())?;
    write_patches(image, &patches);
    Ok(())
}

fn check_bounds(patches: &[Patch], image_len: usize) -> crate::Result<()> {
    match patches.iter().find(|patch| patch.span().end() > image_len) {
        Some(patch) => {
            log::error!(
                "menu layout does not fit image: {} at 0x{:X}+{} > {image_len}",
                patch.field,
                patch.offset,
                patch.bytes.len()
            );
            Err(PatchError::PreconditionViolation {
                field: patch.field,
                offset: patch.offset,
                width: patch.bytes.len(),
                image_len,
            })
        }
        None => Ok(()),
    }
}

fn write_patches(image: &mut [u8], patches: &[Patch]) {
    for patch in patches {
        let span = patch.span();
        log::debug!("{}: writing {} bytes at 0x{:X}", patch.field, span.len, span.offset);
        image[span.offset..span.end()].copy_from_slice(&patch.bytes);
    }
}

fn encode_field(
    descriptor: &FieldDescriptor,
    value: FieldValue<'_>,
) -> Result<Vec<Patch>, Vec<ValidationError>> {
    let field = descriptor.name;
    let patch = |offset, bytes| Patch { field, offset, bytes };

    let mut patches = match (descriptor.encoding, value) {
        (Encoding::PlainUppercaseAscii, FieldValue::Text(text)) => {
            let text = validate_text(descriptor, text, Alphabet::PrintableAscii)?;
            vec![patch(
                descriptor.offset,
                encoding::encode_plain(&text, descriptor.encoded_width()),
            )]
        }
        (Encoding::DualPlaneDisplayCode { visibility_offset }, FieldValue::Text(text)) => {
            let text = validate_text(descriptor, text, Alphabet::DisplayCode)?;
            let planes = encoding::encode_dual_plane(&text, descriptor.max_length);
            vec![
                patch(descriptor.offset, planes.ink),
                patch(visibility_offset, planes.visibility),
            ]
        }
        (Encoding::FixedLineGrid { rows, stride }, FieldValue::Lines(lines)) => {
            if lines.len() > rows {
                log::warn!(
                    "{field}: {} lines given, only the first {rows} are used",
                    lines.len()
                );
            }
            let mut patches = Vec::with_capacity(rows);
            let mut errors = Vec::new();
            for row in 0..rows {
                let offset = descriptor.offset + row * stride;
                let Some(line) = lines.get(row) else {
                    patches.push(patch(offset, blank(descriptor.encoded_width())));
                    continue;
                };
                match encoding::encode_grid_line(field, row, line, descriptor.max_length) {
                    Ok(bytes) => patches.push(patch(offset, bytes)),
                    Err(err) => errors.push(err),
                }
            }
            if !errors.is_empty() {
                return Err(errors);
            }
            patches
        }
        (kind, value) => {
            // The layout pairs every encoding with a matching FieldSet member.
            unreachable!("{field}: {kind:?} cannot encode {value:?}")
        }
    };

    if let Some(tail) = descriptor.tail_clear {
        patches.push(patch(tail.offset, vec![descriptor.pad_char; tail.len]));
    }
    Ok(patches)
}

fn validate_text(
    descriptor: &FieldDescriptor,
    text: &str,
    alphabet: Alphabet,
) -> Result<Vec<u8>, Vec<ValidationError>> {
    encoding::check_length(descriptor.name, text, descriptor.max_length)
        .and_then(|()| encoding::normalize(descriptor.name, None, text, alphabet))
        .map_err(|err| vec![err])
}
