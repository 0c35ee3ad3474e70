use std::path::PathBuf;

use crate::layout::FieldName;

/// A problem with the text supplied for a single field.
///
/// Validation errors never abort processing of the remaining fields; the
/// engine collects all of them into [`PatchError::Validation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: {got} characters, must be 1-{allowed}")]
    LengthOutOfRange {
        field: FieldName,
        got: usize,
        allowed: usize,
    },

    #[error("{field}: unsupported character {character:?} at {}", location(.line, .position))]
    UnsupportedCharacter {
        field: FieldName,
        /// Row index for grid fields.
        line: Option<usize>,
        /// Character index within the text (or row).
        position: usize,
        character: char,
    },
}

impl ValidationError {
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::UnsupportedCharacter { field, .. } => *field,
        }
    }
}

fn location(line: &Option<usize>, position: &usize) -> String {
    match line {
        Some(line) => format!("line {}, column {}", line + 1, position + 1),
        None => format!("column {}", position + 1),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),

    #[error(
        "{field} write of {width} bytes at 0x{offset:X} exceeds image of {image_len} bytes"
    )]
    PreconditionViolation {
        field: FieldName,
        offset: usize,
        width: usize,
        image_len: usize,
    },

    #[error("{field}: byte 0x{byte:02X} at 0x{offset:X} is not valid menu text")]
    UndecodableText {
        field: FieldName,
        offset: usize,
        byte: u8,
    },

    #[error("config line {line}: {message}")]
    ConfigSyntax { line: usize, message: String },

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Create an IoError with the given path and source error.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::IoError {
            path: path.into(),
            source,
        }
    }

    /// The collected field errors, empty for every other kind of failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            PatchError::Validation(errors) => errors,
            _ => &[],
        }
    }
}
