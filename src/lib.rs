//! Patches custom menu text into the Sega Mega-Tech menu ROM (`epr-12368-22.ic3`).
//!
//! The menu ROM stores the game name, two page headers and two pages of
//! instructions at fixed offsets. This crate validates user supplied text,
//! encodes it the way the menu firmware expects and writes it into a copy of
//! the ROM image.
//!
//! - [`layout`] - the static table of field offsets and encodings
//! - [`encoding`] - plain ASCII, dual-plane display code and text rows
//! - [`engine`] - validation and patching ([`apply`], [`apply_in_place`], [`plan`])
//! - [`reader`] - decoding the text of an existing image ([`read_fields`])
//! - [`config`] - the `config.ini` input format
//!
//! # Example
//!
//! ```
//! use megatech_menu::{apply, layout::required_image_len, FieldSet, PatchError};
//!
//! let rom = vec![0u8; required_image_len()];
//! let fields = FieldSet::new("").page1("Header", ["Line"]).page2("Header 2", ["Line"]);
//!
//! match apply(&rom, &fields) {
//!     Err(PatchError::Validation(errors)) => assert_eq!(errors.len(), 1),
//!     other => panic!("expected a validation error, got {other:?}"),
//! }
//! ```

pub type Result<T> = std::result::Result<T, PatchError>;

pub mod config;
pub mod encoding;
pub mod engine;
pub use engine::*;

mod errors;
pub use errors::*;

mod fields;
pub use fields::*;

pub mod layout;
pub use layout::{Encoding, FieldDescriptor, FieldName, LAYOUT, lookup};

pub mod limits;
pub mod prelude;

pub mod reader;
pub use reader::read_fields;

pub(crate) mod util;
