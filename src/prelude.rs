//! Crate prelude: convenient re-exports of the types needed to patch a
//! menu ROM.
//!
//! ```
//! use megatech_menu::prelude::*;
//!
//! let rom = vec![0u8; required_image_len()];
//! let fields = FieldSet::new("Columns")
//!     .page1("Columns", ["Match three jewels"])
//!     .page2("Controls", ["A B C: rotate"]);
//!
//! let patched = apply(&rom, &fields)?;
//! assert_eq!(read_fields(&patched)?.game_name, "COLUMNS");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The prelude omits the encoding helpers and limits; import those from
//! their modules when needed.

pub use crate::{
    // Input
    FieldSet,
    // Layout
    FieldDescriptor,
    FieldName,
    layout::required_image_len,
    // Patching
    Patch,
    apply,
    apply_in_place,
    plan,
    read_fields,
    // Errors
    PatchError,
    Result,
    ValidationError,
};
