//! Feature slices: the enum value editor and the table search bar.

pub mod enum_editor;
pub mod search;
