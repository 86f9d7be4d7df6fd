//! Shared form controls used by the editor features.

pub(crate) mod dialog;
pub(crate) mod icon_button;
pub(crate) mod text_field;

pub(crate) use dialog::Dialog;
pub(crate) use icon_button::IconButton;
pub(crate) use text_field::TextField;
