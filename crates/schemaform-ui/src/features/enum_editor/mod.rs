//! Enum value editor feature wiring.
//!
//! # Design
//! - Keep draft editing, id derivation and validation in DOM-free modules.
//! - The view only translates DOM events into actions and forwards settled
//!   commits to the store.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
