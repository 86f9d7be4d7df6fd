//! Core, DOM-free primitives shared by the editor features.
pub mod debounce;
pub mod store;
