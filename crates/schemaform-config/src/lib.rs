#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Editor timing and presentation settings.
//!
//! Layout: `model.rs` (typed settings), `defaults.rs` (fallback values),
//! `loader.rs` (JSON documents and environment overrides), `validate.rs`
//! (range checks), `error.rs` (`ConfigError`).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{
    DEFAULT_ENUM_COMMIT_DELAY_MS, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_PLACEHOLDER,
    MAX_DELAY_MS,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::{ENV_PREFIX, apply_overrides, load_from_path, load_from_str};
pub use model::{EnumEditorSettings, FormsConfig, SearchSettings};
