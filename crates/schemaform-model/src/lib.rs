#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Shared data carriers for the schemaform editors.
//!
//! Layout: `enums.rs` (enum value configs and the sources a property may hold),
//! `property.rs` (property drafts plus the typed enum path accessor),
//! `registry.rs` (named enum presets and source resolution).

pub mod enums;
pub mod property;
pub mod registry;

pub use enums::{EnumMapValue, EnumSource, EnumValueConfig, EnumValueMeta};
pub use property::{DataType, EnumValuesPath, PropertyDraft};
pub use registry::{SchemaRegistry, resolve_enum_values};
