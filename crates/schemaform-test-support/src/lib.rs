#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (sample enum data, manual clock, logging), mocks.rs (callback recorders).

pub mod fixtures;
pub mod mocks;
