//! Umbrella crate that re-exports the `reflex-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users and as a home
//! for docs.rs guides.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use reflex_core as core;

#[cfg(feature = "engine")]
#[cfg_attr(docsrs, doc(cfg(feature = "engine")))]
pub use reflex_engine as engine;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use reflex_tools as tools;
