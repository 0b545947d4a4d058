//! Shared test utilities for the sway motion crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Float and force assertion macros
//! - [`mock`] - Recording physics engine
//! - [`fixtures`] - Seeded acceleration traces
//! - [`prelude`] - Convenience re-exports
//!
//! Only use this crate from integration tests (`tests/`). Unit tests inside
//! `sway-motion` see a different copy of its types.
//!
//! ```rust,ignore
//! use sway_test_helpers::prelude::*;
//! ```

#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

#[cfg(feature = "fixtures")]
#[cfg_attr(docsrs, doc(cfg(feature = "fixtures")))]
pub mod fixtures;

pub use must::*;
