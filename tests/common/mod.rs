#![allow(dead_code)] // each harness binary uses a different slice of this module

//! Shared test utilities for logshed integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Helpers are deterministic; nothing here reaches
//! outside the tempdir a harness hands it.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
