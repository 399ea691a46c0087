//! Fluent CSS selector builder.
//!
//! Thin re-export of the [`cssel`] crate so applications can depend on a
//! single package.

pub use cssel::*;
