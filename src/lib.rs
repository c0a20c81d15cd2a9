//! demanda-rs
//!
//! Workspace crate. Re-exports [`demanda_core`] so the demos under `demos/`
//! can `use demanda_rs::prelude::*`.

pub use demanda_core::*;
