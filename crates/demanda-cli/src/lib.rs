//! demanda-cli
//! ===========
//!
//! Command-line interface for the `demanda-core` demand dashboard pipeline.
//!
//! This crate primarily provides a binary (`demanda`). The small library
//! target exists so the crate has a rendered documentation page with this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! demanda --help
//! demanda stats
//! demanda --supervisor ana,bruno by-supervisor
//! demanda --demand 42 --json map
//! demanda dashboard > snapshot.json
//! ```
//!
//! For programmatic access to the loader, filters and aggregations, use the
//! [`demanda-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
