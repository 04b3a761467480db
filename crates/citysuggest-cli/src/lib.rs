//! citysuggest-cli
//! ===============
//!
//! Command-line interface for the `citysuggest-core` autocomplete engine.
//!
//! This crate primarily provides a binary (`citysuggest`). The library
//! target only carries this overview so the documentation renders.
//!
//! Basic usage:
//!
//! ```text
//! citysuggest --help
//! citysuggest suggest toronto
//! citysuggest suggest londo --latitude 43.0 --longitude -81.2
//! citysuggest --data cities.tsv.gz stats
//! ```
//!
//! For programmatic access, use the `citysuggest-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
