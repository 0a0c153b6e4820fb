//! xcsync - keep Xcode string catalogs translated
//!
//! xcsync reconciles an `.xcstrings` catalog against a set of target
//! languages, asks a translation provider for everything that is missing in a
//! single batch, merges the answers back, drops strings the authoring tool
//! marked stale, and writes the catalog in the authoring tool's own layout so
//! diffs stay small.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog model, parsing and serialization
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Reconciliation and merge engine
//! - `logging`: Tracing subscriber setup
//! - `provider`: Translation provider trait and OpenAI-compatible client
//! - `source`: Catalog content sources
//! - `sync`: End-to-end pipeline and catalog writing

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod provider;
pub mod source;
pub mod sync;
