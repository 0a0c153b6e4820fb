//! Reconciliation and merge engine.
//!
//! ## Pipeline
//!
//! 1. [`reconcile`] compares a catalog with the target languages and returns a
//!    [`ReconcilePlan`]: a working copy, translation requests, and a trace of
//!    what was requested.
//! 2. The requests go to a translation provider in one batch (outside this module).
//! 3. [`merge`] writes the provider's answer onto the working copy, classifying
//!    each applied pair as added or updated.
//!
//! [`ChangeSummary`] collects the provenance handed to whoever publishes the result.

mod changes;
mod merge;
mod reconcile;
mod types;

pub use changes::ChangeSummary;
pub use merge::{MergeOutcome, merge};
pub use reconcile::{ReconcilePlan, reconcile};
pub use types::{
    BatchResponse, KeyAction, Trace, TraceEntry, TranslatedEntry, TranslationRequest,
    change_label,
};
