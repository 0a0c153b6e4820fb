//! Reconciliation of a catalog against the target languages.
//!
//! Walks the catalog in key order and decides, for every (key, language)
//! pair, whether it needs a translation. The input catalog is only read;
//! all edits land on the returned working copy.

use std::collections::HashSet;

use tracing::debug;

use super::types::{Trace, TraceEntry, TranslationRequest, change_label};
use crate::catalog::{Catalog, LocalizationStatus};

/// Everything one reconciliation pass produces.
#[derive(Debug, Clone)]
pub struct ReconcilePlan {
    /// Copy of the input with stale keys removed and placeholders added.
    pub working_catalog: Catalog,
    pub requests: Vec<TranslationRequest>,
    pub trace: Trace,
    pub stale_removed: Vec<String>,
    /// True when the catalog has to change (stale removal or missing translations).
    pub modified: bool,
}

impl ReconcilePlan {
    /// Every requested pair as `"<key> (<language>)"`, in request order.
    pub fn pending_labels(&self) -> Vec<String> {
        self.trace
            .iter()
            .flat_map(|(key, entry)| {
                entry
                    .languages
                    .iter()
                    .map(move |language| change_label(key, language))
            })
            .collect()
    }
}

/// Classify every entry of `catalog` against `target_languages`.
///
/// - stale entries are dropped from the working copy and listed in `stale_removed`
/// - `shouldTranslate: false` entries are copied verbatim
/// - every other entry gets one request naming the languages whose value is
///   missing or empty
///
/// With no target languages there is nothing to satisfy, so the working
/// copy is returned untouched and `modified` is false.
pub fn reconcile(catalog: &Catalog, target_languages: &[String]) -> ReconcilePlan {
    let mut working_catalog = catalog.clone();
    let mut requests = Vec::new();
    let mut trace = Trace::new();
    let mut stale_removed = Vec::new();

    let languages = dedup_languages(target_languages);
    if languages.is_empty() {
        return ReconcilePlan {
            working_catalog,
            requests,
            trace,
            stale_removed,
            modified: false,
        };
    }

    for (key, entry) in &catalog.strings {
        if entry.is_stale() {
            working_catalog.strings.shift_remove(key);
            stale_removed.push(key.clone());
            continue;
        }

        if !entry.is_translatable() {
            continue;
        }

        let mut trace_entry = TraceEntry::default();
        for language in &languages {
            let status = entry.status(language);
            if !status.needs_translation() {
                continue;
            }
            trace_entry.push(language, status == LocalizationStatus::Missing);
            if let Some(working_entry) = working_catalog.strings.get_mut(key) {
                working_entry.ensure_placeholder(language);
            }
        }

        if trace_entry.is_empty() {
            continue;
        }

        requests.push(TranslationRequest {
            key: key.clone(),
            text: key.clone(),
            target_languages: trace_entry.languages.clone(),
            comment: entry.comment.clone(),
        });
        trace.insert(key.clone(), trace_entry);
    }

    let modified = !stale_removed.is_empty() || !requests.is_empty();
    debug!(
        requests = requests.len(),
        stale = stale_removed.len(),
        modified,
        "reconciled catalog"
    );

    ReconcilePlan {
        working_catalog,
        requests,
        trace,
        stale_removed,
        modified,
    }
}

/// Keep the first occurrence of each language, preserving order.
fn dedup_languages(target_languages: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    target_languages
        .iter()
        .map(String::as_str)
        .filter(|language| seen.insert(*language))
        .collect()
}
